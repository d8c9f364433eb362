pub mod redraw_frame;
