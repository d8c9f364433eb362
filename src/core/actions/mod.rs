pub mod cancellation;
pub mod draw_crosshair;
pub mod redraw_frame;
pub mod render_rings;
