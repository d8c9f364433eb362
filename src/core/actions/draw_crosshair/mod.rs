pub mod draw_crosshair;
