pub mod render_rings;
pub mod render_rings_rayon;
