use crate::core::data::surface::Surface;
use std::time::Duration;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub surface: Surface,
    pub render_duration: Duration,
}
