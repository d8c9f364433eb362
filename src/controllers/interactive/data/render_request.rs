/// A redraw request as submitted by the input adapter: the raw parameter
/// values plus the surface dimensions to render at.
///
/// Values are deliberately unvalidated here; the render worker is the
/// boundary that turns them into a checked
/// [`RenderParams`](crate::core::data::render_params::RenderParams), so a
/// bad curvature surfaces as an error event instead of a bad frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub lens_radius_m: f64,
    pub wavelength_nm: u32,
    pub colour_mode: bool,
    pub width: u32,
    pub height: u32,
}
