use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::data::render_params::{
    DEFAULT_COLOUR_MODE, DEFAULT_LENS_RADIUS_M, DEFAULT_WAVELENGTH_NM,
};
use std::sync::Arc;

pub const LENS_RADIUS_MIN_M: f64 = 0.1;
pub const LENS_RADIUS_MAX_M: f64 = 5.0;
pub const LENS_RADIUS_STEP_M: f64 = 0.1;

pub const WAVELENGTH_MIN_NM: u32 = 380;
pub const WAVELENGTH_MAX_NM: u32 = 780;
pub const WAVELENGTH_STEP_NM: u32 = 10;

/// Steps move in 0.1 m increments; keeping the value at one decimal stops
/// repeated steps from drifting off the slider grid.
fn snap_radius(value: f64) -> f64 {
    (value.clamp(LENS_RADIUS_MIN_M, LENS_RADIUS_MAX_M) * 10.0).round() / 10.0
}

/// The input adapter's parameter state. Mutated by keyboard events, turned
/// into a fresh [`RenderRequest`] per change; the core never sees this
/// struct.
pub struct UiState {
    pub lens_radius_m: f64,
    pub wavelength_nm: u32,
    pub colour_mode: bool,
    last_submitted_request: Option<Arc<RenderRequest>>,
    pub latest_submitted_generation: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            lens_radius_m: DEFAULT_LENS_RADIUS_M,
            wavelength_nm: DEFAULT_WAVELENGTH_NM,
            colour_mode: DEFAULT_COLOUR_MODE,
            last_submitted_request: None,
            latest_submitted_generation: 0,
        }
    }
}

impl UiState {
    pub fn increase_lens_radius(&mut self) {
        self.lens_radius_m = snap_radius(self.lens_radius_m + LENS_RADIUS_STEP_M);
    }

    pub fn decrease_lens_radius(&mut self) {
        self.lens_radius_m = snap_radius(self.lens_radius_m - LENS_RADIUS_STEP_M);
    }

    pub fn increase_wavelength(&mut self) {
        self.wavelength_nm = (self.wavelength_nm + WAVELENGTH_STEP_NM).min(WAVELENGTH_MAX_NM);
    }

    pub fn decrease_wavelength(&mut self) {
        self.wavelength_nm = self
            .wavelength_nm
            .saturating_sub(WAVELENGTH_STEP_NM)
            .max(WAVELENGTH_MIN_NM);
    }

    pub fn toggle_colour_mode(&mut self) {
        self.colour_mode = !self.colour_mode;
    }

    pub fn reset(&mut self) {
        self.lens_radius_m = DEFAULT_LENS_RADIUS_M;
        self.wavelength_nm = DEFAULT_WAVELENGTH_NM;
        self.colour_mode = DEFAULT_COLOUR_MODE;
    }

    #[must_use]
    pub fn build_render_request(&self, width: u32, height: u32) -> RenderRequest {
        RenderRequest {
            lens_radius_m: self.lens_radius_m,
            wavelength_nm: self.wavelength_nm,
            colour_mode: self.colour_mode,
            width,
            height,
        }
    }

    #[must_use]
    pub fn should_submit(&self, request: &RenderRequest) -> bool {
        self.last_submitted_request
            .as_ref()
            .is_none_or(|last| last.as_ref() != request)
    }

    pub fn record_submission(&mut self, request: Arc<RenderRequest>, generation: u64) {
        self.last_submitted_request = Some(request);
        self.latest_submitted_generation = generation;
    }
}
