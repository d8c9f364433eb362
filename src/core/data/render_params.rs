use std::error::Error;
use std::fmt;

pub const DEFAULT_LENS_RADIUS_M: f64 = 1.0;
pub const DEFAULT_WAVELENGTH_NM: u32 = 550;
pub const DEFAULT_COLOUR_MODE: bool = true;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderParamsError {
    InvalidCurvature { lens_radius_m: f64 },
}

impl fmt::Display for RenderParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCurvature { lens_radius_m } => {
                write!(
                    f,
                    "lens curvature radius must be a positive finite number of metres, got {}",
                    lens_radius_m
                )
            }
        }
    }
}

impl Error for RenderParamsError {}

/// The full parameter set of one redraw. Immutable once constructed; a new
/// value is built for every triggering input event.
///
/// The lens curvature radius is divided by inside the interference formula,
/// so construction is the boundary that rejects zero, negative and
/// non-finite radii.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderParams {
    lens_radius_m: f64,
    wavelength_nm: u32,
    colour_mode: bool,
}

impl RenderParams {
    pub fn new(
        lens_radius_m: f64,
        wavelength_nm: u32,
        colour_mode: bool,
    ) -> Result<Self, RenderParamsError> {
        if !(lens_radius_m.is_finite() && lens_radius_m > 0.0) {
            return Err(RenderParamsError::InvalidCurvature { lens_radius_m });
        }

        Ok(Self {
            lens_radius_m,
            wavelength_nm,
            colour_mode,
        })
    }

    #[must_use]
    pub fn lens_radius_m(&self) -> f64 {
        self.lens_radius_m
    }

    #[must_use]
    pub fn wavelength_nm(&self) -> u32 {
        self.wavelength_nm
    }

    #[must_use]
    pub fn colour_mode(&self) -> bool {
        self.colour_mode
    }
}

impl Default for RenderParams {
    /// The reset values: 1 m radius, 550 nm, colour mode on.
    fn default() -> Self {
        Self {
            lens_radius_m: DEFAULT_LENS_RADIUS_M,
            wavelength_nm: DEFAULT_WAVELENGTH_NM,
            colour_mode: DEFAULT_COLOUR_MODE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_positive_radius() {
        let params = RenderParams::new(0.1, 380, false).unwrap();

        assert_eq!(params.lens_radius_m(), 0.1);
        assert_eq!(params.wavelength_nm(), 380);
        assert!(!params.colour_mode());
    }

    #[test]
    fn test_new_rejects_zero_radius() {
        let result = RenderParams::new(0.0, 550, true);

        assert_eq!(
            result,
            Err(RenderParamsError::InvalidCurvature { lens_radius_m: 0.0 })
        );
    }

    #[test]
    fn test_new_rejects_negative_radius() {
        let result = RenderParams::new(-1.0, 550, true);

        assert!(matches!(
            result,
            Err(RenderParamsError::InvalidCurvature { .. })
        ));
    }

    #[test]
    fn test_new_rejects_non_finite_radius() {
        assert!(RenderParams::new(f64::NAN, 550, true).is_err());
        assert!(RenderParams::new(f64::INFINITY, 550, true).is_err());
    }

    #[test]
    fn test_out_of_gamut_wavelengths_are_not_rejected() {
        // Only the colour mapping clamps wavelengths; the parameter set
        // carries the raw value.
        assert!(RenderParams::new(1.0, 200, true).is_ok());
        assert!(RenderParams::new(1.0, 900, true).is_ok());
    }

    #[test]
    fn test_default_matches_reset_values() {
        let params = RenderParams::default();

        assert_eq!(params.lens_radius_m(), 1.0);
        assert_eq!(params.wavelength_nm(), 550);
        assert!(params.colour_mode());
    }

    #[test]
    fn test_invalid_curvature_displays_radius() {
        let err = RenderParams::new(-2.5, 550, true).unwrap_err();

        assert!(format!("{}", err).contains("-2.5"));
    }
}
