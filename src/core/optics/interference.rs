use std::f64::consts::PI;

/// Normalised interference brightness at a radial offset under a
/// plano-convex lens resting on a flat substrate.
///
/// The air gap grows quadratically with radius (paraxial approximation),
/// and the reflection at the lower, higher-index interface contributes a
/// fixed half-wavelength to the optical path difference. Brightness is
/// cos^2 of half the resulting phase, so it is 1 where the path difference
/// is a whole number of wavelengths and 0 at half-integer multiples.
///
/// `lens_radius_m` must be strictly positive and finite; the gap thickness
/// divides by it. [`RenderParams::new`] enforces that bound before values
/// reach this function.
///
/// [`RenderParams::new`]: crate::core::data::render_params::RenderParams::new
#[must_use]
pub fn ring_brightness(radial_distance_m: f64, lens_radius_m: f64, wavelength_nm: f64) -> f64 {
    let air_gap_m = radial_distance_m * radial_distance_m / (2.0 * lens_radius_m);
    let wavelength_m = wavelength_nm * 1e-9;
    let path_difference_m = 2.0 * air_gap_m + wavelength_m / 2.0;
    let phase = 2.0 * PI * path_difference_m / wavelength_m;

    let amplitude = (phase / 2.0).cos();
    amplitude * amplitude
}
