use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::render_params::RenderParams;
use crate::core::data::surface::{BYTES_PER_PIXEL, Surface};
use crate::core::optics::interference::ring_brightness;
use crate::core::optics::spectrum::wavelength_to_colour;
use crate::core::util::pixel_to_radial_metres::pixel_to_radial_metres;

/// Fixed physical-to-pixel scale of the simulation.
pub const PIXELS_PER_METRE: f64 = 50_000.0;

/// Radial cutoff: pixels farther than this from the centre are left as
/// background and their brightness is never computed.
pub const MAX_VISIBLE_RADIUS_M: f64 = 0.005;

/// Paints the interference pattern over one row of the surface.
///
/// Pixels beyond the visible radius are skipped, so callers fill the
/// background before rendering. Each pixel write is independent, which is
/// what lets the sequential and parallel drivers share this function and
/// produce identical frames.
pub(crate) fn render_ring_row(
    row: &mut [u8],
    y: u32,
    centre: (f64, f64),
    params: &RenderParams,
    base_colour: Colour,
) {
    let wavelength_nm = f64::from(params.wavelength_nm());

    for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let point = Point {
            x: x as i32,
            y: y as i32,
        };
        let distance_m = pixel_to_radial_metres(point, centre.0, centre.1, PIXELS_PER_METRE);

        if distance_m > MAX_VISIBLE_RADIUS_M {
            continue;
        }

        let brightness = ring_brightness(distance_m, params.lens_radius_m(), wavelength_nm);
        let colour = if params.colour_mode() {
            base_colour.scaled(brightness)
        } else {
            Colour::grey(brightness)
        };

        pixel[0] = colour.r;
        pixel[1] = colour.g;
        pixel[2] = colour.b;
    }
}

/// Paints the full interference pattern, row by row.
///
/// For cancel-aware rendering, use [`render_rings_cancelable`].
pub fn render_rings(params: &RenderParams, surface: &mut Surface) {
    match render_rings_cancelable(params, surface, &NeverCancel) {
        Ok(()) => {}
        Err(Cancelled) => {
            // NeverCancel never cancels, so this branch is unreachable
            unreachable!("NeverCancel token should never signal cancellation")
        }
    }
}

/// Paints the interference pattern with cancellation support.
///
/// Checks the token once per row. Returns [`Cancelled`] if cancellation was
/// requested, which is expected control flow for superseded renders; the
/// partially written buffer is the caller's to discard.
pub fn render_rings_cancelable<C: CancelToken>(
    params: &RenderParams,
    surface: &mut Surface,
    cancel: &C,
) -> Result<(), Cancelled> {
    let width = surface.width();

    if width == 0 || surface.height() == 0 {
        return Ok(());
    }

    let centre = surface.centre();
    let base_colour = wavelength_to_colour(f64::from(params.wavelength_nm()));
    let row_len = width as usize * BYTES_PER_PIXEL;

    for (y, row) in surface.bytes_mut().chunks_exact_mut(row_len).enumerate() {
        if cancel.is_cancelled() {
            return Err(Cancelled);
        }

        render_ring_row(row, y as u32, centre, params, base_colour);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn sentinel_surface(width: u32, height: u32) -> Surface {
        let mut surface = Surface::new(width, height);
        surface.fill(Colour { r: 1, g: 2, b: 3 });
        surface
    }

    #[test]
    fn test_pixels_beyond_cutoff_keep_background() {
        let params = RenderParams::default();
        let mut surface = sentinel_surface(500, 500);

        render_rings(&params, &mut surface);

        // The corner is ~353 px = ~0.007 m from centre, past the 0.005 m
        // cutoff.
        assert_eq!(
            surface.pixel_at(Point { x: 0, y: 0 }).unwrap(),
            Colour { r: 1, g: 2, b: 3 }
        );
        assert_eq!(
            surface.pixel_at(Point { x: 499, y: 499 }).unwrap(),
            Colour { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn test_pixel_inside_cutoff_matches_formula() {
        let params = RenderParams::default();
        let mut surface = Surface::new(500, 500);

        render_rings(&params, &mut surface);

        // 20 px above centre: distance is 20 / 50 000 m.
        let sampled = surface.pixel_at(Point { x: 250, y: 230 }).unwrap();
        let brightness = ring_brightness(20.0 / PIXELS_PER_METRE, 1.0, 550.0);
        let expected = wavelength_to_colour(550.0).scaled(brightness);

        assert_eq!(sampled, expected);
    }

    #[test]
    fn test_greyscale_mode_paints_equal_channels() {
        let params = RenderParams::new(1.0, 550, false).unwrap();
        let mut surface = Surface::new(120, 120);

        render_rings(&params, &mut surface);

        for pixel in surface.data().chunks_exact(BYTES_PER_PIXEL) {
            assert_eq!(pixel[0], pixel[1]);
            assert_eq!(pixel[1], pixel[2]);
        }
    }

    #[test]
    fn test_greyscale_pixel_value_matches_formula() {
        let params = RenderParams::new(1.0, 550, false).unwrap();
        let mut surface = Surface::new(500, 500);

        render_rings(&params, &mut surface);

        let sampled = surface.pixel_at(Point { x: 300, y: 250 }).unwrap();
        let brightness = ring_brightness(50.0 / PIXELS_PER_METRE, 1.0, 550.0);

        assert_eq!(sampled, Colour::grey(brightness));
    }

    #[test]
    fn test_zero_sized_surface_is_a_no_op() {
        let params = RenderParams::default();
        let mut surface = Surface::new(0, 0);

        render_rings(&params, &mut surface);

        assert!(surface.data().is_empty());
    }

    #[test]
    fn test_cancelled_token_aborts_before_painting() {
        let params = RenderParams::default();
        let mut surface = sentinel_surface(16, 16);
        let cancelled = AtomicBool::new(true);
        let token = || cancelled.load(Ordering::Relaxed);

        let result = render_rings_cancelable(&params, &mut surface, &token);

        assert_eq!(result, Err(Cancelled));
        assert_eq!(
            surface.pixel_at(Point { x: 8, y: 8 }).unwrap(),
            Colour { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn test_never_cancel_token_completes() {
        let params = RenderParams::default();
        let mut surface = Surface::new(16, 16);

        let result = render_rings_cancelable(&params, &mut surface, &NeverCancel);

        assert_eq!(result, Ok(()));
    }
}
