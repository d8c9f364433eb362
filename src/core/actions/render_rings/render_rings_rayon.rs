use rayon::prelude::*;

use crate::core::actions::render_rings::render_rings::render_ring_row;
use crate::core::data::render_params::RenderParams;
use crate::core::data::surface::{BYTES_PER_PIXEL, Surface};
use crate::core::optics::spectrum::wavelength_to_colour;

/// Paints the interference pattern with one rayon task per row.
///
/// Rows are disjoint slices of the surface buffer and every pixel is
/// computed independently, so the output is byte-identical to the
/// sequential [`render_rings`].
///
/// [`render_rings`]: crate::core::actions::render_rings::render_rings::render_rings
pub fn render_rings_rayon(params: &RenderParams, surface: &mut Surface) {
    let width = surface.width();

    if width == 0 || surface.height() == 0 {
        return;
    }

    let centre = surface.centre();
    let base_colour = wavelength_to_colour(f64::from(params.wavelength_nm()));
    let row_len = width as usize * BYTES_PER_PIXEL;

    surface
        .bytes_mut()
        .par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| render_ring_row(row, y as u32, centre, params, base_colour));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_rings::render_rings::render_rings;

    #[test]
    fn test_rayon_matches_sequential_in_colour_mode() {
        let params = RenderParams::default();
        let mut sequential = Surface::new(500, 500);
        let mut parallel = Surface::new(500, 500);

        render_rings(&params, &mut sequential);
        render_rings_rayon(&params, &mut parallel);

        assert_eq!(sequential.data(), parallel.data());
    }

    #[test]
    fn test_rayon_matches_sequential_in_greyscale_mode() {
        let params = RenderParams::new(0.5, 650, false).unwrap();
        let mut sequential = Surface::new(333, 217);
        let mut parallel = Surface::new(333, 217);

        render_rings(&params, &mut sequential);
        render_rings_rayon(&params, &mut parallel);

        assert_eq!(sequential.data(), parallel.data());
    }

    #[test]
    fn test_rayon_with_zero_sized_surface() {
        let params = RenderParams::default();
        let mut surface = Surface::new(0, 40);

        render_rings_rayon(&params, &mut surface);

        assert!(surface.data().is_empty());
    }
}
