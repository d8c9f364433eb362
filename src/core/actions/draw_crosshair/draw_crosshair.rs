use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::surface::Surface;

pub const CROSSHAIR_HALF_LENGTH_PX: i32 = 10;
pub const CROSSHAIR_ALPHA: f64 = 0.5;

const CROSSHAIR_COLOUR: Colour = Colour::WHITE;

/// Blends the fixed centre crosshair over the surface: two perpendicular
/// 1-pixel strokes of half-length [`CROSSHAIR_HALF_LENGTH_PX`],
/// semi-transparent white, centred on the raster.
///
/// Drawn unconditionally after the rings so it sits on top of them. The
/// shared centre pixel is blended exactly once, and arms running off a
/// small surface are clipped.
pub fn draw_crosshair(surface: &mut Surface) {
    let (centre_x, centre_y) = surface.centre();
    let cx = centre_x as i32;
    let cy = centre_y as i32;

    for x in (cx - CROSSHAIR_HALF_LENGTH_PX)..=(cx + CROSSHAIR_HALF_LENGTH_PX) {
        surface.blend_pixel(Point { x, y: cy }, CROSSHAIR_COLOUR, CROSSHAIR_ALPHA);
    }

    for y in (cy - CROSSHAIR_HALF_LENGTH_PX)..=(cy + CROSSHAIR_HALF_LENGTH_PX) {
        if y == cy {
            continue; // already blended by the horizontal stroke
        }
        surface.blend_pixel(Point { x: cx, y }, CROSSHAIR_COLOUR, CROSSHAIR_ALPHA);
    }
}
