use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::draw_crosshair::draw_crosshair::draw_crosshair;
use crate::core::actions::render_rings::render_rings::render_rings_cancelable;
use crate::core::actions::render_rings::render_rings_rayon::render_rings_rayon;
use crate::core::data::colour::Colour;
use crate::core::data::render_params::RenderParams;
use crate::core::data::surface::Surface;

/// Redraws one full frame: background fill, interference rings, then the
/// crosshair overlay on top.
///
/// The surface is exclusively borrowed for the duration of the call and
/// fully overwritten; nothing is retained afterwards.
pub fn redraw_frame(params: &RenderParams, surface: &mut Surface) {
    match redraw_frame_cancelable(params, surface, &NeverCancel) {
        Ok(()) => {}
        Err(Cancelled) => {
            // NeverCancel never cancels, so this branch is unreachable
            unreachable!("NeverCancel token should never signal cancellation")
        }
    }
}

/// Like [`redraw_frame`], but renders the ring rows in parallel.
/// The frame is byte-identical to the sequential one.
pub fn redraw_frame_rayon(params: &RenderParams, surface: &mut Surface) {
    surface.fill(Colour::BLACK);
    render_rings_rayon(params, surface);
    draw_crosshair(surface);
}

/// Cancel-aware redraw for interactive use. On cancellation the buffer is
/// left partially written and no crosshair is drawn; the caller discards
/// the frame.
pub fn redraw_frame_cancelable<C: CancelToken>(
    params: &RenderParams,
    surface: &mut Surface,
    cancel: &C,
) -> Result<(), Cancelled> {
    surface.fill(Colour::BLACK);
    render_rings_cancelable(params, surface, cancel)?;
    draw_crosshair(surface);

    Ok(())
}
