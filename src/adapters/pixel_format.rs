//! Pixel format conversion helpers for presentation adapters.

/// Expands packed RGB bytes into an RGBA framebuffer, forcing full opacity.
///
/// # Panics
/// Panics unless `src` holds whole RGB pixels and `dst` holds exactly one
/// RGBA pixel per source pixel.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) {
    assert_eq!(
        src.len() % 3,
        0,
        "src length {} is not a multiple of 3",
        src.len()
    );
    assert_eq!(
        dst.len(),
        src.len() / 3 * 4,
        "dst length {} does not fit {} RGB pixels",
        dst.len(),
        src.len() / 3
    );

    for (rgb, rgba) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        rgba[..3].copy_from_slice(rgb);
        rgba[3] = 0xff;
    }
}
