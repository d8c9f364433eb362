use crate::core::data::surface::Surface;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the surface as a binary PPM (P6) image.
pub fn write_ppm(surface: &Surface, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let file = std::fs::File::create(filepath)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "P6")?;
    writeln!(out, "{} {}", surface.width(), surface.height())?;
    writeln!(out, "255")?;
    out.write_all(surface.data())?;
    out.flush()?;

    Ok(())
}
