use std::time::Instant;

use crate::core::actions::redraw_frame::redraw_frame::redraw_frame_rayon;
use crate::core::data::render_params::RenderParams;
use crate::core::data::surface::Surface;
use crate::storage::write_ppm::write_ppm;

pub fn snapshot_controller() -> Result<(), Box<dyn std::error::Error>> {
    let width: u32 = 500;
    let height: u32 = 500;
    let filepath = "output/newton_rings.ppm";

    let params = RenderParams::default();
    let mut surface = Surface::new(width, height);

    println!("Rendering Newton's rings...");
    println!("Surface size: {}x{}", width, height);
    println!(
        "Lens radius: {} m, wavelength: {} nm, colour mode: {}",
        params.lens_radius_m(),
        params.wavelength_nm(),
        params.colour_mode()
    );

    let start = Instant::now();
    redraw_frame_rayon(&params, &mut surface);
    let render_duration = start.elapsed();

    println!("Duration:   {:?}", render_duration);

    std::fs::create_dir_all("output")?;
    write_ppm(&surface, filepath)?;
    println!("Saved to {}", filepath);
    Ok(())
}
