use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use newton_rings::core::actions::redraw_frame::redraw_frame::{redraw_frame, redraw_frame_rayon};
use newton_rings::core::data::render_params::RenderParams;
use newton_rings::core::data::surface::Surface;
use newton_rings::core::optics::spectrum::wavelength_to_colour;

fn bench_redraw_frame(c: &mut Criterion) {
    let params = RenderParams::default();

    c.bench_function("redraw_frame_500x500_sequential", |b| {
        let mut surface = Surface::new(500, 500);
        b.iter(|| {
            redraw_frame(black_box(&params), &mut surface);
        });
    });

    c.bench_function("redraw_frame_500x500_rayon", |b| {
        let mut surface = Surface::new(500, 500);
        b.iter(|| {
            redraw_frame_rayon(black_box(&params), &mut surface);
        });
    });

    let greyscale = RenderParams::new(1.0, 550, false).expect("bench params are valid");

    c.bench_function("redraw_frame_500x500_greyscale", |b| {
        let mut surface = Surface::new(500, 500);
        b.iter(|| {
            redraw_frame(black_box(&greyscale), &mut surface);
        });
    });
}

fn bench_wavelength_to_colour(c: &mut Criterion) {
    c.bench_function("wavelength_to_colour_sweep", |b| {
        b.iter(|| {
            for nm in 380..=780 {
                black_box(wavelength_to_colour(black_box(f64::from(nm))));
            }
        });
    });
}

criterion_group!(benches, bench_redraw_frame, bench_wavelength_to_colour);
criterion_main!(benches);
