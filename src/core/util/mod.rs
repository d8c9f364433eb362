pub mod pixel_to_radial_metres;
