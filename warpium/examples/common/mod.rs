//! Shared helpers for the demo programs.

use tracing_subscriber::EnvFilter;
use warpium::prelude::*;

pub fn init_tracing() {
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Loads an image as a bottom-up RGBA raster, the working orientation of the
/// demos (file formats store rows top-down).
pub fn load_rgba(path: &str) -> Image {
    let mut img = Image::read_file(path)
        .expect("failed to read input image")
        .convert(ChannelCount::Rgba)
        .expect("failed to expand input to RGBA");
    img.flip_vertical();

    tracing::info!(path, desc = %img.desc(), "loaded input image");
    img
}

/// Writes a bottom-up RGBA raster back out in file row order.
pub fn save_rgba(mut img: Image, path: &str) {
    img.flip_vertical();
    img.save_file(path).expect("failed to write output image");

    tracing::info!(path, "wrote output image");
}
