//! Example: tile an image into a grid of repeats over a same-size canvas.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --example tile -- <rows> <cols> input.png [output.png]
//! ```

mod common;

use std::env;
use std::process;

use common::*;
use warpium::prelude::*;

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!("Usage: tile <rows> <cols> <input> [output]");
        process::exit(1);
    }

    let rows: u32 = args[1].parse().expect("rows must be a positive integer");
    let cols: u32 = args[2].parse().expect("cols must be a positive integer");

    let input = load_rgba(&args[3]);
    let extent = Extent::from(input.desc());

    let map = Tile::new(extent, rows, cols);

    tracing::info!(rows, cols, "tiling");

    // Each tile minifies the source, so the automatic policy area-filters it.
    let mut output = Image::new_empty(*input.desc()).expect("output allocation");
    Resample::new()
        .apply(&map, &input, &mut output)
        .expect("resample failed");

    if let Some(path) = args.get(4) {
        save_rgba(output, path);
    }
}
