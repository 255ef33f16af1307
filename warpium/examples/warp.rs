//! Example: warp an image through one of the two reference warp functions.
//!
//! The mode selects how the resampler cleans up the warp: nothing, area
//! filtering for minified regions, outlier-rejecting area filtering,
//! bilinear interpolation for magnified regions, or the full automatic
//! policy.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --example warp -- input.png [output.png] [-m 0-4] [-w 0-1]
//! ```
//!
//! Modes: 0 = full policy (default), 1 = general warp (no filtering),
//! 2 = area filtering, 3 = adaptive area filtering, 4 = bilinear only.
//! Warp functions: 0 = sqrt/sine (default), 1 = power/sine.

mod common;

use std::env;
use std::process;

use common::*;
use warpium::prelude::*;

fn usage() -> ! {
    eprintln!("Usage: warp <input> [output] [-m mode 0-4] [-w warp 0-1]");
    eprintln!("  modes: 0 full policy, 1 general, 2 area, 3 adaptive area, 4 bilinear");
    eprintln!("  warp functions: 0 sqrt/sine, 1 power/sine");
    process::exit(1);
}

fn flag_value(args: &[String], flag: &str) -> Option<u32> {
    let pos = args.iter().position(|a| a == flag)?;
    args.get(pos + 1).and_then(|v| v.parse().ok())
}

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        usage();
    }

    let input_path = &args[1];
    let output_path = args
        .get(2)
        .filter(|a| !a.starts_with('-'))
        .map(String::as_str);

    let mode = match flag_value(&args, "-m").unwrap_or(0) {
        0 => ResampleMode::Auto,
        1 => ResampleMode::General,
        2 => ResampleMode::Area,
        3 => ResampleMode::AdaptiveArea,
        4 => ResampleMode::Bilinear,
        _ => usage(),
    };
    let warp_id = flag_value(&args, "-w").unwrap_or(0);

    let input = load_rgba(input_path);
    let extent = Extent::from(input.desc());

    let map: Box<dyn InverseMap> = match warp_id {
        0 => Box::new(SqrtSineWarp::new(extent, extent)),
        1 => Box::new(PowerSineWarp::new(extent, extent)),
        _ => usage(),
    };

    tracing::info!(?mode, warp_id, "warping");

    let mut output = Image::new_empty(*input.desc()).expect("output allocation");
    Resample::new()
        .mode(mode)
        .apply(map.as_ref(), &input, &mut output)
        .expect("resample failed");

    if let Some(path) = output_path {
        save_rgba(output, path);
    }
}
