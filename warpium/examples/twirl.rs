//! Example: twirl an image around its center, or apply the magnifying-lens
//! warp.
//!
//! Both warps change the output canvas size: a forward bounding-box pass
//! over the source determines the achieved extent before the inverse pass
//! runs. Resampling uses the full automatic policy, so the strongly minified
//! rim and the magnified center are both filtered properly.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --example twirl -- input.png output.png [strength]
//! cargo run --release --example twirl -- input.png output.png --lens
//! ```

mod common;

use std::env;
use std::process;

use common::*;
use warpium::prelude::*;

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: twirl <input> <output> [strength | --lens]");
        process::exit(1);
    }

    let input = load_rgba(&args[1]);
    let extent = Extent::from(input.desc());

    let map: Box<dyn InverseMap> = if args.get(3).is_some_and(|a| a == "--lens") {
        tracing::info!("fitting lens warp");
        Box::new(Lens::fit(extent))
    } else {
        let strength: f64 = args
            .get(3)
            .map(|a| a.parse().expect("strength must be a number"))
            .unwrap_or(2.0);
        tracing::info!(strength, "fitting twirl warp");
        Box::new(Twirl::fit(extent, strength))
    };

    let out = map.output_extent();
    tracing::info!(output = %out, "canvas fitted");

    let mut output = Image::new_empty(ImageDesc::new(out.width, out.height, ChannelCount::Rgba))
        .expect("output allocation");
    Resample::new()
        .apply(map.as_ref(), &input, &mut output)
        .expect("resample failed");

    save_rgba(output, &args[2]);
}
