//! Example: warp an image with a command-composed projective transform, or
//! with a bilinear warp through the forward-mapped source corners.
//!
//! Matrix commands are read from stdin and composed in the order entered:
//!
//! ```text
//! r <degrees>      rotation
//! s <sx> <sy>      scale
//! t <dx> <dy>      translation
//! f <xf> <yf>      flip (1 = flip that axis)
//! h <hx> <hy>      shear
//! p <px> <py>      perspective
//! d                done
//! ```
//!
//! # Usage
//!
//! ```bash
//! echo "r 30 s 1.5 1.5 d" | cargo run --release --example projective -- input.png output.png
//! echo "h 0.4 0 d" | cargo run --release --example projective -- input.png output.png -b
//! ```
//!
//! With `-b` the four forward-mapped source corners feed a bilinear-quad
//! warp instead of the full projective inverse.

mod common;

use std::env;
use std::io::Read;
use std::process;

use common::*;
use warpium::prelude::*;

fn usage() -> ! {
    eprintln!("Usage: projective <input> <output> [-b]");
    eprintln!("  matrix commands on stdin: r deg | s sx sy | t dx dy | f xf yf | h hx hy | p px py | d");
    process::exit(1);
}

fn next_number<'a>(tokens: &mut impl Iterator<Item = &'a str>, name: &str) -> f64 {
    tokens
        .next()
        .and_then(|t| t.parse().ok())
        .unwrap_or_else(|| panic!("expected a number for {}", name))
}

fn read_commands() -> ProjectiveBuilder {
    let mut stdin = String::new();
    std::io::stdin()
        .read_to_string(&mut stdin)
        .expect("failed to read matrix commands from stdin");

    let mut tokens = stdin.split_whitespace();
    let mut builder = ProjectiveBuilder::new();
    loop {
        let Some(tag) = tokens.next() else { usage() };
        builder = match tag {
            "r" => builder.rotate(next_number(&mut tokens, "rotation angle")),
            "s" => {
                let sx = next_number(&mut tokens, "sx");
                let sy = next_number(&mut tokens, "sy");
                builder.scale(sx, sy)
            }
            "t" => {
                let dx = next_number(&mut tokens, "dx");
                let dy = next_number(&mut tokens, "dy");
                builder.translate(dx, dy)
            }
            "f" => {
                let xf = next_number(&mut tokens, "xf");
                let yf = next_number(&mut tokens, "yf");
                builder.flip(xf == 1.0, yf == 1.0)
            }
            "h" => {
                let hx = next_number(&mut tokens, "hx");
                let hy = next_number(&mut tokens, "hy");
                builder.shear(hx, hy)
            }
            "p" => {
                let px = next_number(&mut tokens, "px");
                let py = next_number(&mut tokens, "py");
                builder.perspective(px, py)
            }
            "d" => break,
            _ => usage(),
        };
    }
    builder
}

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        usage();
    }
    let bilinear_quad = args.iter().any(|a| a == "-b");

    let input = load_rgba(&args[1]);
    let extent = Extent::from(input.desc());

    println!("Please enter matrix commands:");
    let builder = read_commands();

    let map: Box<dyn InverseMap> = if bilinear_quad {
        let corners = builder.map_corners(extent);
        tracing::info!(?corners, "bilinear warp through forward-mapped corners");
        Box::new(BilinearQuad::new(extent, corners))
    } else {
        Box::new(
            builder
                .fit(extent)
                .expect("transform matrix is not invertible"),
        )
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
