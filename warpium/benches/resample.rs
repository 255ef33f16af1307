//! Benchmark for the resample pass across policy modes.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use warpium::prelude::*;

fn gradient_rgba(width: u32, height: u32) -> Image {
    let desc = ImageDesc::new(width, height, ChannelCount::Rgba);
    let mut bytes = Vec::with_capacity(desc.size_in_bytes());
    for row in 0..height {
        for col in 0..width {
            bytes.push((col * 7 % 256) as u8);
            bytes.push((row * 13 % 256) as u8);
            bytes.push(((col + row) * 29 % 256) as u8);
            bytes.push(255);
        }
    }
    Image::new_with_data(desc, bytes).unwrap()
}

fn benchmarks(c: &mut Criterion) {
    let input = gradient_rgba(512, 512);
    let extent = Extent::from(input.desc());

    let warp = SqrtSineWarp::new(extent, extent);
    for (name, mode) in [
        ("warp_general_512", ResampleMode::General),
        ("warp_adaptive_512", ResampleMode::AdaptiveArea),
        ("warp_auto_512", ResampleMode::Auto),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| {
                let mut output = Image::new_empty(*input.desc()).unwrap();
                Resample::new()
                    .mode(mode)
                    .apply(&warp, &input, &mut output)
                    .unwrap();
                black_box(output)
            })
        });
    }

    let upscale = Rescale::new(extent, Extent::new(1024, 1024));
    c.bench_function("bilinear_upscale_2x", |b| {
        b.iter(|| {
            let mut output =
                Image::new_empty(ImageDesc::new(1024, 1024, ChannelCount::Rgba)).unwrap();
            Resample::new()
                .mode(ResampleMode::Bilinear)
                .apply(&upscale, &input, &mut output)
                .unwrap();
            black_box(output)
        })
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
