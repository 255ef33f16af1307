//! Warpium - anti-aliased inverse-mapping image resampler.
//!
//! Given a source image and a continuous mapping from destination pixels to
//! source pixels, produces a resampled destination image that handles both
//! minification (area filtering, plain or outlier-rejecting) and
//! magnification (bilinear interpolation) per pixel, based on the locally
//! estimated scale factor of the mapping.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use warpium::prelude::*;
//!
//! let input = Image::read_file("input.png")?.convert(ChannelCount::Rgba)?;
//! let extent = Extent::from(input.desc());
//! let map = SqrtSineWarp::new(extent, extent);
//! let mut output = Image::new_empty(*input.desc())?;
//!
//! Resample::new().apply(&map, &input, &mut output)?;
//! output.save_file("warped.png")?;
//! ```

#![allow(dead_code)]

mod common;
mod image;
mod mapping;
mod math;
mod resample;

pub mod prelude;

pub use prelude::*;
