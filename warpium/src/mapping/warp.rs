use glam::DVec2;

use super::{Extent, InverseMap};

/// Identity mapping in normalized coordinates.
///
/// With equal source and destination extents this is the exact identity;
/// with differing extents it stretches the source over the destination
/// canvas, which makes it the plain-resize mapping.
#[derive(Debug, Clone, Copy)]
pub struct Rescale {
    // Precomputed source/destination ratios; equal extents give a ratio of
    // exactly 1.0, keeping the mapping bit-exact for the identity case.
    x_ratio: f64,
    y_ratio: f64,
    dst: Extent,
}

impl Rescale {
    pub fn new(src: Extent, dst: Extent) -> Self {
        Self {
            x_ratio: src.width as f64 / dst.width as f64,
            y_ratio: src.height as f64 / dst.height as f64,
            dst,
        }
    }
}

impl InverseMap for Rescale {
    fn map_to_source(&self, x: f64, y: f64) -> DVec2 {
        DVec2::new(x * self.x_ratio, y * self.y_ratio)
    }

    fn output_extent(&self) -> Extent {
        self.dst
    }
}

/// Reference warp: `u = sqrt(x)`, `v = 0.5 * (1 + sin(y * pi))` in the
/// normalized unit square.
#[derive(Debug, Clone, Copy)]
pub struct SqrtSineWarp {
    src: Extent,
    dst: Extent,
}

impl SqrtSineWarp {
    pub fn new(src: Extent, dst: Extent) -> Self {
        Self { src, dst }
    }
}

impl InverseMap for SqrtSineWarp {
    fn map_to_source(&self, x: f64, y: f64) -> DVec2 {
        let x = x / self.dst.width as f64;
        let y = y / self.dst.height as f64;

        let u = x.sqrt();
        let v = 0.5 * (1.0 + (y * std::f64::consts::PI).sin());

        DVec2::new(u * self.src.width as f64, v * self.src.height as f64)
    }

    fn output_extent(&self) -> Extent {
        self.dst
    }
}

/// Alternate warp: `u = x^0.7`, `v = sin(pi * y / 2)^2`.
#[derive(Debug, Clone, Copy)]
pub struct PowerSineWarp {
    src: Extent,
    dst: Extent,
}

impl PowerSineWarp {
    pub fn new(src: Extent, dst: Extent) -> Self {
        Self { src, dst }
    }
}

impl InverseMap for PowerSineWarp {
    fn map_to_source(&self, x: f64, y: f64) -> DVec2 {
        let x = x / self.dst.width as f64;
        let y = y / self.dst.height as f64;

        let u = x.powf(0.7);
        let v = (std::f64::consts::PI * y / 2.0).sin().powi(2);

        DVec2::new(u * self.src.width as f64, v * self.src.height as f64)
    }

    fn output_extent(&self) -> Extent {
        self.dst
    }
}
