use glam::DVec2;

use super::{Extent, InverseMap};

/// Tiles the source image in a grid of `rows x cols` repeats over a canvas
/// of the same extent as the source.
///
/// The mapping domain is invariant (the unit square maps onto itself per
/// repeat), so no bounding-box fit pass is needed.
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    rows: u32,
    cols: u32,
    src: Extent,
}

impl Tile {
    pub fn new(src: Extent, rows: u32, cols: u32) -> Self {
        assert!(rows > 0 && cols > 0, "tile grid must be non-empty");
        Self { rows, cols, src }
    }
}

impl InverseMap for Tile {
    fn map_to_source(&self, x: f64, y: f64) -> DVec2 {
        let x = x / self.src.width as f64;
        let y = y / self.src.height as f64;

        let u = (x * self.cols as f64).fract();
        let v = (y * self.rows as f64).fract();

        DVec2::new(u * self.src.width as f64, v * self.src.height as f64)
    }

    fn output_extent(&self) -> Extent {
        self.src
    }
}
