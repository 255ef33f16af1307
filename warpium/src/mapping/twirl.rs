use glam::DVec2;

use super::{Extent, InverseMap};

/// Achieved bounding box of a forward warp over the unit square, plus the
/// scale needed to normalize the inverse pass.
///
/// Twirl and lens warps do not preserve the unit square, so the inverse pass
/// cannot be normalized until a forward sweep has found the actual extent of
/// the warped image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct UnitBox {
    pub(crate) x_min: f64,
    pub(crate) y_min: f64,
    pub(crate) x_scale: f64,
    pub(crate) y_scale: f64,
}

impl UnitBox {
    /// Sweeps the forward mapping over the (width+1) x (height+1) grid of
    /// pixel corners. Corners rather than centers, so a warp that degenerates
    /// to the identity yields exactly the [0,1]x[0,1] box.
    fn fit<F: Fn(f64, f64) -> DVec2>(grid: Extent, forward: F) -> UnitBox {
        let mut x_min = f64::MAX;
        let mut y_min = f64::MAX;
        let mut x_max = f64::MIN;
        let mut y_max = f64::MIN;

        for row in 0..=grid.height {
            for col in 0..=grid.width {
                let u = col as f64 / grid.width as f64;
                let v = row as f64 / grid.height as f64;

                let p = forward(u, v);

                x_min = x_min.min(p.x);
                y_min = y_min.min(p.y);
                x_max = x_max.max(p.x);
                y_max = y_max.max(p.y);
            }
        }

        UnitBox {
            x_min,
            y_min,
            x_scale: x_max - x_min,
            y_scale: y_max - y_min,
        }
    }

    /// Output canvas for a source of the given extent.
    fn output_extent(&self, src: Extent) -> Extent {
        let width = (src.width as f64 * self.x_scale).round().max(1.0) as u32;
        let height = (src.height as f64 * self.y_scale).round().max(1.0) as u32;
        Extent::new(width, height)
    }

    /// Denormalizes a destination unit coordinate back into the box.
    #[inline]
    fn denormalize(&self, x: f64, y: f64) -> DVec2 {
        DVec2::new(x * self.x_scale + self.x_min, y * self.y_scale + self.y_min)
    }
}

/// Rotates a unit-square point around (0.5, 0.5) by `strength * r` radians,
/// where r is the radius after rescaling the square to span [-1, 1].
///
/// Equivalent to the polar form `theta' = theta + strength * r` but without
/// the atan2/cos round-trip, so a strength of 0 is the exact identity.
#[inline]
fn rotate_by_radius(u: f64, v: f64, strength: f64) -> DVec2 {
    let uu = (u - 0.5) * 2.0;
    let vv = (v - 0.5) * 2.0;
    let r = uu.hypot(vv);

    let (sin, cos) = (strength * r).sin_cos();
    DVec2::new(
        (uu * cos - vv * sin) / 2.0 + 0.5,
        (vv * cos + uu * sin) / 2.0 + 0.5,
    )
}

/// Twirl warp: rotates each point around the image center by an angle
/// proportional to its radius.
#[derive(Debug, Clone, Copy)]
pub struct Twirl {
    strength: f64,
    src: Extent,
    out: Extent,
    unit_box: UnitBox,
}

impl Twirl {
    /// Fits the warp to a source image: runs the forward bounding-box sweep
    /// and sizes the output canvas from it.
    pub fn fit(src: Extent, strength: f64) -> Twirl {
        let unit_box = UnitBox::fit(src, |u, v| Self::forward_unit(u, v, strength));
        let out = unit_box.output_extent(src);

        Twirl {
            strength,
            src,
            out,
            unit_box,
        }
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    pub(crate) fn forward_unit(u: f64, v: f64, strength: f64) -> DVec2 {
        rotate_by_radius(u, v, -strength)
    }

    pub(crate) fn inverse_unit(x: f64, y: f64, strength: f64) -> DVec2 {
        rotate_by_radius(x, y, strength)
    }

    pub(crate) fn unit_box(&self) -> UnitBox {
        self.unit_box
    }
}

impl InverseMap for Twirl {
    fn map_to_source(&self, x: f64, y: f64) -> DVec2 {
        let x = x / self.out.width as f64;
        let y = y / self.out.height as f64;

        let boxed = self.unit_box.denormalize(x, y);
        let uv = Self::inverse_unit(boxed.x, boxed.y, self.strength);

        DVec2::new(uv.x * self.src.width as f64, uv.y * self.src.height as f64)
    }

    fn output_extent(&self) -> Extent {
        self.out
    }
}

/// Magnifying-glass warp: radial remap that stretches the center of the
/// image and compresses the rim.
#[derive(Debug, Clone, Copy)]
pub struct Lens {
    src: Extent,
    out: Extent,
    unit_box: UnitBox,
}

impl Lens {
    /// Fits the warp to a source image (forward bounding-box sweep).
    pub fn fit(src: Extent) -> Lens {
        let unit_box = UnitBox::fit(src, Self::forward_unit);
        let out = unit_box.output_extent(src);

        Lens { src, out, unit_box }
    }

    /// Forward radial remap `r' = sqrt(4r + 0.25) / 2 - 0.25`.
    pub(crate) fn forward_unit(u: f64, v: f64) -> DVec2 {
        Self::radial(u, v, |r| (4.0 * r + 0.25).sqrt() / 2.0 - 0.25)
    }

    /// Inverse radial remap `r' = (r + 0.5) * r`.
    pub(crate) fn inverse_unit(x: f64, y: f64) -> DVec2 {
        Self::radial(x, y, |r| (r + 0.5) * r)
    }

    #[inline]
    fn radial(u: f64, v: f64, remap: impl Fn(f64) -> f64) -> DVec2 {
        let uu = (u - 0.5) * 2.0;
        let vv = (v - 0.5) * 2.0;
        let r = uu.hypot(vv);

        if r == 0.0 {
            return DVec2::new(0.5, 0.5);
        }

        let ratio = remap(r) / r;
        DVec2::new(uu * ratio / 2.0 + 0.5, vv * ratio / 2.0 + 0.5)
    }
}

impl InverseMap for Lens {
    fn map_to_source(&self, x: f64, y: f64) -> DVec2 {
        let x = x / self.out.width as f64;
        let y = y / self.out.height as f64;

        let boxed = self.unit_box.denormalize(x, y);
        let uv = Self::inverse_unit(boxed.x, boxed.y);

        DVec2::new(uv.x * self.src.width as f64, uv.y * self.src.height as f64)
    }

    fn output_extent(&self) -> Extent {
        self.out
    }
}
