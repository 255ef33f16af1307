use glam::DVec2;

use super::{Extent, InverseMap};
use crate::common::{Error, Result};
use crate::math::DMat3;

/// Accumulates elementary forward transforms into a 3x3 homogeneous matrix.
///
/// Commands compose in the order they are issued, each one applied after the
/// transforms already accumulated:
///
/// ```rust,ignore
/// let projective = ProjectiveBuilder::new()
///     .rotate(30.0)
///     .scale(1.5, 1.5)
///     .perspective(0.001, 0.0)
///     .fit(src)?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectiveBuilder {
    matrix: DMat3,
}

impl ProjectiveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated forward matrix.
    pub fn matrix(&self) -> DMat3 {
        self.matrix
    }

    fn compose(mut self, xform: DMat3) -> Self {
        self.matrix = xform.mul_mat(&self.matrix);
        self
    }

    /// Counter-clockwise rotation, angle in degrees.
    pub fn rotate(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.compose(DMat3::from_rows(
            [cos, -sin, 0.0],
            [sin, cos, 0.0],
            [0.0, 0.0, 1.0],
        ))
    }

    pub fn scale(self, sx: f64, sy: f64) -> Self {
        self.compose(DMat3::from_rows(
            [sx, 0.0, 0.0],
            [0.0, sy, 0.0],
            [0.0, 0.0, 1.0],
        ))
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        self.compose(DMat3::from_rows(
            [1.0, 0.0, dx],
            [0.0, 1.0, dy],
            [0.0, 0.0, 1.0],
        ))
    }

    /// Mirrors around the x and/or y axis.
    pub fn flip(self, horizontal: bool, vertical: bool) -> Self {
        let sx = if horizontal { -1.0 } else { 1.0 };
        let sy = if vertical { -1.0 } else { 1.0 };
        self.scale(sx, sy)
    }

    pub fn shear(self, hx: f64, hy: f64) -> Self {
        self.compose(DMat3::from_rows(
            [1.0, hx, 0.0],
            [hy, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ))
    }

    pub fn perspective(self, px: f64, py: f64) -> Self {
        self.compose(DMat3::from_rows(
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [px, py, 1.0],
        ))
    }

    /// Forward-maps the four corners of a source extent.
    ///
    /// Corner order: (0,0), (0,h), (w,h), (w,0).
    pub fn map_corners(&self, src: Extent) -> [DVec2; 4] {
        let w = src.width as f64;
        let h = src.height as f64;

        [
            self.matrix.transform_point(DVec2::new(0.0, 0.0)),
            self.matrix.transform_point(DVec2::new(0.0, h)),
            self.matrix.transform_point(DVec2::new(w, h)),
            self.matrix.transform_point(DVec2::new(w, 0.0)),
        ]
    }

    /// Finalizes the transform against a source image.
    ///
    /// The output canvas is the bounding box of the four forward-mapped
    /// source corners; an extra translation shifts the box minimum to the
    /// origin before the matrix is inverted.
    pub fn fit(self, src: Extent) -> Result<Projective> {
        let corners = self.map_corners(src);

        let (min, max) = bounding_box(&corners);
        let out = Extent::new(
            (max.x - min.x).ceil().max(1.0) as u32,
            (max.y - min.y).ceil().max(1.0) as u32,
        );

        let forward = DMat3::from_rows(
            [1.0, 0.0, -min.x],
            [0.0, 1.0, -min.y],
            [0.0, 0.0, 1.0],
        )
        .mul_mat(&self.matrix);

        let inverse = forward.inverse().ok_or_else(|| {
            Error::SingularTransform(format!("projective matrix {:?} is not invertible", forward))
        })?;

        Ok(Projective {
            forward,
            inverse,
            out,
        })
    }
}

pub(crate) fn bounding_box(points: &[DVec2]) -> (DVec2, DVec2) {
    let mut min = DVec2::new(f64::MAX, f64::MAX);
    let mut max = DVec2::new(f64::MIN, f64::MIN);

    for p in points {
        min = min.min(*p);
        max = max.max(*p);
    }

    (min, max)
}

/// Projective (homography) warp, built from composed elementary transforms.
#[derive(Debug, Clone, Copy)]
pub struct Projective {
    forward: DMat3,
    inverse: DMat3,
    out: Extent,
}

impl Projective {
    pub fn builder() -> ProjectiveBuilder {
        ProjectiveBuilder::new()
    }

    /// The forward matrix, including the min-corner translation.
    pub fn forward(&self) -> DMat3 {
        self.forward
    }

    /// The inverse matrix applied per destination pixel.
    pub fn inverse(&self) -> DMat3 {
        self.inverse
    }
}

impl InverseMap for Projective {
    fn map_to_source(&self, x: f64, y: f64) -> DVec2 {
        self.inverse.transform_point(DVec2::new(x, y))
    }

    fn output_extent(&self) -> Extent {
        self.out
    }
}
