use glam::DVec2;

use super::projective::bounding_box;
use super::{Extent, InverseMap};

/// Bilinear warp through four arbitrary destination corner points.
///
/// Unlike [`super::Projective`] this is not a linear transform: the forward
/// map is the bilinear surface
///
/// ```text
/// p(s, t) = a + b*s + c*t + d*s*t        s, t in [0, 1]
/// ```
///
/// through the four corners, and the inverse is evaluated per destination
/// pixel by solving the bilinear system for `(s, t)` (a quadratic in `t`).
#[derive(Debug, Clone, Copy)]
pub struct BilinearQuad {
    a: DVec2,
    b: DVec2,
    c: DVec2,
    d: DVec2,
    src: Extent,
    out: Extent,
}

impl BilinearQuad {
    /// Builds the warp from the destination positions of the four source
    /// corners, in the order (0,0), (0,h), (w,h), (w,0).
    ///
    /// The corners are translated so their bounding-box minimum lands on the
    /// origin; the output canvas is the ceiling of that box.
    pub fn new(src: Extent, corners: [DVec2; 4]) -> BilinearQuad {
        let (min, max) = bounding_box(&corners);

        let out = Extent::new(
            (max.x - min.x).ceil().max(1.0) as u32,
            (max.y - min.y).ceil().max(1.0) as u32,
        );

        let p00 = corners[0] - min;
        let p01 = corners[1] - min;
        let p11 = corners[2] - min;
        let p10 = corners[3] - min;

        BilinearQuad {
            a: p00,
            b: p10 - p00,
            c: p01 - p00,
            d: p11 - p10 - p01 + p00,
            src,
            out,
        }
    }

    /// Forward-maps normalized source coordinates `(s, t)` in [0, 1].
    pub(crate) fn forward_unit(&self, s: f64, t: f64) -> DVec2 {
        self.a + self.b * s + self.c * t + self.d * (s * t)
    }

    /// Solves the bilinear system for `(s, t)`, or `None` when the point has
    /// no real preimage on the surface.
    fn solve_unit(&self, p: DVec2) -> Option<DVec2> {
        const EPS: f64 = 1e-12;

        let p = p - self.a;
        let (b, c, d) = (self.b, self.c, self.d);

        // Coefficients of the quadratic in t obtained by eliminating s.
        let qa = d.y * c.x - d.x * c.y;
        let qb = d.x * p.y - d.y * p.x + b.y * c.x - b.x * c.y;
        let qc = b.x * p.y - b.y * p.x;

        let t = if qa.abs() < EPS {
            if qb.abs() < EPS {
                return None;
            }
            -qc / qb
        } else {
            let disc = qb * qb - 4.0 * qa * qc;
            if disc < 0.0 {
                return None;
            }
            let root = disc.sqrt();
            let t0 = (-qb + root) / (2.0 * qa);
            let t1 = (-qb - root) / (2.0 * qa);

            // Prefer the root inside the source domain.
            if (-EPS..=1.0 + EPS).contains(&t0) {
                t0
            } else {
                t1
            }
        };

        let denom_x = b.x + d.x * t;
        let s = if denom_x.abs() >= EPS {
            (p.x - c.x * t) / denom_x
        } else {
            let denom_y = b.y + d.y * t;
            if denom_y.abs() < EPS {
                return None;
            }
            (p.y - c.y * t) / denom_y
        };

        Some(DVec2::new(s, t))
    }
}

impl InverseMap for BilinearQuad {
    fn map_to_source(&self, x: f64, y: f64) -> DVec2 {
        match self.solve_unit(DVec2::new(x, y)) {
            Some(st) => DVec2::new(
                st.x * self.src.width as f64,
                st.y * self.src.height as f64,
            ),
            // No preimage: report a coordinate no bounds check accepts.
            None => DVec2::NAN,
        }
    }

    fn output_extent(&self) -> Extent {
        self.out
    }
}
