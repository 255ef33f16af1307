use glam::DVec2;

use crate::mapping::InverseMap;

/// Estimates the local scale factors of a mapping at a destination pixel
/// center.
///
/// Samples the mapping at the four half-pixel corner offsets of the pixel
/// and averages the symmetric differences per axis, giving a first-order
/// Jacobian estimate in source-pixel units. Component magnitudes above 1
/// mean minification on that axis, below 1 magnification, exactly 1 no
/// local distortion.
pub fn scale_factors(map: &dyn InverseMap, x: f64, y: f64) -> DVec2 {
    let p00 = map.map_to_source(x - 0.5, y - 0.5);
    let p10 = map.map_to_source(x + 0.5, y - 0.5);
    let p01 = map.map_to_source(x - 0.5, y + 0.5);
    let p11 = map.map_to_source(x + 0.5, y + 0.5);

    let sx = ((p10.x - p00.x) + (p11.x - p01.x)) / 2.0;
    let sy = ((p01.y - p00.y) + (p11.y - p10.y)) / 2.0;

    DVec2::new(sx.abs(), sy.abs())
}
