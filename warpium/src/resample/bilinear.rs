use crate::image::Image;

/// Fetches an RGBA pixel, clamping the coordinate to the raster.
#[inline]
fn sample_pixel(input: &Image, col: f64, row: f64) -> [u8; 4] {
    let col = (col.floor() as i64).clamp(0, input.desc().width as i64 - 1);
    let row = (row.floor() as i64).clamp(0, input.desc().height as i64 - 1);
    input.rgba(col as u32, row as u32)
}

/// Bilinear interpolation of an RGBA image at fractional source coordinates.
///
/// The four contributing sample centers are the nearest points of the
/// `.5`-aligned pixel-center grid around `(u, v)`; `s` and `t` are the
/// fractional offsets inside that quad:
///
/// ```text
/// c = (1-s)(1-t)*c0 + s(1-t)*c1 + (1-s)t*c2 + st*c3
/// ```
///
/// Within half a pixel of a raster edge the offset on that axis is forced
/// to 0 and the sample center pinned to the edge, so no sample ever
/// extrapolates past the raster.
pub(crate) fn sample(input: &Image, u: f64, v: f64) -> [u8; 4] {
    let width = input.desc().width as f64;
    let height = input.desc().height as f64;

    let mut u0 = if u >= u.floor() + 0.5 {
        u.floor() + 0.5
    } else {
        u.floor() - 0.5
    };
    let mut v0 = if v >= v.floor() + 0.5 {
        v.floor() + 0.5
    } else {
        v.floor() - 0.5
    };
    let mut s = u - u0;
    let mut t = v - v0;

    // boundary area
    if v >= height - 0.5 || v <= 0.5 {
        t = 0.0;
        v0 = if v >= height - 0.5 { height - 0.5 } else { 0.5 };
    }
    if u >= width - 0.5 || u <= 0.5 {
        s = 0.0;
        u0 = if u >= width - 0.5 { width - 0.5 } else { 0.5 };
    }

    let c0 = sample_pixel(input, u0, v0);
    let c1 = sample_pixel(input, u0 + 1.0, v0);
    let c2 = sample_pixel(input, u0, v0 + 1.0);
    let c3 = sample_pixel(input, u0 + 1.0, v0 + 1.0);

    let mut out = [0u8; 4];
    for (channel, value) in out.iter_mut().enumerate() {
        *value = ((1.0 - s) * (1.0 - t) * c0[channel] as f64
            + s * (1.0 - t) * c1[channel] as f64
            + (1.0 - s) * t * c2[channel] as f64
            + s * t * c3[channel] as f64) as u8;
    }
    out
}
