use rayon::prelude::*;

use super::scale::scale_factors;
use super::{area, bilinear, Resample, ResampleMode};
use crate::image::Image;
use crate::mapping::{nudge_inside, Extent, InverseMap};

/// Which filter the policy applies to one destination pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FilterChoice {
    /// Nearest-neighbor copy from the raw source.
    Copy,
    /// Copy from the area-filtered source.
    Filtered,
    /// Bilinear interpolation of the raw source.
    BilinearRaw,
    /// Bilinear interpolation of the area-filtered source (mixed
    /// minify/magnify case: the filtered source pre-smooths the minified
    /// axis).
    BilinearFiltered,
}

/// The per-pixel dispatch table over the locally estimated scale factors.
pub(crate) fn select(mode: ResampleMode, sx: f64, sy: f64) -> FilterChoice {
    // A degenerate estimate (mapping singularity) carries no footprint
    // information; treat it as undistorted.
    if sx == 0.0 || sy == 0.0 {
        return FilterChoice::Copy;
    }

    match mode {
        ResampleMode::General => FilterChoice::Copy,

        ResampleMode::Area | ResampleMode::AdaptiveArea => {
            if sx > 1.0 || sy > 1.0 {
                FilterChoice::Filtered
            } else {
                FilterChoice::Copy
            }
        }

        ResampleMode::Bilinear => {
            if sx < 1.0 || sy < 1.0 {
                FilterChoice::BilinearRaw
            } else {
                FilterChoice::Copy
            }
        }

        ResampleMode::Auto => {
            if sx < 1.0 || sy < 1.0 {
                if sx < 1.0 && sy < 1.0 {
                    FilterChoice::BilinearRaw
                } else {
                    FilterChoice::BilinearFiltered
                }
            } else if sx == 1.0 && sy == 1.0 {
                FilterChoice::Copy
            } else {
                FilterChoice::Filtered
            }
        }
    }
}

/// Runs the resample pass: precomputes the filtered source buffers the mode
/// needs, then maps every destination pixel independently.
pub(super) fn apply(params: &Resample, map: &dyn InverseMap, input: &Image, output: &mut Image) {
    let src = Extent::from(input.desc());

    // Source-side precompute pass; must complete before the destination
    // loop reads from it.
    let filtered = match params.mode {
        ResampleMode::Area => Some(area::filter_image(input, params.kernel)),
        ResampleMode::AdaptiveArea | ResampleMode::Auto => Some(area::filter_image_adaptive(
            input,
            params.kernel,
            params.threshold,
        )),
        ResampleMode::General | ResampleMode::Bilinear => None,
    };
    let filtered = filtered.as_ref();

    let width = output.desc().width;
    let row_bytes = output.desc().row_bytes();

    output
        .bytes_mut()
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(row, out_row)| {
            let out_row: &mut [[u8; 4]] = bytemuck::cast_slice_mut(out_row);

            for col in 0..width as usize {
                let x = col as f64 + 0.5;
                let y = row as f64 + 0.5;

                let uv = nudge_inside(map.map_to_source(x, y), src);

                let inside = uv.x >= 0.0
                    && uv.x < src.width as f64
                    && uv.y >= 0.0
                    && uv.y < src.height as f64;
                if !inside {
                    // Out-of-range mapping: keep the transparent fill.
                    continue;
                }

                let scale = scale_factors(map, x, y);

                out_row[col] = match select(params.mode, scale.x, scale.y) {
                    FilterChoice::Copy => input.rgba(uv.x as u32, uv.y as u32),
                    FilterChoice::Filtered => filtered
                        .expect("filtered source precomputed for this mode")
                        .rgba(uv.x as u32, uv.y as u32),
                    FilterChoice::BilinearRaw => bilinear::sample(input, uv.x, uv.y),
                    FilterChoice::BilinearFiltered => bilinear::sample(
                        filtered.expect("filtered source precomputed for this mode"),
                        uv.x,
                        uv.y,
                    ),
                };
            }
        });
}
