use rayon::prelude::*;

use crate::image::{ChannelCount, Image};

/// 3x3 area-averaging kernel.
///
/// Weights are normalized at use by the sum of the weights that actually
/// contribute, so out-of-bounds and outlier-excluded neighbors do not skew
/// the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel3 {
    weights: [f64; 9],
}

impl Kernel3 {
    /// Corner/edge/center weights 1/2/8.
    pub const CENTER_8: Kernel3 = Kernel3 {
        weights: [1.0, 2.0, 1.0, 2.0, 8.0, 2.0, 1.0, 2.0, 1.0],
    };

    /// Corner/edge/center weights 1/2/4.
    pub const CENTER_4: Kernel3 = Kernel3 {
        weights: [1.0, 2.0, 1.0, 2.0, 4.0, 2.0, 1.0, 2.0, 1.0],
    };

    pub fn weights(&self) -> &[f64; 9] {
        &self.weights
    }
}

impl Default for Kernel3 {
    fn default() -> Self {
        Kernel3::CENTER_8
    }
}

/// In-bounds 3x3 neighborhood of a pixel: (kernel index, pixel) pairs.
#[inline]
fn gather(input: &Image, col: i64, row: i64) -> ([(usize, [u8; 4]); 9], usize) {
    let width = input.desc().width as i64;
    let height = input.desc().height as i64;

    let mut samples = [(0usize, [0u8; 4]); 9];
    let mut count = 0;

    for i in -1..=1i64 {
        for j in -1..=1i64 {
            let r = row + i;
            let c = col + j;
            if r >= 0 && r < height && c >= 0 && c < width {
                let k = ((i + 1) * 3 + (j + 1)) as usize;
                samples[count] = (k, input.rgba(c as u32, r as u32));
                count += 1;
            }
        }
    }

    (samples, count)
}

#[inline]
fn weighted_average(
    samples: &[(usize, [u8; 4])],
    kernel: &Kernel3,
    channel: usize,
    keep: impl Fn(u8) -> bool,
) -> Option<u8> {
    let mut sum = 0.0;
    let mut weight_sum = 0.0;

    for &(k, px) in samples {
        if keep(px[channel]) {
            sum += kernel.weights[k] * px[channel] as f64;
            weight_sum += kernel.weights[k];
        }
    }

    if weight_sum == 0.0 {
        return None;
    }

    Some((sum / weight_sum) as u8)
}

fn filter_pixel(input: &Image, col: u32, row: u32, kernel: &Kernel3) -> [u8; 4] {
    let (samples, count) = gather(input, col as i64, row as i64);
    let samples = &samples[..count];

    let mut out = [0u8; 4];
    for (channel, value) in out.iter_mut().enumerate() {
        *value = weighted_average(samples, kernel, channel, |_| true)
            .expect("neighborhood always contains the center pixel");
    }
    out
}

fn filter_pixel_adaptive(
    input: &Image,
    col: u32,
    row: u32,
    kernel: &Kernel3,
    threshold: u8,
) -> [u8; 4] {
    let (samples, count) = gather(input, col as i64, row as i64);
    let samples = &samples[..count];

    let mut out = [0u8; 4];
    for (channel, value) in out.iter_mut().enumerate() {
        let mean = samples
            .iter()
            .map(|&(_, px)| px[channel] as f64)
            .sum::<f64>()
            / count as f64;

        let keep = |v: u8| (v as f64 - mean).abs() <= threshold as f64;

        // A neighborhood can reject every sample (e.g. a hard 0/255 edge
        // straddling the mean); fall back to the plain average then.
        *value = weighted_average(samples, kernel, channel, keep)
            .or_else(|| weighted_average(samples, kernel, channel, |_| true))
            .expect("neighborhood always contains the center pixel");
    }
    out
}

/// Precomputes the area-filtered version of the whole source image.
pub(crate) fn filter_image(input: &Image, kernel: Kernel3) -> Image {
    filter_with(input, |col, row| filter_pixel(input, col, row, &kernel))
}

/// Precomputes the outlier-rejecting area-filtered version of the whole
/// source image. Per channel, neighbors deviating from the unweighted
/// neighborhood mean by more than `threshold` are excluded before the
/// weighted average.
pub(crate) fn filter_image_adaptive(input: &Image, kernel: Kernel3, threshold: u8) -> Image {
    filter_with(input, |col, row| {
        filter_pixel_adaptive(input, col, row, &kernel, threshold)
    })
}

fn filter_with<F>(input: &Image, filter: F) -> Image
where
    F: Fn(u32, u32) -> [u8; 4] + Sync,
{
    debug_assert_eq!(input.desc().channel_count, ChannelCount::Rgba);

    let width = input.desc().width;
    let row_bytes = input.desc().row_bytes();

    let mut output = Image::new_empty(*input.desc()).expect("descriptor already validated");

    output
        .bytes_mut()
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(row, out_row)| {
            let out_row: &mut [[u8; 4]] = bytemuck::cast_slice_mut(out_row);
            for col in 0..width {
                out_row[col as usize] = filter(col, row as u32);
            }
        });

    output
}
