mod area;
mod bilinear;
mod cpu;
mod scale;


pub use area::Kernel3;
pub use scale::scale_factors;

use crate::common::{Error, Result};
use crate::image::{ChannelCount, Image};
use crate::mapping::{Extent, InverseMap};

/// Default deviation (on the 0-255 scale) beyond which the adaptive area
/// filter rejects a neighborhood sample as an outlier.
pub const DEFAULT_OUTLIER_THRESHOLD: u8 = 65;

/// Per-pixel filtering policy of a resample pass.
///
/// The reduced modes always take a single branch of the full decision table
/// and exist for comparison; `Auto` applies the complete policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ResampleMode {
    /// Nearest-neighbor copy everywhere, no filtering.
    General,
    /// Area filtering where an axis minifies, copy elsewhere.
    Area,
    /// Outlier-rejecting area filtering where an axis minifies, copy
    /// elsewhere.
    AdaptiveArea,
    /// Bilinear interpolation where an axis magnifies, copy elsewhere.
    Bilinear,
    /// Full policy: bilinear for magnification, adaptive area filtering for
    /// minification, bilinear over the adaptive-filtered source for the
    /// mixed case.
    #[default]
    Auto,
}

/// Parameters for an inverse-mapping resample pass.
#[derive(Debug, Clone, Copy)]
pub struct Resample {
    /// The per-pixel filtering policy.
    pub mode: ResampleMode,
    /// Area-filter kernel weights.
    pub kernel: Kernel3,
    /// Outlier threshold for the adaptive area filter.
    pub threshold: u8,
}

impl Default for Resample {
    fn default() -> Self {
        Self {
            mode: ResampleMode::default(),
            kernel: Kernel3::default(),
            threshold: DEFAULT_OUTLIER_THRESHOLD,
        }
    }
}

impl Resample {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the mode.
    pub fn mode(mut self, mode: ResampleMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder method to set the area-filter kernel.
    pub fn kernel(mut self, kernel: Kernel3) -> Self {
        self.kernel = kernel;
        self
    }

    /// Builder method to set the adaptive outlier threshold.
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Resamples `input` through the inverse mapping into `output`.
    ///
    /// Both images must be RGBA and the output extent must match the canvas
    /// the mapping was fitted for. Destination pixels whose mapped source
    /// coordinate falls outside the source raster keep the transparent
    /// black fill.
    pub fn apply(
        &self,
        map: &dyn InverseMap,
        input: &Image,
        output: &mut Image,
    ) -> Result<()> {
        if input.desc().channel_count != ChannelCount::Rgba
            || output.desc().channel_count != ChannelCount::Rgba
        {
            return Err(Error::UnsupportedColorType(format!(
                "resample needs RGBA buffers, got {} -> {}",
                input.desc().channel_count,
                output.desc().channel_count
            )));
        }

        let out_extent = Extent::from(output.desc());
        if out_extent != map.output_extent() {
            return Err(Error::InvalidDimensions(format!(
                "output extent {} does not match the mapping canvas {}",
                out_extent,
                map.output_extent()
            )));
        }

        tracing::debug!(
            mode = ?self.mode,
            input = %input.desc(),
            output = %output.desc(),
            "resampling"
        );

        cpu::apply(self, map, input, output);

        Ok(())
    }
}
