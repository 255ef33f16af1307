// Error handling
pub use crate::common::{Error, Result};

// Image types
pub use crate::image::{ChannelCount, Image, ImageDesc, SUPPORTED_EXTENSIONS};

// Geometric mappings
pub use crate::mapping::{
    BilinearQuad, Extent, InverseMap, Lens, PowerSineWarp, Projective, ProjectiveBuilder,
    Rescale, SqrtSineWarp, Tile, Twirl, EDGE_EPSILON,
};

// Matrix math
pub use crate::math::DMat3;

// Resampling
pub use crate::resample::{
    scale_factors, Kernel3, Resample, ResampleMode, DEFAULT_OUTLIER_THRESHOLD,
};
