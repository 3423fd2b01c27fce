use serde::{Deserialize, Serialize};

use crate::core::grid::CanvasSize;
use crate::types::{AlphaSource, BitDepth, PngCompression, ResampleFilter};

/// Compositing parameters suitable for config files and CLI overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeParams {
    /// Size both inputs are resampled to; also the output size
    pub canvas: CanvasSize,
    pub filter: ResampleFilter,
    pub alpha_source: AlphaSource,
    /// Channel depth of the encoded PNG
    pub bit_depth: BitDepth,
    pub compression: PngCompression,
    /// Split the per-pixel merge across the rayon pool
    pub parallel: bool,
}

impl Default for CompositeParams {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            filter: ResampleFilter::Bicubic,
            alpha_source: AlphaSource::Alpha,
            bit_depth: BitDepth::U8,
            compression: PngCompression::Best,
            parallel: false,
        }
    }
}
