//! Shared option enums used across alphamerge.
//! Includes `ResampleFilter`, `AlphaSource`, `BitDepth` and `PngCompression`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Resampling kernel used to bring both inputs to the canvas size.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ResampleFilter {
    /// 4x4 cubic convolution (a = -0.5) with replicated borders
    #[default]
    Bicubic,
    /// Area-aware Lanczos3 convolution via `fast_image_resize`
    Lanczos3,
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResampleFilter::Bicubic => write!(f, "Bicubic"),
            ResampleFilter::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}

/// Where the composited alpha comes from in the background image.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AlphaSource {
    /// The background's decoded alpha channel. Opaque backgrounds give opaque output.
    #[default]
    Alpha,
    /// Rec.601 luma of the background's color channels; its alpha is ignored.
    Luma,
}

impl std::fmt::Display for AlphaSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlphaSource::Alpha => write!(f, "Alpha"),
            AlphaSource::Luma => write!(f, "Luma"),
        }
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BitDepth {
    #[default]
    U8,
    U16,
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PngCompression {
    #[default]
    Best,
    Default,
    Fast,
}

impl From<PngCompression> for image::codecs::png::CompressionType {
    fn from(value: PngCompression) -> Self {
        match value {
            PngCompression::Best => image::codecs::png::CompressionType::Best,
            PngCompression::Default => image::codecs::png::CompressionType::Default,
            PngCompression::Fast => image::codecs::png::CompressionType::Fast,
        }
    }
}
