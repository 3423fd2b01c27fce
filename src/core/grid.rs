//! `PixelGrid`: an owned RGBA16 raster backed by an `ndarray` of shape
//! `(height, width, 4)`. The raw layout matches `image::Rgba<u16>` buffers so
//! conversions to and from the codec layer are plain copies.
use image::{ImageBuffer, Rgba, RgbaImage};
use ndarray::{Array3, ArrayView3, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Per-pixel `[r, g, b, a]`, each channel in `0..=u16::MAX`.
pub type ChannelSample = [u16; 4];

pub const CHANNELS: usize = 4;
pub const MAX_CHANNEL: u16 = u16::MAX;

/// Target size for resampling and compositing. Defaults to 2048x2048.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(2048, 2048)
    }
}

impl std::fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    data: Array3<u16>,
}

impl PixelGrid {
    /// Transparent black grid.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::from_pixel(width, height, [0; CHANNELS])
    }

    pub fn from_pixel(width: u32, height: u32, pixel: ChannelSample) -> Result<Self> {
        CanvasSize::new(width, height).validate()?;
        let mut data = Array3::<u16>::zeros((height as usize, width as usize, CHANNELS));
        for mut lane in data.lanes_mut(Axis(2)) {
            lane.assign(&ndarray::aview1(&pixel));
        }
        Ok(Self { data })
    }

    /// Wraps an interleaved RGBA16 buffer in row-major order.
    pub fn from_raw(width: u32, height: u32, raw: Vec<u16>) -> Result<Self> {
        CanvasSize::new(width, height).validate()?;
        let expected = width as usize * height as usize * CHANNELS;
        if raw.len() != expected {
            return Err(Error::Processing(format!(
                "RGBA16 buffer for {}x{} needs {} samples, got {}",
                width,
                height,
                expected,
                raw.len()
            )));
        }
        let data = Array3::from_shape_vec((height as usize, width as usize, CHANNELS), raw)
            .map_err(Error::external)?;
        Ok(Self { data })
    }

    pub(crate) fn from_array(data: Array3<u16>) -> Self {
        debug_assert_eq!(data.dim().2, CHANNELS);
        Self { data }
    }

    pub fn width(&self) -> u32 {
        self.data.dim().1 as u32
    }

    pub fn height(&self) -> u32 {
        self.data.dim().0 as u32
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn size(&self) -> CanvasSize {
        CanvasSize::new(self.width(), self.height())
    }

    pub fn get(&self, x: u32, y: u32) -> Option<ChannelSample> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.pixel(x, y))
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    pub fn pixel(&self, x: u32, y: u32) -> ChannelSample {
        let (x, y) = (x as usize, y as usize);
        [
            self.data[[y, x, 0]],
            self.data[[y, x, 1]],
            self.data[[y, x, 2]],
            self.data[[y, x, 3]],
        ]
    }

    pub fn view(&self) -> ArrayView3<'_, u16> {
        self.data.view()
    }

    /// Interleaved samples in row-major order, whatever the storage layout.
    pub fn samples(&self) -> impl Iterator<Item = u16> + '_ {
        self.data.iter().copied()
    }

    pub fn into_raw(self) -> Vec<u16> {
        self.data.as_standard_layout().into_owned().into_raw_vec()
    }

    pub fn pixels(&self) -> impl Iterator<Item = ChannelSample> + '_ {
        self.data
            .lanes(Axis(2))
            .into_iter()
            .map(|c| [c[0], c[1], c[2], c[3]])
    }

    pub fn to_rgba16(&self) -> Result<ImageBuffer<Rgba<u16>, Vec<u16>>> {
        let raw: Vec<u16> = self.samples().collect();
        ImageBuffer::from_raw(self.width(), self.height(), raw)
            .ok_or_else(|| self.layout_error("RGBA16"))
    }

    pub fn to_rgba8(&self) -> Result<RgbaImage> {
        let raw: Vec<u8> = self.samples().map(to_u8).collect();
        RgbaImage::from_raw(self.width(), self.height(), raw)
            .ok_or_else(|| self.layout_error("RGBA8"))
    }

    /// Build a grid from a decoded RGBA16 image.
    pub fn from_rgba16(img: ImageBuffer<Rgba<u16>, Vec<u16>>) -> Result<Self> {
        let (width, height) = img.dimensions();
        Self::from_raw(width, height, img.into_raw())
    }

    fn layout_error(&self, target: &str) -> Error {
        Error::Processing(format!(
            "{}x{} grid does not fit an {} buffer",
            self.width(),
            self.height(),
            target
        ))
    }
}

/// Rounded 16-bit to 8-bit scaling.
pub fn to_u8(v: u16) -> u8 {
    ((v as u32 * 255 + 32767) / 65535) as u8
}

/// Exact 8-bit to 16-bit expansion (`v * 257`).
pub fn to_u16(v: u8) -> u16 {
    v as u16 * 257
}
