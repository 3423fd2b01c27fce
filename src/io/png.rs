//! PNG loader: decodes a PNG stream and expands it to an RGBA16 `PixelGrid`.
use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use image::{ImageFormat, ImageReader};
use tracing::debug;

use crate::core::grid::PixelGrid;
use crate::error::{Error, Result};

/// Decode a PNG stream. Any bit depth / color type is expanded to RGBA16;
/// sources without alpha decode as fully opaque.
pub fn decode_png<R: BufRead + Seek>(reader: R) -> Result<PixelGrid> {
    let img = ImageReader::with_format(reader, ImageFormat::Png)
        .decode()
        .map_err(|source| Error::Decode { source })?;

    debug!(
        "Decoded PNG {}x{} ({:?})",
        img.width(),
        img.height(),
        img.color()
    );

    if img.width() == 0 || img.height() == 0 {
        return Err(Error::InvalidDimensions {
            width: img.width(),
            height: img.height(),
        });
    }

    PixelGrid::from_rgba16(img.to_rgba16())
}

/// Open and decode a PNG file. The handle is closed before returning.
pub fn load_png(path: &Path) -> Result<PixelGrid> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let grid = decode_png(BufReader::new(file))?;
    debug!("Loaded {:?}", path);
    Ok(grid)
}
