use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::{FilterType, PngEncoder};
use tracing::info;

use crate::core::grid::PixelGrid;
use crate::error::{Error, Result};
use crate::types::{BitDepth, PngCompression};

pub fn encode_png<W: Write>(
    canvas: &PixelGrid,
    writer: W,
    bit_depth: BitDepth,
    compression: PngCompression,
) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(writer, compression.into(), FilterType::Adaptive);
    match bit_depth {
        BitDepth::U8 => canvas.to_rgba8()?.write_with_encoder(encoder),
        BitDepth::U16 => canvas.to_rgba16()?.write_with_encoder(encoder),
    }
    .map_err(|source| Error::Encode { source })
}

/// Write into a temporary file beside `output` and move it into place only
/// once `fill` and the flush succeed. On failure `output` is left untouched.
fn replace_file<F>(output: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let dir = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut builder = tempfile::Builder::new();
    builder.prefix(".alphamerge-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir).map_err(|e| Error::io(dir, e))?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        fill(&mut writer)?;
        writer.flush().map_err(|e| Error::io(output, e))?;
    }

    tmp.persist(output)
        .map_err(|e| Error::io(output, e.error))?;
    Ok(())
}

/// Write `canvas` as an RGBA PNG, creating missing parent directories first.
/// An existing file at `output` is only replaced once encoding has finished.
pub fn write_png(
    canvas: &PixelGrid,
    output: &Path,
    bit_depth: BitDepth,
    compression: PngCompression,
) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    replace_file(output, |writer| {
        encode_png(canvas, writer, bit_depth, compression)
    })?;

    info!(
        "Wrote {}x{} PNG ({:?}, {:?}) to {:?}",
        canvas.width(),
        canvas.height(),
        bit_depth,
        compression,
        output
    );
    Ok(())
}
