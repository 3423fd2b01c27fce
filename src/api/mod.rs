//! High-level, ergonomic library API: composite two PNG files into a third,
//! or into an in-memory grid / PNG byte buffer. Prefer these entrypoints over
//! the low-level processing modules when integrating alphamerge.
use std::fs;
use std::io::Cursor;
use std::path::Path;

use tracing::info;

use crate::core::grid::PixelGrid;
use crate::core::params::CompositeParams;
use crate::core::processing::pipeline::run_pipeline;
use crate::error::{Error, Result};
use crate::io::png::load_png;
use crate::io::writers::png::{encode_png, write_png};

/// Load `CompositeParams` from a JSON file. Missing fields take their defaults.
pub fn load_params(path: &Path) -> Result<CompositeParams> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| {
        Error::Processing(format!("invalid parameters in {}: {}", path.display(), e))
    })
}

/// Load both inputs and build the composited canvas in memory (no disk output).
///
/// The background is loaded first, so a missing background is reported before
/// the foreground is touched.
pub fn composite_to_buffer(
    background: &Path,
    foreground: &Path,
    params: &CompositeParams,
) -> Result<PixelGrid> {
    let bg = load_png(background)?;
    info!("Background {:?}: {}x{}", background, bg.width(), bg.height());
    let fg = load_png(foreground)?;
    info!("Foreground {:?}: {}x{}", foreground, fg.width(), fg.height());

    run_pipeline(&fg, &bg, params)
}

/// Composite to an encoded PNG held in memory.
pub fn composite_to_png_bytes(
    background: &Path,
    foreground: &Path,
    params: &CompositeParams,
) -> Result<Vec<u8>> {
    let canvas = composite_to_buffer(background, foreground, params)?;
    let mut out = Cursor::new(Vec::new());
    encode_png(&canvas, &mut out, params.bit_depth, params.compression)?;
    Ok(out.into_inner())
}

/// Composite `foreground`'s color with `background`'s alpha and write the PNG
/// to `output`, creating its parent directories if needed. Nothing is written
/// unless both inputs decode and the pipeline succeeds.
pub fn composite_files(
    background: &Path,
    foreground: &Path,
    output: &Path,
    params: &CompositeParams,
) -> Result<()> {
    let canvas = composite_to_buffer(background, foreground, params)?;
    write_png(&canvas, output, params.bit_depth, params.compression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::CanvasSize;
    use crate::types::{AlphaSource, ResampleFilter};

    #[test]
    fn params_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        fs::write(
            &path,
            r#"{ "filter": "lanczos3", "alpha_source": "luma", "canvas": { "width": 8, "height": 8 } }"#,
        )
        .unwrap();
        let params = load_params(&path).unwrap();
        assert_eq!(params.filter, ResampleFilter::Lanczos3);
        assert_eq!(params.alpha_source, AlphaSource::Luma);
        assert_eq!(params.canvas, CanvasSize::new(8, 8));
    }

    #[test]
    fn malformed_params_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        fs::write(&path, "{ filter: ").unwrap();
        assert!(matches!(load_params(&path), Err(Error::Processing(_))));
    }

    #[test]
    fn missing_params_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_params(&dir.path().join("absent.json")),
            Err(Error::Io { .. })
        ));
    }
}
