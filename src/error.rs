//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Wraps file I/O, PNG decode/encode and resampler failures, and provides
//! semantic variants for grid dimension problems.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG decode error: {source}")]
    Decode {
        #[source]
        source: image::ImageError,
    },

    #[error("PNG encode error: {source}")]
    Encode {
        #[source]
        source: image::ImageError,
    },

    #[error("Dimensions must be greater than 0, got: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error(
        "Grid dimensions differ: foreground {}x{}, background {}x{}",
        .foreground.0, .foreground.1, .background.0, .background.1
    )]
    DimensionMismatch {
        foreground: (u32, u32),
        background: (u32, u32),
    },

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
