use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input file not found: {}", .path.display())]
    MissingInput { path: PathBuf },

    #[error("Output path {} is an existing directory", .path.display())]
    OutputIsDirectory { path: PathBuf },

    #[error(transparent)]
    Composite(#[from] alphamerge::Error),
}
