use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot read config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot serialize report: {0}")]
    Report(#[from] serde_json::Error),

    #[error(transparent)]
    Iconset(#[from] iconset::Error),
}
