use std::path::PathBuf;

use thiserror::Error;

use crate::api::ApiError;
use crate::ffmpeg::EncoderError;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed URL '{url}': {source}")]
    Format {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Download failed: {0}")]
    Download(#[from] ApiError),

    #[error("Conversion failed: {0}")]
    Encoder(#[from] EncoderError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of a best-effort delete. The public `remove_*` helpers collapse
/// this into a `bool`.
#[derive(Debug, Error)]
pub enum DeleteError {
    #[error("No file has been produced yet")]
    NothingToDelete,

    #[error("File does not exist: {0}")]
    Missing(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to delete {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MediaError>;
