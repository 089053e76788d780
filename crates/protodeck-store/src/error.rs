//! Store error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the project store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The uploaded or imported payload was not a valid project file
    #[error("invalid project file: {0}")]
    InvalidFile(#[from] serde_json::Error),

    /// Reading an uploaded file from disk failed
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persistence slot is unreachable
    #[error("storage backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Filesystem error while writing a download
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
