//! Station catalog error types.

use std::path::PathBuf;

use crate::domain::StationId;

/// Errors that can occur when building a station catalog.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Failed to read the station file
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse station JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The same identifier appears twice
    #[error("duplicate station id: {0}")]
    DuplicateId(StationId),

    /// The file contained no stations
    #[error("station list is empty")]
    Empty,
}
