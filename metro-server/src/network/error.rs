//! Dataset loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading a network dataset.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Dataset file could not be read
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset is not valid JSON or has the wrong top-level shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// No usable station records survived loading
    #[error("dataset contains no usable stations")]
    NoStations,
}
