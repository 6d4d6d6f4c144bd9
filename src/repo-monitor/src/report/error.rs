//! Report error types.

use thiserror::Error;

/// Errors that can occur while writing or reading report artifacts.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Filesystem error.
    #[error("Failed to write report '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding error.
    #[error("Invalid JSON report '{path}': {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
