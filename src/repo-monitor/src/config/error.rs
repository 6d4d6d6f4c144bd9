//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading the team configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON content.
    #[error("Failed to parse team configuration in '{path}': {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file does not exist.
    #[error("Config file not found at {path}")]
    MissingFile { path: String },
}
