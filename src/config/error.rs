//! Error types for loading and saving the configuration file.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration file operations.
///
/// A missing file is not an error; it loads as an empty record.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a valid configuration record.
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        /// Path to the config file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize the record to JSON.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Failed to create the config directory or write the file.
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path that could not be created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
