//! Error types for frax-ui

use thiserror::Error;

/// Errors that can occur while reading or writing preferences
#[derive(Debug, Error)]
pub enum PrefsError {
    /// I/O error while touching the preference file
    #[error("I/O error: {0}")]
    Io(String),

    /// The preference file could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The platform reports no per-user configuration directory
    #[error("No configuration directory available")]
    NoConfigDir,
}

impl From<std::io::Error> for PrefsError {
    fn from(err: std::io::Error) -> Self {
        PrefsError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PrefsError {
    fn from(err: serde_json::Error) -> Self {
        PrefsError::Serialization(err.to_string())
    }
}
