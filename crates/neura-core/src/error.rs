//! Core error types for neura-core.
//!
//! Remote failures are the only errors the day model ever sees, and they are
//! absorbed by the sync layer. The rest of the hierarchy covers configuration
//! and the usual IO/serialization plumbing.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for neura-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Remote source errors
    #[error("Remote error: {0}")]
    Remote(#[from] RemoteError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Home/config directory could not be prepared
    #[error("Cannot prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Everything that makes the remote source "unavailable".
///
/// Callers treat every variant the same way: log it and fall back.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// Connection refused, DNS failure, timeout...
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote answered with a non-2xx status.
    #[error("{method} {path} failed with status {status}")]
    Status {
        method: String,
        path: String,
        status: u16,
    },

    /// The body did not match the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Remote calls are switched off in the configuration.
    #[error("Remote source disabled")]
    Disabled,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_route() {
        let err = RemoteError::Status {
            method: "GET".into(),
            path: "/api/tasks".into(),
            status: 503,
        };
        assert_eq!(err.to_string(), "GET /api/tasks failed with status 503");
    }

    #[test]
    fn remote_error_converts_into_core_error() {
        let core: CoreError = RemoteError::Disabled.into();
        assert!(matches!(core, CoreError::Remote(RemoteError::Disabled)));
        assert_eq!(core.to_string(), "Remote error: Remote source disabled");
    }
}
