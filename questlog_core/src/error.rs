//! Error types for the questlog_core library.
//!
//! Evaluation itself never fails; only loading snapshots and configuration
//! (and parsing user input at the edges) produce these errors.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for questlog_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// An instant or window name that could not be parsed
    #[error("Invalid time input: {0}")]
    Time(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
