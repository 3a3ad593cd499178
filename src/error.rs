//! Error types for the phone extractor.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Candidate-level failures are domain errors (see `domain::ValidationError`) and never
//! reach this layer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading sources or writing results.
#[derive(Error, Debug)]
pub enum SourceError {
    /// A source could not be read or decoded as UTF-8
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard input could not be read
    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    /// Results could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A background task panicked or was cancelled
    #[error("Task join error: {0}")]
    Join(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with SourceError
pub type SourceResult<T> = Result<T, SourceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
