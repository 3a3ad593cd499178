//! Configuration management for the phone extractor.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured if present. Command-line flags
//! are applied on top of the loaded values by the binary.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;
use std::str::FromStr;

/// What to do when one of several input sources cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnreadablePolicy {
    /// Log the failure and treat the source as empty.
    #[default]
    Skip,

    /// Fail the whole run.
    Abort,
}

impl FromStr for UnreadablePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "abort" => Ok(Self::Abort),
            other => Err(format!("Must be 'skip' or 'abort', got: {}", other)),
        }
    }
}

impl fmt::Display for UnreadablePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Abort => write!(f, "abort"),
        }
    }
}

/// Configuration for the phone extractor.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of files read at the same time (default: 16)
    pub max_concurrent_reads: usize,

    /// Policy for sources that cannot be read (default: skip)
    pub on_unreadable: UnreadablePolicy,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONE_EXTRACTOR_MAX_CONCURRENT_READS`: Files read concurrently (default: 16)
    /// - `PHONE_EXTRACTOR_ON_UNREADABLE`: `skip` or `abort` (default: skip)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let max_concurrent_reads = Self::parse_env_usize("PHONE_EXTRACTOR_MAX_CONCURRENT_READS", 16)?;
        if max_concurrent_reads == 0 {
            return Err(ConfigError::InvalidValue {
                var: "PHONE_EXTRACTOR_MAX_CONCURRENT_READS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let on_unreadable = match env::var("PHONE_EXTRACTOR_ON_UNREADABLE") {
            Ok(val) => val
                .parse::<UnreadablePolicy>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "PHONE_EXTRACTOR_ON_UNREADABLE".to_string(),
                    reason,
                })?,
            Err(_) => UnreadablePolicy::default(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            max_concurrent_reads,
            on_unreadable,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_concurrent_reads: 16,
            on_unreadable: UnreadablePolicy::Skip,
            log_level: "warn".to_string(),
        }
    }
}
