//! Configuration error types
//!
//! Matching itself never fails: bad input degrades to "no match". Errors only
//! surface when thresholds are loaded from the environment or from JSON.

use thiserror::Error;

/// Errors that can occur while loading or validating thresholds
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Threshold is NaN, infinite, or negative
    #[error("invalid threshold '{name}': {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    /// Environment variable could not be parsed as a number
    #[error("cannot parse {name}='{value}' as a number")]
    Parse { name: &'static str, value: String },

    /// Malformed JSON configuration
    #[error("invalid threshold json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
