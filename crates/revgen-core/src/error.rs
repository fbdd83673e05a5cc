//! Error types for revgen Core
//!
//! Provides error handling for:
//! - Generation failures (configuration and random source)
//! - Configuration loading and validation

use revgen_scope::GenerateError;
use std::path::PathBuf;

/// Main generator error type
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Scope tree failed to generate
    #[error("generation failed: {0}")]
    Generate(#[from] GenerateError),

    /// Generator configuration is unusable
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl GeneratorError {
    /// Check if retrying with another random source could succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Generate(err) => err.is_retryable(),
            Self::Config(_) => false,
        }
    }
}

/// Configuration loading and validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema error
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax or schema error
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension names no known format
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// Values parsed but violate a constraint
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue {
        /// Offending field
        field: &'static str,
        /// What is wrong
        reason: String,
    },
}
