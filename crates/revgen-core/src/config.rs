//! Generator configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Generator configuration
///
/// Missing fields fall back to [`Default`].
///
/// ```toml
/// seed = 7
/// samples = 10
/// validate_first = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed for batch generation
    pub seed: u64,
    /// Strings produced per batch
    pub samples: usize,
    /// Validate the whole tree before generating
    pub validate_first: bool,
}

impl GeneratorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With seed
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// With sample count
    #[inline]
    #[must_use]
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// With or without up-front tree validation
    #[inline]
    #[must_use]
    pub fn with_validate_first(mut self, validate_first: bool) -> Self {
        self.validate_first = validate_first;
        self
    }

    /// Parse and validate a TOML document
    ///
    /// # Errors
    /// [`ConfigError::Toml`] or [`ConfigError::InvalidValue`].
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    ///
    /// # Errors
    /// [`ConfigError::Json`] or [`ConfigError::InvalidValue`].
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.toml` or `.json` file
    ///
    /// # Errors
    /// I/O, parse, unsupported-extension or validation errors.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        tracing::debug!("loading generator config from {}", path.display());

        match extension.as_str() {
            "toml" => Self::from_toml_str(&input),
            "json" => Self::from_json_str(&input),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Check constraints serde cannot express
    ///
    /// # Errors
    /// [`ConfigError::InvalidValue`] if `samples` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples == 0 {
            return Err(ConfigError::InvalidValue {
                field: "samples",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            samples: 1,
            validate_first: true,
        }
    }
}
