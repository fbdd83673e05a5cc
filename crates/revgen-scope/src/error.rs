//! Error types for scope generation
//!
//! Two failure classes:
//! - Configuration errors: the scope tree was built wrong (collaborator bug)
//! - Random source errors: the injected source failed, propagated unmodified

use revgen_random::RandomSourceError;

/// Generation failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// Scope configuration is invalid
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Random source failed
    #[error("random source error: {0}")]
    RandomSource(#[from] RandomSourceError),
}

impl GenerateError {
    /// Check if the failure is a configuration error
    #[inline]
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Check if retrying with a different random source could succeed
    ///
    /// Configuration errors are programmer errors and never retryable.
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RandomSource(
                RandomSourceError::Exhausted { .. } | RandomSourceError::OutOfRange { .. }
            )
        )
    }

    /// Name of the scope at fault, for configuration errors
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        match self {
            Self::Configuration(err) => Some(err.scope()),
            Self::RandomSource(_) => None,
        }
    }
}

/// Scope tree was built with invalid content
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// Literal scope has no alternatives to emit
    #[error("literal scope '{scope}' has an empty literal pool")]
    EmptyLiteralPool {
        /// Scope name
        scope: String,
    },

    /// Minimum occurrences exceed maximum occurrences
    #[error("scope '{scope}' has invalid bounds: min {min} > max {max}")]
    InvalidBounds {
        /// Scope name
        scope: String,
        /// Configured minimum
        min: u64,
        /// Configured maximum
        max: u64,
    },

    /// Composite scope has no children to emit
    #[error("composite scope '{scope}' has no children")]
    EmptyComposite {
        /// Scope name
        scope: String,
    },
}

impl ConfigurationError {
    /// Name of the offending scope
    #[must_use]
    pub fn scope(&self) -> &str {
        match self {
            Self::EmptyLiteralPool { scope }
            | Self::InvalidBounds { scope, .. }
            | Self::EmptyComposite { scope } => scope,
        }
    }
}
