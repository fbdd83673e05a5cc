//! Scope trait
//!
//! Provides the [`Scope`] capability every node of a pattern tree implements.

use crate::error::{ConfigurationError, GenerateError};
use revgen_random::RandomSource;

/// A node that appends generated content to a result buffer
///
/// # Contract
/// - `generate` only appends to `out`; it never reads or truncates it.
/// - The random source is borrowed for the call and never retained, so one
///   tree can serve many independent generations.
/// - On failure `out` may hold a prefix of the contribution. Callers needing
///   atomicity generate into a scratch buffer.
pub trait Scope: Send + Sync + std::fmt::Debug {
    /// Scope name (for diagnostics)
    fn name(&self) -> &str;

    /// Append this scope's contribution to `out`
    ///
    /// # Errors
    /// - [`GenerateError::Configuration`] if the scope has nothing valid to emit
    /// - [`GenerateError::RandomSource`] if the source fails
    fn generate(&self, out: &mut String, random: &mut dyn RandomSource) -> Result<(), GenerateError>;

    /// Check the configuration rules `generate` enforces, without drawing
    ///
    /// # Errors
    /// The first [`ConfigurationError`] found, depth-first.
    fn validate(&self) -> Result<(), ConfigurationError> {
        Ok(())
    }
}

impl<S: Scope + ?Sized> Scope for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn generate(&self, out: &mut String, random: &mut dyn RandomSource) -> Result<(), GenerateError> {
        (**self).generate(out, random)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        (**self).validate()
    }
}
