//! Literal scope
//!
//! Leaf scope holding an ordered pool of literal alternatives. Each
//! repetition draws one alternative by index and appends it.

use crate::error::{ConfigurationError, GenerateError};
use crate::repetition::Repetition;
use crate::scope::Scope;
use revgen_random::{draw_index, RandomSource};

/// Leaf scope emitting randomly chosen literals
///
/// Duplicates are allowed and weight an alternative. With the default bound
/// (exactly once) a single-literal scope emits that literal verbatim.
///
/// # Example
///
/// ```rust
/// use revgen_scope::{LiteralScope, Scope};
/// use revgen_random::ScriptedRandom;
///
/// let scope = LiteralScope::new("greeting")
///     .with_literals(["hello", "hi"])
///     .with_occurrences(2, 2);
///
/// let mut out = String::new();
/// scope.generate(&mut out, &mut ScriptedRandom::new([1, 0])).unwrap();
/// assert_eq!(out, "hihello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralScope {
    name: String,
    literals: Vec<String>,
    repetition: Repetition,
}

impl LiteralScope {
    /// Create an empty literal scope repeating exactly once
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            literals: Vec::new(),
            repetition: Repetition::once(),
        }
    }

    /// Append one alternative to the pool
    pub fn add_literal(&mut self, literal: impl Into<String>) {
        self.literals.push(literal.into());
    }

    /// Set the minimum number of repetitions
    pub fn set_min_occurrences(&mut self, min: u64) {
        self.repetition.min = min;
    }

    /// Set the maximum number of repetitions
    pub fn set_max_occurrences(&mut self, max: u64) {
        self.repetition.max = max;
    }

    /// Set both repetition bounds
    pub fn set_repetition(&mut self, repetition: Repetition) {
        self.repetition = repetition;
    }

    /// With one more alternative
    #[must_use]
    pub fn with_literal(mut self, literal: impl Into<String>) -> Self {
        self.add_literal(literal);
        self
    }

    /// With several more alternatives, in order
    #[must_use]
    pub fn with_literals<I, S>(mut self, literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.literals.extend(literals.into_iter().map(Into::into));
        self
    }

    /// With repetition bounds
    #[must_use]
    pub fn with_occurrences(mut self, min: u64, max: u64) -> Self {
        self.repetition = Repetition::range(min, max);
        self
    }

    /// Alternatives, in insertion order
    #[inline]
    #[must_use]
    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    /// Minimum repetitions
    #[inline]
    #[must_use]
    pub fn min_occurrences(&self) -> u64 {
        self.repetition.min
    }

    /// Maximum repetitions
    #[inline]
    #[must_use]
    pub fn max_occurrences(&self) -> u64 {
        self.repetition.max
    }

    /// Repetition bound
    #[inline]
    #[must_use]
    pub fn repetition(&self) -> Repetition {
        self.repetition
    }

    /// Shortest and longest alternative length in bytes, if any
    #[must_use]
    pub fn literal_len_bounds(&self) -> Option<(usize, usize)> {
        let shortest = self.literals.iter().map(String::len).min()?;
        let longest = self.literals.iter().map(String::len).max()?;
        Some((shortest, longest))
    }
}

impl Scope for LiteralScope {
    fn name(&self) -> &str {
        &self.name
    }

    fn generate(&self, out: &mut String, random: &mut dyn RandomSource) -> Result<(), GenerateError> {
        self.validate()?;

        let count = self.repetition.draw_count(random)?;
        tracing::trace!("literal scope '{}' emitting {} repetitions", self.name, count);
        if count == 0 {
            return Ok(());
        }

        // validate() guarantees a non-empty pool once max > 0
        for _ in 0..count {
            let index = draw_index(random, self.literals.len())?;
            out.push_str(&self.literals[index]);
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        self.repetition.validate(&self.name)?;
        if self.literals.is_empty() && !self.repetition.is_empty() {
            return Err(ConfigurationError::EmptyLiteralPool {
                scope: self.name.clone(),
            });
        }
        Ok(())
    }
}
