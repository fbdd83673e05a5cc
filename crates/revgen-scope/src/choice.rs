//! Choice scope
//!
//! Composite counterpart of [`LiteralScope`](crate::LiteralScope): each
//! repetition draws one child by index and lets it generate.

use crate::error::{ConfigurationError, GenerateError};
use crate::repetition::Repetition;
use crate::scope::Scope;
use revgen_random::{draw_index, RandomSource};

/// Random alternation between child scopes
#[derive(Debug)]
pub struct ChoiceScope {
    name: String,
    alternatives: Vec<Box<dyn Scope>>,
    repetition: Repetition,
}

impl ChoiceScope {
    /// Create an empty choice repeating exactly once
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alternatives: Vec::new(),
            repetition: Repetition::once(),
        }
    }

    /// Append an alternative
    pub fn push(&mut self, alternative: impl Scope + 'static) {
        self.alternatives.push(Box::new(alternative));
    }

    /// Append an already boxed alternative
    pub fn push_boxed(&mut self, alternative: Box<dyn Scope>) {
        self.alternatives.push(alternative);
    }

    /// With one more alternative
    #[must_use]
    pub fn with(mut self, alternative: impl Scope + 'static) -> Self {
        self.push(alternative);
        self
    }

    /// With repetition bound
    #[must_use]
    pub fn with_repetition(mut self, repetition: Repetition) -> Self {
        self.repetition = repetition;
        self
    }

    /// Set repetition bound
    pub fn set_repetition(&mut self, repetition: Repetition) {
        self.repetition = repetition;
    }

    /// Alternatives, in insertion order
    #[inline]
    #[must_use]
    pub fn alternatives(&self) -> &[Box<dyn Scope>] {
        &self.alternatives
    }

    /// Repetition bound
    #[inline]
    #[must_use]
    pub fn repetition(&self) -> Repetition {
        self.repetition
    }

    fn validate_self(&self) -> Result<(), ConfigurationError> {
        self.repetition.validate(&self.name)?;
        if self.alternatives.is_empty() && !self.repetition.is_empty() {
            return Err(ConfigurationError::EmptyComposite {
                scope: self.name.clone(),
            });
        }
        Ok(())
    }
}

impl Scope for ChoiceScope {
    fn name(&self) -> &str {
        &self.name
    }

    fn generate(&self, out: &mut String, random: &mut dyn RandomSource) -> Result<(), GenerateError> {
        self.validate_self()?;

        let count = self.repetition.draw_count(random)?;
        tracing::trace!("choice scope '{}' emitting {} repetitions", self.name, count);
        if count == 0 {
            return Ok(());
        }

        for _ in 0..count {
            let index = draw_index(random, self.alternatives.len())?;
            let chosen = &self.alternatives[index];
            tracing::trace!("choice scope '{}' picked '{}'", self.name, chosen.name());
            chosen.generate(out, random)?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        self.validate_self()?;
        self.alternatives.iter().try_for_each(|alternative| alternative.validate())
    }
}
