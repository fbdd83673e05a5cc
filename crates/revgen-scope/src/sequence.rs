//! Sequence scope
//!
//! Composite scope emitting its children in order, the whole run repeated
//! per its [`Repetition`].

use crate::error::{ConfigurationError, GenerateError};
use crate::repetition::Repetition;
use crate::scope::Scope;
use revgen_random::RandomSource;

/// Ordered concatenation of child scopes
#[derive(Debug)]
pub struct SequenceScope {
    name: String,
    children: Vec<Box<dyn Scope>>,
    repetition: Repetition,
}

impl SequenceScope {
    /// Create an empty sequence repeating exactly once
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            repetition: Repetition::once(),
        }
    }

    /// Append a child
    pub fn push(&mut self, child: impl Scope + 'static) {
        self.children.push(Box::new(child));
    }

    /// Append an already boxed child
    pub fn push_boxed(&mut self, child: Box<dyn Scope>) {
        self.children.push(child);
    }

    /// With one more child
    #[must_use]
    pub fn with(mut self, child: impl Scope + 'static) -> Self {
        self.push(child);
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

    /// Children, in order
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[Box<dyn Scope>] {
        &self.children
    }

    /// Repetition bound
    #[inline]
    #[must_use]
    pub fn repetition(&self) -> Repetition {
        self.repetition
    }

    fn validate_self(&self) -> Result<(), ConfigurationError> {
        self.repetition.validate(&self.name)?;
        if self.children.is_empty() && !self.repetition.is_empty() {
            return Err(ConfigurationError::EmptyComposite {
                scope: self.name.clone(),
            });
        }
        Ok(())
    }
}

impl Scope for SequenceScope {
    fn name(&self) -> &str {
        &self.name
    }

    fn generate(&self, out: &mut String, random: &mut dyn RandomSource) -> Result<(), GenerateError> {
        self.validate_self()?;

        let count = self.repetition.draw_count(random)?;
        tracing::trace!("sequence scope '{}' emitting {} repetitions", self.name, count);
        for _ in 0..count {
            for child in &self.children {
                child.generate(out, random)?;
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        self.validate_self()?;
        self.children.iter().try_for_each(|child| child.validate())
    }
}
