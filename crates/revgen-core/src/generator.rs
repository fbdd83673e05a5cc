//! Generator facade
//!
//! Owns a root scope and a configuration, and adds what the raw
//! [`Scope::generate`] contract leaves to callers:
//! - Atomic output: generation runs into a scratch buffer, committed on success
//! - Reproducible batches from the configured seed
//! - Optional whole-tree validation before any draw

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use revgen_random::{RandomSource, SeededRandom};
use revgen_scope::Scope;

/// Configured string generator over a scope tree
#[derive(Debug)]
pub struct Generator {
    root: Box<dyn Scope>,
    config: GeneratorConfig,
}

impl Generator {
    /// Create generator with default configuration
    #[must_use]
    pub fn new(root: impl Scope + 'static) -> Self {
        Self::with_config(root, GeneratorConfig::default())
    }

    /// Create generator with explicit configuration
    #[must_use]
    pub fn with_config(root: impl Scope + 'static, config: GeneratorConfig) -> Self {
        Self {
            root: Box::new(root),
            config,
        }
    }

    /// Create generator from an already boxed root
    #[must_use]
    pub fn from_boxed(root: Box<dyn Scope>, config: GeneratorConfig) -> Self {
        Self { root, config }
    }

    /// Root scope
    #[inline]
    #[must_use]
    pub fn root(&self) -> &dyn Scope {
        self.root.as_ref()
    }

    /// Configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Validate the whole scope tree
    ///
    /// The batch size is only checked by [`samples`](Self::samples), the one
    /// call that reads it.
    ///
    /// # Errors
    /// The first configuration problem found in the tree.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        self.root
            .validate()
            .map_err(|err| GeneratorError::Generate(err.into()))
    }

    /// Generate one string
    ///
    /// # Errors
    /// Any configuration or random source failure.
    pub fn generate(&self, random: &mut dyn RandomSource) -> Result<String, GeneratorError> {
        if self.config.validate_first {
            self.validate()?;
        }

        let mut out = String::new();
        self.root.generate(&mut out, random)?;
        tracing::debug!("generated {} bytes from scope '{}'", out.len(), self.root.name());
        Ok(out)
    }

    /// Append one generated string to `out`, all or nothing
    ///
    /// On failure `out` is left exactly as it was.
    ///
    /// # Errors
    /// Any configuration or random source failure.
    pub fn append(&self, out: &mut String, random: &mut dyn RandomSource) -> Result<(), GeneratorError> {
        match self.generate(random) {
            Ok(generated) => {
                out.push_str(&generated);
                Ok(())
            }
            Err(err) => {
                tracing::warn!("discarding partial output of scope '{}': {}", self.root.name(), err);
                Err(err)
            }
        }
    }

    /// Generate `config.samples` strings from a source seeded with `config.seed`
    ///
    /// The same configuration always yields the same batch.
    ///
    /// # Errors
    /// The first failure; no partial batch is returned.
    pub fn samples(&self) -> Result<Vec<String>, GeneratorError> {
        self.config.validate()?;
        let mut random = SeededRandom::new(self.config.seed);
        self.samples_with(&mut random, self.config.samples)
    }

    /// Generate `count` strings from the given source
    ///
    /// # Errors
    /// The first failure; no partial batch is returned.
    pub fn samples_with(
        &self,
        random: &mut dyn RandomSource,
        count: usize,
    ) -> Result<Vec<String>, GeneratorError> {
        tracing::info!(
            "generating {} samples from scope '{}'",
            count,
            self.root.name()
        );

        if self.config.validate_first {
            self.validate()?;
        }

        let mut batch = Vec::with_capacity(count);
        for _ in 0..count {
            let mut out = String::new();
            self.root.generate(&mut out, random)?;
            batch.push(out);
        }
        Ok(batch)
    }
}
