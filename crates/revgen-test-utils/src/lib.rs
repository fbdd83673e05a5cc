//! Testing utilities for revgen workspace
//!
//! Shared test helpers, fixtures, and a call-counting random source wrapper.

#![allow(missing_docs)]

use revgen_random::{RandomSource, RandomSourceError};
use revgen_scope::{GenerateError, LiteralScope, Scope};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test subscriber honouring `RUST_LOG`; safe to call repeatedly
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Wraps any source and records the arguments of every `generate` call
#[derive(Debug)]
pub struct CountingRandom<R> {
    inner: R,
    calls: Vec<(u64, u64)>,
}

impl<R: RandomSource> CountingRandom<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[(u64, u64)] {
        &self.calls
    }

    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: RandomSource> RandomSource for CountingRandom<R> {
    fn generate(&mut self, low: u64, high: u64) -> Result<u64, RandomSourceError> {
        self.calls.push((low, high));
        self.inner.generate(low, high)
    }

    fn seed(&mut self, value: u64) {
        self.inner.seed(value);
    }

    fn max(&self) -> u64 {
        self.inner.max()
    }
}

pub fn single_literal(literal: &str) -> LiteralScope {
    LiteralScope::new(format!("literal:{literal}")).with_literal(literal)
}

pub fn literal_pool(name: &str, literals: &[&str], min: u64, max: u64) -> LiteralScope {
    LiteralScope::new(name)
        .with_literals(literals.iter().copied())
        .with_occurrences(min, max)
}

pub fn digits(min: u64, max: u64) -> LiteralScope {
    literal_pool("digits", &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"], min, max)
}

/// Generate into a fresh buffer
pub fn generate_string(scope: &dyn Scope, random: &mut dyn RandomSource) -> Result<String, GenerateError> {
    let mut out = String::new();
    scope.generate(&mut out, random)?;
    Ok(out)
}

/// Number of repetitions in `output` when every literal is `width` bytes wide
pub fn repetitions_of_width(output: &str, width: usize) -> usize {
    assert!(width > 0, "literal width must be positive");
    assert_eq!(output.len() % width, 0, "output {output:?} is not a whole number of literals");
    output.len() / width
}
