//! Repetition bound shared by every scope

use crate::error::{ConfigurationError, GenerateError};
use revgen_random::{draw, RandomSource};

/// Inclusive `[min, max]` range of repetitions
///
/// A fixed bound (`min == max`) never consumes a random draw for the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Repetition {
    /// Minimum repetitions
    pub min: u64,
    /// Maximum repetitions
    pub max: u64,
}

impl Repetition {
    /// Exactly one repetition
    #[inline]
    #[must_use]
    pub const fn once() -> Self {
        Self::fixed(1)
    }

    /// Exactly `n` repetitions
    #[inline]
    #[must_use]
    pub const fn fixed(n: u64) -> Self {
        Self { min: n, max: n }
    }

    /// Between `min` and `max` repetitions, inclusive
    ///
    /// Not validated here; see [`validate`](Self::validate).
    #[inline]
    #[must_use]
    pub const fn range(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Check if the count is fixed
    #[inline]
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    /// Check if the bound can never produce a repetition
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.max == 0
    }

    /// Check `min <= max`
    ///
    /// # Errors
    /// [`ConfigurationError::InvalidBounds`] naming `scope`.
    pub fn validate(&self, scope: &str) -> Result<(), ConfigurationError> {
        if self.min > self.max {
            return Err(ConfigurationError::InvalidBounds {
                scope: scope.to_string(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Determine how many repetitions to emit
    ///
    /// # Errors
    /// Propagates any failure of the random source.
    pub fn draw_count(&self, random: &mut dyn RandomSource) -> Result<u64, GenerateError> {
        if self.is_fixed() {
            return Ok(self.min);
        }
        Ok(draw(random, self.min, self.max)?)
    }
}

impl Default for Repetition {
    fn default() -> Self {
        Self::once()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revgen_random::ScriptedRandom;

    #[test]
    fn default_is_once() {
        assert_eq!(Repetition::default(), Repetition { min: 1, max: 1 });
    }

    #[test]
    fn fixed_count_consumes_no_draw() {
        let mut random = ScriptedRandom::empty();
        assert_eq!(Repetition::fixed(3).draw_count(&mut random), Ok(3));
        assert_eq!(random.call_count(), 0);
    }

    #[test]
    fn ranged_count_draws_once_with_bounds() {
        let mut random = ScriptedRandom::empty().then_expect(2, 5, 4);
        assert_eq!(Repetition::range(2, 5).draw_count(&mut random), Ok(4));
        assert!(random.is_exhausted());
    }

    #[test]
    fn inverted_bounds_rejected() {
        let err = Repetition::range(3, 1).validate("digits").unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::InvalidBounds {
                scope: "digits".to_string(),
                min: 3,
                max: 1,
            }
        );
    }
}
