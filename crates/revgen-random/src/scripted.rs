//! Scripted random source
//!
//! A deterministic test double: answers `generate` from a pre-programmed
//! queue, optionally asserting on the arguments of each call, and records
//! every call for later inspection.

use crate::{RandomSource, RandomSourceError};
use std::collections::VecDeque;

/// One scripted response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedCall {
    /// Arguments the call must be made with, if asserted
    pub expected: Option<(u64, u64)>,
    /// Value returned by the call
    pub value: u64,
}

impl ScriptedCall {
    /// Response that accepts any arguments
    #[inline]
    #[must_use]
    pub fn any(value: u64) -> Self {
        Self { expected: None, value }
    }

    /// Response that requires `generate(low, high)`
    #[inline]
    #[must_use]
    pub fn expect(low: u64, high: u64, value: u64) -> Self {
        Self {
            expected: Some((low, high)),
            value,
        }
    }
}

/// Deterministic random source returning a scripted sequence
///
/// # Example
///
/// ```rust
/// use revgen_random::{RandomSource, ScriptedRandom};
///
/// let mut random = ScriptedRandom::empty()
///     .then_expect(1, 4, 2)
///     .then_expect(0, 0, 0);
///
/// assert_eq!(random.generate(1, 4).unwrap(), 2);
/// assert_eq!(random.generate(0, 0).unwrap(), 0);
/// assert!(random.is_exhausted());
/// assert_eq!(random.calls(), &[(1, 4), (0, 0)]);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: VecDeque<ScriptedCall>,
    original: Vec<ScriptedCall>,
    calls: Vec<(u64, u64)>,
    seeds: Vec<u64>,
    max: u64,
}

impl ScriptedRandom {
    /// Create a source answering `values` in order, accepting any arguments
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = u64>) -> Self {
        Self::from_calls(values.into_iter().map(ScriptedCall::any))
    }

    /// Create a source with no scripted responses
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::from_calls(std::iter::empty())
    }

    /// Create a source from explicit scripted responses
    #[must_use]
    pub fn from_calls(calls: impl IntoIterator<Item = ScriptedCall>) -> Self {
        let original: Vec<ScriptedCall> = calls.into_iter().collect();
        Self {
            script: original.iter().copied().collect(),
            original,
            calls: Vec::new(),
            seeds: Vec::new(),
            max: u64::MAX,
        }
    }

    /// Append a response accepting any arguments
    #[must_use]
    pub fn then(mut self, value: u64) -> Self {
        self.push(ScriptedCall::any(value));
        self
    }

    /// Append a response requiring `generate(low, high)`
    #[must_use]
    pub fn then_expect(mut self, low: u64, high: u64, value: u64) -> Self {
        self.push(ScriptedCall::expect(low, high, value));
        self
    }

    /// Set the value reported by [`RandomSource::max`]
    #[must_use]
    pub fn with_max(mut self, max: u64) -> Self {
        self.max = max;
        self
    }

    fn push(&mut self, call: ScriptedCall) {
        self.original.push(call);
        self.script.push_back(call);
    }

    /// Arguments of every `generate` call made so far, in order
    #[inline]
    #[must_use]
    pub fn calls(&self) -> &[(u64, u64)] {
        &self.calls
    }

    /// Number of `generate` calls made so far
    #[inline]
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Seeds passed to [`RandomSource::seed`]
    #[inline]
    #[must_use]
    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }

    /// Scripted responses not yet consumed
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Check if every scripted response was consumed
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }

    /// Rewind to the start of the script and forget recorded calls and seeds
    pub fn reset(&mut self) {
        self.script = self.original.iter().copied().collect();
        self.calls.clear();
        self.seeds.clear();
    }
}

impl RandomSource for ScriptedRandom {
    fn generate(&mut self, low: u64, high: u64) -> Result<u64, RandomSourceError> {
        if low > high {
            return Err(RandomSourceError::InvalidRange { low, high });
        }
        if high > self.max {
            return Err(RandomSourceError::ExceedsMax { high, max: self.max });
        }

        let call = self.calls.len();
        let Some(next) = self.script.pop_front() else {
            return Err(RandomSourceError::Exhausted { calls: call });
        };
        self.calls.push((low, high));

        if let Some((expected_low, expected_high)) = next.expected {
            if (expected_low, expected_high) != (low, high) {
                return Err(RandomSourceError::UnexpectedCall {
                    call,
                    expected_low,
                    expected_high,
                    low,
                    high,
                });
            }
        }

        if next.value < low || next.value > high {
            return Err(RandomSourceError::OutOfRange {
                value: next.value,
                low,
                high,
            });
        }

        Ok(next.value)
    }

    /// Scripted sources are deterministic already; the seed is only recorded
    fn seed(&mut self, value: u64) {
        self.seeds.push(value);
    }

    fn max(&self) -> u64 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_in_order() {
        let mut random = ScriptedRandom::new([1, 2, 3]);
        assert_eq!(random.generate(0, 5), Ok(1));
        assert_eq!(random.generate(0, 5), Ok(2));
        assert_eq!(random.generate(0, 5), Ok(3));
        assert_eq!(random.call_count(), 3);
    }

    #[test]
    fn exhaustion_is_an_error() {
        let mut random = ScriptedRandom::new([0]);
        random.generate(0, 0).unwrap();
        assert_eq!(
            random.generate(0, 0),
            Err(RandomSourceError::Exhausted { calls: 1 })
        );
    }

    #[test]
    fn unexpected_arguments_are_reported() {
        let mut random = ScriptedRandom::empty().then_expect(0, 3, 1);
        let err = random.generate(0, 2).unwrap_err();
        assert_eq!(
            err,
            RandomSourceError::UnexpectedCall {
                call: 0,
                expected_low: 0,
                expected_high: 3,
                low: 0,
                high: 2,
            }
        );
    }

    #[test]
    fn scripted_value_outside_range_is_reported() {
        let mut random = ScriptedRandom::new([7]);
        assert_eq!(
            random.generate(0, 3),
            Err(RandomSourceError::OutOfRange { value: 7, low: 0, high: 3 })
        );
    }

    #[test]
    fn max_is_enforced() {
        let mut random = ScriptedRandom::new([1]).with_max(10);
        assert_eq!(random.max(), 10);
        assert_eq!(
            random.generate(0, 11),
            Err(RandomSourceError::ExceedsMax { high: 11, max: 10 })
        );
        // rejected requests do not consume the script
        assert_eq!(random.remaining(), 1);
    }

    #[test]
    fn reset_replays_script() {
        let mut random = ScriptedRandom::new([2, 0]).then(1);
        let first: Vec<u64> = (0..3).map(|_| random.generate(0, 2).unwrap()).collect();
        random.reset();
        let second: Vec<u64> = (0..3).map(|_| random.generate(0, 2).unwrap()).collect();
        assert_eq!(first, vec![2, 0, 1]);
        assert_eq!(first, second);
    }

    #[test]
    fn reset_forgets_seeds_of_previous_run() {
        let mut random = ScriptedRandom::new([1]);
        random.seed(3);
        random.generate(0, 1).unwrap();
        random.reset();
        assert!(random.seeds().is_empty());
        assert_eq!(random.call_count(), 0);
        random.seed(4);
        assert_eq!(random.seeds(), &[4]);
    }

    #[test]
    fn seed_is_recorded_only() {
        let mut random = ScriptedRandom::new([4]);
        random.seed(99);
        assert_eq!(random.seeds(), &[99]);
        assert_eq!(random.generate(0, 4), Ok(4));
    }
}
