//! Random source errors

/// Failure of a random source to produce a value
///
/// Scopes never catch these; they propagate unmodified to the caller of
/// `generate`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RandomSourceError {
    /// Requested range is empty (`low > high`)
    #[error("invalid range: low {low} is greater than high {high}")]
    InvalidRange {
        /// Requested lower bound
        low: u64,
        /// Requested upper bound
        high: u64,
    },

    /// Requested upper bound is above what the source can produce
    #[error("requested high {high} exceeds source maximum {max}")]
    ExceedsMax {
        /// Requested upper bound
        high: u64,
        /// Source maximum
        max: u64,
    },

    /// Source returned a value outside the requested range
    #[error("value {value} outside requested range [{low}, {high}]")]
    OutOfRange {
        /// Value produced by the source
        value: u64,
        /// Requested lower bound
        low: u64,
        /// Requested upper bound
        high: u64,
    },

    /// Index requested into an empty collection
    #[error("cannot draw an index from an empty collection")]
    EmptyIndexRange,

    /// Scripted source ran out of values
    #[error("scripted source exhausted after {calls} calls")]
    Exhausted {
        /// Calls answered before exhaustion
        calls: usize,
    },

    /// Scripted source was called with arguments it did not expect
    #[error("unexpected call #{call}: expected generate({expected_low}, {expected_high}), got generate({low}, {high})")]
    UnexpectedCall {
        /// Zero-based index of the offending call
        call: usize,
        /// Expected lower bound
        expected_low: u64,
        /// Expected upper bound
        expected_high: u64,
        /// Actual lower bound
        low: u64,
        /// Actual upper bound
        high: u64,
    },
}

impl RandomSourceError {
    /// Check if the error was caused by the caller's request rather than the source
    #[inline]
    #[must_use]
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange { .. } | Self::ExceedsMax { .. } | Self::EmptyIndexRange
        )
    }
}
