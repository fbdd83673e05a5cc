//! Random source capability trait

use crate::RandomSourceError;

/// Bounded random integers on demand
///
/// A source is borrowed mutably for the duration of one generation call and
/// is never retained by the scope tree. Sources are not required to be
/// thread-safe: concurrent generations each bring their own instance.
pub trait RandomSource: std::fmt::Debug {
    /// Produce an integer in `[low, high]` inclusive
    ///
    /// # Errors
    /// Returns [`RandomSourceError`] when the range is empty, exceeds
    /// [`max`](Self::max), or the source cannot answer.
    fn generate(&mut self, low: u64, high: u64) -> Result<u64, RandomSourceError>;

    /// Reset the source to a deterministic state derived from `value`
    fn seed(&mut self, value: u64);

    /// Upper bound of the values this source can produce
    fn max(&self) -> u64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn generate(&mut self, low: u64, high: u64) -> Result<u64, RandomSourceError> {
        (**self).generate(low, high)
    }

    fn seed(&mut self, value: u64) {
        (**self).seed(value);
    }

    fn max(&self) -> u64 {
        (**self).max()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn generate(&mut self, low: u64, high: u64) -> Result<u64, RandomSourceError> {
        (**self).generate(low, high)
    }

    fn seed(&mut self, value: u64) {
        (**self).seed(value);
    }

    fn max(&self) -> u64 {
        (**self).max()
    }
}

/// Draw a value in `[low, high]` and verify the source honoured the range
///
/// # Errors
/// - [`RandomSourceError::InvalidRange`] if `low > high` (no call is made)
/// - [`RandomSourceError::OutOfRange`] if the source answered outside the range
/// - any error reported by the source itself
pub fn draw(random: &mut dyn RandomSource, low: u64, high: u64) -> Result<u64, RandomSourceError> {
    if low > high {
        return Err(RandomSourceError::InvalidRange { low, high });
    }

    let value = random.generate(low, high)?;
    if value < low || value > high {
        return Err(RandomSourceError::OutOfRange { value, low, high });
    }

    tracing::trace!("drew {} from [{}, {}]", value, low, high);
    Ok(value)
}

/// Draw an index into a collection of `len` items
///
/// Calls `random.generate(0, len - 1)` and checks the answer like [`draw`].
///
/// # Errors
/// - [`RandomSourceError::EmptyIndexRange`] if `len` is zero (no call is made)
/// - any error [`draw`] reports
pub fn draw_index(random: &mut dyn RandomSource, len: usize) -> Result<usize, RandomSourceError> {
    let last = len
        .checked_sub(1)
        .and_then(|last| u64::try_from(last).ok())
        .ok_or(RandomSourceError::EmptyIndexRange)?;
    let value = draw(random, 0, last)?;
    usize::try_from(value).map_err(|_| RandomSourceError::OutOfRange { value, low: 0, high: last })
}
