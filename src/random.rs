//! Injectable randomness.
//!
//! Every shuffle in this crate draws from a [`RandomSource`] passed in by the
//! caller, so a seeded source reproduces the same decks.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns a uniformly random integer in `low..=high`.
    ///
    /// Callers guarantee `low <= high`.
    fn uniform_inclusive(&mut self, low: usize, high: usize) -> usize;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn uniform_inclusive(&mut self, low: usize, high: usize) -> usize {
        (**self).uniform_inclusive(low, high)
    }
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
///
/// # Example
///
/// ```
/// use memoria::{RandomSource, RngSource};
///
/// let mut source = RngSource::seeded(7);
/// let value = source.uniform_inclusive(3, 9);
/// assert!((3..=9).contains(&value));
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps a generator.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<ChaCha8Rng> {
    /// Creates a reproducible source from a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.rng.random_range(low..=high)
    }
}
