//! Random number sources for the placement search.
//!
//! The search only ever needs uniform integers from an inclusive range, so
//! it is written against the small [`RandomSource`] trait. [`RngSource`]
//! adapts any [`rand::Rng`] to it.

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng, rngs::StdRng};

use delve_core::geometry::IntRange;

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns an integer in `min..=max`.
    ///
    /// Callers guarantee `min <= max`.
    fn random_int(&mut self, min: i32, max: i32) -> i32;

    /// Returns an integer inside `range`.
    fn random_in(&mut self, range: IntRange) -> i32 {
        self.random_int(range.min, range.max)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        (**self).random_int(min, max)
    }

    fn random_in(&mut self, range: IntRange) -> i32 {
        (**self).random_in(range)
    }
}

/// [`RandomSource`] backed by a `rand` generator.
///
/// # Examples
///
/// ```
/// use delve::random::{RandomSource, RngSource};
///
/// let mut a = RngSource::seeded(7);
/// let mut b = RngSource::seeded(7);
/// assert_eq!(a.random_int(0, 1000), b.random_int(0, 1000));
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Creates a reproducible source from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a source seeded from operating system entropy.
    pub fn from_os() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        self.random_in(IntRange::new(min, max))
    }

    fn random_in(&mut self, range: IntRange) -> i32 {
        self.rng.random_range(RangeInclusive::from(range))
    }
}
