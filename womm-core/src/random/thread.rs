use rand::distr::{Distribution, StandardUniform, uniform::SampleUniform};
use rand::prelude::*;
use std::cell::RefCell;
use std::ops::Range;

use super::RandomProvider;

/// Real entropy for flaky checks run by a test harness.
///
/// Draws come from `rand::rng()`, seeded by the operating system the first
/// time each thread touches it. Tests the harness runs on parallel threads
/// never share a sequence, and nothing is replayable.
///
/// # Example
///
/// ```rust
/// use womm_core::{RandomProvider, ThreadRandomProvider};
///
/// let random = ThreadRandomProvider::new();
/// let value: u64 = random.random();
/// let in_range = random.random_range(1..100);
/// assert!((1..100).contains(&in_range));
/// # let _ = value;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomProvider;

impl ThreadRandomProvider {
    /// Provider over the calling thread's generator.
    pub fn new() -> Self {
        Self
    }
}

thread_local! {
    static RNG: RefCell<rand::rngs::ThreadRng> = RefCell::new(rand::rng());
}

impl RandomProvider for ThreadRandomProvider {
    fn random<T>(&self) -> T
    where
        StandardUniform: Distribution<T>,
    {
        RNG.with(|rng| rng.borrow_mut().random())
    }

    fn random_range<T>(&self, range: Range<T>) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        RNG.with(|rng| rng.borrow_mut().random_range(range))
    }

    fn random_ratio(&self) -> f64 {
        RNG.with(|rng| rng.borrow_mut().random())
    }
}
