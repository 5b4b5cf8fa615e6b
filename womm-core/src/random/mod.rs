//! Random number generation provider abstraction.
//!
//! Randomness is a capability handed to the code that needs it, never an
//! ambient global. Production runs use [`ThreadRandomProvider`]; reproducible
//! runs use [`SeededRandomProvider`].

use rand::distr::{Distribution, StandardUniform, uniform::SampleUniform};
use std::ops::Range;

mod seeded;
mod thread;

pub use seeded::SeededRandomProvider;
pub use thread::ThreadRandomProvider;

/// Source of uniform draws handed to every probability helper.
///
/// A flaky check asks its provider for randomness instead of reaching for a
/// global generator. The same check then runs against real entropy in CI or
/// replays a recorded seed when a red build needs reproducing.
pub trait RandomProvider: Clone {
    /// Draw a value of type `T` from its standard distribution.
    fn random<T>(&self) -> T
    where
        StandardUniform: Distribution<T>;

    /// Draw a value uniformly from `range`, upper bound excluded.
    ///
    /// Panics on an empty range.
    fn random_range<T>(&self, range: Range<T>) -> T
    where
        T: SampleUniform + PartialOrd;

    /// Draw an `f64` uniformly from `[0.0, 1.0)`.
    ///
    /// Success checks compare this with `<`, so a rate of `1.0` always wins.
    fn random_ratio(&self) -> f64;

    /// `true` with probability `probability`.
    ///
    /// No bounds check; callers validate through [`crate::SuccessRate`].
    fn random_bool(&self, probability: f64) -> bool {
        self.random_ratio() < probability
    }
}
