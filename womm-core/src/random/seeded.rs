//! Deterministic random provider.
//!
//! Every [`SeededRandomProvider`] owns a ChaCha8 generator positioned on one
//! stream of one seed. The same `(seed, stream)` pair always replays the same
//! sequence; distinct streams of a seed are independent of each other.

use rand::distr::{Distribution, StandardUniform, uniform::SampleUniform};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::{RandomProvider, ThreadRandomProvider};

/// Seeded random provider for reproducible runs.
///
/// Clones share the same generator, so handing a clone to another thread
/// interleaves draws on one sequence. Use [`SeededRandomProvider::fork`] to
/// give each execution context its own stream instead.
///
/// # Example
///
/// ```rust
/// use womm_core::{RandomProvider, SeededRandomProvider};
///
/// let first = SeededRandomProvider::new(42);
/// let replay = SeededRandomProvider::new(42);
/// assert_eq!(first.random::<u64>(), replay.random::<u64>());
/// ```
#[derive(Debug, Clone)]
pub struct SeededRandomProvider {
    inner: Arc<SeededState>,
}

#[derive(Debug)]
struct SeededState {
    seed: u64,
    stream: u64,
    rng: Mutex<ChaCha8Rng>,
    /// Number of samples taken since construction
    draws: AtomicU64,
}

impl SeededRandomProvider {
    /// Create a provider on stream 0 of `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_stream(seed, 0)
    }

    /// Create a provider on a specific stream of `seed`.
    pub fn with_stream(seed: u64, stream: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(stream);
        Self {
            inner: Arc::new(SeededState {
                seed,
                stream,
                rng: Mutex::new(rng),
                draws: AtomicU64::new(0),
            }),
        }
    }

    /// Create a provider from a freshly drawn seed.
    ///
    /// The seed is available through [`SeededRandomProvider::seed`] so a
    /// failing run can be replayed with [`SeededRandomProvider::new`].
    pub fn from_entropy() -> Self {
        Self::new(ThreadRandomProvider::new().random())
    }

    /// Independent provider on `stream` of the same seed.
    ///
    /// The fork starts at the beginning of its stream and does not share
    /// state with `self`. Forking onto the current stream replays this
    /// provider's sequence from the start.
    pub fn fork(&self, stream: u64) -> Self {
        tracing::trace!(
            seed = self.inner.seed,
            from_stream = self.inner.stream,
            to_stream = stream,
            "forking seeded random provider"
        );
        Self::with_stream(self.inner.seed, stream)
    }

    /// The seed this provider was built from.
    pub fn seed(&self) -> u64 {
        self.inner.seed
    }

    /// The ChaCha stream this provider draws from.
    pub fn stream(&self) -> u64 {
        self.inner.stream
    }

    /// Number of samples drawn so far, across all clones.
    pub fn draw_count(&self) -> u64 {
        self.inner.draws.load(Ordering::Relaxed)
    }

    fn sample<T>(&self, f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
        self.inner.draws.fetch_add(1, Ordering::Relaxed);
        // A panic while holding the lock cannot leave the generator half-updated.
        let mut rng = self
            .inner
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut *rng)
    }
}

impl RandomProvider for SeededRandomProvider {
    fn random<T>(&self) -> T
    where
        StandardUniform: Distribution<T>,
    {
        self.sample(|rng| rng.sample(StandardUniform))
    }

    fn random_range<T>(&self, range: Range<T>) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        self.sample(|rng| rng.random_range(range))
    }

    fn random_ratio(&self) -> f64 {
        self.sample(|rng| rng.sample(StandardUniform))
    }
}
