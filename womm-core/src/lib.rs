//! # womm-core
//!
//! Core abstractions for the womm flaky-test utilities.
//!
//! This crate provides the pieces every probability helper builds on:
//!
//! - **Random providers**: an injectable source of uniform draws, with a
//!   production implementation and a seeded, reproducible one
//! - **Success rates**: a validated probability type in `[0.0, 1.0]`
//! - **Errors**: the single failure kind of the whole system
//!
//! ## Provider Traits
//!
//! Code draws randomness through [`RandomProvider`] instead of a process-wide
//! generator. This lets the same helper run against real entropy in CI and
//! against a fixed seed when a failure needs to be replayed:
//!
//! - [`ThreadRandomProvider`]: per-thread, OS-seeded randomness
//! - [`SeededRandomProvider`]: deterministic ChaCha8 streams from a `u64` seed

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

mod error;
mod random;
mod rate;

// Error exports
pub use error::{ProbabilityError, ProbabilityResult};

// Provider exports
pub use random::{RandomProvider, SeededRandomProvider, ThreadRandomProvider};

// Type exports
pub use rate::SuccessRate;
