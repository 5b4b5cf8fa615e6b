//! # womm
//!
//! "It works on my machine": a collection of intentionally flaky test
//! utilities for exercising CI and test-reporting tools against
//! nondeterministic outcomes.
//!
//! ## Probability helpers
//!
//! - [`random_success`]: `true` with a given probability, validated to `[0.0, 1.0]`
//! - [`dice_roll`]: a fair six-sided die
//! - [`is_baseline_test`]: a control that is always `true`
//! - [`calculate_overall_success_rate`]: joint probability of independent checks
//!
//! Every helper that needs randomness takes a [`RandomProvider`]:
//!
//! ```rust
//! use womm::{dice_roll, random_success, SeededRandomProvider};
//!
//! let random = SeededRandomProvider::new(42);
//! let roll = dice_roll(&random);
//! assert!((1..=6).contains(&roll));
//! assert!(!random_success(&random, 0.0).unwrap());
//! ```
//!
//! ## Flaky suites
//!
//! The [`scenario`] module packages the helpers into ready-made suites whose
//! test cases fail at known rates. The `womm` binary runs them once per
//! invocation.

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod probability;
pub mod scenario;

pub use probability::{
    calculate_overall_success_rate, dice_roll, is_baseline_test, random_success,
};
pub use scenario::{
    Check, FlakyScenario, OutcomeStatus, ScenarioOutcome, Suite, SuiteKind, SuiteRun,
};
pub use womm_core::{
    ProbabilityError, ProbabilityResult, RandomProvider, SeededRandomProvider, SuccessRate,
    ThreadRandomProvider,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line description of the crate.
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
