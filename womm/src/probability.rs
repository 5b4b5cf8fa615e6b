//! Probability utilities for flaky tests.
//!
//! Four small operations a test suite calls to decide whether it passes:
//!
//! | Operation | Result | Fails when |
//! |-----------|--------|------------|
//! | [`random_success`] | `true` with probability `success_rate` | rate outside `[0.0, 1.0]` |
//! | [`dice_roll`] | uniform `1..=6` | never |
//! | [`is_baseline_test`] | always `true` | never |
//! | [`calculate_overall_success_rate`] | product of the rates | never |

use womm_core::{ProbabilityResult, RandomProvider, SuccessRate};

/// Number of faces on the die used by [`dice_roll`].
pub const DIE_FACES: u8 = 6;

/// Return `true` with the given success rate.
///
/// `success_rate` must lie in `[0.0, 1.0]`, bounds included. Anything else,
/// NaN included, fails with
/// [`ProbabilityError::InvalidArgument`](womm_core::ProbabilityError::InvalidArgument)
/// without drawing from `random`. At `0.0` the result is always `false`; at
/// `1.0` it is always `true`.
///
/// ```rust
/// use womm::{random_success, SeededRandomProvider};
///
/// let random = SeededRandomProvider::new(1);
/// assert!(random_success(&random, 1.0).unwrap());
/// assert!(random_success(&random, 1.01).is_err());
/// ```
pub fn random_success<R: RandomProvider>(random: &R, success_rate: f64) -> ProbabilityResult<bool> {
    let rate = SuccessRate::new(success_rate)?;
    Ok(rate.draw(random))
}

/// Simulate rolling a six-sided die.
///
/// Returns a value in `1..=6`, each face with probability 1/6.
pub fn dice_roll<R: RandomProvider>(random: &R) -> u8 {
    random.random_range(1..DIE_FACES + 1)
}

/// Always returns `true`, for baseline reliability tests.
pub const fn is_baseline_test() -> bool {
    true
}

/// Probability that every one of a set of independent checks passes.
///
/// The empty set yields exactly `1.0`. Rates are not re-validated.
pub fn calculate_overall_success_rate(success_rates: &[f64]) -> f64 {
    success_rates.iter().product()
}
