//! Validated success rates.
//!
//! A [`SuccessRate`] is an `f64` known to lie in `[0.0, 1.0]`. Construction
//! and deserialization both go through the same bounds check, so a rate read
//! from a config file or a JSON payload fails exactly like a bad literal.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ProbabilityError, ProbabilityResult, RandomProvider};

/// Probability that a flaky operation reports success.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SuccessRate(f64);

impl SuccessRate {
    /// A rate that always succeeds.
    pub const ALWAYS: Self = Self(1.0);

    /// A rate that never succeeds.
    pub const NEVER: Self = Self(0.0);

    /// Validate `value` as a success rate.
    ///
    /// Both bounds are inclusive. NaN is rejected. Out-of-range values are
    /// never clamped.
    pub fn new(value: f64) -> ProbabilityResult<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ProbabilityError::InvalidArgument { value })
        }
    }

    /// The raw probability.
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Draw once from `random` and report whether this attempt succeeds.
    ///
    /// The draw is uniform over `[0, 1)` and compared with `<`, so
    /// [`SuccessRate::NEVER`] never succeeds and [`SuccessRate::ALWAYS`]
    /// always does.
    pub fn draw<R: RandomProvider>(self, random: &R) -> bool {
        random.random_ratio() < self.0
    }
}

impl TryFrom<f64> for SuccessRate {
    type Error = ProbabilityError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SuccessRate> for f64 {
    fn from(rate: SuccessRate) -> Self {
        rate.0
    }
}

impl fmt::Display for SuccessRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}
