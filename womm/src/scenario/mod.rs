//! Catalog of intentionally flaky scenarios.
//!
//! A [`FlakyScenario`] is one test case whose pass/fail outcome is decided by
//! the probability helpers. A [`Suite`] groups scenarios the way a test file
//! groups test functions, and can be run once against any [`RandomProvider`].
//!
//! ## Built-in suites
//!
//! | Suite | Scenarios | Whole-suite pass chance |
//! |-------|-----------|-------------------------|
//! | [`Suite::standard`] | baseline, 95%, 85%, 75%, die 2-6 | ~42% |
//! | [`Suite::aggressive`] | baseline, 75%, 60%, 50%, die 3-6 | ~15% |

use serde::Serialize;
use womm_core::RandomProvider;

use crate::probability::{
    DIE_FACES, calculate_overall_success_rate, dice_roll, is_baseline_test, random_success,
};

mod report;

pub use report::{OutcomeStatus, ScenarioOdds, ScenarioOutcome, SuiteOdds, SuiteRun};

/// How a scenario decides whether it passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Check {
    /// Always passes. A control that must never flake.
    Baseline,
    /// Passes with the given probability.
    RandomSuccess(f64),
    /// Rolls a die and passes when the roll is at least this value.
    DiceAtLeast(u8),
}

impl Check {
    /// Designed probability that this check passes.
    ///
    /// Always in `[0.0, 1.0]`. A [`Check::RandomSuccess`] rate outside that
    /// range is clamped to it, and NaN counts as `0.0`.
    pub fn success_rate(&self) -> f64 {
        match *self {
            Self::Baseline => 1.0,
            Self::RandomSuccess(rate) if rate.is_nan() => 0.0,
            Self::RandomSuccess(rate) => rate.clamp(0.0, 1.0),
            Self::DiceAtLeast(minimum) => {
                let passing = (1..=DIE_FACES).filter(|&face| face >= minimum).count();
                passing as f64 / f64::from(DIE_FACES)
            }
        }
    }
}

/// A single intentionally flaky test case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlakyScenario {
    /// Test name as it would appear in a report.
    pub name: &'static str,
    /// Human-readable summary of the failure rate.
    pub description: &'static str,
    /// Pass/fail rule.
    pub check: Check,
}

impl FlakyScenario {
    /// Scenario that always passes.
    pub const fn baseline(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            check: Check::Baseline,
        }
    }

    /// Scenario that passes with probability `rate`.
    pub const fn random_success(name: &'static str, description: &'static str, rate: f64) -> Self {
        Self {
            name,
            description,
            check: Check::RandomSuccess(rate),
        }
    }

    /// Scenario that rolls a die and needs at least `minimum`.
    pub const fn dice_at_least(name: &'static str, description: &'static str, minimum: u8) -> Self {
        Self {
            name,
            description,
            check: Check::DiceAtLeast(minimum),
        }
    }

    /// Designed probability that this scenario passes.
    pub fn success_rate(&self) -> f64 {
        self.check.success_rate()
    }

    /// Evaluate the scenario once.
    ///
    /// An invalid success rate yields [`OutcomeStatus::Errored`], which is
    /// distinct from a probabilistic [`OutcomeStatus::Failed`].
    pub fn run<R: RandomProvider>(&self, random: &R) -> ScenarioOutcome {
        let outcome = match self.check {
            Check::Baseline => {
                if is_baseline_test() {
                    ScenarioOutcome::passed(self.name)
                } else {
                    ScenarioOutcome::failed(self.name, "This should always pass".to_string())
                }
            }
            Check::RandomSuccess(rate) => match random_success(random, rate) {
                Ok(true) => ScenarioOutcome::passed(self.name),
                Ok(false) => ScenarioOutcome::failed(
                    self.name,
                    format!("Random failure at {:.0}% success rate", rate * 100.0),
                ),
                Err(err) => ScenarioOutcome::errored(self.name, err.to_string()),
            },
            Check::DiceAtLeast(minimum) => {
                let roll = dice_roll(random);
                if roll >= minimum {
                    ScenarioOutcome::passed(self.name)
                } else {
                    ScenarioOutcome::failed(
                        self.name,
                        format!(
                            "Dice roll failed: got {roll}, need {minimum}-{DIE_FACES} (~{:.0}% chance)",
                            self.success_rate() * 100.0
                        ),
                    )
                }
            }
        };

        tracing::debug!(
            scenario = self.name,
            status = ?outcome.status,
            "scenario finished"
        );
        outcome
    }
}

/// Selects one of the built-in suites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SuiteKind {
    /// Occasional to noticeable flakiness (95%, 85%, 75%, die 2-6).
    #[default]
    Standard,
    /// Frequent to very high flakiness (75%, 60%, 50%, die 3-6).
    Aggressive,
}

/// An ordered group of scenarios run together.
#[derive(Debug, Clone, PartialEq)]
pub struct Suite {
    name: &'static str,
    scenarios: Vec<FlakyScenario>,
}

impl Suite {
    /// Create a suite from an explicit list of scenarios.
    pub fn new(name: &'static str, scenarios: Vec<FlakyScenario>) -> Self {
        Self { name, scenarios }
    }

    /// Suite with occasional to noticeable flakiness.
    pub fn standard() -> Self {
        Self::new(
            "standard",
            vec![
                FlakyScenario::baseline("reliable_probability_baseline", "Always passes"),
                FlakyScenario::random_success(
                    "high_success_95_percent",
                    "Passes 95% of the time - occasional failures",
                    0.95,
                ),
                FlakyScenario::random_success(
                    "moderate_success_85_percent",
                    "Passes 85% of the time - moderate flakiness",
                    0.85,
                ),
                FlakyScenario::random_success(
                    "low_success_75_percent",
                    "Passes 75% of the time - noticeable flakiness",
                    0.75,
                ),
                FlakyScenario::dice_at_least(
                    "dice_roll_simulation",
                    "Passes if the die shows 2-6",
                    2,
                ),
            ],
        )
    }

    /// Suite with frequent to very high flakiness.
    pub fn aggressive() -> Self {
        Self::new(
            "aggressive",
            vec![
                FlakyScenario::baseline("always_pass_baseline", "Always passes"),
                FlakyScenario::random_success(
                    "high_success_75_percent",
                    "Passes 75% of the time - frequent failures",
                    0.75,
                ),
                FlakyScenario::random_success(
                    "moderate_success_60_percent",
                    "Passes 60% of the time - high flakiness",
                    0.60,
                ),
                FlakyScenario::random_success(
                    "low_success_50_percent",
                    "Passes 50% of the time - very high flakiness",
                    0.50,
                ),
                FlakyScenario::dice_at_least(
                    "dice_roll_simulation",
                    "Passes if the die shows 3-6",
                    3,
                ),
            ],
        )
    }

    /// Built-in suite for `kind`.
    pub fn from_kind(kind: SuiteKind) -> Self {
        match kind {
            SuiteKind::Standard => Self::standard(),
            SuiteKind::Aggressive => Self::aggressive(),
        }
    }

    /// Suite name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Scenarios in run order.
    pub fn scenarios(&self) -> &[FlakyScenario] {
        &self.scenarios
    }

    /// Probability that a single run of the whole suite is green.
    pub fn pass_probability(&self) -> f64 {
        let rates: Vec<f64> = self
            .scenarios
            .iter()
            .map(FlakyScenario::success_rate)
            .collect();
        calculate_overall_success_rate(&rates)
    }

    /// Designed odds of every scenario plus the suite as a whole.
    pub fn odds(&self) -> SuiteOdds {
        SuiteOdds {
            suite: self.name,
            scenarios: self
                .scenarios
                .iter()
                .map(|scenario| ScenarioOdds {
                    name: scenario.name,
                    success_rate: scenario.success_rate(),
                })
                .collect(),
            pass_probability: self.pass_probability(),
        }
    }

    /// Run every scenario exactly once, in order.
    pub fn run<R: RandomProvider>(&self, random: &R) -> SuiteRun {
        tracing::info!(
            suite = self.name,
            scenarios = self.scenarios.len(),
            "running flaky suite"
        );

        let outcomes: Vec<ScenarioOutcome> = self
            .scenarios
            .iter()
            .map(|scenario| scenario.run(random))
            .collect();
        let run = SuiteRun::new(self.name, outcomes);

        tracing::info!(
            suite = self.name,
            passed = run.passed(),
            failed = run.failed(),
            errored = run.errored(),
            "flaky suite finished"
        );
        run
    }
}
