//! Outcomes and reports for a single suite run.

use std::fmt;

use serde::Serialize;

/// Result of evaluating one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// The check held.
    Passed,
    /// The check lost its draw. This is the intended flaky failure.
    Failed,
    /// The check could not be evaluated, e.g. its rate was out of range.
    Errored,
}

impl OutcomeStatus {
    fn label(self) -> &'static str {
        match self {
            Self::Passed => "PASS",
            Self::Failed => "FAIL",
            Self::Errored => "ERROR",
        }
    }
}

/// Outcome of one scenario in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioOutcome {
    /// Scenario name
    pub name: &'static str,
    /// Pass, fail or error
    pub status: OutcomeStatus,
    /// Failure or error message, absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ScenarioOutcome {
    pub(crate) fn passed(name: &'static str) -> Self {
        Self {
            name,
            status: OutcomeStatus::Passed,
            detail: None,
        }
    }

    pub(crate) fn failed(name: &'static str, detail: String) -> Self {
        Self {
            name,
            status: OutcomeStatus::Failed,
            detail: Some(detail),
        }
    }

    pub(crate) fn errored(name: &'static str, detail: String) -> Self {
        Self {
            name,
            status: OutcomeStatus::Errored,
            detail: Some(detail),
        }
    }
}

/// Report of running a suite once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteRun {
    /// Suite name
    pub suite: &'static str,
    /// Seed of the random provider, when the run is replayable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// One outcome per scenario, in run order
    pub outcomes: Vec<ScenarioOutcome>,
}

impl SuiteRun {
    pub(crate) fn new(suite: &'static str, outcomes: Vec<ScenarioOutcome>) -> Self {
        Self {
            suite,
            seed: None,
            outcomes,
        }
    }

    /// Attach the seed that reproduces this run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn count(&self, status: OutcomeStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    /// Number of passing scenarios.
    pub fn passed(&self) -> usize {
        self.count(OutcomeStatus::Passed)
    }

    /// Number of scenarios that lost their draw.
    pub fn failed(&self) -> usize {
        self.count(OutcomeStatus::Failed)
    }

    /// Number of scenarios that could not be evaluated.
    pub fn errored(&self) -> usize {
        self.count(OutcomeStatus::Errored)
    }

    /// Process exit status for this run: 0 when green, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    /// Whether every scenario passed.
    pub fn all_passed(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| o.status == OutcomeStatus::Passed)
    }
}

impl fmt::Display for SuiteRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Flaky Suite Report ===")?;
        writeln!(f, "Suite: {}", self.suite)?;
        if let Some(seed) = self.seed {
            writeln!(f, "Seed: {}", seed)?;
        }
        writeln!(f, "Scenarios: {}", self.outcomes.len())?;
        writeln!(f, "Passed: {}", self.passed())?;
        writeln!(f, "Failed: {}", self.failed())?;
        writeln!(f, "Errored: {}", self.errored())?;
        writeln!(f)?;

        for outcome in &self.outcomes {
            match outcome.detail {
                Some(ref detail) => {
                    writeln!(f, "  {:<5} {}: {}", outcome.status.label(), outcome.name, detail)?
                }
                None => writeln!(f, "  {:<5} {}", outcome.status.label(), outcome.name)?,
            }
        }

        Ok(())
    }
}

/// Designed success rate of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOdds {
    /// Scenario name
    pub name: &'static str,
    /// Probability the scenario passes on a single run
    pub success_rate: f64,
}

/// Designed odds of a whole suite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteOdds {
    /// Suite name
    pub suite: &'static str,
    /// Per-scenario odds, in run order
    pub scenarios: Vec<ScenarioOdds>,
    /// Probability that every scenario passes on a single run
    pub pass_probability: f64,
}

impl fmt::Display for SuiteOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Flaky Suite Odds ===")?;
        writeln!(f, "Suite: {}", self.suite)?;
        writeln!(f)?;
        for scenario in &self.scenarios {
            writeln!(
                f,
                "  {:>6.2}%  {}",
                scenario.success_rate * 100.0,
                scenario.name
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "All scenarios pass: {:.2}%",
            self.pass_probability * 100.0
        )?;
        Ok(())
    }
}
