//! Command-line configuration for the `womm` runner.

use clap::{Args, Parser, Subcommand};

use womm_core::SeededRandomProvider;

use crate::scenario::{Suite, SuiteKind, SuiteOdds, SuiteRun};

/// Run intentionally flaky test suites.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "womm")]
#[command(about = "It works on my machine: probability-based flaky tests", long_about = None)]
#[command(version)]
pub struct Cli {
    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Runner subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run a suite once and exit non-zero when any scenario fails
    Run(RunConfig),
    /// Print the designed pass probability of a suite
    Odds(OddsConfig),
}

/// Configuration of a single suite run.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Built-in suite to run
    #[arg(short, long, value_enum, default_value_t = SuiteKind::Standard)]
    pub suite: SuiteKind,

    /// Seed for a reproducible run; a fresh one is drawn when omitted
    #[arg(long, env = "WOMM_SEED")]
    pub seed: Option<u64>,

    /// Emit the report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Configuration of the odds listing.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct OddsConfig {
    /// Built-in suite to describe
    #[arg(short, long, value_enum, default_value_t = SuiteKind::Standard)]
    pub suite: SuiteKind,

    /// Emit the odds as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl RunConfig {
    /// Provider for this run, seeded from `--seed` or from fresh entropy.
    pub fn random_provider(&self) -> SeededRandomProvider {
        match self.seed {
            Some(seed) => SeededRandomProvider::new(seed),
            None => SeededRandomProvider::from_entropy(),
        }
    }

    /// Run the configured suite once.
    ///
    /// The report always carries the seed that reproduces it.
    pub fn execute(&self) -> SuiteRun {
        let random = self.random_provider();
        tracing::info!(seed = random.seed(), "replay with --seed {}", random.seed());

        Suite::from_kind(self.suite)
            .run(&random)
            .with_seed(random.seed())
    }

    /// Render `report` as pretty JSON or as the plain-text report.
    pub fn render(&self, report: &SuiteRun) -> serde_json::Result<String> {
        if self.json {
            serde_json::to_string_pretty(report)
        } else {
            Ok(report.to_string())
        }
    }
}

impl OddsConfig {
    /// Designed odds of the configured suite.
    pub fn execute(&self) -> SuiteOdds {
        Suite::from_kind(self.suite).odds()
    }

    /// Render `odds` as pretty JSON or as the plain-text listing.
    pub fn render(&self, odds: &SuiteOdds) -> serde_json::Result<String> {
        if self.json {
            serde_json::to_string_pretty(odds)
        } else {
            Ok(odds.to_string())
        }
    }
}
