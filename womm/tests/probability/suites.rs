//! Tests for the built-in flaky suites.

use womm::{
    FlakyScenario, OutcomeStatus, SeededRandomProvider, Suite, calculate_overall_success_rate,
};

#[test]
fn test_standard_pass_probability() {
    let expected = calculate_overall_success_rate(&[1.0, 0.95, 0.85, 0.75, 5.0 / 6.0]);
    assert!((Suite::standard().pass_probability() - expected).abs() < 1e-12);
}

#[test]
fn test_aggressive_pass_probability() {
    let expected = 0.75 * 0.60 * 0.50 * (4.0 / 6.0);
    assert!((Suite::aggressive().pass_probability() - expected).abs() < 1e-12);
}

#[test]
fn test_baseline_only_suite_always_passes() {
    let suite = Suite::new(
        "control",
        vec![
            FlakyScenario::baseline("first", "Always passes"),
            FlakyScenario::random_success("certain", "Always passes", 1.0),
            FlakyScenario::dice_at_least("any_face", "Always passes", 1),
        ],
    );
    assert_eq!(suite.pass_probability(), 1.0);

    for seed in 0..200 {
        let run = suite.run(&SeededRandomProvider::new(seed));
        assert!(run.all_passed(), "seed {seed} failed: {run}");
    }
}

#[test]
fn test_runs_are_reproducible() {
    let suite = Suite::aggressive();
    for seed in [1, 2, 3, 42] {
        let first = suite.run(&SeededRandomProvider::new(seed));
        let replay = suite.run(&SeededRandomProvider::new(seed));
        assert_eq!(first, replay);
    }
}

#[test]
fn test_aggressive_suite_flakes() {
    let suite = Suite::aggressive();
    let green = (0..500)
        .filter(|&seed| suite.run(&SeededRandomProvider::new(seed)).all_passed())
        .count();
    assert!(green > 0, "some runs should pass");
    assert!(green < 500, "some runs should fail");
}

#[test]
fn test_baseline_scenarios_never_fail() {
    for suite in [Suite::standard(), Suite::aggressive()] {
        for seed in 0..100 {
            let run = suite.run(&SeededRandomProvider::new(seed));
            assert_eq!(run.outcomes[0].status, OutcomeStatus::Passed);
            assert_eq!(run.errored(), 0);
        }
    }
}

#[test]
fn test_odds_listing() {
    let odds = Suite::standard().odds();
    assert_eq!(odds.suite, "standard");
    assert_eq!(odds.scenarios.len(), 5);
    assert_eq!(odds.scenarios[1].success_rate, 0.95);
    assert_eq!(odds.pass_probability, Suite::standard().pass_probability());
}
