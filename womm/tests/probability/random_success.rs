//! Tests for the probabilistic boolean draw.

use womm::{ProbabilityError, SeededRandomProvider, ThreadRandomProvider, random_success};

const TRIALS: usize = 100_000;
const TOLERANCE: f64 = 0.02;

fn empirical_rate(seed: u64, rate: f64) -> f64 {
    let random = SeededRandomProvider::new(seed);
    let hits = (0..TRIALS)
        .filter(|_| random_success(&random, rate).unwrap())
        .count();
    hits as f64 / TRIALS as f64
}

#[test]
fn test_frequency_converges_to_rate() {
    for (seed, rate) in [(1, 0.05), (2, 0.25), (3, 0.5), (4, 0.75), (5, 0.95)] {
        let observed = empirical_rate(seed, rate);
        assert!(
            (observed - rate).abs() < TOLERANCE,
            "rate {rate}: observed {observed}"
        );
    }
}

#[test]
fn test_zero_never_succeeds() {
    let random = SeededRandomProvider::new(10);
    for _ in 0..TRIALS {
        assert!(!random_success(&random, 0.0).unwrap());
    }

    let random = ThreadRandomProvider::new();
    for _ in 0..10_000 {
        assert!(!random_success(&random, 0.0).unwrap());
    }
}

#[test]
fn test_one_always_succeeds() {
    let random = SeededRandomProvider::new(11);
    for _ in 0..TRIALS {
        assert!(random_success(&random, 1.0).unwrap());
    }

    let random = ThreadRandomProvider::new();
    for _ in 0..10_000 {
        assert!(random_success(&random, 1.0).unwrap());
    }
}

#[test]
fn test_out_of_range_always_fails() {
    let random = SeededRandomProvider::new(12);
    for _ in 0..100 {
        assert_eq!(
            random_success(&random, -0.01),
            Err(ProbabilityError::InvalidArgument { value: -0.01 })
        );
        assert_eq!(
            random_success(&random, 1.01),
            Err(ProbabilityError::InvalidArgument { value: 1.01 })
        );
    }
    assert!(random_success(&random, f64::NAN).is_err());
}

#[test]
fn test_error_message() {
    let random = SeededRandomProvider::new(13);
    let err = random_success(&random, 2.0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "success rate must be between 0.0 and 1.0, got 2"
    );
}

#[test]
fn test_same_seed_replays_outcomes() {
    let outcomes = |seed| {
        let random = SeededRandomProvider::new(seed);
        (0..256)
            .map(|_| random_success(&random, 0.5).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(outcomes(2024), outcomes(2024));
    assert_ne!(outcomes(2024), outcomes(2025));
}
