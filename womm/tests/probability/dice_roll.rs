//! Tests for the uniform die roll.

use womm::{SeededRandomProvider, ThreadRandomProvider, dice_roll};

#[test]
fn test_faces_are_uniform() {
    const TRIALS: usize = 120_000;
    let random = SeededRandomProvider::new(6);
    let mut counts = [0usize; 6];

    for _ in 0..TRIALS {
        let roll = dice_roll(&random);
        assert!((1..=6).contains(&roll), "roll out of range: {roll}");
        counts[usize::from(roll - 1)] += 1;
    }

    for (face, &count) in counts.iter().enumerate() {
        let frequency = count as f64 / TRIALS as f64;
        assert!(
            (frequency - 1.0 / 6.0).abs() < 0.01,
            "face {} frequency {frequency}",
            face + 1
        );
    }
}

#[test]
fn test_every_face_appears_with_real_entropy() {
    let random = ThreadRandomProvider::new();
    let mut seen = [false; 6];
    for _ in 0..10_000 {
        let roll = dice_roll(&random);
        assert!((1..=6).contains(&roll));
        seen[usize::from(roll - 1)] = true;
    }
    assert!(seen.iter().all(|&s| s));
}
