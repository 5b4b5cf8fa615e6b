//! Independence of randomness across execution contexts.

use std::thread;

use womm::{
    RandomProvider, SeededRandomProvider, ThreadRandomProvider, dice_roll, random_success,
};

const CONTEXTS: u64 = 8;
const DRAWS: usize = 512;

fn outcomes<R: RandomProvider>(random: &R) -> Vec<(bool, u8)> {
    (0..DRAWS)
        .map(|_| (random_success(random, 0.5).unwrap(), dice_roll(random)))
        .collect()
}

fn assert_pairwise_distinct(sequences: &[Vec<(bool, u8)>]) {
    for (i, a) in sequences.iter().enumerate() {
        for (j, b) in sequences.iter().enumerate().skip(i + 1) {
            assert_ne!(a, b, "contexts {i} and {j} observed identical sequences");
        }
    }
}

#[test]
fn test_thread_provider_contexts_are_uncorrelated() {
    let handles: Vec<_> = (0..CONTEXTS)
        .map(|_| thread::spawn(|| outcomes(&ThreadRandomProvider::new())))
        .collect();
    let sequences: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_pairwise_distinct(&sequences);
}

#[test]
fn test_forked_seeded_contexts_are_uncorrelated() {
    let root = SeededRandomProvider::new(31337);
    let handles: Vec<_> = (0..CONTEXTS)
        .map(|stream| {
            let random = root.fork(stream + 1);
            thread::spawn(move || outcomes(&random))
        })
        .collect();
    let sequences: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_pairwise_distinct(&sequences);
}

#[test]
fn test_shared_seeded_provider_is_thread_safe() {
    let random = SeededRandomProvider::new(5);
    let handles: Vec<_> = (0..CONTEXTS)
        .map(|_| {
            let random = random.clone();
            thread::spawn(move || outcomes(&random).len())
        })
        .collect();
    let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

    assert_eq!(total, CONTEXTS as usize * DRAWS);
    assert_eq!(random.draw_count(), (CONTEXTS as usize * DRAWS * 2) as u64);
}
