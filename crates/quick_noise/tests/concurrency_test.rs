//! # Shared Evaluation
//!
//! Evaluators are immutable after construction; many threads may sample one
//! evaluator at once and must see the same field as a single thread.

use std::thread;

use quick_noise::{create, Evaluator, Seed, DEFAULT};

fn assert_send_sync<T: Send + Sync>() {}

fn sample_row(evaluator: &Evaluator, row: u32) -> Vec<f64> {
    (0..256)
        .map(|col| {
            let x = f64::from(col) * 0.173;
            let y = f64::from(row) * 0.291;
            evaluator.noise_wrapped(x, y, 1.0, 32, 32, 0)
        })
        .collect()
}

/// Test: Evaluators can cross thread boundaries.
#[test]
fn test_evaluator_is_send_sync() {
    assert_send_sync::<Evaluator>();
}

/// Test: Parallel sampling of the default evaluator matches sequential sampling.
#[test]
fn test_parallel_default_matches_sequential() {
    let sequential: Vec<Vec<f64>> = (0..16).map(|row| sample_row(&DEFAULT, row)).collect();

    let parallel: Vec<Vec<f64>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|row| scope.spawn(move || sample_row(&DEFAULT, row)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("sampling thread panicked"))
            .collect()
    });

    assert_eq!(sequential, parallel, "Threads must see the same field");
}

/// Test: Independent evaluators built on separate threads agree for one seed.
#[test]
fn test_parallel_construction() {
    let evaluators: Vec<Evaluator> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| create(Seed::from_u64(2024))))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("construction thread panicked"))
            .collect()
    });

    let first = &evaluators[0];
    for evaluator in &evaluators[1..] {
        assert_eq!(evaluator, first);
        assert_eq!(sample_row(evaluator, 3), sample_row(first, 3));
    }
}
