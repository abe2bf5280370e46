//! Randomized differential stress for the ring queue.
//!
//! Runs many independent trials in parallel, each driving a queue with a
//! seeded random push/pop sequence while mirroring every operation into
//! `std::collections::VecDeque` as the reference. Any divergence in popped
//! values, peeked values, or lengths fails the trial. Trials also account
//! for grows and shrinks so the report shows the hysteresis policy at work.

use anyhow::{Result, bail};
use erq_core::ring_queue::RingQueue;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::VecDeque;
use std::time::Instant;

use crate::report::ResizeStats;

pub fn run_stress(trials: usize, ops: usize, capacity: usize, seed: u64) -> Result<()> {
    println!(
        "Stressing RingQueue: {} trials x {} ops (initial capacity {})...",
        trials, ops, capacity
    );
    let start = Instant::now();

    let outcomes: Vec<Result<ResizeStats, String>> = (0..trials)
        .into_par_iter()
        .map(|trial| run_trial(seed.wrapping_add(trial as u64), ops, capacity))
        .collect();

    let mut stats = ResizeStats::new();
    let mut failures = 0usize;
    for outcome in &outcomes {
        match outcome {
            Ok(trial_stats) => stats.merge(trial_stats),
            Err(msg) => {
                eprintln!("FAIL: {}", msg);
                failures += 1;
            }
        }
    }

    let seconds = start.elapsed().as_secs_f64();
    stats.print_report(trials, seconds);

    if failures > 0 {
        bail!(
            "{} of {} trials diverged from the reference deque",
            failures,
            trials
        );
    }
    println!("\nAll {} trials matched the reference deque.", trials);
    Ok(())
}

fn run_trial(seed: u64, ops: usize, capacity: usize) -> Result<ResizeStats, String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut queue = RingQueue::with_capacity(capacity);
    let mut model = VecDeque::new();
    let mut stats = ResizeStats::new();
    let mut next = 0u64;

    for _ in 0..ops {
        let before = queue.capacity();
        if model.is_empty() || rng.gen_range(0..100) < 55 {
            if queue.push(next).is_err() {
                return Err(format!("seed {}: push rejected at len {}", seed, model.len()));
            }
            model.push_back(next);
            next += 1;
            stats.pushes += 1;
        } else {
            let got = queue.pop();
            let want = model.pop_front();
            if got != want {
                return Err(format!(
                    "seed {}: popped {:?}, reference holds {:?}",
                    seed, got, want
                ));
            }
            stats.pops += 1;
        }

        if queue.peek() != model.front() {
            return Err(format!("seed {}: front diverged from reference", seed));
        }
        if queue.len() != model.len() {
            return Err(format!(
                "seed {}: len {} diverged from reference {}",
                seed,
                queue.len(),
                model.len()
            ));
        }

        let after = queue.capacity();
        if after > before {
            stats.grows += 1;
        }
        if after < before {
            stats.shrinks += 1;
        }
        stats.peak_capacity = stats.peak_capacity.max(after);
    }

    while let Some(want) = model.pop_front() {
        if queue.pop() != Some(want) {
            return Err(format!("seed {}: drain diverged from reference", seed));
        }
        stats.pops += 1;
    }
    if !queue.is_empty() {
        return Err(format!("seed {}: queue not empty after drain", seed));
    }
    Ok(stats)
}
