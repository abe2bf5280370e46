//! Scripted walkthrough of the grow/shrink policy.
//!
//! Pushes a short run of values into a queue that starts at the minimum
//! capacity, then drains it, printing every capacity transition along the
//! way. Finishes with a deliberate pop from the empty queue so the
//! diagnostic sink (wired to stderr here) can be seen doing its job.

use anyhow::{Result, bail};
use erq_core::ring_queue::RingQueue;
use erq_core::sink::FaultSink;

/// Sink that forwards diagnostic lines to stderr.
struct StderrSink;

impl FaultSink for StderrSink {
    fn line(&self, text: &str) {
        eprintln!("{}", text);
    }
}

static STDERR_SINK: StderrSink = StderrSink;

pub fn run_trace(pushes: u64) -> Result<()> {
    let mut queue = RingQueue::with_capacity_and_sink(2, &STDERR_SINK);
    println!("start   | capacity {}", queue.capacity());

    for v in 1..=pushes {
        let before = queue.capacity();
        if queue.push(v).is_err() {
            bail!("push rejected: queue could not grow");
        }
        let after = queue.capacity();
        if after != before {
            println!("push {:3} | capacity {} -> {} (grow)", v, before, after);
        } else {
            println!("push {:3} | capacity {}", v, after);
        }
    }
    println!("len {} after {} pushes", queue.len(), pushes);

    while !queue.is_empty() {
        let before = queue.capacity();
        let v = match queue.pop() {
            Some(v) => v,
            None => bail!("pop returned nothing from a non-empty queue"),
        };
        let after = queue.capacity();
        if after != before {
            println!("pop  {:3} | capacity {} -> {} (shrink)", v, before, after);
        } else {
            println!("pop  {:3} | capacity {}", v, after);
        }
    }

    println!("queue drained; popping once more to exercise the sink:");
    let _ = queue.pop();
    Ok(())
}
