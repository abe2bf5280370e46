//! Operation and resize accounting for stress reports.
//!
//! Collects per-trial counters from the differential stress harness and
//! prints an aggregated summary. Tracks how often the queue grew and shrank
//! and the largest capacity it ever reached, which makes the hysteresis
//! policy visible across a whole stress run.

/// Counters accumulated over one or more stress trials.
///
/// Grows and shrinks are detected from the outside by watching the queue's
/// reported capacity before and after each operation, so the numbers reflect
/// exactly what a caller of the public API can observe.
pub struct ResizeStats {
    pub pushes: u64,
    pub pops: u64,
    pub grows: u64,
    pub shrinks: u64,
    pub peak_capacity: usize,
}

impl ResizeStats {
    /// Creates an empty counter set.
    pub fn new() -> Self {
        Self {
            pushes: 0,
            pops: 0,
            grows: 0,
            shrinks: 0,
            peak_capacity: 0,
        }
    }

    /// Folds another trial's counters into this one.
    pub fn merge(&mut self, other: &ResizeStats) {
        self.pushes += other.pushes;
        self.pops += other.pops;
        self.grows += other.grows;
        self.shrinks += other.shrinks;
        self.peak_capacity = self.peak_capacity.max(other.peak_capacity);
    }

    /// Prints a formatted summary of the aggregated counters.
    ///
    /// Reports operation totals, resize counts, the peak capacity seen in
    /// any trial, and overall throughput across the run.
    pub fn print_report(&self, trials: usize, seconds: f64) {
        println!("\nStress Summary");
        println!("Trials:        {}", trials);
        println!("Pushes:        {}", self.pushes);
        println!("Pops:          {}", self.pops);
        println!("Grows:         {}", self.grows);
        println!("Shrinks:       {}", self.shrinks);
        println!("Peak capacity: {}", self.peak_capacity);
        if seconds > 0.0 {
            let total_ops = self.pushes + self.pops;
            println!("Time:          {:.4} s", seconds);
            println!(
                "Throughput:    {:.2} Mops/s",
                total_ops as f64 / seconds / 1e6
            );
        }
    }
}
