//! Random process batch generation.
//!
//! Produces reproducible batches for benchmarking policies against each
//! other. The same seed and parameters always yield the same batch.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::workload::WorkloadGenerator;
//!
//! let batch = WorkloadGenerator::new(16)
//!     .with_burst_range(1, 8)
//!     .with_arrival_span(20)
//!     .generate(42);
//! assert_eq!(batch.len(), 16);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::ProcessDescriptor;

/// Builder for random process batches.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    min_burst: u32,
    max_burst: u32,
    max_priority: u32,
    arrival_span: u32,
    zero_burst_rate: f64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes.
    ///
    /// Defaults: bursts in 1..=10, priorities in 0..=4, all arrivals at t=0.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            min_burst: 1,
            max_burst: 10,
            max_priority: 4,
            arrival_span: 0,
            zero_burst_rate: 0.0,
        }
    }

    /// Sets the inclusive burst range. Bounds are swapped if reversed.
    pub fn with_burst_range(mut self, min: u32, max: u32) -> Self {
        self.min_burst = min.min(max);
        self.max_burst = min.max(max);
        self
    }

    /// Sets the largest priority value (inclusive).
    pub fn with_max_priority(mut self, max_priority: u32) -> Self {
        self.max_priority = max_priority;
        self
    }

    /// Spreads arrivals uniformly over `0..=span`.
    pub fn with_arrival_span(mut self, span: u32) -> Self {
        self.arrival_span = span;
        self
    }

    /// Fraction (0.0..=1.0) of processes generated with a zero burst.
    pub fn with_zero_burst_rate(mut self, rate: f64) -> Self {
        self.zero_burst_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Generates a batch from the given seed.
    pub fn generate(&self, seed: u64) -> Vec<ProcessDescriptor> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..self.count)
            .map(|_| {
                let burst = if rng.random::<f64>() < self.zero_burst_rate {
                    0
                } else {
                    rng.random_range(self.min_burst..=self.max_burst)
                };
                let priority = rng.random_range(0..=self.max_priority);
                let arrival = rng.random_range(0..=self.arrival_span);
                ProcessDescriptor::new(burst, priority, arrival)
            })
            .collect()
    }
}
