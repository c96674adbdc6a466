//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival (stable: ties keep insertion order).
//! 2. For each process, advance the clock to `max(clock, arrival)`.
//! 3. Run it to completion.
//!
//! # Complexity
//! O(n log n) for the ordering, O(n) for the simulation.

use super::SchedulingPolicy;
use crate::models::{arrival_order, ProcessDescriptor, ProcessOutcome, ScheduleReport};
use crate::validation::{validate_non_empty, ScheduleError};

/// First-Come-First-Served (non-preemptive).
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }

    fn schedule(&self, batch: &[ProcessDescriptor]) -> Result<ScheduleReport, ScheduleError> {
        validate_non_empty(batch)?;
        Ok(ScheduleReport::from_outcomes(self.name(), run(batch)))
    }
}

fn run(batch: &[ProcessDescriptor]) -> Vec<ProcessOutcome> {
    let mut clock: u64 = 0;
    let mut outcomes = Vec::with_capacity(batch.len());

    for index in arrival_order(batch) {
        let process = &batch[index];
        clock = clock.max(process.arrival());
        let start = clock;
        clock += process.burst();
        outcomes.push(ProcessOutcome::new(
            index,
            process.arrival(),
            process.burst(),
            start,
            clock,
        ));
    }

    outcomes
}
