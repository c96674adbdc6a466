//! Shortest-Job-First (non-preemptive).
//!
//! # Algorithm
//!
//! Repeat until every process is complete:
//! 1. Among arrived, unfinished processes pick the smallest burst
//!    (ties: lowest original index).
//! 2. If none has arrived, jump the clock to the next arrival.
//! 3. Run the chosen process to completion.
//!
//! # Reference
//! Smith (1956), SPT is optimal for mean flow time on a single machine
//! when all jobs are available at t=0.

use super::non_preemptive::run_by_key;
use super::SchedulingPolicy;
use crate::models::{ProcessDescriptor, ScheduleReport};
use crate::validation::{validate_non_empty, ScheduleError};

/// Shortest-Job-First (non-preemptive).
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn description(&self) -> &'static str {
        "Shortest-Job-First (non-preemptive)"
    }

    fn schedule(&self, batch: &[ProcessDescriptor]) -> Result<ScheduleReport, ScheduleError> {
        validate_non_empty(batch)?;
        let outcomes = run_by_key(batch, |p| p.burst());
        Ok(ScheduleReport::from_outcomes(self.name(), outcomes))
    }
}
