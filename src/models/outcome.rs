//! Simulation outcome model.
//!
//! A policy run yields one `ProcessOutcome` per descriptor and a
//! batch-level `ScheduleResult`. `ScheduleReport` bundles both.

use serde::{Deserialize, Serialize};

/// Per-process record of a completed simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Position of the descriptor in the caller's batch.
    pub index: usize,
    /// Arrival tick.
    pub arrival: u64,
    /// Original burst (not the remaining counter).
    pub burst: u64,
    /// Tick at which the process was first selected.
    pub first_run: u64,
    /// Tick at which the process finished.
    pub completion: u64,
}

impl ProcessOutcome {
    /// Creates an outcome record.
    pub fn new(index: usize, arrival: u64, burst: u64, first_run: u64, completion: u64) -> Self {
        Self {
            index,
            arrival,
            burst,
            first_run,
            completion,
        }
    }

    /// Elapsed time from arrival to completion.
    #[inline]
    pub fn turnaround(&self) -> u64 {
        self.completion - self.arrival
    }

    /// Time spent eligible but not running: `turnaround - burst`.
    #[inline]
    pub fn waiting(&self) -> u64 {
        self.turnaround() - self.burst
    }

    /// Time from arrival to first selection.
    #[inline]
    pub fn response(&self) -> u64 {
        self.first_run - self.arrival
    }
}

/// Batch-level performance statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Mean waiting time across the batch.
    pub average_waiting_time: f64,
    /// Mean turnaround time across the batch.
    pub average_turnaround_time: f64,
    /// Clock value at which the last process finished (makespan).
    pub total_run_time: u64,
}

/// Full report of a policy run.
///
/// `outcomes` is in original batch order, regardless of execution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Policy short name (e.g., "FCFS").
    pub policy: String,
    /// Batch averages and makespan.
    pub result: ScheduleResult,
    /// Mean response time (first run - arrival).
    pub average_response_time: f64,
    /// Per-process outcomes.
    pub outcomes: Vec<ProcessOutcome>,
}

impl ScheduleReport {
    /// Number of processes covered.
    pub fn process_count(&self) -> usize {
        self.outcomes.len()
    }
}
