//! CPU scheduling policies.
//!
//! Five independent, stateless simulations sharing only the data model and
//! the result aggregation: FCFS, SJF, Priority, Round-Robin and SRT. Each
//! treats the batch as a read-only snapshot, so one batch can be replayed
//! under every policy.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::models::ProcessDescriptor;
//! use cpu_schedule::policy::{self, PolicyKind};
//!
//! let batch = vec![
//!     ProcessDescriptor::new(10, 1, 0),
//!     ProcessDescriptor::new(2, 1, 2),
//!     ProcessDescriptor::new(1, 1, 3),
//! ];
//!
//! let result = policy::shortest_job_first(&batch).unwrap();
//! assert_eq!(result.total_run_time, 13);
//!
//! let rr = PolicyKind::RoundRobin.build(4);
//! let report = policy::simulate(rr.as_ref(), Some(batch.as_slice())).unwrap();
//! assert_eq!(report.outcomes.len(), 3);
//! ```
//!
//! # Tie-breaking
//! Every selection key is extended with the original batch index, so equal
//! keys always resolve to the earliest-inserted process.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod fcfs;
mod non_preemptive;
mod priority;
mod queue;
mod round_robin;
mod sjf;
mod srt;

pub use fcfs::Fcfs;
pub use priority::Priority;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srt::Srt;

use std::fmt::{self, Debug};
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::models::{ProcessDescriptor, ScheduleReport, ScheduleResult};
use crate::validation::{validate_batch, ScheduleError, ScheduleErrorKind};

/// A scheduling discipline that simulates a batch to completion.
pub trait SchedulingPolicy: Debug {
    /// Short name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Simulates the batch and returns per-process outcomes plus aggregates.
    ///
    /// Fails on an empty batch (and, for round-robin, a zero quantum).
    fn schedule(&self, batch: &[ProcessDescriptor]) -> Result<ScheduleReport, ScheduleError>;
}

/// Policy selector, named by the conventional short names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest-Job-First.
    #[serde(rename = "SJF")]
    Sjf,
    /// Non-preemptive priority.
    #[serde(rename = "P")]
    Priority,
    /// Round-Robin.
    #[serde(rename = "RR")]
    RoundRobin,
    /// Shortest-Remaining-Time.
    #[serde(rename = "SRT")]
    Srt,
}

impl PolicyKind {
    /// Every policy, in presentation order.
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Fcfs,
        PolicyKind::Sjf,
        PolicyKind::Priority,
        PolicyKind::RoundRobin,
        PolicyKind::Srt,
    ];

    /// Short name as accepted by `FromStr`.
    pub fn short_name(self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "FCFS",
            PolicyKind::Sjf => "SJF",
            PolicyKind::Priority => "P",
            PolicyKind::RoundRobin => "RR",
            PolicyKind::Srt => "SRT",
        }
    }

    /// Whether the policy takes a quantum.
    pub fn uses_quantum(self) -> bool {
        matches!(self, PolicyKind::RoundRobin)
    }

    /// Instantiates the policy. `quantum` is ignored unless round-robin.
    pub fn build(self, quantum: u32) -> Box<dyn SchedulingPolicy> {
        match self {
            PolicyKind::Fcfs => Box::new(Fcfs),
            PolicyKind::Sjf => Box::new(Sjf),
            PolicyKind::Priority => Box::new(Priority),
            PolicyKind::RoundRobin => Box::new(RoundRobin::new(quantum)),
            PolicyKind::Srt => Box::new(Srt),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for PolicyKind {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.short_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ScheduleError::new(
                    ScheduleErrorKind::InvalidArgument,
                    format!("unknown scheduling policy '{s}' (expected FCFS, SJF, P, RR or SRT)"),
                )
            })
    }
}

/// Runs a policy on a possibly absent batch.
///
/// An absent batch is an `InvalidArgument` failure; an empty one is
/// `EmptyBatch`. No partial report is produced on failure.
pub fn simulate(
    policy: &dyn SchedulingPolicy,
    batch: Option<&[ProcessDescriptor]>,
) -> Result<ScheduleReport, ScheduleError> {
    let report = validate_batch(batch).and_then(|batch| policy.schedule(batch));

    match &report {
        Ok(report) => {
            debug!(
                "{}: {} processes, avg wait {:.2}, avg turnaround {:.2}, total {}",
                policy.name(),
                report.process_count(),
                report.result.average_waiting_time,
                report.result.average_turnaround_time,
                report.result.total_run_time
            );
            for outcome in &report.outcomes {
                trace!(
                    "{}: process {} first run {} completed {}",
                    policy.name(),
                    outcome.index,
                    outcome.first_run,
                    outcome.completion
                );
            }
        }
        Err(err) => debug!("{} rejected input: {err}", policy.name()),
    }

    report
}

/// First-Come-First-Served over `batch`.
pub fn first_come_first_serve(batch: &[ProcessDescriptor]) -> Result<ScheduleResult, ScheduleError> {
    Fcfs.schedule(batch).map(|report| report.result)
}

/// Non-preemptive Shortest-Job-First over `batch`.
pub fn shortest_job_first(batch: &[ProcessDescriptor]) -> Result<ScheduleResult, ScheduleError> {
    Sjf.schedule(batch).map(|report| report.result)
}

/// Non-preemptive priority scheduling over `batch` (lower value first).
pub fn priority(batch: &[ProcessDescriptor]) -> Result<ScheduleResult, ScheduleError> {
    Priority.schedule(batch).map(|report| report.result)
}

/// Round-Robin over `batch` with the given quantum.
pub fn round_robin(
    batch: &[ProcessDescriptor],
    quantum: u32,
) -> Result<ScheduleResult, ScheduleError> {
    RoundRobin::new(quantum)
        .schedule(batch)
        .map(|report| report.result)
}

/// Preemptive Shortest-Remaining-Time over `batch`.
pub fn shortest_remaining_time_first(
    batch: &[ProcessDescriptor],
) -> Result<ScheduleResult, ScheduleError> {
    Srt.schedule(batch).map(|report| report.result)
}
