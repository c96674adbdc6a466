//! Scheduling domain models.
//!
//! Provides the value types shared by every policy: the input
//! `ProcessDescriptor` and the output `ProcessOutcome` / `ScheduleResult` /
//! `ScheduleReport`.
//!
//! # Terminology
//!
//! | cpu-schedule | Textbook | On-disk record |
//! |--------------|----------|----------------|
//! | burst_time | CPU burst | remaining_burst_time |
//! | priority | static priority | priority |
//! | arrival_time | arrival | arrival |
//! | total_run_time | makespan | - |

mod outcome;
mod process;

pub use outcome::{ProcessOutcome, ScheduleReport, ScheduleResult};
pub use process::{arrival_order, ProcessDescriptor};
