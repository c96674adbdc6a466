//! Batch CPU-scheduling simulator.
//!
//! Computes average waiting time, average turnaround time and makespan for a
//! fixed batch of processes under a classical scheduling discipline. Nothing
//! is executed: the simulation only reasons about arrival and burst ticks.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessDescriptor`, `ProcessOutcome`,
//!   `ScheduleResult`, `ScheduleReport`
//! - **`policy`**: FCFS, SJF, Priority, Round-Robin, SRT and the
//!   `SchedulingPolicy` trait
//! - **`metrics`**: Aggregation of per-process outcomes and extended KPIs
//! - **`validation`**: Input preconditions and the `ScheduleError` taxonomy
//! - **`pcb_file`**: Binary process-descriptor file reader/writer
//! - **`workload`**: Seeded random batch generation
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod metrics;
pub mod models;
pub mod pcb_file;
pub mod policy;
pub mod validation;
pub mod workload;

pub use metrics::ScheduleKpi;
pub use models::{ProcessDescriptor, ProcessOutcome, ScheduleReport, ScheduleResult};
pub use policy::{simulate, PolicyKind, SchedulingPolicy};
pub use validation::{ScheduleError, ScheduleErrorKind};
