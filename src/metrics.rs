//! Result aggregation and schedule quality metrics.
//!
//! Turns per-process outcomes into batch averages and a makespan, and
//! derives a few extra indicators on top.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Mean of (turnaround - burst) |
//! | Avg Turnaround | Mean of (completion - arrival) |
//! | Total Run Time | Latest completion time (makespan) |
//! | Avg Response | Mean of (first run - arrival) |
//! | Utilization | Sum of bursts / makespan |
//! | Throughput | Processes completed per tick of makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{ProcessOutcome, ScheduleReport, ScheduleResult};

impl ScheduleResult {
    /// Aggregates per-process outcomes into batch statistics.
    ///
    /// An empty slice yields the all-zero result.
    pub fn from_outcomes(outcomes: &[ProcessOutcome]) -> Self {
        if outcomes.is_empty() {
            return Self::default();
        }

        let mut total_wait: u64 = 0;
        let mut total_turnaround: u64 = 0;
        let mut makespan: u64 = 0;

        for outcome in outcomes {
            total_wait += outcome.waiting();
            total_turnaround += outcome.turnaround();
            makespan = makespan.max(outcome.completion);
        }

        let n = outcomes.len() as f64;
        Self {
            average_waiting_time: total_wait as f64 / n,
            average_turnaround_time: total_turnaround as f64 / n,
            total_run_time: makespan,
        }
    }
}

impl ScheduleReport {
    /// Builds a report from outcomes.
    ///
    /// Outcomes are re-ordered by their original batch index.
    pub fn from_outcomes(policy: impl Into<String>, mut outcomes: Vec<ProcessOutcome>) -> Self {
        outcomes.sort_by_key(|o| o.index);
        let result = ScheduleResult::from_outcomes(&outcomes);
        let average_response_time = if outcomes.is_empty() {
            0.0
        } else {
            outcomes.iter().map(|o| o.response()).sum::<u64>() as f64 / outcomes.len() as f64
        };

        Self {
            policy: policy.into(),
            result,
            average_response_time,
            outcomes,
        }
    }

    /// Computes the extended KPI view of this report.
    pub fn kpi(&self) -> ScheduleKpi {
        ScheduleKpi::calculate(self)
    }
}

/// Extended performance indicators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Makespan (ticks).
    pub makespan: u64,
    /// Total CPU time consumed (sum of bursts).
    pub busy_time: u64,
    /// Fraction of the makespan the CPU was busy (0.0..=1.0).
    pub utilization: f64,
    /// Processes completed per tick.
    pub throughput: f64,
    /// Longest single waiting time.
    pub max_waiting: u64,
}

impl ScheduleKpi {
    /// Computes KPIs from a finished report.
    pub fn calculate(report: &ScheduleReport) -> Self {
        let makespan = report.result.total_run_time;
        let busy_time: u64 = report.outcomes.iter().map(|o| o.burst).sum();
        let max_waiting = report
            .outcomes
            .iter()
            .map(|o| o.waiting())
            .max()
            .unwrap_or(0);

        // A batch of zero-burst processes finishing at t=0 has no span
        let (utilization, throughput) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                report.outcomes.len() as f64 / makespan as f64,
            )
        };

        Self {
            makespan,
            busy_time,
            utilization,
            throughput,
            max_waiting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_basic() {
        // FCFS over (10,0), (2,2), (1,3)
        let outcomes = vec![
            ProcessOutcome::new(0, 0, 10, 0, 10),
            ProcessOutcome::new(1, 2, 2, 10, 12),
            ProcessOutcome::new(2, 3, 1, 12, 13),
        ];
        let result = ScheduleResult::from_outcomes(&outcomes);
        assert_eq!(result.total_run_time, 13);
        assert!((result.average_waiting_time - 17.0 / 3.0).abs() < 1e-10);
        assert!((result.average_turnaround_time - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_result_empty() {
        let result = ScheduleResult::from_outcomes(&[]);
        assert_eq!(result, ScheduleResult::default());
    }

    #[test]
    fn test_report_sorted_by_index() {
        let report = ScheduleReport::from_outcomes(
            "SJF",
            vec![
                ProcessOutcome::new(1, 0, 2, 3, 5),
                ProcessOutcome::new(0, 0, 3, 0, 3),
            ],
        );
        assert_eq!(report.policy, "SJF");
        assert_eq!(report.outcomes[0].index, 0);
        assert_eq!(report.outcomes[1].index, 1);
        // Responses: 0 and 3
        assert!((report.average_response_time - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_utilization_with_idle_gap() {
        // CPU idle during [4, 6)
        let report = ScheduleReport::from_outcomes(
            "FCFS",
            vec![
                ProcessOutcome::new(0, 0, 4, 0, 4),
                ProcessOutcome::new(1, 6, 4, 6, 10),
            ],
        );
        let kpi = report.kpi();
        assert_eq!(kpi.makespan, 10);
        assert_eq!(kpi.busy_time, 8);
        assert!((kpi.utilization - 0.8).abs() < 1e-10);
        assert!((kpi.throughput - 0.2).abs() < 1e-10);
        assert_eq!(kpi.max_waiting, 0);
    }

    #[test]
    fn test_kpi_zero_makespan() {
        let report = ScheduleReport::from_outcomes("FCFS", vec![ProcessOutcome::new(0, 0, 0, 0, 0)]);
        let kpi = report.kpi();
        assert_eq!(kpi.makespan, 0);
        assert!((kpi.utilization - 0.0).abs() < 1e-10);
    }
}
