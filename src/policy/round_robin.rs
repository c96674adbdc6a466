//! Round-Robin (preemptive, fixed quantum).
//!
//! # Algorithm
//!
//! Sweep the batch in original order, once per round. Every arrived,
//! unfinished process receives `min(remaining, quantum)` ticks and the clock
//! advances by that amount, so a process arriving mid-sweep is picked up by
//! the same sweep if its turn has not passed yet. A sweep that runs nothing
//! means every unfinished process arrives later; the clock then moves to the
//! earliest such arrival.
//!
//! Waiting time is `completion - arrival - burst`: total CPU received
//! always equals the original burst, so all other time in the system is
//! waiting.
//!
//! # Complexity
//! O(n * rounds).

use super::SchedulingPolicy;
use crate::models::{ProcessDescriptor, ProcessOutcome, ScheduleReport};
use crate::validation::{validate_non_empty, validate_quantum, ScheduleError};

/// Round-Robin with a fixed time quantum.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    /// Maximum CPU slice per turn (ticks). Must be non-zero.
    pub quantum: u32,
}

impl RoundRobin {
    /// Creates a round-robin policy with the given quantum.
    pub fn new(quantum: u32) -> Self {
        Self { quantum }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn description(&self) -> &'static str {
        "Round-Robin (preemptive, fixed quantum)"
    }

    fn schedule(&self, batch: &[ProcessDescriptor]) -> Result<ScheduleReport, ScheduleError> {
        let quantum = validate_quantum(self.quantum)?;
        validate_non_empty(batch)?;
        Ok(ScheduleReport::from_outcomes(self.name(), run(batch, quantum)))
    }
}

fn run(batch: &[ProcessDescriptor], quantum: u64) -> Vec<ProcessOutcome> {
    let mut remaining: Vec<u64> = batch.iter().map(|p| p.burst()).collect();
    let mut first_run: Vec<Option<u64>> = vec![None; batch.len()];
    let mut finished = vec![false; batch.len()];
    let mut outcomes = Vec::with_capacity(batch.len());
    let mut clock: u64 = 0;

    while outcomes.len() < batch.len() {
        let mut progressed = false;

        for (index, process) in batch.iter().enumerate() {
            if finished[index] || process.arrival() > clock {
                continue;
            }

            let first = *first_run[index].get_or_insert(clock);
            let slice = remaining[index].min(quantum);
            clock += slice;
            remaining[index] -= slice;
            progressed = true;

            if remaining[index] == 0 {
                finished[index] = true;
                outcomes.push(ProcessOutcome::new(
                    index,
                    process.arrival(),
                    process.burst(),
                    first,
                    clock,
                ));
            }
        }

        if !progressed {
            // Idle sweep: every unfinished process arrives after `clock`
            clock = batch
                .iter()
                .zip(&finished)
                .filter(|&(_, &done)| !done)
                .map(|(p, _)| p.arrival())
                .min()
                .unwrap_or(clock + 1);
        }
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ScheduleErrorKind;

    /// One-tick-per-idle-sweep variant, for checking the arrival jump.
    fn reference(batch: &[ProcessDescriptor], quantum: u64) -> Vec<ProcessOutcome> {
        let mut remaining: Vec<u64> = batch.iter().map(|p| p.burst()).collect();
        let mut first_run: Vec<Option<u64>> = vec![None; batch.len()];
        let mut finished = vec![false; batch.len()];
        let mut outcomes = Vec::new();
        let mut clock: u64 = 0;

        while outcomes.len() < batch.len() {
            let mut progressed = false;
            for (i, p) in batch.iter().enumerate() {
                if finished[i] || p.arrival() > clock {
                    continue;
                }
                let first = *first_run[i].get_or_insert(clock);
                let slice = remaining[i].min(quantum);
                clock += slice;
                remaining[i] -= slice;
                progressed = true;
                if remaining[i] == 0 {
                    finished[i] = true;
                    outcomes.push(ProcessOutcome::new(i, p.arrival(), p.burst(), first, clock));
                }
            }
            if !progressed {
                clock += 1;
            }
        }

        outcomes.sort_by_key(|o| o.index);
        outcomes
    }

    #[test]
    fn test_rr_zero_quantum() {
        let batch = vec![ProcessDescriptor::new(3, 0, 0)];
        let err = RoundRobin::new(0).schedule(&batch).unwrap_err();
        assert_eq!(err.kind, ScheduleErrorKind::InvalidParameter);
    }

    #[test]
    fn test_rr_zero_quantum_checked_before_empty() {
        let err = RoundRobin::new(0).schedule(&[]).unwrap_err();
        assert_eq!(err.kind, ScheduleErrorKind::InvalidParameter);
    }

    #[test]
    fn test_rr_interleaving() {
        // q=2: P0 0-2, P1 2-4, P2 4-5 done, P0 5-7, P1 7-8 done, P0 8-9 done
        let batch = vec![
            ProcessDescriptor::new(5, 0, 0),
            ProcessDescriptor::new(3, 0, 0),
            ProcessDescriptor::new(1, 0, 0),
        ];
        let report = RoundRobin::new(2).schedule(&batch).unwrap();
        let completions: Vec<u64> = report.outcomes.iter().map(|o| o.completion).collect();
        assert_eq!(completions, vec![9, 8, 5]);
        let responses: Vec<u64> = report.outcomes.iter().map(|o| o.response()).collect();
        assert_eq!(responses, vec![0, 2, 4]);
    }

    #[test]
    fn test_rr_large_quantum_is_fcfs_like() {
        let batch = vec![
            ProcessDescriptor::new(4, 0, 0),
            ProcessDescriptor::new(2, 0, 1),
        ];
        let report = RoundRobin::new(100).schedule(&batch).unwrap();
        assert_eq!(report.outcomes[0].completion, 4);
        assert_eq!(report.outcomes[1].completion, 6);
    }

    #[test]
    fn test_rr_late_arrival_idle() {
        let batch = vec![
            ProcessDescriptor::new(2, 0, 0),
            ProcessDescriptor::new(3, 0, 9),
        ];
        let report = RoundRobin::new(1).schedule(&batch).unwrap();
        assert_eq!(report.outcomes[0].completion, 2);
        assert_eq!(report.outcomes[1].first_run, 9);
        assert_eq!(report.outcomes[1].completion, 12);
        assert_eq!(report.result.total_run_time, 12);
    }

    #[test]
    fn test_rr_zero_burst_completes_when_reached() {
        let batch = vec![
            ProcessDescriptor::new(3, 0, 0),
            ProcessDescriptor::new(0, 0, 1),
        ];
        let report = RoundRobin::new(2).schedule(&batch).unwrap();
        // Reached right after P0's first slice at t=2
        assert_eq!(report.outcomes[1].completion, 2);
        assert_eq!(report.outcomes[1].waiting(), 1);
        assert_eq!(report.outcomes[0].completion, 3);
    }

    #[test]
    fn test_rr_matches_tick_idle_reference() {
        use crate::workload::WorkloadGenerator;

        for seed in 0..30 {
            let batch = WorkloadGenerator::new(12)
                .with_burst_range(1, 7)
                .with_arrival_span(60)
                .with_zero_burst_rate(0.1)
                .generate(seed);
            for quantum in [1, 3] {
                let report = RoundRobin::new(quantum as u32).schedule(&batch).unwrap();
                assert_eq!(report.outcomes, reference(&batch, quantum), "seed {seed}");
            }
        }
    }
}
