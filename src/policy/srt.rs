//! Shortest-Remaining-Time (preemptive).
//!
//! # Algorithm
//!
//! Selection follows unit-tick semantics: at every tick the arrived,
//! unfinished process with the least remaining burst runs for one unit
//! (ties: lowest original index). The running process only gets cheaper to
//! finish, so the choice can change only when a new process arrives. The
//! simulation therefore runs the selected process until its completion or
//! the next arrival, whichever comes first, and re-selects there.
//!
//! # Complexity
//! O((n + p) log n) where p is the number of preemptions, versus
//! O(total_ticks * n) for a per-tick rescan.

use super::queue::{Admission, ReadyQueue};
use super::SchedulingPolicy;
use crate::models::{ProcessDescriptor, ProcessOutcome, ScheduleReport};
use crate::validation::{validate_non_empty, ScheduleError};

/// Shortest-Remaining-Time-First (preemptive).
#[derive(Debug, Clone, Copy, Default)]
pub struct Srt;

impl SchedulingPolicy for Srt {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn description(&self) -> &'static str {
        "Shortest-Remaining-Time (preemptive)"
    }

    fn schedule(&self, batch: &[ProcessDescriptor]) -> Result<ScheduleReport, ScheduleError> {
        validate_non_empty(batch)?;
        Ok(ScheduleReport::from_outcomes(self.name(), run(batch)))
    }
}

fn run(batch: &[ProcessDescriptor]) -> Vec<ProcessOutcome> {
    let mut admission = Admission::new(batch);
    let mut ready = ReadyQueue::with_capacity(batch.len());
    let mut remaining: Vec<u64> = batch.iter().map(|p| p.burst()).collect();
    let mut first_run: Vec<Option<u64>> = vec![None; batch.len()];
    let mut outcomes = Vec::with_capacity(batch.len());
    let mut clock: u64 = 0;

    while outcomes.len() < batch.len() {
        admission.admit(clock, |index| ready.push(remaining[index], index));

        let Some((_, index)) = ready.pop() else {
            match admission.next_arrival() {
                Some(arrival) => {
                    clock = arrival;
                    continue;
                }
                None => break,
            }
        };

        let first = *first_run[index].get_or_insert(clock);
        let run_for = match admission.next_arrival() {
            Some(arrival) => remaining[index].min(arrival - clock),
            None => remaining[index],
        };
        clock += run_for;
        remaining[index] -= run_for;

        if remaining[index] == 0 {
            let process = &batch[index];
            outcomes.push(ProcessOutcome::new(
                index,
                process.arrival(),
                process.burst(),
                first,
                clock,
            ));
        } else {
            ready.push(remaining[index], index);
        }
    }

    outcomes
}
