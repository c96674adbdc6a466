//! Shared driver for the non-preemptive selection policies (SJF, Priority).
//!
//! Both pick the arrived, unfinished process with the smallest key and run it
//! to completion; they differ only in the key.

use super::queue::{Admission, ReadyQueue};
use crate::models::{ProcessDescriptor, ProcessOutcome};

/// Runs a non-preemptive simulation selecting by `(key, index)`.
///
/// When nothing has arrived, the clock jumps straight to the next arrival.
pub(crate) fn run_by_key(
    batch: &[ProcessDescriptor],
    key: impl Fn(&ProcessDescriptor) -> u64,
) -> Vec<ProcessOutcome> {
    let mut admission = Admission::new(batch);
    let mut ready = ReadyQueue::with_capacity(batch.len());
    let mut outcomes = Vec::with_capacity(batch.len());
    let mut clock: u64 = 0;

    while outcomes.len() < batch.len() {
        admission.admit(clock, |index| ready.push(key(&batch[index]), index));

        let Some((_, index)) = ready.pop() else {
            match admission.next_arrival() {
                Some(arrival) => {
                    clock = arrival;
                    continue;
                }
                None => break,
            }
        };

        let process = &batch[index];
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

/// Straightforward rescan-every-selection simulation used to cross-check
/// the indexed driver.
#[cfg(test)]
pub(crate) fn reference_by_key(
    batch: &[ProcessDescriptor],
    key: impl Fn(&ProcessDescriptor) -> u64,
) -> Vec<ProcessOutcome> {
    let mut done = vec![false; batch.len()];
    let mut outcomes = Vec::new();
    let mut clock: u64 = 0;

    while outcomes.len() < batch.len() {
        let mut chosen: Option<usize> = None;
        for (i, p) in batch.iter().enumerate() {
            if done[i] || p.arrival() > clock {
                continue;
            }
            if chosen.map_or(true, |c| key(p) < key(&batch[c])) {
                chosen = Some(i);
            }
        }

        match chosen {
            Some(i) => {
                let start = clock;
                clock += batch[i].burst();
                done[i] = true;
                outcomes.push(ProcessOutcome::new(
                    i,
                    batch[i].arrival(),
                    batch[i].burst(),
                    start,
                    clock,
                ));
            }
            None => clock += 1,
        }
    }

    outcomes.sort_by_key(|o| o.index);
    outcomes
}
