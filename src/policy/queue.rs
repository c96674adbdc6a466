//! Arrival admission and ready-set structures shared by the event-driven
//! policies (SJF, Priority, SRT).
//!
//! # Complexity
//! Each process is admitted once and pushed/popped O(1) times per
//! preemption, so a run is O(n log n + p log n) where p is the number of
//! preemptions, instead of a linear rescan per selection.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::models::{arrival_order, ProcessDescriptor};

/// Hands out batch indices in arrival order as the clock passes them.
#[derive(Debug)]
pub(crate) struct Admission<'a> {
    batch: &'a [ProcessDescriptor],
    order: Vec<usize>,
    cursor: usize,
}

impl<'a> Admission<'a> {
    pub(crate) fn new(batch: &'a [ProcessDescriptor]) -> Self {
        Self {
            batch,
            order: arrival_order(batch),
            cursor: 0,
        }
    }

    /// Admits every pending process with `arrival_time <= clock`.
    pub(crate) fn admit(&mut self, clock: u64, mut on_arrival: impl FnMut(usize)) {
        while let Some(&index) = self.order.get(self.cursor) {
            if self.batch[index].arrival() > clock {
                break;
            }
            on_arrival(index);
            self.cursor += 1;
        }
    }

    /// Arrival tick of the next process not yet admitted.
    pub(crate) fn next_arrival(&self) -> Option<u64> {
        self.order
            .get(self.cursor)
            .map(|&index| self.batch[index].arrival())
    }
}

/// Min-ordered ready set keyed by `(key, original index)`.
///
/// The index component makes the lowest insertion index win every tie.
#[derive(Debug, Default)]
pub(crate) struct ReadyQueue {
    heap: BinaryHeap<Reverse<(u64, usize)>>,
}

impl ReadyQueue {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, key: u64, index: usize) {
        self.heap.push(Reverse((key, index)));
    }

    /// Removes the entry with the smallest `(key, index)`.
    pub(crate) fn pop(&mut self) -> Option<(u64, usize)> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }
}
