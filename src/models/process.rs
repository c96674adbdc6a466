//! Process descriptor model.
//!
//! A process descriptor is the unit of work every scheduling policy consumes:
//! a CPU burst requirement, a static priority and an arrival tick.
//!
//! # Time Representation
//! All times are integer simulation ticks relative to t=0. Descriptor fields
//! are `u32` to match the on-disk record layout; the simulation clock and
//! everything derived from it is `u64`.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Descriptors are immutable inputs: policies build their own working state
/// (remaining burst counters) and never write back into the caller's batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// CPU time required to run to completion (ticks).
    pub burst_time: u32,
    /// Static priority (lower value = scheduled first).
    pub priority: u32,
    /// Tick at which the process becomes eligible for scheduling.
    pub arrival_time: u32,
    /// First-run marker. Not part of the on-disk format; always `false`
    /// when a record is materialized.
    #[serde(default)]
    pub started: bool,
}

impl ProcessDescriptor {
    /// Creates a descriptor in on-disk field order `(burst, priority, arrival)`.
    pub fn new(burst_time: u32, priority: u32, arrival_time: u32) -> Self {
        Self {
            burst_time,
            priority,
            arrival_time,
            started: false,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: u32) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Arrival time on the simulation clock.
    #[inline]
    pub fn arrival(&self) -> u64 {
        u64::from(self.arrival_time)
    }

    /// Burst time on the simulation clock.
    #[inline]
    pub fn burst(&self) -> u64 {
        u64::from(self.burst_time)
    }
}

/// Returns batch indices in ascending arrival order.
///
/// Equal arrivals keep their original insertion order (`sort_by_key` is
/// stable). The batch itself is left untouched.
pub fn arrival_order(batch: &[ProcessDescriptor]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..batch.len()).collect();
    indices.sort_by_key(|&i| batch[i].arrival_time);
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_builder() {
        let p = ProcessDescriptor::new(7, 0, 0)
            .with_priority(3)
            .with_arrival(12);

        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, 3);
        assert_eq!(p.arrival_time, 12);
        assert!(!p.started);
        assert_eq!(p, ProcessDescriptor::new(7, 3, 12));
    }

    #[test]
    fn test_arrival_order_stable() {
        let batch = vec![
            ProcessDescriptor::new(1, 0, 5),
            ProcessDescriptor::new(2, 0, 0),
            ProcessDescriptor::new(3, 0, 5),
            ProcessDescriptor::new(4, 0, 0),
        ];
        assert_eq!(arrival_order(&batch), vec![1, 3, 0, 2]);
        // Caller's order is preserved
        assert_eq!(batch[0].burst_time, 1);
    }

    #[test]
    fn test_arrival_order_empty() {
        assert!(arrival_order(&[]).is_empty());
    }

    #[test]
    fn test_started_defaults_on_deserialize() {
        let p: ProcessDescriptor =
            serde_json::from_str(r#"{"burst_time":5,"priority":1,"arrival_time":2}"#).unwrap();
        assert_eq!(p, ProcessDescriptor::new(5, 1, 2));
    }
}
