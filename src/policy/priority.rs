//! Static priority scheduling (non-preemptive).
//!
//! Same control structure as SJF with the selection key replaced by the
//! descriptor's priority (lower value = scheduled first). A process is only
//! ever selected after it has arrived; when nothing is eligible the clock
//! advances to the next arrival.

use super::non_preemptive::run_by_key;
use super::SchedulingPolicy;
use crate::models::{ProcessDescriptor, ScheduleReport};
use crate::validation::{validate_non_empty, ScheduleError};

/// Priority scheduling (non-preemptive, lower value first).
#[derive(Debug, Clone, Copy, Default)]
pub struct Priority;

impl SchedulingPolicy for Priority {
    fn name(&self) -> &'static str {
        "P"
    }

    fn description(&self) -> &'static str {
        "Priority (non-preemptive)"
    }

    fn schedule(&self, batch: &[ProcessDescriptor]) -> Result<ScheduleReport, ScheduleError> {
        validate_non_empty(batch)?;
        let outcomes = run_by_key(batch, |p| u64::from(p.priority));
        Ok(ScheduleReport::from_outcomes(self.name(), outcomes))
    }
}
