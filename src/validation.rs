//! Precondition checks for scheduling runs.
//!
//! Every policy validates its inputs once at entry. Detects:
//! - Absent batch reference
//! - Empty batch
//! - Zero round-robin quantum
//!
//! None of these is retried: re-running with the same inputs fails the same way.

use std::fmt;

use crate::models::ProcessDescriptor;

/// A scheduling precondition failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleError {
    /// Error category.
    pub kind: ScheduleErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of scheduling errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleErrorKind {
    /// A required input (the batch) was not supplied.
    InvalidArgument,
    /// The batch is present but holds no processes.
    EmptyBatch,
    /// A scheduling parameter is out of range (round-robin quantum of 0).
    InvalidParameter,
}

impl ScheduleError {
    pub(crate) fn new(kind: ScheduleErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            ScheduleErrorKind::InvalidArgument => "invalid argument",
            ScheduleErrorKind::EmptyBatch => "empty batch",
            ScheduleErrorKind::InvalidParameter => "invalid parameter",
        };
        write!(f, "{label}: {}", self.message)
    }
}

impl std::error::Error for ScheduleError {}

/// Checks that a batch was supplied and is non-empty.
///
/// # Returns
/// The batch slice on success, so callers can chain with `?`.
pub fn validate_batch(
    batch: Option<&[ProcessDescriptor]>,
) -> Result<&[ProcessDescriptor], ScheduleError> {
    let batch = batch.ok_or_else(|| {
        ScheduleError::new(ScheduleErrorKind::InvalidArgument, "no process batch supplied")
    })?;
    validate_non_empty(batch)?;
    Ok(batch)
}

/// Checks that a batch holds at least one process.
pub fn validate_non_empty(batch: &[ProcessDescriptor]) -> Result<(), ScheduleError> {
    if batch.is_empty() {
        return Err(ScheduleError::new(
            ScheduleErrorKind::EmptyBatch,
            "process batch contains zero processes",
        ));
    }
    Ok(())
}

/// Checks that a round-robin quantum is strictly positive.
pub fn validate_quantum(quantum: u32) -> Result<u64, ScheduleError> {
    if quantum == 0 {
        return Err(ScheduleError::new(
            ScheduleErrorKind::InvalidParameter,
            "round-robin quantum must be greater than zero",
        ));
    }
    Ok(u64::from(quantum))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_batch() {
        let err = validate_batch(None).unwrap_err();
        assert_eq!(err.kind, ScheduleErrorKind::InvalidArgument);
    }

    #[test]
    fn test_empty_batch() {
        let err = validate_batch(Some(&[][..])).unwrap_err();
        assert_eq!(err.kind, ScheduleErrorKind::EmptyBatch);
        assert!(err.to_string().starts_with("empty batch"));
    }

    #[test]
    fn test_valid_batch() {
        let batch = [ProcessDescriptor::new(1, 0, 0)];
        assert_eq!(validate_batch(Some(&batch[..])).unwrap().len(), 1);
    }

    #[test]
    fn test_zero_quantum() {
        let err = validate_quantum(0).unwrap_err();
        assert_eq!(err.kind, ScheduleErrorKind::InvalidParameter);
        assert_eq!(validate_quantum(3), Ok(3));
    }
}
