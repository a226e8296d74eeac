//! Fatal contract errors.
//!
//! Data-quality problems — unparseable durations, unmatched tanks,
//! jobs with no feasible window — never surface here; those are
//! collected as `ExclusionRecord`s so a batch run always completes.
//! This module covers programming-contract violations only: parameters
//! the caller promised to keep well-formed.

use thiserror::Error;

/// A contract violation that aborts the run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SchedulerError {
    /// Requested horizon is zero or exceeds the supported maximum.
    #[error("horizon of {weeks} weeks is outside 1..={max}")]
    InvalidHorizon { weeks: u32, max: u32 },

    /// Slot length must be positive and divide an hour evenly.
    #[error("slot length of {minutes} minutes must be positive and divide 60")]
    InvalidSlotLength { minutes: u32 },

    /// Worker shift hours must satisfy `0 <= start < end <= 24`.
    #[error("worker '{worker_id}' has invalid shift hours {start_hour}..{end_hour}")]
    InvalidShiftHours {
        worker_id: String,
        start_hour: f64,
        end_hour: f64,
    },

    /// Two input records of the same kind share an ID.
    #[error("duplicate {kind} ID '{id}'")]
    DuplicateId { kind: &'static str, id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = SchedulerError::InvalidHorizon { weeks: 9, max: 4 };
        assert_eq!(e.to_string(), "horizon of 9 weeks is outside 1..=4");

        let e = SchedulerError::DuplicateId {
            kind: "tank",
            id: "T1".into(),
        };
        assert!(e.to_string().contains("tank"));
        assert!(e.to_string().contains("T1"));
    }
}
