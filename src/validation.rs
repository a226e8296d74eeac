//! Input integrity pre-flight.
//!
//! Checks the structural contract the engine assumes: unique IDs per
//! record kind. Unlike data-quality problems (which become exclusion
//! records), a duplicate ID is a caller bug — downstream partitioning
//! by job ID would silently misattribute results — so it is fatal.

use std::collections::HashSet;

use crate::error::SchedulerError;
use crate::models::{JobRecord, Tank, Worker};

/// Validates that job, tank, and worker IDs are each unique.
///
/// Returns the first duplicate found, scanning jobs, then tanks, then
/// workers, each in input order.
pub fn validate_input(
    jobs: &[JobRecord],
    tanks: &[Tank],
    workers: &[Worker],
) -> Result<(), SchedulerError> {
    check_unique("job", jobs.iter().map(|j| j.id.as_str()))?;
    check_unique("tank", tanks.iter().map(|t| t.id.as_str()))?;
    check_unique("worker", workers.iter().map(|w| w.id.as_str()))?;
    Ok(())
}

fn check_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), SchedulerError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SchedulerError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let jobs = vec![JobRecord::new("J1", "Ni"), JobRecord::new("J2", "Ni")];
        let tanks = vec![Tank::new("T1", "Ni")];
        let workers = vec![Worker::new("W1")];
        assert!(validate_input(&jobs, &tanks, &workers).is_ok());
    }

    #[test]
    fn test_duplicate_job_id() {
        let jobs = vec![JobRecord::new("J1", "Ni"), JobRecord::new("J1", "Cr")];
        let err = validate_input(&jobs, &[], &[]).unwrap_err();
        assert_eq!(
            err,
            SchedulerError::DuplicateId {
                kind: "job",
                id: "J1".into()
            }
        );
    }

    #[test]
    fn test_duplicate_tank_id() {
        let tanks = vec![Tank::new("T1", "Ni"), Tank::new("T1", "Cr")];
        let err = validate_input(&[], &tanks, &[]).unwrap_err();
        assert!(matches!(err, SchedulerError::DuplicateId { kind: "tank", .. }));
    }

    #[test]
    fn test_duplicate_worker_id() {
        let workers = vec![Worker::new("W1"), Worker::new("W1")];
        let err = validate_input(&[], &[], &workers).unwrap_err();
        assert!(matches!(
            err,
            SchedulerError::DuplicateId { kind: "worker", .. }
        ));
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_input(&[], &[], &[]).is_ok());
    }
}
