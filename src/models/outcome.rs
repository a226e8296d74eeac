//! Run output model: schedule entries, exclusions, and the combined
//! outcome handed to presentation collaborators.
//!
//! The outcome is a read-only projection: every input job appears in
//! exactly one of the two lists (schedule or exclusions), and both
//! follow job input order.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One scheduled job: tank, phase boundaries, and phase durations.
///
/// `soak_end` doubles as the plating start; `rinse_start` is the first
/// workable slot at or after `plating_end` (the part may wait in the
/// tank for staff before rinsing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Scheduled job ID.
    pub job_id: String,
    /// Assigned tank ID.
    pub tank_id: String,
    /// Process type (denormalized for chart grouping).
    pub process_type: String,
    /// Soak begins.
    pub soak_start: NaiveDateTime,
    /// Soak ends; plating begins immediately.
    pub soak_end: NaiveDateTime,
    /// Plating ends.
    pub plating_end: NaiveDateTime,
    /// Rinse begins (at or after `plating_end`).
    pub rinse_start: NaiveDateTime,
    /// Rinse ends; the tank is free.
    pub rinse_end: NaiveDateTime,
    /// Soak duration in minutes.
    pub soak_minutes: u32,
    /// Plating duration in minutes.
    pub plating_minutes: u32,
    /// Rinse duration in minutes.
    pub rinse_minutes: u32,
}

/// Why a job is missing from the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionCategory {
    /// A raw duration field failed to parse as a numeric value.
    TimeConversionError,
    /// No active tank matches the job's process type/subtype.
    TypeUnmatched,
    /// No feasible soak start exists within the horizon.
    OutOfShift,
    /// A soak anchor exists but no workable rinse window follows it.
    OutOfShiftRinse,
    /// The job was a valid candidate but lost out to tank or
    /// workforce contention.
    ResourceConflict,
}

/// A job that did not make the schedule, with a categorized reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExclusionRecord {
    /// Excluded job ID.
    pub job_id: String,
    /// Machine-readable category.
    pub category: ExclusionCategory,
    /// Human-readable reason.
    pub reason: String,
}

impl ExclusionRecord {
    /// Creates an exclusion record.
    pub fn new(
        job_id: impl Into<String>,
        category: ExclusionCategory,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            category,
            reason: reason.into(),
        }
    }
}

/// Terminal state of the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    /// The search space was exhausted; the assignment is optimal.
    Optimal,
    /// The time budget expired; the best incumbent is returned.
    Feasible,
    /// The time budget expired before any complete assignment was
    /// established.
    NoSolution,
}

/// Complete result of one scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Scheduled jobs, in job input order.
    pub entries: Vec<ScheduleEntry>,
    /// Unscheduled jobs with reasons, in job input order.
    pub exclusions: Vec<ExclusionRecord>,
    /// How the optimizer terminated.
    pub status: SolveStatus,
    /// Per-slot count of scheduled worker-attended phases (soak or
    /// rinse) covering that slot. Collaborators derive free-time
    /// ranges from this.
    pub slot_usage: Vec<u32>,
    /// IDs of tanks with at least one scheduled job, in first-use order.
    pub used_tanks: Vec<String>,
}

impl ScheduleOutcome {
    /// Finds the schedule entry for a job, if it was scheduled.
    pub fn entry_for_job(&self, job_id: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.job_id == job_id)
    }

    /// Finds the exclusion record for a job, if it was excluded.
    pub fn exclusion_for_job(&self, job_id: &str) -> Option<&ExclusionRecord> {
        self.exclusions.iter().find(|e| e.job_id == job_id)
    }

    /// All entries assigned to a tank.
    pub fn entries_for_tank(&self, tank_id: &str) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.tank_id == tank_id).collect()
    }

    /// Number of scheduled jobs.
    pub fn scheduled_count(&self) -> usize {
        self.entries.len()
    }

    /// Maximal runs of slots with no attended phase, as half-open
    /// `(start, end)` slot ranges.
    pub fn free_ranges(&self) -> Vec<(usize, usize)> {
        free_ranges(&self.slot_usage)
    }
}

/// Maximal zero-runs of a usage array as half-open slot ranges.
pub fn free_ranges(usage: &[u32]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut open: Option<usize> = None;
    for (t, &used) in usage.iter().enumerate() {
        match (used == 0, open) {
            (true, None) => open = Some(t),
            (false, Some(start)) => {
                ranges.push((start, t));
                open = None;
            }
            _ => {}
        }
    }
    if let Some(start) = open {
        ranges.push((start, usage.len()));
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_ranges() {
        assert_eq!(free_ranges(&[]), vec![]);
        assert_eq!(free_ranges(&[0, 0, 0]), vec![(0, 3)]);
        assert_eq!(free_ranges(&[1, 1]), vec![]);
        assert_eq!(free_ranges(&[0, 1, 0, 0, 2, 0]), vec![(0, 1), (2, 4), (5, 6)]);
        assert_eq!(free_ranges(&[1, 0]), vec![(1, 2)]);
    }

    #[test]
    fn test_category_serde_names() {
        // The category strings are the collaborator contract.
        let json = serde_json::to_string(&ExclusionCategory::TimeConversionError).unwrap();
        assert_eq!(json, "\"time_conversion_error\"");
        let json = serde_json::to_string(&ExclusionCategory::OutOfShiftRinse).unwrap();
        assert_eq!(json, "\"out_of_shift_rinse\"");
        let back: ExclusionCategory = serde_json::from_str("\"resource_conflict\"").unwrap();
        assert_eq!(back, ExclusionCategory::ResourceConflict);
    }

    #[test]
    fn test_outcome_queries() {
        let outcome = ScheduleOutcome {
            entries: vec![],
            exclusions: vec![ExclusionRecord::new(
                "J1",
                ExclusionCategory::TypeUnmatched,
                "no tank",
            )],
            status: SolveStatus::Optimal,
            slot_usage: vec![0; 4],
            used_tanks: vec![],
        };
        assert_eq!(outcome.scheduled_count(), 0);
        assert!(outcome.entry_for_job("J1").is_none());
        assert_eq!(
            outcome.exclusion_for_job("J1").unwrap().category,
            ExclusionCategory::TypeUnmatched
        );
        assert_eq!(outcome.free_ranges(), vec![(0, 4)]);
    }
}
