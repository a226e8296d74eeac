//! Constraint model over the candidate set.
//!
//! Materializes the three constraint families the search enforces:
//! - at most one realized candidate per job (structural: the search
//!   branches over a job's candidates),
//! - tank exclusivity: a tank's occupied spans, across all phases of
//!   all realized candidates, are pairwise non-overlapping,
//! - workforce capacity: summed soak/rinse worker demand at every slot
//!   stays within the calendar's headcount (plating demands nobody).
//!
//! The objective is lexicographic, encoded as one weighted score:
//! `presence_weight * scheduled - load_imbalance`. The weight exceeds
//! the largest possible imbalance (the horizon length), so no trade of
//! a scheduled job for balance is ever accepted.

use crate::calendar::ShiftCalendar;
use crate::candidate::{Candidate, CandidateSet};

/// The solver's view of one run: candidates, constraint data, and
/// objective weights. Borrows everything; owns nothing mutable.
#[derive(Debug)]
pub struct ConstraintModel<'a> {
    /// All candidates, indexed by the groups.
    pub candidates: &'a [Candidate],
    /// Per-job at-most-one groups of candidate indices.
    pub groups: &'a [Vec<usize>],
    /// Per-slot worker headcount.
    pub capacity: &'a [u32],
    /// Slots staffed exclusively by the early shift.
    pub early_only: &'a [bool],
    /// Slots staffed exclusively by the late shift.
    pub late_only: &'a [bool],
    /// Weight of one scheduled job in the objective.
    pub presence_weight: i64,
}

impl<'a> ConstraintModel<'a> {
    /// Builds the model for a candidate set and calendar.
    pub fn new(set: &'a CandidateSet, calendar: &'a ShiftCalendar) -> Self {
        Self {
            candidates: &set.candidates,
            groups: &set.groups,
            capacity: calendar.capacity(),
            early_only: calendar.early_only(),
            late_only: calendar.late_only(),
            // Strictly dominates the secondary term, which is bounded
            // by the number of slots in the horizon.
            presence_weight: calendar.total_slots() as i64 + 1,
        }
    }

    /// Number of slots in the horizon.
    #[inline]
    pub fn total_slots(&self) -> usize {
        self.capacity.len()
    }

    /// Whether two candidates may not both be realized: same tank with
    /// overlapping occupied spans.
    pub fn tanks_conflict(&self, a: usize, b: usize) -> bool {
        let (ca, cb) = (&self.candidates[a], &self.candidates[b]);
        if ca.tank_idx != cb.tank_idx {
            return false;
        }
        ca.tank_spans().iter().any(|&(s1, e1)| {
            cb.tank_spans()
                .iter()
                .any(|&(s2, e2)| s1 < e2 && s2 < e1 && s1 < e1 && s2 < e2)
        })
    }

    /// Objective score of a complete presence assignment.
    ///
    /// `W * scheduled_count - load_imbalance`; higher is better.
    pub fn score(&self, presence: &[bool]) -> i64 {
        let scheduled = presence.iter().filter(|&&p| p).count() as i64;
        self.presence_weight * scheduled - self.load_imbalance(presence)
    }

    /// Absolute difference between early-only and late-only occupied
    /// slot counts, where "occupied" means covered by a realized
    /// candidate's soak or rinse interval.
    pub fn load_imbalance(&self, presence: &[bool]) -> i64 {
        let mut covered = vec![false; self.total_slots()];
        for (idx, cand) in self.candidates.iter().enumerate() {
            if !presence[idx] {
                continue;
            }
            for t in cand.soak_start..cand.soak_end().min(covered.len()) {
                covered[t] = true;
            }
            for t in cand.rinse_start..cand.rinse_end().min(covered.len()) {
                covered[t] = true;
            }
        }

        let mut early = 0i64;
        let mut late = 0i64;
        for (t, &c) in covered.iter().enumerate() {
            if !c {
                continue;
            }
            if self.early_only[t] {
                early += 1;
            } else if self.late_only[t] {
                late += 1;
            }
        }
        (early - late).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::ShiftCalendar;
    use crate::models::{ShiftGroup, SlotGrid, Worker};
    use chrono::NaiveDate;

    fn calendar() -> ShiftCalendar {
        let start = NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let grid = SlotGrid::new(start, 1).unwrap();
        let workers = vec![
            Worker::new("E")
                .with_day(0)
                .with_hours(0.0, 12.0)
                .with_shift_group(ShiftGroup::Early),
            Worker::new("L")
                .with_day(0)
                .with_hours(12.0, 24.0)
                .with_shift_group(ShiftGroup::Late),
        ];
        ShiftCalendar::build(&workers, &grid).unwrap()
    }

    fn cand(tank_idx: usize, soak_start: usize, soak: usize, plating: usize, rinse: usize) -> Candidate {
        Candidate {
            job_idx: 0,
            tank_idx,
            soak_start,
            soak_len: soak,
            plating_len: plating,
            rinse_start: soak_start + soak + plating,
            rinse_len: rinse,
            soak_workers: 1,
            rinse_workers: 1,
        }
    }

    fn set_of(candidates: Vec<Candidate>) -> CandidateSet {
        let groups = (0..candidates.len()).map(|i| vec![i]).collect();
        let group_jobs = (0..candidates.len()).collect();
        CandidateSet {
            candidates,
            groups,
            group_jobs,
        }
    }

    #[test]
    fn test_weight_dominates_horizon() {
        let calendar = calendar();
        let set = set_of(vec![]);
        let model = ConstraintModel::new(&set, &calendar);
        assert_eq!(model.presence_weight, 337);
    }

    #[test]
    fn test_tank_conflict_same_tank_overlap() {
        let calendar = calendar();
        let set = set_of(vec![cand(0, 0, 2, 2, 1), cand(0, 3, 2, 2, 1)]);
        let model = ConstraintModel::new(&set, &calendar);
        // Spans [0,4)+[4,5) vs [3,7)+[7,8) overlap at slot 3-4
        assert!(model.tanks_conflict(0, 1));
        assert!(model.tanks_conflict(1, 0));
    }

    #[test]
    fn test_no_conflict_different_tank() {
        let calendar = calendar();
        let set = set_of(vec![cand(0, 0, 2, 2, 1), cand(1, 0, 2, 2, 1)]);
        let model = ConstraintModel::new(&set, &calendar);
        assert!(!model.tanks_conflict(0, 1));
    }

    #[test]
    fn test_no_conflict_back_to_back() {
        let calendar = calendar();
        // First ends (rinse_end) at 5, second starts at 5
        let set = set_of(vec![cand(0, 0, 2, 2, 1), cand(0, 5, 2, 2, 1)]);
        let model = ConstraintModel::new(&set, &calendar);
        assert!(!model.tanks_conflict(0, 1));
    }

    #[test]
    fn test_zero_length_spans_never_conflict() {
        let calendar = calendar();
        let set = set_of(vec![cand(0, 0, 0, 0, 0), cand(0, 0, 2, 2, 1)]);
        let model = ConstraintModel::new(&set, &calendar);
        assert!(!model.tanks_conflict(0, 1));
    }

    #[test]
    fn test_score_prefers_more_jobs() {
        let calendar = calendar();
        // One candidate entirely in early-only time, one in late-only
        let set = set_of(vec![cand(0, 0, 2, 0, 1), cand(1, 30, 2, 0, 1)]);
        let model = ConstraintModel::new(&set, &calendar);

        let both = model.score(&[true, true]);
        let early_only = model.score(&[true, false]);
        let none = model.score(&[false, false]);
        // Scheduling both (balanced: 3 early vs 3 late slots) beats one
        assert!(both > early_only);
        assert!(early_only > none);
        assert_eq!(model.load_imbalance(&[true, true]), 0);
        assert_eq!(model.load_imbalance(&[true, false]), 3);
    }

    #[test]
    fn test_imbalance_counts_soak_and_rinse_only() {
        let calendar = calendar();
        // Long plating in early time contributes nothing to imbalance
        let set = set_of(vec![cand(0, 0, 1, 10, 0)]);
        let model = ConstraintModel::new(&set, &calendar);
        assert_eq!(model.load_imbalance(&[true]), 1);
    }
}
