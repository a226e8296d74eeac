//! Candidate finder: compatible tanks and earliest workable anchors.
//!
//! For each normalized job this stage fixes the timing — the earliest
//! soak start whose whole soak interval is staffed, and the earliest
//! rinse window at or after the plating end — and pairs it with every
//! compatible tank. The solver later decides which candidates become
//! real, at most one per job.
//!
//! Determinism is part of the contract: jobs are processed in input
//! order, tanks in registry order, and both anchor scans always take
//! the smallest feasible slot.

use tracing::debug;

use crate::calendar::ShiftCalendar;
use crate::models::{ExclusionCategory, ExclusionRecord, Job};
use crate::registry::TankRegistry;

/// A potential assignment: one job on one tank with fixed timing.
///
/// Whether the candidate is realized is the solver's presence decision.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Index into the normalized job list.
    pub job_idx: usize,
    /// Registry index of the tank.
    pub tank_idx: usize,
    /// First slot of the soak phase.
    pub soak_start: usize,
    /// Soak length in slots.
    pub soak_len: usize,
    /// Plating length in slots.
    pub plating_len: usize,
    /// First slot of the rinse phase (at or after the plating end).
    pub rinse_start: usize,
    /// Rinse length in slots.
    pub rinse_len: usize,
    /// Workers demanded while soaking in this tank.
    pub soak_workers: u32,
    /// Workers demanded while rinsing in this tank.
    pub rinse_workers: u32,
}

impl Candidate {
    /// Slot after the soak phase; plating begins here.
    #[inline]
    pub fn soak_end(&self) -> usize {
        self.soak_start + self.soak_len
    }

    /// Slot after the plating phase.
    #[inline]
    pub fn plating_end(&self) -> usize {
        self.soak_end() + self.plating_len
    }

    /// Slot after the rinse phase; the tank frees up here.
    #[inline]
    pub fn rinse_end(&self) -> usize {
        self.rinse_start + self.rinse_len
    }

    /// The slot spans during which the candidate occupies its tank:
    /// soak+plating (contiguous, merged) and rinse. All three phases
    /// hold the tank exclusively; a wait between plating end and rinse
    /// start is not an occupying interval.
    #[inline]
    pub fn tank_spans(&self) -> [(usize, usize); 2] {
        [
            (self.soak_start, self.plating_end()),
            (self.rinse_start, self.rinse_end()),
        ]
    }
}

/// Candidates grouped per job, plus which job each group belongs to.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    /// All candidates, in generation order.
    pub candidates: Vec<Candidate>,
    /// Per surviving job: indices into `candidates` (at-most-one group).
    pub groups: Vec<Vec<usize>>,
    /// Job index behind each group.
    pub group_jobs: Vec<usize>,
}

impl CandidateSet {
    /// Whether no job survived to the solver.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Runs the candidate search over all jobs.
///
/// Jobs with no compatible tank, no workable soak anchor, or no
/// workable rinse window are returned as exclusions; the rest
/// contribute one candidate per compatible tank.
pub fn find_candidates(
    jobs: &[Job],
    registry: &TankRegistry,
    calendar: &ShiftCalendar,
) -> (CandidateSet, Vec<ExclusionRecord>) {
    let mut set = CandidateSet::default();
    let mut exclusions = Vec::new();

    for (job_idx, job) in jobs.iter().enumerate() {
        let tanks = registry.compatible(&job.process_type, job.required_subtype.as_deref());
        if tanks.is_empty() {
            debug!(job_id = %job.id, process_type = %job.process_type, "no compatible tank");
            exclusions.push(ExclusionRecord::new(
                &job.id,
                ExclusionCategory::TypeUnmatched,
                format!(
                    "{}: no active tank matches process type '{}' (required subtype '{}')",
                    job.id,
                    job.process_type,
                    job.required_subtype.as_deref().unwrap_or("")
                ),
            ));
            continue;
        }

        // Anchors depend only on the global workable array, so one scan
        // serves every compatible tank.
        let Some(soak_start) = earliest_soak_anchor(job, calendar) else {
            exclusions.push(ExclusionRecord::new(
                &job.id,
                ExclusionCategory::OutOfShift,
                format!(
                    "{}: no workable soak window of {} slot(s) within the horizon",
                    job.id, job.soak_slots
                ),
            ));
            continue;
        };

        let plating_end = soak_start + job.soak_slots + job.plating_slots;
        let Some(rinse_start) = earliest_rinse_anchor(plating_end, job.rinse_slots, calendar)
        else {
            exclusions.push(ExclusionRecord::new(
                &job.id,
                ExclusionCategory::OutOfShiftRinse,
                format!(
                    "{}: soak can start at slot {} but no workable rinse window of {} slot(s) follows",
                    job.id, soak_start, job.rinse_slots
                ),
            ));
            continue;
        };

        let mut group = Vec::with_capacity(tanks.len());
        for tank_idx in tanks {
            let tank = registry.tank(tank_idx);
            group.push(set.candidates.len());
            set.candidates.push(Candidate {
                job_idx,
                tank_idx,
                soak_start,
                soak_len: job.soak_slots,
                plating_len: job.plating_slots,
                rinse_start,
                rinse_len: job.rinse_slots,
                soak_workers: tank.soak_workers,
                rinse_workers: tank.rinse_workers,
            });
        }
        set.groups.push(group);
        set.group_jobs.push(job_idx);
    }

    (set, exclusions)
}

/// Smallest slot where the whole soak interval is staffed and the full
/// job still fits in the horizon.
fn earliest_soak_anchor(job: &Job, calendar: &ShiftCalendar) -> Option<usize> {
    let latest_start = calendar.total_slots().checked_sub(job.total_slots())?;
    (0..=latest_start).find(|&t| calendar.workable_window(t, job.soak_slots))
}

/// Smallest slot at or after `plating_end` with a fully staffed rinse
/// window inside the horizon.
fn earliest_rinse_anchor(
    plating_end: usize,
    rinse_len: usize,
    calendar: &ShiftCalendar,
) -> Option<usize> {
    let latest_start = calendar.total_slots().checked_sub(rinse_len)?;
    if plating_end > latest_start {
        return None;
    }
    (plating_end..=latest_start).find(|&s| calendar.workable_window(s, rinse_len))
}
