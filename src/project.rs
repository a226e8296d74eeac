//! Result projector: solver verdict → calendar-time schedule records.
//!
//! The only place slot indices become wall-clock timestamps. Realized
//! candidates turn into `ScheduleEntry` records; jobs that reached the
//! solver but were not realized turn into `resource_conflict`
//! exclusions. Earlier-stage exclusions are merged by the engine.

use crate::candidate::CandidateSet;
use crate::models::{
    ExclusionCategory, ExclusionRecord, Job, ScheduleEntry, SlotGrid, SolveStatus,
};
use crate::registry::TankRegistry;
use crate::solver::SolveReport;

/// Solver-stage projection of one run.
#[derive(Debug, Clone)]
pub struct Projection {
    /// Scheduled jobs, in job order.
    pub entries: Vec<ScheduleEntry>,
    /// Candidate jobs the solver did not realize.
    pub exclusions: Vec<ExclusionRecord>,
    /// Per-slot count of scheduled attended phases.
    pub slot_usage: Vec<u32>,
    /// Tank IDs with at least one scheduled job, in first-use order.
    pub used_tanks: Vec<String>,
}

/// Projects a solve report back onto jobs and calendar time.
pub fn project(
    jobs: &[Job],
    set: &CandidateSet,
    report: &SolveReport,
    registry: &TankRegistry,
    grid: &SlotGrid,
) -> Projection {
    let mut entries = Vec::new();
    let mut exclusions = Vec::new();
    let mut slot_usage = vec![0u32; grid.total_slots()];
    let mut used_tanks: Vec<String> = Vec::new();

    for (group, cand_indices) in set.groups.iter().enumerate() {
        let job = &jobs[set.group_jobs[group]];
        let chosen = cand_indices
            .iter()
            .copied()
            .find(|&idx| report.presence[idx]);

        let Some(cand_idx) = chosen else {
            let reason = match report.status {
                SolveStatus::NoSolution => format!(
                    "{}: the optimizer established no feasible assignment within its time budget",
                    job.id
                ),
                _ => format!(
                    "{}: valid candidate on {} tank(s) but lost to tank or workforce contention",
                    job.id,
                    cand_indices.len()
                ),
            };
            exclusions.push(ExclusionRecord::new(
                &job.id,
                ExclusionCategory::ResourceConflict,
                reason,
            ));
            continue;
        };

        let cand = &set.candidates[cand_idx];
        let tank = registry.tank(cand.tank_idx);

        for t in cand.soak_start..cand.soak_end() {
            slot_usage[t] += 1;
        }
        for t in cand.rinse_start..cand.rinse_end() {
            slot_usage[t] += 1;
        }
        if !used_tanks.iter().any(|id| id == &tank.id) {
            used_tanks.push(tank.id.clone());
        }

        entries.push(ScheduleEntry {
            job_id: job.id.clone(),
            tank_id: tank.id.clone(),
            process_type: job.process_type.clone(),
            soak_start: grid.slot_to_datetime(cand.soak_start),
            soak_end: grid.slot_to_datetime(cand.soak_end()),
            plating_end: grid.slot_to_datetime(cand.plating_end()),
            rinse_start: grid.slot_to_datetime(cand.rinse_start),
            rinse_end: grid.slot_to_datetime(cand.rinse_end()),
            soak_minutes: grid.slots_to_minutes(cand.soak_len),
            plating_minutes: grid.slots_to_minutes(cand.plating_len),
            rinse_minutes: grid.slots_to_minutes(cand.rinse_len),
        });
    }

    Projection {
        entries,
        exclusions,
        slot_usage,
        used_tanks,
    }
}
