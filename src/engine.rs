//! Engine entry point: one snapshot in, one complete result out.
//!
//! Orchestrates the pipeline — calendar builder, tank registry, job
//! normalizer, candidate finder, constraint model, search, projector —
//! for a single stateless invocation. Nothing is shared or retained
//! across calls; concurrent runs with different inputs are safe by
//! construction. A caller wanting a retry with relaxed inputs issues a
//! fresh invocation.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{info, instrument};

use crate::calendar::ShiftCalendar;
use crate::candidate::find_candidates;
use crate::error::SchedulerError;
use crate::models::{JobRecord, ScheduleOutcome, SlotGrid, SolveStatus, Tank, Worker};
use crate::normalize::normalize_jobs;
use crate::project::project;
use crate::registry::TankRegistry;
use crate::solver::{solve, ConstraintModel, SolveReport};
use crate::validation::validate_input;

/// Default optimizer wall-clock budget.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(10);

/// Input container for one scheduling run.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Raw job records.
    pub jobs: Vec<JobRecord>,
    /// Worker shift records.
    pub workers: Vec<Worker>,
    /// Tank records (inactive ones are filtered internally).
    pub tanks: Vec<Tank>,
    /// Time discretization and horizon.
    pub grid: SlotGrid,
    /// Optimizer wall-clock budget.
    pub time_budget: Duration,
}

impl ScheduleRequest {
    /// Creates a request with the default time budget.
    pub fn new(
        jobs: Vec<JobRecord>,
        workers: Vec<Worker>,
        tanks: Vec<Tank>,
        grid: SlotGrid,
    ) -> Self {
        Self {
            jobs,
            workers,
            tanks,
            grid,
            time_budget: DEFAULT_TIME_BUDGET,
        }
    }

    /// Sets the optimizer time budget.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }
}

/// Runs the full scheduling pipeline on one input snapshot.
///
/// Every input job ends up in exactly one of the outcome's two lists:
/// scheduled entries or categorized exclusions, both in job input
/// order. Data-quality problems never abort the run; only contract
/// violations (bad horizon, invalid shift hours, duplicate IDs) return
/// an error.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use plating_scheduler::engine::{optimize_schedule, ScheduleRequest};
/// use plating_scheduler::models::{JobRecord, SlotGrid, Tank, Worker};
///
/// let monday = NaiveDate::from_ymd_opt(2026, 3, 2)
///     .unwrap()
///     .and_hms_opt(0, 0, 0)
///     .unwrap();
/// let request = ScheduleRequest::new(
///     vec![JobRecord::new("J1", "Ni").with_durations("60", "2", "30")],
///     vec![Worker::new("W1").with_day(0).with_hours(8.0, 17.0)],
///     vec![Tank::new("T1", "Ni")],
///     SlotGrid::new(monday, 1)?,
/// );
/// let outcome = optimize_schedule(&request)?;
/// assert_eq!(outcome.scheduled_count(), 1);
/// assert!(outcome.exclusions.is_empty());
/// # Ok::<(), plating_scheduler::SchedulerError>(())
/// ```
#[instrument(skip_all, fields(
    jobs = request.jobs.len(),
    workers = request.workers.len(),
    tanks = request.tanks.len(),
    weeks = request.grid.weeks,
))]
pub fn optimize_schedule(request: &ScheduleRequest) -> Result<ScheduleOutcome, SchedulerError> {
    validate_input(&request.jobs, &request.tanks, &request.workers)?;

    let calendar = ShiftCalendar::build(&request.workers, &request.grid)?;
    let registry = TankRegistry::new(&request.tanks);
    let (jobs, mut exclusions) = normalize_jobs(&request.jobs, &request.grid);
    let (set, candidate_exclusions) = find_candidates(&jobs, &registry, &calendar);
    exclusions.extend(candidate_exclusions);

    let report = if set.is_empty() {
        // Nothing reached the solver; an empty schedule is trivially optimal.
        SolveReport {
            presence: vec![false; set.candidates.len()],
            status: SolveStatus::Optimal,
            objective: 0,
            nodes: 0,
            elapsed: Duration::ZERO,
        }
    } else {
        let model = ConstraintModel::new(&set, &calendar);
        solve(&model, request.time_budget)
    };

    let projection = project(&jobs, &set, &report, &registry, &request.grid);
    exclusions.extend(projection.exclusions);

    // Restore job input order across the stages' exclusions.
    let rank: HashMap<&str, usize> = request
        .jobs
        .iter()
        .enumerate()
        .map(|(i, j)| (j.id.as_str(), i))
        .collect();
    exclusions.sort_by_key(|e| rank.get(e.job_id.as_str()).copied().unwrap_or(usize::MAX));

    info!(
        scheduled = projection.entries.len(),
        excluded = exclusions.len(),
        status = ?report.status,
        nodes = report.nodes,
        "scheduling run complete"
    );

    Ok(ScheduleOutcome {
        entries: projection.entries,
        exclusions,
        status: report.status,
        slot_usage: projection.slot_usage,
        used_tanks: projection.used_tanks,
    })
}
