//! Scheduling engine for multi-phase plating jobs on shared tanks.
//!
//! Assigns jobs with three sequential phases — soak, plating, rinse —
//! to compatible tanks under a shift-structured workforce, and returns
//! either a feasible schedule or a categorized reason per unscheduled
//! job. Soak and rinse require workers on duty; plating runs
//! unattended.
//!
//! # Pipeline
//!
//! - **`calendar`**: worker shift records → per-slot availability and
//!   capacity arrays
//! - **`registry`**: active tanks indexed by process type/subtype
//! - **`normalize`**: raw duration fields → slot counts, rejecting
//!   malformed records
//! - **`candidate`**: compatible tanks + earliest workable anchors
//! - **`solver`**: no-overlap and capacity constraints, deterministic
//!   branch-and-bound under a time budget
//! - **`project`**: slot indices → calendar timestamps, exclusions
//! - **`engine`**: one-call orchestration ([`optimize_schedule`])
//!
//! The engine is stateless: each invocation owns its arrays and model,
//! so concurrent runs over different snapshots need no coordination.
//!
//! # Invariants
//!
//! Every input job lands in exactly one output list (schedule or
//! exclusions), both in input order. Identical inputs and budget give
//! identical output: anchor scans and the search tie-break
//! deterministically.

pub mod calendar;
pub mod candidate;
pub mod engine;
pub mod error;
pub mod models;
pub mod normalize;
pub mod project;
pub mod registry;
pub mod solver;
pub mod validation;

pub use engine::{optimize_schedule, ScheduleRequest, DEFAULT_TIME_BUDGET};
pub use error::SchedulerError;
pub use models::{
    ExclusionCategory, ExclusionRecord, Job, JobRecord, ScheduleEntry, ScheduleOutcome, ShiftGroup,
    SlotGrid, SolveStatus, Tank, TankStatus, Worker,
};
