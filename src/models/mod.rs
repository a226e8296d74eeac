//! Scheduling domain models.
//!
//! Core data types for the plating-shop scheduling problem and its
//! solution. Inputs (workers, tanks, job records) are immutable
//! snapshots; the engine computes assignments without ever mutating
//! them.
//!
//! | Type | Role |
//! |------|------|
//! | [`Worker`] | shift-structured workforce supply |
//! | [`Tank`] | exclusive-use processing resource |
//! | [`JobRecord`] / [`Job`] | raw and normalized three-phase jobs |
//! | [`SlotGrid`] | discrete time model of the horizon |
//! | [`ScheduleOutcome`] | schedule entries + categorized exclusions |

mod grid;
mod job;
mod outcome;
mod tank;
mod worker;

pub use grid::{SlotGrid, DEFAULT_SLOT_MINUTES, MAX_WEEKS};
pub use job::{Job, JobRecord};
pub use outcome::{
    free_ranges, ExclusionCategory, ExclusionRecord, ScheduleEntry, ScheduleOutcome, SolveStatus,
};
pub use tank::{Tank, TankStatus};
pub use worker::{ShiftGroup, Worker};
