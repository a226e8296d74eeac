//! Slot grid: discrete time model for the planning horizon.
//!
//! All scheduling arithmetic — anchors, phase boundaries, capacity
//! checks — runs on integer slot indices. Wall-clock timestamps exist
//! only at the boundary, where `slot_to_datetime` converts for the
//! presentation collaborators.
//!
//! # Time Model
//! A slot is a fixed number of minutes (default 30). The horizon is
//! `slots_per_week * weeks`, with the week count bounded by
//! [`MAX_WEEKS`]. Day 0 of the horizon is whatever weekday
//! `horizon_start` falls on; worker day flags are interpreted against
//! that origin.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;

/// Upper bound on the requested horizon, in weeks.
pub const MAX_WEEKS: u32 = 4;

/// Default slot length in minutes.
pub const DEFAULT_SLOT_MINUTES: u32 = 30;

/// Discretization of the planning horizon into equal-length slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotGrid {
    /// Wall-clock timestamp of slot 0.
    pub horizon_start: NaiveDateTime,
    /// Number of weeks under consideration (1..=[`MAX_WEEKS`]).
    pub weeks: u32,
    /// Slot length in minutes. Must divide 60.
    pub slot_minutes: u32,
}

impl SlotGrid {
    /// Creates a grid with the default 30-minute slot length.
    pub fn new(horizon_start: NaiveDateTime, weeks: u32) -> Result<Self, SchedulerError> {
        Self::with_slot_minutes(horizon_start, weeks, DEFAULT_SLOT_MINUTES)
    }

    /// Creates a grid with an explicit slot length.
    ///
    /// # Errors
    /// `InvalidHorizon` if `weeks` is outside `1..=MAX_WEEKS`;
    /// `InvalidSlotLength` if `slot_minutes` is zero or does not
    /// divide 60.
    pub fn with_slot_minutes(
        horizon_start: NaiveDateTime,
        weeks: u32,
        slot_minutes: u32,
    ) -> Result<Self, SchedulerError> {
        if weeks == 0 || weeks > MAX_WEEKS {
            return Err(SchedulerError::InvalidHorizon {
                weeks,
                max: MAX_WEEKS,
            });
        }
        if slot_minutes == 0 || 60 % slot_minutes != 0 {
            return Err(SchedulerError::InvalidSlotLength {
                minutes: slot_minutes,
            });
        }
        Ok(Self {
            horizon_start,
            weeks,
            slot_minutes,
        })
    }

    /// Slots per hour.
    #[inline]
    pub fn slots_per_hour(&self) -> usize {
        (60 / self.slot_minutes) as usize
    }

    /// Slots per day.
    #[inline]
    pub fn slots_per_day(&self) -> usize {
        24 * self.slots_per_hour()
    }

    /// Slots per week.
    #[inline]
    pub fn slots_per_week(&self) -> usize {
        7 * self.slots_per_day()
    }

    /// Total slots in the horizon.
    #[inline]
    pub fn total_slots(&self) -> usize {
        self.slots_per_week() * self.weeks as usize
    }

    /// Converts a raw duration in minutes to whole slots (floor).
    ///
    /// Returns `None` for non-finite or negative input — a duration
    /// that cannot exist. Fractional minutes are truncated before the
    /// floor division, matching the ingestion contract.
    pub fn slots_from_minutes(&self, minutes: f64) -> Option<usize> {
        if !minutes.is_finite() || minutes < 0.0 {
            return None;
        }
        Some(minutes.trunc() as usize / self.slot_minutes as usize)
    }

    /// Converts a fractional hour-of-day to a slot offset within a day.
    ///
    /// Truncates toward zero: 8.5 h with 30-minute slots is slot 17.
    #[inline]
    pub fn slot_of_hour(&self, hour: f64) -> usize {
        (hour * self.slots_per_hour() as f64) as usize
    }

    /// Wall-clock timestamp of a slot boundary.
    pub fn slot_to_datetime(&self, slot: usize) -> NaiveDateTime {
        self.horizon_start + Duration::minutes(slot as i64 * self.slot_minutes as i64)
    }

    /// Duration of `slots` slots, in minutes.
    #[inline]
    pub fn slots_to_minutes(&self, slots: usize) -> u32 {
        slots as u32 * self.slot_minutes
    }
}
