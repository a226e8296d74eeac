//! Calendar builder: worker shift patterns → per-slot availability.
//!
//! Expands each worker's weekly pattern across the horizon into a
//! discrete availability bitmap, then aggregates:
//! - `workable[t]` — at least one worker on duty (OR-reduction),
//! - `capacity[t]` — workers on duty (count-reduction),
//! - `early_only[t]` / `late_only[t]` — slots staffed exclusively by
//!   one shift group, used by the load-balance objective.
//!
//! Pure derivation: the calendar is a function of the worker records
//! and the grid, owns fresh arrays per run, and holds no state across
//! invocations.

use std::collections::HashMap;

use crate::error::SchedulerError;
use crate::models::{ShiftGroup, SlotGrid, Worker};

/// Discrete-time workforce availability over the horizon.
#[derive(Debug, Clone)]
pub struct ShiftCalendar {
    workable: Vec<bool>,
    capacity: Vec<u32>,
    early_only: Vec<bool>,
    late_only: Vec<bool>,
    on_duty_totals: HashMap<String, usize>,
}

impl ShiftCalendar {
    /// Builds the calendar for one run.
    ///
    /// # Errors
    /// `InvalidShiftHours` if any worker violates `0 <= start < end <= 24`.
    pub fn build(workers: &[Worker], grid: &SlotGrid) -> Result<Self, SchedulerError> {
        let total = grid.total_slots();
        let mut workable = vec![false; total];
        let mut capacity = vec![0u32; total];
        let mut early = vec![false; total];
        let mut late = vec![false; total];
        let mut on_duty_totals = HashMap::new();

        for worker in workers {
            if !worker.has_valid_hours() {
                return Err(SchedulerError::InvalidShiftHours {
                    worker_id: worker.id.clone(),
                    start_hour: worker.start_hour,
                    end_hour: worker.end_hour,
                });
            }

            let bitmap = expand_worker(worker, grid);
            let mut on_duty = 0usize;
            for (t, &present) in bitmap.iter().enumerate() {
                if !present {
                    continue;
                }
                on_duty += 1;
                workable[t] = true;
                capacity[t] += 1;
                match worker.shift_group {
                    Some(ShiftGroup::Early) => early[t] = true,
                    Some(ShiftGroup::Late) => late[t] = true,
                    None => {}
                }
            }
            on_duty_totals.insert(worker.id.clone(), on_duty);
        }

        // Exclusive masks: a slot balances toward a group only when no
        // worker of the other group is on duty there.
        let early_only = early
            .iter()
            .zip(&late)
            .map(|(&e, &l)| e && !l)
            .collect();
        let late_only = late
            .iter()
            .zip(&early)
            .map(|(&l, &e)| l && !e)
            .collect();

        Ok(Self {
            workable,
            capacity,
            early_only,
            late_only,
            on_duty_totals,
        })
    }

    /// Number of slots in the horizon.
    #[inline]
    pub fn total_slots(&self) -> usize {
        self.workable.len()
    }

    /// Whether any worker is on duty at slot `t`.
    #[inline]
    pub fn is_workable(&self, t: usize) -> bool {
        self.workable.get(t).copied().unwrap_or(false)
    }

    /// Whether every slot of `[start, start + len)` is workable.
    ///
    /// An empty window is trivially workable as long as `start` does
    /// not exceed the horizon.
    pub fn workable_window(&self, start: usize, len: usize) -> bool {
        match start.checked_add(len) {
            Some(end) if end <= self.workable.len() => {
                self.workable[start..end].iter().all(|&w| w)
            }
            _ => false,
        }
    }

    /// Worker headcount at slot `t`.
    #[inline]
    pub fn capacity_at(&self, t: usize) -> u32 {
        self.capacity.get(t).copied().unwrap_or(0)
    }

    /// The full capacity array.
    pub fn capacity(&self) -> &[u32] {
        &self.capacity
    }

    /// Slots staffed exclusively by the early shift.
    pub fn early_only(&self) -> &[bool] {
        &self.early_only
    }

    /// Slots staffed exclusively by the late shift.
    pub fn late_only(&self) -> &[bool] {
        &self.late_only
    }

    /// Total on-duty slots for one worker over the horizon.
    pub fn on_duty_total(&self, worker_id: &str) -> Option<usize> {
        self.on_duty_totals.get(worker_id).copied()
    }
}

/// Expands one worker's weekly pattern into a horizon-length bitmap.
fn expand_worker(worker: &Worker, grid: &SlotGrid) -> Vec<bool> {
    let total = grid.total_slots();
    let mut bitmap = vec![false; total];
    let start_slot = grid.slot_of_hour(worker.start_hour);
    let end_slot = grid.slot_of_hour(worker.end_hour);

    for day in 0..7 {
        if !worker.works_on(day) {
            continue;
        }
        for week in 0..grid.weeks as usize {
            let base = day * grid.slots_per_day() + week * grid.slots_per_week();
            for t in (base + start_slot)..(base + end_slot).min(total) {
                bitmap[t] = true;
            }
        }
    }
    bitmap
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn grid(weeks: u32) -> SlotGrid {
        let start = NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        SlotGrid::new(start, weeks).unwrap()
    }

    #[test]
    fn test_single_worker_monday() {
        let workers = vec![Worker::new("W1").with_day(0).with_hours(8.0, 17.0)];
        let cal = ShiftCalendar::build(&workers, &grid(1)).unwrap();

        assert!(!cal.is_workable(15)); // 07:30
        assert!(cal.is_workable(16)); // 08:00
        assert!(cal.is_workable(33)); // 16:30
        assert!(!cal.is_workable(34)); // 17:00, exclusive end
        assert!(!cal.is_workable(48 + 16)); // Tuesday 08:00, not a working day
        assert_eq!(cal.on_duty_total("W1"), Some(18)); // 9h * 2 slots
        assert_eq!(cal.on_duty_total("W2"), None);
    }

    #[test]
    fn test_pattern_repeats_each_week() {
        let workers = vec![Worker::new("W1").with_day(0).with_hours(8.0, 17.0)];
        let cal = ShiftCalendar::build(&workers, &grid(2)).unwrap();
        assert!(cal.is_workable(16));
        assert!(cal.is_workable(336 + 16)); // same time, week 2
        assert_eq!(cal.on_duty_total("W1"), Some(36));
    }

    #[test]
    fn test_capacity_counts_overlap() {
        let workers = vec![
            Worker::new("W1").with_day(0).with_hours(8.0, 12.0),
            Worker::new("W2").with_day(0).with_hours(10.0, 14.0),
        ];
        let cal = ShiftCalendar::build(&workers, &grid(1)).unwrap();

        assert_eq!(cal.capacity_at(16), 1); // 08:00, only W1
        assert_eq!(cal.capacity_at(20), 2); // 10:00, both
        assert_eq!(cal.capacity_at(25), 1); // 12:30, only W2
        assert_eq!(cal.capacity_at(28), 0); // 14:00, nobody
    }

    #[test]
    fn test_workable_window() {
        let workers = vec![Worker::new("W1").with_day(0).with_hours(8.0, 10.0)];
        let cal = ShiftCalendar::build(&workers, &grid(1)).unwrap();

        assert!(cal.workable_window(16, 4)); // 08:00-10:00
        assert!(!cal.workable_window(16, 5)); // runs past end of shift
        assert!(!cal.workable_window(15, 2)); // starts before shift
        assert!(cal.workable_window(16, 0)); // empty window
        assert!(!cal.workable_window(1000, 0)); // past horizon
    }

    #[test]
    fn test_exclusive_shift_masks() {
        let workers = vec![
            Worker::new("E")
                .with_day(0)
                .with_hours(6.0, 14.0)
                .with_shift_group(ShiftGroup::Early),
            Worker::new("L")
                .with_day(0)
                .with_hours(12.0, 20.0)
                .with_shift_group(ShiftGroup::Late),
            Worker::new("N").with_day(0).with_hours(9.0, 10.0), // no group
        ];
        let cal = ShiftCalendar::build(&workers, &grid(1)).unwrap();

        assert!(cal.early_only()[12]); // 06:00, early only
        assert!(!cal.late_only()[12]);
        assert!(!cal.early_only()[25]); // 12:30, both groups overlap
        assert!(!cal.late_only()[25]);
        assert!(cal.late_only()[30]); // 15:00, late only
        // Ungrouped worker counts for capacity but neither mask
        assert!(cal.is_workable(18)); // 09:00
        assert!(cal.early_only()[18]); // early still exclusive vs late
    }

    #[test]
    fn test_invalid_hours_rejected() {
        let workers = vec![Worker::new("W1").with_day(0).with_hours(17.0, 8.0)];
        let err = ShiftCalendar::build(&workers, &grid(1)).unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidShiftHours { .. }));
    }

    #[test]
    fn test_no_workers() {
        let cal = ShiftCalendar::build(&[], &grid(1)).unwrap();
        assert_eq!(cal.total_slots(), 336);
        assert!(!cal.is_workable(0));
        assert_eq!(cal.capacity_at(0), 0);
    }
}
