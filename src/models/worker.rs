//! Worker model.
//!
//! A worker contributes on-duty time to the shared workforce pool.
//! Day-of-week presence flags and fractional shift hours repeat
//! identically across every week of the horizon; the calendar builder
//! expands them into per-slot availability.

use serde::{Deserialize, Serialize};

/// Named shift partition used for secondary load balancing.
///
/// Resolved once at ingestion from the free-text shift label; the
/// engine never re-parses text per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftGroup {
    /// Early shift.
    Early,
    /// Late shift.
    Late,
}

impl ShiftGroup {
    /// Resolves a free-text shift label.
    ///
    /// Recognizes "early"/"late" (case-insensitive, substring) and the
    /// Japanese shift terms the upstream roster files use.
    pub fn parse_label(label: &str) -> Option<Self> {
        let lower = label.to_lowercase();
        if lower.contains("early") || label.contains("早番") {
            Some(Self::Early)
        } else if lower.contains("late") || label.contains("遅番") {
            Some(Self::Late)
        } else {
            None
        }
    }
}

/// A worker with a weekly repeating shift pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier.
    pub id: String,
    /// Day-of-week presence flags; index 0 is the first day of the
    /// horizon.
    pub days: [bool; 7],
    /// Shift start as a fractional hour of day (e.g. 8.5 = 08:30).
    pub start_hour: f64,
    /// Shift end as a fractional hour of day. Must exceed `start_hour`.
    pub end_hour: f64,
    /// Shift-group membership, if known.
    pub shift_group: Option<ShiftGroup>,
}

impl Worker {
    /// Creates a worker with no working days and an empty shift.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            days: [false; 7],
            start_hour: 0.0,
            end_hour: 0.0,
            shift_group: None,
        }
    }

    /// Marks a day of the week (0..=6) as a working day.
    ///
    /// # Panics
    /// Panics if `day` is 7 or greater; day flags outside `[0, 7)` are
    /// invalid input.
    pub fn with_day(mut self, day: usize) -> Self {
        self.days[day] = true;
        self
    }

    /// Sets all seven day flags at once.
    pub fn with_days(mut self, days: [bool; 7]) -> Self {
        self.days = days;
        self
    }

    /// Sets the daily shift hours.
    pub fn with_hours(mut self, start_hour: f64, end_hour: f64) -> Self {
        self.start_hour = start_hour;
        self.end_hour = end_hour;
        self
    }

    /// Sets the shift group directly.
    pub fn with_shift_group(mut self, group: ShiftGroup) -> Self {
        self.shift_group = Some(group);
        self
    }

    /// Resolves and sets the shift group from a free-text label.
    ///
    /// Unrecognized labels leave the group unset; such workers still
    /// count toward global workability and capacity, just not toward
    /// either side of the load balance.
    pub fn with_shift_label(mut self, label: &str) -> Self {
        self.shift_group = ShiftGroup::parse_label(label);
        self
    }

    /// Whether this worker is present on the given day of week.
    #[inline]
    pub fn works_on(&self, day: usize) -> bool {
        day < 7 && self.days[day]
    }

    /// Whether the shift hours are well-formed.
    #[inline]
    pub fn has_valid_hours(&self) -> bool {
        self.start_hour >= 0.0 && self.end_hour <= 24.0 && self.start_hour < self.end_hour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_builder() {
        let w = Worker::new("W1")
            .with_day(0)
            .with_day(2)
            .with_hours(8.0, 17.0)
            .with_shift_group(ShiftGroup::Early);

        assert_eq!(w.id, "W1");
        assert!(w.works_on(0));
        assert!(!w.works_on(1));
        assert!(w.works_on(2));
        assert!(!w.works_on(7)); // out of range is never a working day
        assert!(w.has_valid_hours());
        assert_eq!(w.shift_group, Some(ShiftGroup::Early));
    }

    #[test]
    fn test_shift_label_parsing() {
        assert_eq!(ShiftGroup::parse_label("early"), Some(ShiftGroup::Early));
        assert_eq!(ShiftGroup::parse_label("Late crew"), Some(ShiftGroup::Late));
        assert_eq!(ShiftGroup::parse_label("早番"), Some(ShiftGroup::Early));
        assert_eq!(ShiftGroup::parse_label("遅番"), Some(ShiftGroup::Late));
        assert_eq!(ShiftGroup::parse_label("night"), None);
        assert_eq!(ShiftGroup::parse_label(""), None);
    }

    #[test]
    fn test_with_shift_label() {
        let w = Worker::new("W1").with_shift_label("EARLY team");
        assert_eq!(w.shift_group, Some(ShiftGroup::Early));

        let w2 = Worker::new("W2").with_shift_label("unknown");
        assert_eq!(w2.shift_group, None);
    }

    #[test]
    fn test_invalid_hours() {
        assert!(!Worker::new("W1").with_hours(17.0, 8.0).has_valid_hours());
        assert!(!Worker::new("W1").with_hours(8.0, 8.0).has_valid_hours());
        assert!(!Worker::new("W1").with_hours(-1.0, 8.0).has_valid_hours());
        assert!(!Worker::new("W1").with_hours(8.0, 25.0).has_valid_hours());
        assert!(Worker::new("W1").with_hours(0.0, 24.0).has_valid_hours());
    }
}
