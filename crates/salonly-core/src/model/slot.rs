// ── Time interval types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bookable appointment window.
///
/// Value type with no identity: two slots are equal iff their
/// `(start, end)` pairs are equal. `end` is always
/// `start + service duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeSlot {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Strict open-interval overlap test.
    ///
    /// Touching boundaries do not overlap: a slot ending exactly when a
    /// reservation starts is still free, so back-to-back bookings work.
    pub fn overlaps(&self, reserved: &ReservedInterval) -> bool {
        self.start < reserved.end && self.end > reserved.start
    }

    /// Clock-time label, e.g. `"09:00 - 10:00"`.
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// An already-reserved interval on an employee's day.
///
/// Cancelled reservations are filtered out before construction, so any
/// value of this type blocks the time range it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservedInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ReservedInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 7, hour, min, 0).unwrap()
    }

    #[test]
    fn overlap_is_strict() {
        let slot = TimeSlot::new(at(10, 0), at(11, 0));

        // Partial overlap from either side.
        assert!(slot.overlaps(&ReservedInterval::new(at(10, 0), at(10, 30))));
        assert!(slot.overlaps(&ReservedInterval::new(at(10, 30), at(11, 30))));
        // Containment in both directions.
        assert!(slot.overlaps(&ReservedInterval::new(at(9, 0), at(12, 0))));
        assert!(slot.overlaps(&ReservedInterval::new(at(10, 15), at(10, 45))));
    }

    #[test]
    fn touching_boundaries_do_not_overlap() {
        let slot = TimeSlot::new(at(10, 0), at(11, 0));

        assert!(!slot.overlaps(&ReservedInterval::new(at(9, 0), at(10, 0))));
        assert!(!slot.overlaps(&ReservedInterval::new(at(11, 0), at(12, 0))));
    }

    #[test]
    fn duration_and_label() {
        let slot = TimeSlot::new(at(9, 0), at(9, 45));
        assert_eq!(slot.duration_minutes(), 45);
        assert_eq!(slot.label(), "09:00 - 09:45");
    }
}
