// ── Slot generation ──
//
// Derives the bookable windows for one (employee, service, date) from
// the employee's weekly schedule, the service duration, and the day's
// reserved intervals. Pure and synchronous: identical inputs always
// produce identical output, and every degenerate input produces an
// empty list rather than an error.

use chrono::{Duration, NaiveDate, NaiveTime, Utc};

use crate::calendar::day_of_week;
use crate::model::{ReservedInterval, TimeSlot, WorkSchedule};

/// Daily availability window, applied when a schedule entry omits its
/// start or end time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Default for SlotWindow {
    /// 09:00 to 17:00.
    fn default() -> Self {
        Self {
            start: NaiveTime::MIN + Duration::hours(9),
            end: NaiveTime::MIN + Duration::hours(17),
        }
    }
}

/// Parse a backend `"HH:MM"` clock string.
pub fn parse_clock(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M").ok()
}

/// Slot-generation policy. Carries the fallback window so the default
/// is a visible, configurable choice rather than a buried constant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotPolicy {
    pub default_window: SlotWindow,
}

impl SlotPolicy {
    pub fn with_window(window: SlotWindow) -> Self {
        Self {
            default_window: window,
        }
    }

    /// Generate the free slots for one day, in chronological order.
    ///
    /// Candidates start at the window start and step by the service
    /// duration; a candidate ending exactly at the window end still
    /// fits. A candidate is dropped when it strictly overlaps any
    /// reserved interval (touching boundaries stay free).
    ///
    /// Returns an empty list, never an error, when the employee has no
    /// schedule entry for the day, the duration is zero or negative,
    /// or the resolved window is empty or inverted.
    pub fn generate(
        &self,
        schedule: &WorkSchedule,
        duration_minutes: i64,
        date: NaiveDate,
        reserved: &[ReservedInterval],
    ) -> Vec<TimeSlot> {
        if duration_minutes <= 0 {
            return Vec::new();
        }
        let Some(work_day) = schedule.day(day_of_week(date)) else {
            return Vec::new();
        };

        // Missing or unparseable times fall back to the policy window.
        let start = work_day
            .start_time
            .as_deref()
            .and_then(parse_clock)
            .unwrap_or(self.default_window.start);
        let end = work_day
            .end_time
            .as_deref()
            .and_then(parse_clock)
            .unwrap_or(self.default_window.end);

        let window_start = date.and_time(start).and_utc();
        let window_end = date.and_time(end).and_utc();
        if window_end <= window_start {
            return Vec::new();
        }

        let step = Duration::minutes(duration_minutes);
        let mut slots = Vec::new();
        let mut current = window_start;
        while current + step <= window_end {
            let candidate = TimeSlot::new(current, current + step);
            if !reserved.iter().any(|r| candidate.overlaps(r)) {
                slots.push(candidate);
            }
            current = candidate.end;
        }
        slots
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{DateTime, TimeZone};

    use super::*;
    use crate::model::{Weekday, WorkDay};

    // 2026-03-07 is a Saturday.
    const YEAR: i32 = 2026;
    const MONTH: u32 = 3;
    const DAY: u32 = 7;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(YEAR, MONTH, DAY).unwrap()
    }

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(YEAR, MONTH, DAY, hour, min, 0).unwrap()
    }

    fn saturday_schedule(start: Option<&str>, end: Option<&str>) -> WorkSchedule {
        WorkSchedule::new(vec![WorkDay {
            day: Weekday::Saturday,
            start_time: start.map(Into::into),
            end_time: end.map(Into::into),
        }])
    }

    fn slot(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> TimeSlot {
        TimeSlot::new(at(start_h, start_m), at(end_h, end_m))
    }

    #[test]
    fn fills_window_with_contiguous_slots() {
        let schedule = saturday_schedule(Some("09:00"), Some("12:00"));
        let slots = SlotPolicy::default().generate(&schedule, 60, date(), &[]);

        assert_eq!(
            slots,
            vec![slot(9, 0, 10, 0), slot(10, 0, 11, 0), slot(11, 0, 12, 0)]
        );
    }

    #[test]
    fn excludes_overlapping_candidates() {
        let schedule = saturday_schedule(Some("09:00"), Some("12:00"));
        let reserved = [ReservedInterval::new(at(10, 0), at(10, 30))];
        let slots = SlotPolicy::default().generate(&schedule, 60, date(), &reserved);

        assert_eq!(slots, vec![slot(9, 0, 10, 0), slot(11, 0, 12, 0)]);
    }

    #[test]
    fn exact_reservation_match_excludes_only_that_candidate() {
        let schedule = saturday_schedule(Some("09:00"), Some("12:00"));
        let reserved = [ReservedInterval::new(at(9, 0), at(10, 0))];
        let slots = SlotPolicy::default().generate(&schedule, 60, date(), &reserved);

        assert_eq!(slots, vec![slot(10, 0, 11, 0), slot(11, 0, 12, 0)]);
    }

    #[test]
    fn touching_boundaries_are_retained() {
        let schedule = saturday_schedule(Some("09:00"), Some("11:00"));
        // Reservation ends exactly where the first candidate starts
        // and starts exactly where the last one ends.
        let reserved = [
            ReservedInterval::new(at(8, 0), at(9, 0)),
            ReservedInterval::new(at(11, 0), at(12, 0)),
        ];
        let slots = SlotPolicy::default().generate(&schedule, 60, date(), &reserved);

        assert_eq!(slots, vec![slot(9, 0, 10, 0), slot(10, 0, 11, 0)]);
    }

    #[test]
    fn exact_fit_at_window_end_is_included() {
        let schedule = saturday_schedule(Some("09:00"), Some("10:00"));
        let slots = SlotPolicy::default().generate(&schedule, 60, date(), &[]);

        assert_eq!(slots, vec![slot(9, 0, 10, 0)]);
    }

    #[test]
    fn partial_trailing_window_is_dropped() {
        let schedule = saturday_schedule(Some("09:00"), Some("12:30"));
        let slots = SlotPolicy::default().generate(&schedule, 60, date(), &[]);

        // The 12:00-13:00 candidate does not fit inside 12:30.
        assert_eq!(slots.len(), 3);
        assert_eq!(slots.last().unwrap().end, at(12, 0));
    }

    #[test]
    fn missing_schedule_day_yields_empty() {
        // Schedule covers Monday only; the target date is a Saturday.
        let schedule = WorkSchedule::new(vec![WorkDay {
            day: Weekday::Monday,
            start_time: Some("09:00".into()),
            end_time: Some("17:00".into()),
        }]);

        assert!(SlotPolicy::default().generate(&schedule, 60, date(), &[]).is_empty());
    }

    #[test]
    fn nonpositive_duration_yields_empty() {
        let schedule = saturday_schedule(Some("09:00"), Some("17:00"));
        let policy = SlotPolicy::default();

        assert!(policy.generate(&schedule, 0, date(), &[]).is_empty());
        assert!(policy.generate(&schedule, -30, date(), &[]).is_empty());
    }

    #[test]
    fn inverted_window_yields_empty() {
        let schedule = saturday_schedule(Some("17:00"), Some("09:00"));
        assert!(SlotPolicy::default().generate(&schedule, 60, date(), &[]).is_empty());
    }

    #[test]
    fn missing_times_use_default_window() {
        let schedule = saturday_schedule(None, None);
        let slots = SlotPolicy::default().generate(&schedule, 60, date(), &[]);

        assert_eq!(slots.len(), 8);
        assert_eq!(slots[0].start, at(9, 0));
        assert_eq!(slots.last().unwrap().end, at(17, 0));
    }

    #[test]
    fn custom_default_window_is_honored() {
        let window = SlotWindow {
            start: parse_clock("10:00").unwrap(),
            end: parse_clock("14:00").unwrap(),
        };
        let schedule = saturday_schedule(None, Some("12:00"));
        let slots = SlotPolicy::with_window(window).generate(&schedule, 60, date(), &[]);

        assert_eq!(slots, vec![slot(10, 0, 11, 0), slot(11, 0, 12, 0)]);
    }

    #[test]
    fn every_slot_spans_exactly_the_duration() {
        let schedule = saturday_schedule(Some("09:00"), Some("17:00"));
        // 480-minute window: expect floor(480 / duration) candidates.
        for (duration, count) in [(15, 32), (45, 10), (90, 5)] {
            let slots = SlotPolicy::default().generate(&schedule, duration, date(), &[]);
            assert_eq!(slots.len(), count);
            for s in &slots {
                assert_eq!(s.duration_minutes(), duration);
            }
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let schedule = saturday_schedule(Some("09:00"), Some("17:00"));
        let reserved = [ReservedInterval::new(at(11, 0), at(12, 15))];
        let policy = SlotPolicy::default();

        let first = policy.generate(&schedule, 45, date(), &reserved);
        let second = policy.generate(&schedule, 45, date(), &reserved);
        assert_eq!(first, second);
    }

    #[test]
    fn parse_clock_accepts_unpadded_hours() {
        assert_eq!(parse_clock("9:30"), parse_clock("09:30"));
        assert!(parse_clock("25:00").is_none());
        assert!(parse_clock("sometime").is_none());
    }
}
