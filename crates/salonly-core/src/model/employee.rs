// ── Employee domain type ──

use serde::{Deserialize, Serialize};

use super::entity_ref::Identified;
use super::weekday::Weekday;

/// One day's availability window in an employee's weekly schedule.
///
/// Times are backend-supplied `"HH:MM"` clock strings. A missing time
/// falls back to the configured default window at slot generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDay {
    pub day: Weekday,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Weekly availability, at most one entry per day.
///
/// Absence of an entry means the employee does not work that day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkSchedule(Vec<WorkDay>);

impl WorkSchedule {
    pub fn new(entries: Vec<WorkDay>) -> Self {
        Self(entries)
    }

    /// The schedule entry for the given day, if the employee works it.
    /// First entry wins should the backend ever send duplicates.
    pub fn day(&self, day: Weekday) -> Option<&WorkDay> {
        self.0.iter().find(|entry| entry.day == day)
    }

    pub fn works_on(&self, day: Weekday) -> bool {
        self.day(day).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[WorkDay] {
        &self.0
    }
}

/// A salon employee offering one or more services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub schedule: WorkSchedule,
}

impl Identified for Employee {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work_day(day: Weekday, start: &str, end: &str) -> WorkDay {
        WorkDay {
            day,
            start_time: Some(start.into()),
            end_time: Some(end.into()),
        }
    }

    #[test]
    fn lookup_by_day() {
        let schedule = WorkSchedule::new(vec![
            work_day(Weekday::Saturday, "09:00", "17:00"),
            work_day(Weekday::Monday, "10:00", "14:30"),
        ]);

        assert!(schedule.works_on(Weekday::Saturday));
        assert!(!schedule.works_on(Weekday::Friday));
        assert_eq!(
            schedule.day(Weekday::Monday).and_then(|d| d.start_time.as_deref()),
            Some("10:00")
        );
    }

    #[test]
    fn first_entry_wins_on_duplicates() {
        let schedule = WorkSchedule::new(vec![
            work_day(Weekday::Saturday, "09:00", "12:00"),
            work_day(Weekday::Saturday, "13:00", "17:00"),
        ]);

        assert_eq!(
            schedule
                .day(Weekday::Saturday)
                .and_then(|d| d.end_time.as_deref()),
            Some("12:00")
        );
    }
}
