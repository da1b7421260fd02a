// ── Month grid layout ──
//
// Computes the cell layout for a Jalali month-picker grid. Columns run
// from the configured week start (Saturday for the Persian calendar);
// the first row is padded with blank cells so day 1 lands in its
// weekday column. Getting the blank count wrong shifts the whole grid
// by a column, so the week-start boundary is covered by an explicit
// test.

use chrono::{Datelike, Days, NaiveDate};

use super::jalali::{month_length, JalaliDate};
use crate::model::Weekday;

/// One selectable day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDay {
    /// Jalali day of month, 1-based.
    pub day: u32,
    /// Gregorian equivalent, used for availability fetches.
    pub date: NaiveDate,
    /// Past days render disabled and reject selection.
    pub is_past: bool,
    pub is_today: bool,
}

/// Layout for one Jalali month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Blank cells before day 1: the first day's weekday index counted
    /// from the configured week start.
    pub leading_blanks: usize,
    pub days: Vec<GridDay>,
}

/// Build the grid for a Jalali month. `today` marks past and current
/// cells; it is passed in explicitly so layout stays deterministic.
/// `week_start` names the leftmost column.
pub fn month_grid(
    year: i32,
    month: u32,
    today: NaiveDate,
    week_start: Weekday,
) -> Option<MonthGrid> {
    let length = month_length(year, month)?;
    let first = JalaliDate::new(year, month, 1)?.to_gregorian()?;
    let first_column = Weekday::from(first.weekday()).index_from_saturday();
    let leading_blanks = (first_column + 7 - week_start.index_from_saturday()) % 7;

    let mut days = Vec::with_capacity(length as usize);
    for day in 1..=length {
        let date = first.checked_add_days(Days::new(u64::from(day - 1)))?;
        days.push(GridDay {
            day,
            date,
            is_past: date < today,
            is_today: date == today,
        });
    }

    Some(MonthGrid {
        year,
        month,
        leading_blanks,
        days,
    })
}

/// The month before `(year, month)`, wrapping across Nowruz.
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// The month after `(year, month)`, wrapping across Nowruz.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn g(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn farvardin_1403_layout() {
        // 1403-01-01 is 2024-03-20, a Wednesday: four blank cells
        // (Sat, Sun, Mon, Tue) before day 1.
        let grid = month_grid(1403, 1, g(2024, 3, 20), Weekday::Saturday).unwrap();

        assert_eq!(grid.leading_blanks, 4);
        assert_eq!(grid.days.len(), 31);
        assert_eq!(grid.days[0].date, g(2024, 3, 20));
        assert_eq!(grid.days[30].date, g(2024, 4, 19));
    }

    #[test]
    fn month_starting_on_week_start_has_no_blanks() {
        // 1403-02-01 is 2024-04-20, a Saturday.
        let grid = month_grid(1403, 2, g(2024, 4, 20), Weekday::Saturday).unwrap();
        assert_eq!(grid.leading_blanks, 0);
    }

    #[test]
    fn blank_count_follows_the_configured_week_start() {
        // Same Wednesday first day as Farvardin 1403, shifted columns:
        // a Monday-start week leaves two blanks (Mon, Tue).
        let grid = month_grid(1403, 1, g(2024, 3, 20), Weekday::Monday).unwrap();
        assert_eq!(grid.leading_blanks, 2);

        // Boundary wrap: a Saturday first day under a Sunday-start week
        // lands in the last column, six blanks ahead of it.
        let grid = month_grid(1403, 2, g(2024, 4, 20), Weekday::Sunday).unwrap();
        assert_eq!(grid.leading_blanks, 6);
    }

    #[test]
    fn past_and_today_flags() {
        let today = g(2024, 4, 25); // 1403-02-06
        let grid = month_grid(1403, 2, today, Weekday::Saturday).unwrap();

        assert!(grid.days[..5].iter().all(|d| d.is_past && !d.is_today));
        assert!(grid.days[5].is_today);
        assert!(!grid.days[5].is_past);
        assert!(grid.days[6..].iter().all(|d| !d.is_past && !d.is_today));
    }

    #[test]
    fn esfand_length_follows_leap_cycle() {
        let today = g(2025, 3, 1);
        let days = |y| month_grid(y, 12, today, Weekday::Saturday).unwrap().days.len();
        assert_eq!(days(1403), 30);
        assert_eq!(days(1402), 29);
    }

    #[test]
    fn month_navigation_wraps_at_nowruz() {
        assert_eq!(next_month(1403, 12), (1404, 1));
        assert_eq!(next_month(1403, 6), (1403, 7));
        assert_eq!(prev_month(1403, 1), (1402, 12));
        assert_eq!(prev_month(1403, 7), (1403, 6));
    }
}
