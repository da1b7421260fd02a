// ── Calendar arithmetic ──
//
// Pure date helpers: weekday resolution, Jalali conversion, numeral
// formatting, and month-grid layout. Everything here is deterministic
// and I/O-free; "today" is always an explicit parameter.

use chrono::{Datelike, NaiveDate};

use crate::model::Weekday;

pub mod digits;
pub mod grid;
pub mod jalali;

pub use digits::{to_ascii_digits, to_persian_digits};
pub use grid::{month_grid, next_month, prev_month, GridDay, MonthGrid};
pub use jalali::{is_leap_year, month_length, month_name_fa, JalaliDate};

/// Canonical weekday name for a date, locale-independent.
pub fn day_of_week(date: NaiveDate) -> Weekday {
    Weekday::from(date.weekday())
}
