// ── Jalali (Solar Hijri) calendar conversion ──
//
// Conversion between Gregorian and Jalali dates using the break-year
// table method (Birashk-derived, the same table the common JS Jalaali
// implementations use). All interval math elsewhere stays on a linear
// timestamp; Jalali fields exist only for display and month-grid
// layout.
//
// Internally everything routes through the Julian day number, with
// chrono handling the Gregorian side.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::model::Weekday;

/// Jalali years, relative to the epoch, at which the leap-year cycle
/// pattern changes.
const BREAKS: [i64; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

const MONTH_NAMES_FA: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Offset between chrono's day count (days since 0001-01-01 CE = 1) and
/// the Julian day number.
const JDN_OFFSET: i64 = 1_721_425;

/// A date in the Jalali calendar.
///
/// Construction always validates, so `month` is 1..=12 and `day` fits
/// the month. Out-of-range values (and years outside the break table)
/// yield `None`, mirroring chrono's `_opt` constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JalaliDate {
    year: i32,
    month: u32,
    day: u32,
}

impl JalaliDate {
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        jal_cal(i64::from(year))?;
        if !(1..=12).contains(&month) {
            return None;
        }
        let len = month_length(year, month)?;
        if day == 0 || day > len {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub fn from_gregorian(date: NaiveDate) -> Option<Self> {
        let jdn = i64::from(date.num_days_from_ce()) + JDN_OFFSET;
        let (jy, jm, jd) = jdn_to_jalali(jdn)?;
        Some(Self {
            year: i32::try_from(jy).ok()?,
            month: u32::try_from(jm).ok()?,
            day: u32::try_from(jd).ok()?,
        })
    }

    pub fn to_gregorian(self) -> Option<NaiveDate> {
        let jdn = jalali_to_jdn(
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        )?;
        NaiveDate::from_num_days_from_ce_opt(i32::try_from(jdn - JDN_OFFSET).ok()?)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1 (Farvardin) ..= 12 (Esfand).
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Persian month name.
    pub fn month_name_fa(&self) -> &'static str {
        MONTH_NAMES_FA[(self.month - 1) as usize]
    }

    /// Day of week, via the Gregorian equivalent.
    pub fn weekday(&self) -> Option<Weekday> {
        self.to_gregorian().map(|d| Weekday::from(d.weekday()))
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// Whether the given Jalali year is a leap year (Esfand has 30 days).
pub fn is_leap_year(year: i32) -> bool {
    jal_cal(i64::from(year)).is_some_and(|r| r.leap == 0)
}

/// Number of days in a Jalali month. Months 1-6 have 31 days, 7-11
/// have 30, and Esfand has 29 or 30 depending on the leap cycle.
pub fn month_length(year: i32, month: u32) -> Option<u32> {
    match month {
        1..=6 => Some(31),
        7..=11 => Some(30),
        12 => {
            jal_cal(i64::from(year))?;
            Some(if is_leap_year(year) { 30 } else { 29 })
        }
        _ => None,
    }
}

/// Persian month name for a 1-based month number.
pub fn month_name_fa(month: u32) -> Option<&'static str> {
    MONTH_NAMES_FA.get((month as usize).checked_sub(1)?).copied()
}

// ── Break-table arithmetic ──────────────────────────────────────────
//
// Division below deliberately truncates toward zero (Rust's native
// `/` and `%`), matching the reference arithmetic exactly.

struct JalCal {
    /// 0 when the year is leap, otherwise days into the 4-year
    /// sub-cycle.
    leap: i64,
    /// Gregorian year of this Jalali year's Nowruz.
    gy: i64,
    /// Day of March the year starts on.
    march: i64,
}

fn jal_cal(jy: i64) -> Option<JalCal> {
    let gy = jy + 621;
    let mut leap_j = -14i64;
    let mut jp = BREAKS[0];

    if jy < jp || jy >= BREAKS[BREAKS.len() - 1] {
        return None;
    }

    // Count leap years from the epoch up to the cycle containing jy.
    let mut jump = 0i64;
    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + (jump % 33) / 4;
        jp = jm;
    }
    let mut n = jy - jp;

    leap_j += n / 33 * 8 + ((n % 33) + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    // Gregorian leap days over the same span fix Nowruz's March day.
    let leap_g = gy / 4 - ((gy / 100 + 1) * 3) / 4 - 150;
    let march = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Some(JalCal { leap, gy, march })
}

fn gregorian_jdn(year: i32, month: u32, day: u32) -> Option<i64> {
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(i64::from(date.num_days_from_ce()) + JDN_OFFSET)
}

fn jalali_to_jdn(jy: i64, jm: i64, jd: i64) -> Option<i64> {
    let r = jal_cal(jy)?;
    let nowruz = gregorian_jdn(
        i32::try_from(r.gy).ok()?,
        3,
        u32::try_from(r.march).ok()?,
    )?;
    Some(nowruz + (jm - 1) * 31 - (jm / 7) * (jm - 7) + jd - 1)
}

fn jdn_to_jalali(jdn: i64) -> Option<(i64, i64, i64)> {
    let date = NaiveDate::from_num_days_from_ce_opt(i32::try_from(jdn - JDN_OFFSET).ok()?)?;
    let gy = date.year();
    let mut jy = i64::from(gy) - 621;
    let r = jal_cal(jy)?;
    let nowruz = gregorian_jdn(gy, 3, u32::try_from(r.march).ok()?)?;

    // Days since this Gregorian year's Nowruz. Negative means the date
    // falls in the closing months of the previous Jalali year.
    let mut k = jdn - nowruz;
    if k >= 0 {
        if k <= 185 {
            // First six 31-day months.
            return Some((jy, 1 + k / 31, k % 31 + 1));
        }
        k -= 186;
    } else {
        jy -= 1;
        k += 179;
        if r.leap == 1 {
            k += 1;
        }
    }
    Some((jy, 7 + k / 30, k % 30 + 1))
}
