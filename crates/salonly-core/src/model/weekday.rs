// ── Week model ──
//
// The booking week runs Saturday through Friday, matching the Iranian
// working week. Calendar grids and schedule lookups index days from
// Saturday (0) to Friday (6), independent of runtime locale.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Day of the week, ordered Saturday-first.
///
/// The canonical lowercase names (`"saturday"` .. `"friday"`) are the
/// exact strings the backend uses in work-schedule entries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// Position within the Saturday-first week (0 = Saturday .. 6 = Friday).
    pub fn index_from_saturday(self) -> usize {
        match self {
            Self::Saturday => 0,
            Self::Sunday => 1,
            Self::Monday => 2,
            Self::Tuesday => 3,
            Self::Wednesday => 4,
            Self::Thursday => 5,
            Self::Friday => 6,
        }
    }

    /// Full Persian day name.
    pub fn name_fa(self) -> &'static str {
        match self {
            Self::Saturday => "شنبه",
            Self::Sunday => "یکشنبه",
            Self::Monday => "دوشنبه",
            Self::Tuesday => "سه‌شنبه",
            Self::Wednesday => "چهارشنبه",
            Self::Thursday => "پنجشنبه",
            Self::Friday => "جمعه",
        }
    }

    /// Single-letter Persian initial used as a calendar column header.
    pub fn initial_fa(self) -> &'static str {
        match self {
            Self::Saturday => "ش",
            Self::Sunday => "ی",
            Self::Monday => "د",
            Self::Tuesday => "س",
            Self::Wednesday => "چ",
            Self::Thursday => "پ",
            Self::Friday => "ج",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Datelike, NaiveDate};
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn canonical_names_round_trip() {
        for day in Weekday::iter() {
            let name = day.to_string();
            assert_eq!(name, name.to_lowercase());
            assert_eq!(name.parse::<Weekday>().unwrap(), day);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Saturday".parse::<Weekday>().unwrap(), Weekday::Saturday);
        assert_eq!("MONDAY".parse::<Weekday>().unwrap(), Weekday::Monday);
    }

    #[test]
    fn saturday_first_ordering() {
        let order: Vec<usize> = Weekday::iter().map(Weekday::index_from_saturday).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn from_chrono_weekday() {
        // 2026-03-07 is a Saturday.
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(Weekday::from(date.weekday()), Weekday::Saturday);

        let next = date.succ_opt().unwrap();
        assert_eq!(Weekday::from(next.weekday()), Weekday::Sunday);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Weekday::Wednesday).unwrap();
        assert_eq!(json, "\"wednesday\"");
        let back: Weekday = serde_json::from_str("\"friday\"").unwrap();
        assert_eq!(back, Weekday::Friday);
    }
}
