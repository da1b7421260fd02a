// ── Booking domain types ──

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::employee::Employee;
use super::entity_ref::EntityRef;
use super::service::Service;

/// Server-side booking lifecycle status.
///
/// The core never computes transitions; it only reflects what the
/// backend reports. Unrecognized values map to [`Unknown`](Self::Unknown)
/// so new backend states never break deserialization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BookingStatus {
    Pending,
    Review,
    Confirmed,
    Cancelled,
    Completed,
    Expired,
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    /// Parse a raw backend status string, mapping unknown values to
    /// [`Unknown`](Self::Unknown) instead of failing.
    pub fn parse(raw: &str) -> Self {
        raw.parse().unwrap_or(Self::Unknown)
    }

    /// Whether the booking still occupies its time slot.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Pending | Self::Review | Self::Confirmed)
    }

    /// Persian display label, where one exists.
    pub fn label_fa(self) -> Option<&'static str> {
        match self {
            Self::Pending => Some("در انتظار پرداخت"),
            Self::Review => Some("در حال بررسی"),
            Self::Confirmed => Some("تایید شده"),
            Self::Cancelled => Some("کنسل شده"),
            Self::Expired => Some("منقضی شده"),
            Self::Completed | Self::Unknown => None,
        }
    }
}

/// Why a booking was cancelled. Display renders the exact wire strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum CancellationReason {
    #[serde(rename = "byUser")]
    #[strum(serialize = "byUser")]
    ByUser,
    #[serde(rename = "bySalon")]
    #[strum(serialize = "bySalon")]
    BySalon,
    #[serde(rename = "unPaid")]
    #[strum(serialize = "unPaid")]
    Unpaid,
    #[serde(rename = "conflictingSchedule")]
    #[strum(serialize = "conflictingSchedule")]
    ConflictingSchedule,
}

/// Who the appointment is for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum OrderType {
    /// The booking client attends the appointment themselves.
    #[default]
    #[serde(rename = "self")]
    #[strum(serialize = "self")]
    ForSelf,
    /// The appointment is a gift; a recipient name is required.
    #[serde(rename = "gift")]
    #[strum(serialize = "gift")]
    Gift,
}

/// A reservation as the backend reports it.
///
/// Created through booking submission and mutated server-side by the
/// management workflow (cancellation, receipt review, expiry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub salon: Option<String>,
    pub employee: EntityRef<Employee>,
    pub service: EntityRef<Service>,
    pub additional_service: Option<EntityRef<Service>>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
    pub payment_deadline: Option<DateTime<Utc>>,
    pub cancellation_reason: Option<CancellationReason>,
    pub receipt_url: Option<String>,
    /// Messaging-platform user id the booking belongs to.
    pub user: Option<String>,
    pub client_name: Option<String>,
    pub client_phone: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// Whether the client may still cancel at `now`.
    ///
    /// Cancellation closes `cutoff` before the appointment start, and
    /// only active bookings can be cancelled.
    pub fn is_cancelable_at(&self, now: DateTime<Utc>, cutoff: Duration) -> bool {
        self.status.is_active() && now < self.start - cutoff
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn booking(status: BookingStatus, start: DateTime<Utc>) -> Booking {
        Booking {
            id: "bk-1".into(),
            salon: None,
            employee: EntityRef::Id("emp-1".into()),
            service: EntityRef::Id("svc-1".into()),
            additional_service: None,
            start,
            end: start + Duration::minutes(45),
            status,
            payment_deadline: None,
            cancellation_reason: None,
            receipt_url: None,
            user: None,
            client_name: None,
            client_phone: None,
            created_at: None,
        }
    }

    #[test]
    fn status_parse_falls_back_to_unknown() {
        assert_eq!(BookingStatus::parse("confirmed"), BookingStatus::Confirmed);
        assert_eq!(BookingStatus::parse("Pending"), BookingStatus::Pending);
        assert_eq!(BookingStatus::parse("archived"), BookingStatus::Unknown);
    }

    #[test]
    fn cancellation_reason_wire_strings() {
        assert_eq!(CancellationReason::ByUser.to_string(), "byUser");
        assert_eq!(CancellationReason::Unpaid.to_string(), "unPaid");
        assert_eq!(
            serde_json::from_str::<CancellationReason>("\"conflictingSchedule\"").unwrap(),
            CancellationReason::ConflictingSchedule
        );
    }

    #[test]
    fn order_type_wire_strings() {
        assert_eq!(OrderType::ForSelf.to_string(), "self");
        assert_eq!(OrderType::Gift.to_string(), "gift");
        assert_eq!(OrderType::default(), OrderType::ForSelf);
    }

    #[test]
    fn cancelable_until_cutoff() {
        let start = Utc.with_ymd_and_hms(2026, 3, 7, 10, 0, 0).unwrap();
        let b = booking(BookingStatus::Confirmed, start);
        let cutoff = Duration::hours(12);

        let well_before = Utc.with_ymd_and_hms(2026, 3, 6, 20, 0, 0).unwrap();
        assert!(b.is_cancelable_at(well_before, cutoff));

        // Exactly at the cutoff boundary is too late.
        let at_cutoff = Utc.with_ymd_and_hms(2026, 3, 6, 22, 0, 0).unwrap();
        assert!(!b.is_cancelable_at(at_cutoff, cutoff));

        let too_late = Utc.with_ymd_and_hms(2026, 3, 7, 9, 0, 0).unwrap();
        assert!(!b.is_cancelable_at(too_late, cutoff));
    }

    #[test]
    fn cancelled_booking_is_not_cancelable() {
        let start = Utc.with_ymd_and_hms(2026, 3, 7, 10, 0, 0).unwrap();
        let b = booking(BookingStatus::Cancelled, start);
        let early = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();

        assert!(!b.is_cancelable_at(early, Duration::hours(12)));
    }
}
