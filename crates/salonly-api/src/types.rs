//! Wire types for the salonly booking backend.
//!
//! All types match the JSON documents served by the salon endpoints.
//! Field names use camelCase via `#[serde(rename_all = "camelCase")]`;
//! identifiers are Mongo-style `_id` strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Services ─────────────────────────────────────────────────────────

/// Salon service -- from `GET /salons/{salon}/services`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Appointment length in minutes.
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    /// Category code (e.g. `ROSE`, `LILY`, `ORCHID`, `PEONY`).
    #[serde(default)]
    pub code: Option<String>,
    /// Tier label: `Basic` or `VIP`.
    #[serde(default)]
    pub service_type: Option<String>,
    /// Add-on services offered after this one is picked.
    #[serde(default, rename = "subService")]
    pub sub_services: Vec<ServiceRecord>,
}

// ── Employees ────────────────────────────────────────────────────────

/// One weekday entry of an employee's work schedule.
///
/// `startTime`/`endTime` are `"HH:MM"` strings and may be absent, in
/// which case the consumer applies its default working window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDayRecord {
    pub day: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

/// Salon employee -- from `GET /salons/{salon}/employees/{service}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub work_schedule: Vec<WorkDayRecord>,
}

// ── Availability ─────────────────────────────────────────────────────

/// Reserved interval -- from
/// `GET /salons/{salon}/employees/{employee}/availability?date=`.
///
/// The backend returns the bookings intersecting the day; only the
/// interval and status matter to the availability consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservedIntervalRecord {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// One of: `pending`, `review`, `confirmed`, `cancelled`, `completed`, `expired`.
    #[serde(default)]
    pub status: Option<String>,
}

/// Per-employee day availability -- from
/// `GET /salons/{salon}/availability/freeslots?date=`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDayRecord {
    pub employee: EmployeeRecord,
    #[serde(default)]
    pub has_free_slot: bool,
}

// ── Bookings ─────────────────────────────────────────────────────────

/// `employee`/`service` on a booking arrive either as a bare id string
/// or as a populated record, depending on the route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmployeeOrId {
    Record(Box<EmployeeRecord>),
    Id(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceOrId {
    Record(Box<ServiceRecord>),
    Id(String),
}

/// Booking document -- from `GET /salons/{salon}/bookings/{id}` and
/// `GET /bookings?user=`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub salon: Option<String>,
    pub employee: EmployeeOrId,
    pub service: ServiceOrId,
    #[serde(default)]
    pub additional_service: Option<ServiceOrId>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// One of: `pending`, `review`, `confirmed`, `cancelled`, `completed`, `expired`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub payment_deadline: Option<DateTime<Utc>>,
    /// One of: `byUser`, `bySalon`, `unPaid`, `conflictingSchedule`.
    #[serde(default, rename = "cancelationReason")]
    pub cancellation_reason: Option<String>,
    #[serde(default)]
    pub receipt_url: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub client_phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create-booking payload -- `POST /salons/{salon}/bookings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub salon: String,
    pub employee: String,
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_service: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub user: String,
    pub client_name: String,
    pub client_phone: String,
    /// `self` or `gift`.
    pub order_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
}

/// Cancel payload -- `PATCH /salons/{salon}/bookings/{id}/cancel`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelRequest {
    /// One of: `byUser`, `bySalon`, `unPaid`, `conflictingSchedule`.
    pub reason: String,
}

/// Mutation responses wrap the booking in a `{booking: ...}` envelope on
/// some routes and return it bare on others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookingReply {
    Enveloped { booking: BookingRecord },
    Bare(BookingRecord),
}

impl BookingReply {
    pub fn into_booking(self) -> BookingRecord {
        match self {
            Self::Enveloped { booking } | Self::Bare(booking) => booking,
        }
    }
}
