// ── Wire-to-domain conversions ──
//
// Bridges raw `salonly_api` response types into canonical
// `salonly_core::model` domain types. Each conversion normalizes field
// names, parses strings into strong types, and resolves the
// ref-or-record unions exactly once, at this boundary.

use tracing::warn;

use salonly_api::types::{
    BookingRecord, EmployeeOrId, EmployeeRecord, ReservedIntervalRecord, ServiceOrId,
    ServiceRecord, WorkDayRecord,
};

use crate::model::{
    Booking, BookingStatus, Employee, EntityRef, ReservedInterval, Service, Weekday, WorkDay,
    WorkSchedule,
};

// ── Helpers ────────────────────────────────────────────────────────

/// Parse one schedule entry, dropping entries whose day name is not
/// one of the seven canonical names.
fn work_day(record: WorkDayRecord) -> Option<WorkDay> {
    match record.day.parse::<Weekday>() {
        Ok(day) => Some(WorkDay {
            day,
            start_time: record.start_time,
            end_time: record.end_time,
        }),
        Err(_) => {
            warn!(day = %record.day, "dropping schedule entry with unrecognized day name");
            None
        }
    }
}

/// Keep only intervals that still block time. Cancelled reservations
/// are dropped here so a freed slot never shows as taken; every other
/// status (including missing) is treated as blocking.
pub fn active_intervals(records: Vec<ReservedIntervalRecord>) -> Vec<ReservedInterval> {
    records
        .into_iter()
        .filter(|r| r.status.as_deref() != Some("cancelled"))
        .map(|r| ReservedInterval::new(r.start, r.end))
        .collect()
}

// ── Service ────────────────────────────────────────────────────────

impl From<ServiceRecord> for Service {
    fn from(record: ServiceRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            duration_minutes: record.duration,
            price: record.price,
            description: record.description,
            features: record.features,
            code: record.code,
            service_type: record.service_type,
            sub_services: record.sub_services.into_iter().map(Service::from).collect(),
        }
    }
}

// ── Employee ───────────────────────────────────────────────────────

impl From<EmployeeRecord> for Employee {
    fn from(record: EmployeeRecord) -> Self {
        let schedule = WorkSchedule::new(
            record.work_schedule.into_iter().filter_map(work_day).collect(),
        );
        Self {
            id: record.id,
            name: record.name,
            avatar: record.avatar,
            schedule,
        }
    }
}

// ── Booking ────────────────────────────────────────────────────────

impl From<EmployeeOrId> for EntityRef<Employee> {
    fn from(value: EmployeeOrId) -> Self {
        match value {
            EmployeeOrId::Record(record) => Self::Record(Employee::from(*record)),
            EmployeeOrId::Id(id) => Self::Id(id),
        }
    }
}

impl From<ServiceOrId> for EntityRef<Service> {
    fn from(value: ServiceOrId) -> Self {
        match value {
            ServiceOrId::Record(record) => Self::Record(Service::from(*record)),
            ServiceOrId::Id(id) => Self::Id(id),
        }
    }
}

impl From<BookingRecord> for Booking {
    fn from(record: BookingRecord) -> Self {
        let status = record
            .status
            .as_deref()
            .map_or(BookingStatus::Unknown, BookingStatus::parse);

        let cancellation_reason = record.cancellation_reason.and_then(|raw| {
            match raw.parse() {
                Ok(reason) => Some(reason),
                Err(_) => {
                    warn!(reason = %raw, "unrecognized cancellation reason");
                    None
                }
            }
        });

        Self {
            id: record.id,
            salon: record.salon,
            employee: record.employee.into(),
            service: record.service.into(),
            additional_service: record.additional_service.map(Into::into),
            start: record.start,
            end: record.end,
            status,
            payment_deadline: record.payment_deadline,
            cancellation_reason,
            receipt_url: record.receipt_url,
            user: record.user,
            client_name: record.client_name,
            client_phone: record.client_phone,
            created_at: record.created_at,
        }
    }
}
