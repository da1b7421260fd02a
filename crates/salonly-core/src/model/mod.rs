// ── Booking domain model ──
//
// Every type in this module is the canonical representation of a salon
// entity. Raw wire records from `salonly-api` are converted into these
// types once, at the fetch boundary, so consumers never deal with
// backend field quirks.

pub mod booking;
pub mod employee;
pub mod entity_ref;
pub mod service;
pub mod slot;
pub mod weekday;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use salonly_core::model::*` gives you everything.

pub use booking::{Booking, BookingStatus, CancellationReason, OrderType};
pub use employee::{Employee, WorkDay, WorkSchedule};
pub use entity_ref::{EntityRef, Identified};
pub use service::{filter_catalog, Service};
pub use slot::{ReservedInterval, TimeSlot};
pub use weekday::Weekday;
