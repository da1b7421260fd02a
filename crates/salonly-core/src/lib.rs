// salonly-core: Domain layer between salonly-api and the booking front-end.

pub mod calendar;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod session;
pub mod slots;
pub mod state;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::SalonConfig;
pub use error::CoreError;
pub use session::{BookingSession, ClientIdentity, DayOverview, SlotLoad};
pub use slots::{SlotPolicy, SlotWindow};
pub use state::{BookingState, Screen, Stage};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    // Booking lifecycle
    Booking, BookingStatus, CancellationReason, OrderType,
    // Catalog and staff
    Employee, EntityRef, Service, WorkDay, WorkSchedule,
    // Availability
    ReservedInterval, TimeSlot, Weekday,
};
