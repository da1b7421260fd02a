// ── Booking session ──
//
// Full lifecycle for one client's booking flow against a salon
// backend. Owns the wizard state, fetches catalog, staff, and
// availability data, and submits or cancels bookings. Availability
// responses carry a request generation so a stale fetch can never
// overwrite a newer day's slots.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, NaiveDate, Utc};
use futures_util::future::join_all;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::calendar::day_of_week;
use crate::config::SalonConfig;
use crate::convert::active_intervals;
use crate::error::CoreError;
use crate::model::{Booking, CancellationReason, Employee, OrderType, Service, TimeSlot};
use crate::slots::SlotPolicy;
use crate::state::{BookingState, Screen};

use salonly_api::types::CreateBookingRequest;
use salonly_api::{SalonClient, TransportConfig};

// ── SlotLoad ─────────────────────────────────────────────────────

/// Outcome of an availability fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotLoad {
    /// Free slots for the requested day, possibly empty.
    Ready(Vec<TimeSlot>),
    /// A newer fetch started while this one was in flight; the result
    /// was discarded.
    Superseded,
}

// ── DayOverview ──────────────────────────────────────────────────

/// One day of the week-at-a-glance strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOverview {
    pub date: NaiveDate,
    /// At least one employee has a schedule entry for this weekday.
    pub has_working_employee: bool,
    /// At least one employee working this day still has a free slot.
    pub has_free_slot: bool,
}

// ── ClientIdentity ───────────────────────────────────────────────

/// Who the booking is for, as known to the embedding application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    /// Messaging-platform user id.
    pub user: String,
    pub name: String,
    pub phone: String,
}

// ── BookingSession ───────────────────────────────────────────────

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<SessionInner>`. Holds the wizard state
/// in a watch channel so any number of views can observe selection
/// changes, and routes every backend call through one shared client.
#[derive(Clone)]
pub struct BookingSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    config: SalonConfig,
    client: SalonClient,
    state: watch::Sender<BookingState>,
    slot_generation: AtomicU64,
}

impl BookingSession {
    /// Create a session from configuration. Performs no I/O -- the
    /// first fetch happens on the first catalog or availability call.
    pub fn new(config: SalonConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            timeout: config.timeout,
        };
        let client = match &config.token {
            Some(token) => SalonClient::with_token(config.base_url.as_str(), token, &transport)?,
            None => SalonClient::new(config.base_url.as_str(), &transport)?,
        };
        let (state, _) = watch::channel(BookingState::default());

        Ok(Self {
            inner: Arc::new(SessionInner {
                config,
                client,
                state,
                slot_generation: AtomicU64::new(0),
            }),
        })
    }

    /// Access the session configuration.
    pub fn config(&self) -> &SalonConfig {
        &self.inner.config
    }

    // ── State observation ────────────────────────────────────────

    /// Subscribe to wizard state changes.
    pub fn state(&self) -> watch::Receiver<BookingState> {
        self.inner.state.subscribe()
    }

    /// Clone of the current wizard state.
    pub fn snapshot(&self) -> BookingState {
        self.inner.state.borrow().clone()
    }

    /// Whether the current selections admit the given screen.
    pub fn can_enter(&self, screen: Screen) -> bool {
        self.inner.state.borrow().can_enter(screen)
    }

    /// The screen to actually show when `requested` is asked for.
    pub fn entry_screen(&self, requested: Screen) -> Screen {
        self.inner.state.borrow().entry_screen(requested)
    }

    // ── Wizard selections ────────────────────────────────────────

    pub fn choose_service(&self, service: Service) {
        debug!(service = %service.id, "service chosen");
        self.inner
            .state
            .send_modify(|state| state.choose_service(service));
    }

    pub fn choose_add_on(&self, add_on: Service) {
        self.inner
            .state
            .send_modify(|state| state.choose_add_on(add_on));
    }

    pub fn choose_employee(&self, employee: Employee) {
        debug!(employee = %employee.id, "employee chosen");
        self.inner
            .state
            .send_modify(|state| state.choose_employee(employee));
    }

    pub fn choose_date_time(&self, date: NaiveDate, slot: TimeSlot) {
        debug!(%date, slot = %slot.label(), "date and time chosen");
        self.inner
            .state
            .send_modify(|state| state.choose_date_time(date, slot));
    }

    pub fn set_order_type(&self, order_type: OrderType) {
        self.inner
            .state
            .send_modify(|state| state.set_order_type(order_type));
    }

    pub fn set_recipient_name(&self, name: Option<String>) {
        self.inner
            .state
            .send_modify(|state| state.set_recipient_name(name));
    }

    /// Clear every selection and start the wizard over.
    pub fn reset(&self) {
        self.inner.state.send_modify(BookingState::reset);
    }

    // ── Catalog and staff ────────────────────────────────────────

    /// The salon's service catalog, add-ons nested under their parents.
    pub async fn services(&self) -> Result<Vec<Service>, CoreError> {
        let records = self
            .inner
            .client
            .list_services(&self.inner.config.salon_id)
            .await?;
        Ok(records.into_iter().map(Service::from).collect())
    }

    /// Employees offering the currently chosen service.
    pub async fn employees(&self) -> Result<Vec<Employee>, CoreError> {
        let service_id = self
            .snapshot()
            .service()
            .map(|s| s.id.clone())
            .ok_or_else(|| incomplete("service"))?;

        let records = self
            .inner
            .client
            .list_employees(&self.inner.config.salon_id, &service_id)
            .await?;
        Ok(records.into_iter().map(Employee::from).collect())
    }

    // ── Availability ─────────────────────────────────────────────

    /// Fetch reserved intervals for the chosen employee on `date` and
    /// derive the free slots.
    ///
    /// Each call claims a new generation; if a later call starts
    /// before this one's response lands, the response is dropped and
    /// [`SlotLoad::Superseded`] is returned so switching days quickly
    /// never shows the wrong day's slots.
    pub async fn load_slots(&self, date: NaiveDate) -> Result<SlotLoad, CoreError> {
        let generation = self.inner.slot_generation.fetch_add(1, Ordering::SeqCst) + 1;

        let snapshot = self.snapshot();
        let service = snapshot.service().ok_or_else(|| incomplete("service"))?;
        let employee = snapshot.employee().ok_or_else(|| incomplete("employee"))?;
        let duration = service.duration_minutes;
        let schedule = employee.schedule.clone();

        let result = self
            .inner
            .client
            .reserved_intervals(&self.inner.config.salon_id, &employee.id, date)
            .await;

        if self.inner.slot_generation.load(Ordering::SeqCst) != generation {
            warn!(%date, "discarding stale availability response");
            return Ok(SlotLoad::Superseded);
        }

        let reserved = active_intervals(result?);
        let policy = SlotPolicy::with_window(self.inner.config.default_window);
        let slots = policy.generate(&schedule, duration, date, &reserved);
        debug!(%date, slots = slots.len(), "availability loaded");
        Ok(SlotLoad::Ready(slots))
    }

    /// Availability flags for the seven days starting at `start`.
    ///
    /// Days are fetched in parallel. A failed day degrades to "nobody
    /// works, nothing free" instead of failing the whole strip.
    pub async fn week_overview(&self, start: NaiveDate) -> Vec<DayOverview> {
        let days: Vec<NaiveDate> = (0..7)
            .filter_map(|offset| start.checked_add_days(chrono::Days::new(offset)))
            .collect();
        join_all(days.into_iter().map(|date| self.day_overview(date))).await
    }

    async fn day_overview(&self, date: NaiveDate) -> DayOverview {
        let weekday = day_of_week(date);
        match self
            .inner
            .client
            .free_slot_overview(&self.inner.config.salon_id, date)
            .await
        {
            Ok(records) => {
                let mut has_working_employee = false;
                let mut has_free_slot = false;
                for record in records {
                    let works_today =
                        Employee::from(record.employee).schedule.works_on(weekday);
                    has_working_employee |= works_today;
                    has_free_slot |= works_today && record.has_free_slot;
                }
                DayOverview {
                    date,
                    has_working_employee,
                    has_free_slot,
                }
            }
            Err(e) => {
                warn!(%date, error = %e, "day overview fetch failed; marking day unavailable");
                DayOverview {
                    date,
                    has_working_employee: false,
                    has_free_slot: false,
                }
            }
        }
    }

    // ── Booking submission and management ────────────────────────

    /// Submit the current selections as a booking.
    ///
    /// Validates completeness and the gift recipient before any
    /// network call. On success the wizard state resets to empty and
    /// the created booking is returned.
    pub async fn submit(&self, identity: &ClientIdentity) -> Result<Booking, CoreError> {
        let snapshot = self.snapshot();
        let service = snapshot.service().ok_or_else(|| incomplete("service"))?;
        let employee = snapshot.employee().ok_or_else(|| incomplete("employee"))?;
        let slot = snapshot.slot().ok_or_else(|| incomplete("date and time"))?;

        if snapshot.order_type() == OrderType::Gift
            && snapshot
                .recipient_name()
                .is_none_or(|name| name.trim().is_empty())
        {
            return Err(CoreError::MissingRecipient);
        }

        let request = CreateBookingRequest {
            salon: self.inner.config.salon_id.clone(),
            employee: employee.id.clone(),
            service: service.id.clone(),
            additional_service: snapshot.additional_service().map(|s| s.id.clone()),
            start: slot.start,
            end: slot.end,
            user: identity.user.clone(),
            client_name: identity.name.clone(),
            client_phone: identity.phone.clone(),
            order_type: snapshot.order_type().to_string(),
            recipient_name: snapshot.recipient_name().map(str::to_owned),
        };

        let record = self
            .inner
            .client
            .create_booking(&self.inner.config.salon_id, &request)
            .await?;
        let booking = Booking::from(record);

        info!(booking = %booking.id, "booking submitted");
        self.inner.state.send_modify(BookingState::reset);
        Ok(booking)
    }

    /// Fetch one booking by id.
    pub async fn booking(&self, id: &str) -> Result<Booking, CoreError> {
        let record = self
            .inner
            .client
            .get_booking(&self.inner.config.salon_id, id)
            .await?;
        Ok(Booking::from(record))
    }

    /// All bookings the given user has made, as the backend orders them.
    pub async fn history(&self, user: &str) -> Result<Vec<Booking>, CoreError> {
        let records = self.inner.client.list_bookings(user).await?;
        Ok(records.into_iter().map(Booking::from).collect())
    }

    /// Cancel a booking.
    pub async fn cancel(
        &self,
        id: &str,
        reason: CancellationReason,
    ) -> Result<Booking, CoreError> {
        let record = self
            .inner
            .client
            .cancel_booking(&self.inner.config.salon_id, id, &reason.to_string())
            .await?;
        let booking = Booking::from(record);
        info!(booking = %booking.id, %reason, "booking cancelled");
        Ok(booking)
    }

    /// Whether the client may still cancel `booking` at `now`, under
    /// the configured cutoff.
    pub fn is_cancelable(&self, booking: &Booking, now: DateTime<Utc>) -> bool {
        booking.is_cancelable_at(now, self.inner.config.cancel_cutoff)
    }
}

// ── Helpers ──────────────────────────────────────────────────────

fn incomplete(missing: &str) -> CoreError {
    CoreError::IncompleteSelection {
        missing: missing.into(),
    }
}
