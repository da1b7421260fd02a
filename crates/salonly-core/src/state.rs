// ── Booking selection state ──
//
// The single in-progress selection a user is building toward a
// reservation. All mutation goes through the typed setters, which
// enforce the cascade-clear invariant: changing an upstream choice
// wipes every downstream one, so a stale employee can never survive a
// service change. Successful submission resets the container; that
// reset is the terminal state of the flow.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{Employee, OrderType, Service, TimeSlot};

/// How far through the selection sequence the state has progressed.
/// Derived from populated fields, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Empty,
    ServiceChosen,
    AddOnChosen,
    EmployeeChosen,
    DateTimeChosen,
}

/// The navigable screens of the booking flow, in sequence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Services,
    AddOns,
    Employees,
    DateTime,
    Confirm,
}

impl Screen {
    /// Lowest stage at which this screen may render.
    fn required_stage(self) -> Stage {
        match self {
            Self::Services => Stage::Empty,
            Self::AddOns | Self::Employees => Stage::ServiceChosen,
            Self::DateTime => Stage::EmployeeChosen,
            Self::Confirm => Stage::DateTimeChosen,
        }
    }
}

/// The in-progress booking selection.
///
/// Fields are private so the cascade-clear invariant cannot be
/// bypassed; read access goes through the borrow accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingState {
    service: Option<Service>,
    additional_service: Option<Service>,
    employee: Option<Employee>,
    date: Option<NaiveDate>,
    slot: Option<TimeSlot>,
    order_type: OrderType,
    recipient_name: Option<String>,
}

impl BookingState {
    // ── Accessors ────────────────────────────────────────────────

    pub fn service(&self) -> Option<&Service> {
        self.service.as_ref()
    }

    pub fn additional_service(&self) -> Option<&Service> {
        self.additional_service.as_ref()
    }

    pub fn employee(&self) -> Option<&Employee> {
        self.employee.as_ref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn slot(&self) -> Option<TimeSlot> {
        self.slot
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn recipient_name(&self) -> Option<&str> {
        self.recipient_name.as_deref()
    }

    pub fn stage(&self) -> Stage {
        if self.date.is_some() && self.slot.is_some() {
            Stage::DateTimeChosen
        } else if self.employee.is_some() {
            Stage::EmployeeChosen
        } else if self.additional_service.is_some() {
            Stage::AddOnChosen
        } else if self.service.is_some() {
            Stage::ServiceChosen
        } else {
            Stage::Empty
        }
    }

    // ── Setters ──────────────────────────────────────────────────

    /// Select the main service, clearing every downstream choice.
    pub fn choose_service(&mut self, service: Service) {
        self.service = Some(service);
        self.additional_service = None;
        self.employee = None;
        self.date = None;
        self.slot = None;
    }

    /// Select an optional add-on, clearing employee and date/slot.
    /// Skippable: the flow may go straight to employee selection.
    pub fn choose_add_on(&mut self, add_on: Service) {
        self.additional_service = Some(add_on);
        self.employee = None;
        self.date = None;
        self.slot = None;
    }

    /// Select the employee, clearing date and slot.
    pub fn choose_employee(&mut self, employee: Employee) {
        self.employee = Some(employee);
        self.date = None;
        self.slot = None;
    }

    /// Select date and slot together. Always set as a pair so they can
    /// never disagree; clears nothing else.
    pub fn choose_date_time(&mut self, date: NaiveDate, slot: TimeSlot) {
        self.date = Some(date);
        self.slot = Some(slot);
    }

    /// Switch between a personal and a gift order. Leaving gift mode
    /// drops any recipient name.
    pub fn set_order_type(&mut self, order_type: OrderType) {
        self.order_type = order_type;
        if order_type == OrderType::ForSelf {
            self.recipient_name = None;
        }
    }

    pub fn set_recipient_name(&mut self, name: Option<String>) {
        self.recipient_name = name;
    }

    /// Back to an empty selection.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ── Screen guards ────────────────────────────────────────────

    pub fn can_enter(&self, screen: Screen) -> bool {
        self.stage() >= screen.required_stage()
    }

    /// Entry guard, applied on every navigation: when the requested
    /// screen's prerequisites are missing, land on service selection
    /// instead of rendering with broken state.
    pub fn entry_screen(&self, requested: Screen) -> Screen {
        if self.can_enter(requested) {
            requested
        } else {
            Screen::Services
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::model::WorkSchedule;

    fn service(name: &str) -> Service {
        Service {
            id: format!("svc-{name}"),
            name: name.into(),
            duration_minutes: 45,
            price: 350,
            description: None,
            features: Vec::new(),
            code: None,
            service_type: None,
            sub_services: Vec::new(),
        }
    }

    fn employee(name: &str) -> Employee {
        Employee {
            id: format!("emp-{name}"),
            name: name.into(),
            avatar: None,
            schedule: WorkSchedule::default(),
        }
    }

    fn slot() -> TimeSlot {
        TimeSlot::new(
            Utc.with_ymd_and_hms(2026, 3, 7, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 3, 7, 10, 0, 0).unwrap(),
        )
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
    }

    #[test]
    fn service_change_clears_all_downstream() {
        let mut state = BookingState::default();
        state.choose_service(service("a"));
        state.choose_employee(employee("marjan"));
        state.choose_date_time(date(), slot());

        state.choose_service(service("b"));

        assert_eq!(state.service().unwrap().name, "b");
        assert!(state.employee().is_none());
        assert!(state.date().is_none());
        assert!(state.slot().is_none());
        assert_eq!(state.stage(), Stage::ServiceChosen);
    }

    #[test]
    fn add_on_clears_employee_and_slot_but_keeps_service() {
        let mut state = BookingState::default();
        state.choose_service(service("a"));
        state.choose_employee(employee("marjan"));
        state.choose_date_time(date(), slot());

        state.choose_add_on(service("nail-art"));

        assert!(state.service().is_some());
        assert!(state.additional_service().is_some());
        assert!(state.employee().is_none());
        assert!(state.slot().is_none());
        assert_eq!(state.stage(), Stage::AddOnChosen);
    }

    #[test]
    fn employee_change_clears_date_and_slot() {
        let mut state = BookingState::default();
        state.choose_service(service("a"));
        state.choose_employee(employee("marjan"));
        state.choose_date_time(date(), slot());

        state.choose_employee(employee("sara"));

        assert_eq!(state.employee().unwrap().name, "sara");
        assert!(state.date().is_none());
        assert!(state.slot().is_none());
    }

    #[test]
    fn date_and_slot_set_atomically_without_cascade() {
        let mut state = BookingState::default();
        state.choose_service(service("a"));
        state.choose_add_on(service("nail-art"));
        state.choose_employee(employee("marjan"));

        state.choose_date_time(date(), slot());

        assert!(state.service().is_some());
        assert!(state.additional_service().is_some());
        assert!(state.employee().is_some());
        assert_eq!(state.stage(), Stage::DateTimeChosen);
    }

    #[test]
    fn reset_returns_to_empty() {
        let mut state = BookingState::default();
        state.choose_service(service("a"));
        state.choose_employee(employee("marjan"));

        state.reset();

        assert_eq!(state, BookingState::default());
        assert_eq!(state.stage(), Stage::Empty);
    }

    #[test]
    fn leaving_gift_mode_drops_recipient() {
        let mut state = BookingState::default();
        state.set_order_type(OrderType::Gift);
        state.set_recipient_name(Some("Shirin".into()));
        assert_eq!(state.recipient_name(), Some("Shirin"));

        state.set_order_type(OrderType::ForSelf);
        assert!(state.recipient_name().is_none());
    }

    #[test]
    fn guards_redirect_to_service_selection() {
        let empty = BookingState::default();
        assert_eq!(empty.entry_screen(Screen::Services), Screen::Services);
        assert_eq!(empty.entry_screen(Screen::Employees), Screen::Services);
        assert_eq!(empty.entry_screen(Screen::DateTime), Screen::Services);
        assert_eq!(empty.entry_screen(Screen::Confirm), Screen::Services);
    }

    #[test]
    fn guards_admit_screens_as_stages_advance() {
        let mut state = BookingState::default();
        state.choose_service(service("a"));
        assert_eq!(state.entry_screen(Screen::AddOns), Screen::AddOns);
        assert_eq!(state.entry_screen(Screen::Employees), Screen::Employees);
        assert_eq!(state.entry_screen(Screen::DateTime), Screen::Services);

        state.choose_employee(employee("marjan"));
        assert_eq!(state.entry_screen(Screen::DateTime), Screen::DateTime);
        assert_eq!(state.entry_screen(Screen::Confirm), Screen::Services);

        state.choose_date_time(date(), slot());
        assert_eq!(state.entry_screen(Screen::Confirm), Screen::Confirm);
    }

    #[test]
    fn guard_recheck_catches_a_broken_chain() {
        let mut state = BookingState::default();
        state.choose_service(service("a"));
        state.choose_employee(employee("marjan"));
        state.choose_date_time(date(), slot());
        assert!(state.can_enter(Screen::Confirm));

        // Re-choosing the service invalidates the downstream chain, so
        // the same navigation now redirects.
        state.choose_service(service("b"));
        assert_eq!(state.entry_screen(Screen::Confirm), Screen::Services);
    }

    #[test]
    fn state_snapshot_round_trips_through_json() {
        let mut state = BookingState::default();
        state.choose_service(service("a"));
        state.choose_employee(employee("marjan"));
        state.choose_date_time(date(), slot());
        state.set_order_type(OrderType::Gift);
        state.set_recipient_name(Some("Shirin".into()));

        let json = serde_json::to_string(&state).unwrap();
        let back: BookingState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
