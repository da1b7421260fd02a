// ── Runtime connection configuration ──
//
// These types describe *how* to talk to a salon's booking backend.
// They carry the access token and tuning knobs, but never touch disk.
// The front-end constructs a `SalonConfig` and hands it in.

use secrecy::SecretString;
use url::Url;

use crate::model::Weekday;
use crate::slots::SlotWindow;

/// Configuration for one salon's booking session.
///
/// Built by the embedding application, passed to `BookingSession` --
/// core never reads config files.
#[derive(Debug, Clone)]
pub struct SalonConfig {
    /// Backend base URL (e.g., `https://api.salonly.example`).
    pub base_url: Url,
    /// Salon whose catalog, staff, and calendar this session serves.
    pub salon_id: String,
    /// Bearer token for authenticated endpoints. `None` for guest browsing.
    pub token: Option<SecretString>,
    /// Working window assumed when a schedule entry omits its times.
    pub default_window: SlotWindow,
    /// First column of the month-picker grid.
    pub week_start: Weekday,
    /// Minimum lead time before a booking's start for self-service
    /// cancelation.
    pub cancel_cutoff: chrono::Duration,
    /// Request timeout.
    pub timeout: std::time::Duration,
}

impl SalonConfig {
    /// Config with standard tuning: Saturday week start, 12 h
    /// cancelation cutoff, 15 s request timeout, and the default
    /// working window.
    pub fn new(base_url: Url, salon_id: impl Into<String>) -> Self {
        Self {
            base_url,
            salon_id: salon_id.into(),
            token: None,
            default_window: SlotWindow::default(),
            week_start: Weekday::Saturday,
            cancel_cutoff: chrono::Duration::hours(12),
            timeout: std::time::Duration::from_secs(15),
        }
    }

    /// Same config with a bearer token installed.
    #[must_use]
    pub fn with_token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }
}
