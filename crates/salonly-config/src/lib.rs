//! Shared configuration for salonly front-ends.
//!
//! TOML profiles, access-token resolution (keyring + env + plaintext),
//! and translation to `salonly_core::SalonConfig`. The embedding
//! application loads a profile here and hands the result to a
//! `BookingSession`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use salonly_core::slots::parse_clock;
use salonly_core::{SalonConfig, SlotWindow};

pub mod session;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no access token configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("failed to serialize session state: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named salon profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default = "default_persian_digits")]
    pub persian_digits: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            language: default_language(),
            persian_digits: default_persian_digits(),
            timeout: default_timeout(),
        }
    }
}

fn default_language() -> String {
    "fa".into()
}
fn default_persian_digits() -> bool {
    true
}
fn default_timeout() -> u64 {
    15
}

/// A named salon profile.
#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// Backend base URL (e.g., "https://api.salonly.example").
    pub backend: String,

    /// Salon id this profile books against.
    pub salon: String,

    /// Access token (plaintext -- prefer keyring or env var).
    pub token: Option<String>,

    /// Environment variable name containing the access token.
    pub token_env: Option<String>,

    /// Fallback working-window start, "HH:MM".
    pub window_start: Option<String>,

    /// Fallback working-window end, "HH:MM".
    pub window_end: Option<String>,

    /// Hours before the appointment when self-service cancelation closes.
    pub cancel_cutoff_hours: Option<i64>,

    /// Override timeout (seconds).
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "salonly", "salonly").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("salonly");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from a specific file + environment.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SALONLY_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to the given path.
pub fn save_config_to(path: &Path, cfg: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(&config_path(), cfg)
}

// ── Access-token resolution ─────────────────────────────────────────

/// Resolve an access token from the credential chain.
///
/// Checks the profile's `token_env` variable, then the system keyring,
/// then the plaintext `token` field. A missing token is not an error --
/// catalog browsing and availability work unauthenticated.
pub fn resolve_token(profile: &Profile, profile_name: &str) -> Option<SecretString> {
    // 1. Profile's token_env → env var lookup
    if let Some(ref env_name) = profile.token_env {
        if let Ok(val) = std::env::var(env_name) {
            return Some(SecretString::from(val));
        }
    }

    // 2. System keyring
    if let Ok(entry) = keyring::Entry::new("salonly", &format!("{profile_name}/token")) {
        if let Ok(secret) = entry.get_password() {
            return Some(SecretString::from(secret));
        }
    }

    // 3. Plaintext in config
    profile.token.clone().map(SecretString::from)
}

/// Like [`resolve_token`], but fails when nothing is configured.
/// Booking management (history, cancelation) needs an authenticated
/// client.
pub fn require_token(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    resolve_token(profile, profile_name).ok_or_else(|| ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

// ── Profile translation ─────────────────────────────────────────────

/// Build a `SalonConfig` from a profile.
///
/// Window and cutoff overrides are validated here: a malformed clock
/// string in user-written config is an error, unlike backend schedule
/// data which falls back silently at slot generation.
pub fn profile_to_salon_config(
    profile: &Profile,
    profile_name: &str,
) -> Result<SalonConfig, ConfigError> {
    let base_url: url::Url = profile.backend.parse().map_err(|_| ConfigError::Validation {
        field: "backend".into(),
        reason: format!("invalid URL: {}", profile.backend),
    })?;

    let mut config = SalonConfig::new(base_url, profile.salon.clone());
    config.token = resolve_token(profile, profile_name);

    let mut window = SlotWindow::default();
    if let Some(ref raw) = profile.window_start {
        window.start = parse_clock(raw).ok_or_else(|| ConfigError::Validation {
            field: "window_start".into(),
            reason: format!("expected HH:MM, got '{raw}'"),
        })?;
    }
    if let Some(ref raw) = profile.window_end {
        window.end = parse_clock(raw).ok_or_else(|| ConfigError::Validation {
            field: "window_end".into(),
            reason: format!("expected HH:MM, got '{raw}'"),
        })?;
    }
    if window.end <= window.start {
        return Err(ConfigError::Validation {
            field: "window_end".into(),
            reason: "window must end after it starts".into(),
        });
    }
    config.default_window = window;

    if let Some(hours) = profile.cancel_cutoff_hours {
        if hours < 0 {
            return Err(ConfigError::Validation {
                field: "cancel_cutoff_hours".into(),
                reason: format!("must be non-negative, got {hours}"),
            });
        }
        config.cancel_cutoff = chrono::Duration::hours(hours);
    }

    config.timeout = Duration::from_secs(profile.timeout.unwrap_or(default_timeout()));

    Ok(config)
}
