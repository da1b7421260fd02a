// ── Wizard state persistence ──
//
// Mini-app webviews die without warning when the host closes them.
// Persisting the wizard state as a JSON snapshot lets a reopened
// session pick up where the client left off.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use salonly_core::BookingState;

use crate::ConfigError;

/// Resolve the state snapshot path via XDG / platform conventions.
pub fn state_path() -> PathBuf {
    ProjectDirs::from("com", "salonly", "salonly").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".local");
            p.push("share");
            p.push("salonly");
            p.push("session.json");
            p
        },
        |dirs| dirs.data_dir().join("session.json"),
    )
}

/// Write the wizard state snapshot to the given path.
pub fn save_state_at(path: &Path, state: &BookingState) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Write the wizard state snapshot to the canonical path.
pub fn save_state(state: &BookingState) -> Result<(), ConfigError> {
    save_state_at(&state_path(), state)
}

/// Read a wizard state snapshot, if one exists.
///
/// A missing or corrupt snapshot reads as absent; the wizard simply
/// starts over.
pub fn load_state_at(path: &Path) -> Result<Option<BookingState>, ConfigError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&raw).ok())
}

/// Read the wizard state snapshot from the canonical path.
pub fn load_state() -> Result<Option<BookingState>, ConfigError> {
    load_state_at(&state_path())
}

/// Delete the snapshot, e.g. after a successful submission.
pub fn clear_state_at(path: &Path) -> Result<(), ConfigError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Delete the snapshot at the canonical path.
pub fn clear_state() -> Result<(), ConfigError> {
    clear_state_at(&state_path())
}
