//! User preference persistence.
//!
//! A small JSON-backed store (`~/.config/folio/preferences.json` on most
//! platforms) recording the preferred theme. Reads and writes go through an
//! internal `Mutex`, so the store can be shared across threads.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::expand_tilde;

/// Environment variable allowing callers to override the preferences file path.
pub const PREFERENCES_PATH_ENV: &str = "FOLIO_PREFERENCES_PATH";

pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("preferences I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("preferences serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferencesPayload {
    /// Canonical identifier of the last theme chosen by the user.
    pub preferred_theme: Option<String>,
}

#[derive(Debug)]
pub struct UserPreferences {
    path: PathBuf,
    payload: Mutex<PreferencesPayload>,
    persist_to_disk: bool,
}

impl UserPreferences {
    /// Opens the store at the default location.
    pub fn new() -> Result<Self, PreferencesError> {
        Self::open(default_preferences_path())
    }

    /// Opens the store at `path`; a missing or unreadable payload yields defaults.
    pub fn open(path: PathBuf) -> Result<Self, PreferencesError> {
        let payload = load_payload(&path)?;
        Ok(Self {
            path,
            payload: Mutex::new(payload),
            persist_to_disk: true,
        })
    }

    /// In-memory store used when the config directory cannot be accessed.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            payload: Mutex::new(PreferencesPayload::default()),
            persist_to_disk: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn preferred_theme(&self) -> Option<String> {
        self.payload.lock().expect("preferences lock poisoned").preferred_theme.clone()
    }

    pub fn set_preferred_theme(&self, theme_id: Option<String>) -> Result<(), PreferencesError> {
        let mut payload = self.payload.lock().expect("preferences lock poisoned");
        payload.preferred_theme = theme_id;
        if self.persist_to_disk {
            self.save_locked(&payload)?;
        }
        Ok(())
    }

    fn save_locked(&self, payload: &PreferencesPayload) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(payload)?)?;
        Ok(())
    }
}

fn default_preferences_path() -> PathBuf {
    if let Ok(path) = env::var(PREFERENCES_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
        .join(PREFERENCES_FILE_NAME)
}

fn load_payload(path: &Path) -> Result<PreferencesPayload, PreferencesError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to parse preferences file; using defaults");
                Ok(PreferencesPayload::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(PreferencesPayload::default()),
        Err(error) => Err(PreferencesError::Io(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join(PREFERENCES_FILE_NAME);

        let preferences = UserPreferences::open(path.clone()).expect("open");
        assert_eq!(preferences.preferred_theme(), None);
        preferences.set_preferred_theme(Some("nord".to_string())).expect("save");

        let reopened = UserPreferences::open(path).expect("reopen");
        assert_eq!(reopened.preferred_theme().as_deref(), Some("nord"));
    }

    #[test]
    fn corrupt_payload_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(PREFERENCES_FILE_NAME);
        fs::write(&path, "{{{").expect("write");
        let preferences = UserPreferences::open(path).expect("open");
        assert_eq!(preferences.preferred_theme(), None);
    }

    #[test]
    fn ephemeral_store_never_writes() {
        let preferences = UserPreferences::ephemeral();
        preferences.set_preferred_theme(Some("folio".to_string())).expect("set");
        assert_eq!(preferences.preferred_theme().as_deref(), Some("folio"));
        assert_eq!(preferences.path(), Path::new(""));
    }

    #[test]
    fn default_path_honors_environment_override() {
        temp_env::with_var(PREFERENCES_PATH_ENV, Some("/tmp/folio-prefs.json"), || {
            assert_eq!(default_preferences_path(), PathBuf::from("/tmp/folio-prefs.json"));
        });
    }
}
