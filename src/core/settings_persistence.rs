//! Settings persistence
//!
//! Saves and loads [`EngineSettings`] to/from a JSON file so front-end
//! preferences survive between sessions.
//!
//! # File Location
//!
//! Settings are stored in `settings.json` inside the platform configuration
//! directory, falling back to the working directory when none can be found.
//!
//! # Error Handling
//!
//! Loading never fails: a missing or unreadable file falls back to the
//! defaults, and the reason is kept in [`LoadedSettings`] so it can be logged
//! as a warning. Saving reports its error to the caller.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::error::{CoreError, CoreResult};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Front-end preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// JSON setup file to start from instead of the standard layout
    pub setup_path: Option<PathBuf>,
    /// `tracing` filter directive, e.g. `info` or `tilechess=debug`
    pub log_filter: String,
    /// Print rank and file labels around the text board
    pub show_coordinates: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            setup_path: None,
            log_filter: "info".to_string(),
            show_coordinates: true,
        }
    }
}

/// Helper to resolve the settings file path
///
/// Returns a path to `settings.json` in the user's configuration directory,
/// e.g. `~/.config/tilechess/settings.json` on Linux.
pub fn get_settings_path() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "trilltino", "tilechess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        // Fallback to current directory
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Why the defaults were used instead of the settings file
#[derive(Debug)]
pub enum SettingsFallback {
    /// No file at the settings path
    Missing,
    /// The file exists but could not be read or parsed
    Invalid(CoreError),
}

/// Settings read from disk, plus the reason defaults were used if they were
///
/// Reading does not log by itself, so a caller can read settings before a
/// subscriber is installed and [`report`](LoadedSettings::report) afterwards.
#[derive(Debug)]
pub struct LoadedSettings {
    pub settings: EngineSettings,
    pub path: PathBuf,
    pub fallback: Option<SettingsFallback>,
}

impl LoadedSettings {
    /// Log where the settings came from
    pub fn report(&self) {
        match &self.fallback {
            None => info!("[SETTINGS] Loaded settings from {:?}", self.path),
            Some(SettingsFallback::Missing) => warn!(
                "[SETTINGS] No settings file found at {:?}. Using defaults.",
                self.path
            ),
            Some(SettingsFallback::Invalid(e)) => warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                self.path, e
            ),
        }
    }
}

/// Load settings from the default location
pub fn load_settings() -> LoadedSettings {
    load_settings_from(&get_settings_path())
}

/// Load settings from `settings_path`, using defaults if that fails
pub fn load_settings_from(settings_path: &Path) -> LoadedSettings {
    let (settings, fallback) = if !settings_path.exists() {
        (EngineSettings::default(), Some(SettingsFallback::Missing))
    } else {
        match read_settings(settings_path) {
            Ok(settings) => (settings, None),
            Err(e) => (EngineSettings::default(), Some(SettingsFallback::Invalid(e))),
        }
    };

    LoadedSettings {
        settings,
        path: settings_path.to_path_buf(),
        fallback,
    }
}

fn read_settings(settings_path: &Path) -> CoreResult<EngineSettings> {
    let contents = fs::read_to_string(settings_path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Save settings to the default location
pub fn save_settings(settings: &EngineSettings) -> CoreResult<()> {
    save_settings_to(settings, &get_settings_path())
}

/// Save settings to `settings_path` as pretty JSON, creating its directory
pub fn save_settings_to(settings: &EngineSettings, settings_path: &Path) -> CoreResult<()> {
    if let Some(parent) = settings_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(settings_path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", settings_path);
    Ok(())
}
