//! Application settings persistence for Marknotes.
//!
//! Stores user preferences (auto-save delay, export directory, layout) in a
//! JSON file at an OS-appropriate location.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{HtmlExportMode, Result, ViewMode};

/// Persisted application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Quiet period before an edit is auto-saved.
    pub autosave_delay_ms: u64,
    /// Directory exported files are written to.
    pub export_directory: String,
    pub view_mode: ViewMode,
    pub dark_mode: bool,
    pub sidebar_open: bool,
    /// Whether HTML exports embed raw or rendered markdown.
    pub html_export: HtmlExportMode,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            autosave_delay_ms: crate::AUTOSAVE_DELAY.as_millis() as u64,
            export_directory: default_export_directory()
                .to_string_lossy()
                .to_string(),
            view_mode: ViewMode::default(),
            dark_mode: false,
            sidebar_open: true,
            html_export: HtmlExportMode::default(),
        }
    }
}

impl AppSettings {
    pub fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.autosave_delay_ms)
    }
}

/// Returns the path to the settings JSON file.
///
/// - macOS / Linux: `~/.config/marknotes/settings.json`
/// - Windows: `%APPDATA%/Marknotes/settings.json`
pub fn settings_file_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("Marknotes").join("settings.json")
    }
    #[cfg(not(target_os = "windows"))]
    {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("marknotes").join("settings.json")
    }
}

/// Returns the default export directory: `~/Documents/Marknotes`.
pub fn default_export_directory() -> PathBuf {
    dirs::document_dir()
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Documents")
        })
        .join("Marknotes")
}

/// Loads settings from the default location.
pub fn load_settings() -> AppSettings {
    load_settings_from(&settings_file_path())
}

/// Loads settings from `path`; returns defaults if the file is missing or corrupt.
pub fn load_settings_from(path: &Path) -> AppSettings {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("ignoring corrupt settings file {}: {e}", path.display());
            AppSettings::default()
        }),
        Err(_) => AppSettings::default(),
    }
}

/// Saves settings to the default location.
///
/// # Errors
///
/// See [`save_settings_to`].
pub fn save_settings(settings: &AppSettings) -> Result<()> {
    save_settings_to(&settings_file_path(), settings)
}

/// Saves settings to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`crate::MarknotesError::Io`] if the file cannot be written, or
/// [`crate::MarknotesError::Json`] if serialization fails.
pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}
