//! Persistent application settings.
//!
//! Settings are stored as TOML in the platform config directory and loaded
//! once at startup. Saving is best-effort; a failed write surfaces as a log
//! line, never as a dialog.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use pss_persistence::AutoSaveConfig;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::theme::ThemeMode;

/// Maximum entries kept in the recent competitions list.
const MAX_RECENT: usize = 10;

// =============================================================================
// SETTINGS
// =============================================================================

/// Root settings document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub display: DisplaySettings,
}

/// Behavior settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Auto-save behavior while a competition is open.
    pub auto_save: AutoSaveConfig,
    /// Recently opened competition files, most recent first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recent_competitions: Vec<RecentCompetition>,
}

/// Appearance settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Light, dark, or follow the system appearance.
    pub theme_mode: ThemeMode,
}

impl Settings {
    /// Load settings from the platform config directory.
    ///
    /// Any problem (missing file, unreadable file, parse error) falls back
    /// to defaults; settings are never a reason the app fails to start.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|contents| toml::from_str(&contents).ok())
            .unwrap_or_default()
    }

    /// Save settings to the platform config directory.
    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {e}"))?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {e}"))?;
        std::fs::write(path, contents).map_err(|e| format!("Failed to write settings: {e}"))
    }

    /// Platform-specific settings file location.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "PatrolScoreStudio", "Patrol Score Studio")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    // =========================================================================
    // Recent competitions
    // =========================================================================

    /// Record a competition file as the most recently opened.
    ///
    /// An existing entry for the same path moves to the front with a fresh
    /// timestamp; the list is truncated to [`MAX_RECENT`].
    pub fn add_recent(&mut self, path: PathBuf, display_name: impl Into<String>) {
        let recents = &mut self.general.recent_competitions;
        recents.retain(|entry| entry.path != path);
        recents.insert(0, RecentCompetition::new(path, display_name));
        recents.truncate(MAX_RECENT);
    }

    /// Drop the recent entry for the given path, if present.
    pub fn remove_recent(&mut self, path: &Path) {
        self.general
            .recent_competitions
            .retain(|entry| entry.path != path);
    }

    /// Drop all recent entries.
    pub fn clear_recent(&mut self) {
        self.general.recent_competitions.clear();
    }
}

// =============================================================================
// RECENT COMPETITION
// =============================================================================

/// One entry in the recent competitions list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentCompetition {
    /// Stable identity for list rendering.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Absolute path to the .pss file.
    pub path: PathBuf,
    /// Competition name at the time it was opened.
    pub display_name: String,
    /// When the file was last opened.
    pub last_opened: DateTime<Utc>,
}

impl RecentCompetition {
    /// Create an entry stamped with the current time.
    pub fn new(path: PathBuf, display_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            path,
            display_name: display_name.into(),
            last_opened: Utc::now(),
        }
    }

    /// Whether the file still exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Human-friendly description of when the file was last opened.
    pub fn relative_time(&self) -> String {
        let delta = Utc::now().signed_duration_since(self.last_opened);

        let minutes = delta.num_minutes();
        if minutes < 1 {
            return "Just now".to_string();
        }
        if minutes < 60 {
            let unit = if minutes == 1 { "minute" } else { "minutes" };
            return format!("{minutes} {unit} ago");
        }

        let hours = delta.num_hours();
        if hours < 24 {
            let unit = if hours == 1 { "hour" } else { "hours" };
            return format!("{hours} {unit} ago");
        }
        if delta.num_days() < 2 {
            return "Yesterday".to_string();
        }

        self.last_opened.format("%b %d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::load_from(Path::new("/nonexistent/settings.toml"));
        assert_eq!(settings.display.theme_mode, ThemeMode::Light);
        assert!(settings.general.auto_save.enabled);
        assert!(settings.general.recent_competitions.is_empty());
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut settings = Settings::default();
        settings.display.theme_mode = ThemeMode::Dark;
        settings.general.auto_save.enabled = false;
        settings.add_recent(PathBuf::from("/tmp/pioneering.pss"), "District Camp 2026");
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.display.theme_mode, ThemeMode::Dark);
        assert!(!loaded.general.auto_save.enabled);
        assert_eq!(loaded.general.recent_competitions.len(), 1);
        assert_eq!(
            loaded.general.recent_competitions[0].display_name,
            "District Camp 2026"
        );
    }

    #[test]
    fn add_recent_dedupes_and_truncates() {
        let mut settings = Settings::default();
        for i in 0..12 {
            settings.add_recent(PathBuf::from(format!("/tmp/comp{i}.pss")), format!("C{i}"));
        }
        assert_eq!(settings.general.recent_competitions.len(), MAX_RECENT);

        // Re-opening an existing path moves it to the front without growing.
        settings.add_recent(PathBuf::from("/tmp/comp5.pss"), "C5");
        assert_eq!(settings.general.recent_competitions.len(), MAX_RECENT);
        assert_eq!(
            settings.general.recent_competitions[0].path,
            PathBuf::from("/tmp/comp5.pss")
        );
    }

    #[test]
    fn remove_and_clear_recent() {
        let mut settings = Settings::default();
        settings.add_recent(PathBuf::from("/tmp/a.pss"), "A");
        settings.add_recent(PathBuf::from("/tmp/b.pss"), "B");

        settings.remove_recent(Path::new("/tmp/a.pss"));
        assert_eq!(settings.general.recent_competitions.len(), 1);

        settings.clear_recent();
        assert!(settings.general.recent_competitions.is_empty());
    }

    #[test]
    fn relative_time_buckets() {
        let mut entry = RecentCompetition::new(PathBuf::from("/tmp/x.pss"), "X");
        assert_eq!(entry.relative_time(), "Just now");

        entry.last_opened = Utc::now() - Duration::minutes(5);
        assert_eq!(entry.relative_time(), "5 minutes ago");

        entry.last_opened = Utc::now() - Duration::hours(3);
        assert_eq!(entry.relative_time(), "3 hours ago");

        entry.last_opened = Utc::now() - Duration::hours(30);
        assert_eq!(entry.relative_time(), "Yesterday");
    }
}
