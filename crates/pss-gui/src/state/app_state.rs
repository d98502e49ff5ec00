//! Application-level state.
//!
//! `AppState` is the root of all state. Handlers receive `&mut AppState`
//! and views receive `&AppState`; the Iced `App` struct itself stays thin.

use std::path::PathBuf;

use pss_model::Competition;
use pss_persistence::DirtyTracker;

use super::save_state::SaveState;
use super::settings::Settings;
use super::view_state::{DialogState, PendingAction, ViewState};
use crate::component::ToastState;
use crate::theme::ThemeConfig;

/// Top-level application state.
pub struct AppState {
    /// Loaded competition (None on the welcome screen).
    pub competition: Option<Competition>,
    /// Where the competition was loaded from / last saved to.
    pub competition_path: Option<PathBuf>,
    /// State of the visible screen.
    pub view: ViewState,
    /// Modal dialog blocking the window, if any.
    pub dialog: Option<DialogState>,
    /// Persisted settings.
    pub settings: Settings,
    /// Detected system appearance, combined with settings into the theme.
    pub system_is_dark: bool,
    /// Unsaved-changes tracking for the title bar and auto-save.
    pub dirty_tracker: DirtyTracker,
    /// Ephemeral save lifecycle shown by the save indicator.
    pub save_state: SaveState,
    /// Reason of the most recent failed save, for the indicator tooltip.
    pub last_save_error: Option<String>,
    /// Monotonic counter identifying save attempts. Completions carrying a
    /// stale generation are dropped so the indicator always reflects the
    /// most recent save.
    pub save_generation: u64,
    /// Action to resume once a save triggered by the unsaved-changes dialog
    /// finishes.
    pub pending_after_save: Option<PendingAction>,
    /// Transient notification, if any.
    pub toast: Option<ToastState>,
    /// True while a competition file is being read.
    pub is_loading: bool,
}

impl AppState {
    /// Create app state with loaded settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            competition: None,
            competition_path: None,
            view: ViewState::default(),
            dialog: None,
            settings,
            system_is_dark: false,
            dirty_tracker: DirtyTracker::new(),
            save_state: SaveState::default(),
            last_save_error: None,
            save_generation: 0,
            pending_after_save: None,
            toast: None,
            is_loading: false,
        }
    }

    /// Whether a competition is currently open.
    pub fn has_competition(&self) -> bool {
        self.competition.is_some()
    }

    /// Theme configuration derived from settings plus the detected system
    /// appearance.
    pub fn theme_config(&self) -> ThemeConfig {
        ThemeConfig {
            mode: self.settings.display.theme_mode,
            system_is_dark: self.system_is_dark,
        }
    }

    /// Reserve the next save generation.
    ///
    /// Called once per save attempt; the returned value travels with the
    /// completion message so stale results can be recognized.
    pub fn next_save_generation(&mut self) -> u64 {
        self.save_generation += 1;
        self.save_generation
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_generations_are_monotonic() {
        let mut state = AppState::default();
        let first = state.next_save_generation();
        let second = state.next_save_generation();
        assert!(second > first);
        assert_eq!(state.save_generation, second);
    }

    #[test]
    fn theme_config_combines_settings_and_system() {
        let mut state = AppState::default();
        state.settings.display.theme_mode = crate::theme::ThemeMode::System;
        state.system_is_dark = true;
        assert!(state.theme_config().is_dark());

        state.system_is_dark = false;
        assert!(!state.theme_config().is_dark());
    }

    #[test]
    fn starts_on_home_with_nothing_loaded() {
        let state = AppState::default();
        assert!(!state.has_competition());
        assert!(matches!(state.view, ViewState::Home(_)));
        assert!(state.dialog.is_none());
        assert!(!state.dirty_tracker.is_dirty());
    }
}
