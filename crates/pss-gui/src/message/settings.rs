//! Settings screen messages.

use crate::theme::ThemeMode;

/// Messages from the settings screen.
#[derive(Debug, Clone)]
pub enum SettingsMessage {
    /// Theme preference changed.
    ThemeModeSelected(ThemeMode),
    /// Auto-save toggled on or off.
    AutoSaveToggled(bool),
    /// Clear the recent competitions list.
    ClearRecentCompetitions,
}
