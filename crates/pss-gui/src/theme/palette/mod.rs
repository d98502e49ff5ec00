//! Scout color palettes for Patrol Score Studio.
//!
//! Provides light and dark palettes built around a forest-green accent,
//! plus the [`ThemeMode`] preference persisted in settings.

mod dark;
mod light;

pub use dark::ScoutDark;
pub use light::ScoutLight;

use serde::{Deserialize, Serialize};

// =============================================================================
// THEME MODE
// =============================================================================

/// Theme mode for light/dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// All available modes for UI picker.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    /// Check if this is a dark mode (or resolves to dark).
    pub fn is_dark(&self, system_is_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_is_dark,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_mode_follows_detected_appearance() {
        assert!(ThemeMode::System.is_dark(true));
        assert!(!ThemeMode::System.is_dark(false));
        assert!(ThemeMode::Dark.is_dark(false));
        assert!(!ThemeMode::Light.is_dark(true));
    }

    #[test]
    fn serializes_snake_case() {
        let toml = toml::to_string(&std::collections::BTreeMap::from([(
            "mode",
            ThemeMode::System,
        )]))
        .unwrap();
        assert!(toml.contains("system"));
    }
}
