//! Scout theme system for Patrol Score Studio.
//!
//! The theme is organized in layers:
//!
//! - **semantic**: Color roles (what a color is FOR)
//! - **palette**: Light/dark palettes mapping roles to values
//! - **resolved**: Pre-resolved color cache for cheap access
//! - **context**: Thread-local storage so views call `colors()` directly
//! - **scout**: The Iced `Theme` plus shared widget style functions
//! - **spacing** / **typography**: Layout and text constants

mod context;
mod palette;
mod resolved;
mod scout;
mod semantic;
mod spacing;
mod typography;

pub use context::{colors, current_config, set_theme};
pub use palette::{ScoutDark, ScoutLight, ThemeMode};
pub use resolved::ResolvedColors;
pub use scout::{button_danger, button_ghost, button_primary, button_secondary, scout_theme};
pub use semantic::{Palette, SemanticColor};
pub use spacing::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_MEDIUM,
    BORDER_WIDTH_THIN, ICON_SIZE_LG, ICON_SIZE_MD, ICON_SIZE_SM, INPUT_HEIGHT, MASTER_WIDTH,
    MODAL_WIDTH_MD, MODAL_WIDTH_SM, SETTINGS_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL,
    SPACING_XS, SPACING_XXL, TAB_PADDING_X, TAB_PADDING_Y,
};
pub use typography::{
    FONT_SIZE_BODY, FONT_SIZE_CAPTION, FONT_SIZE_DISPLAY, FONT_SIZE_HEADING, FONT_SIZE_SMALL,
    FONT_SIZE_SUBTITLE, FONT_SIZE_TITLE, MAX_CHARS_DESCRIPTION, MAX_CHARS_NAME,
};

use iced::Color;

/// Theme configuration resolved from settings plus the detected system
/// appearance.
///
/// Kept `Copy` so it can live in the thread-local context and be handed
/// to style closures without borrowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeConfig {
    /// User preference from settings (light, dark, or follow system).
    pub mode: ThemeMode,
    /// Detected system appearance, used when `mode` is `System`.
    pub system_is_dark: bool,
}

impl ThemeConfig {
    /// Whether the effective appearance is dark.
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark(self.system_is_dark)
    }

    /// Resolve a semantic color role against the active palette.
    pub fn resolve(&self, color: SemanticColor) -> Color {
        if self.is_dark() {
            ScoutDark.resolve(color)
        } else {
            ScoutLight.resolve(color)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_against_active_palette() {
        let light = ThemeConfig {
            mode: ThemeMode::Light,
            system_is_dark: true,
        };
        let dark = ThemeConfig {
            mode: ThemeMode::System,
            system_is_dark: true,
        };

        assert!(!light.is_dark());
        assert!(dark.is_dark());
        assert_ne!(
            light.resolve(SemanticColor::BackgroundPrimary),
            dark.resolve(SemanticColor::BackgroundPrimary)
        );
    }

    #[test]
    fn constants_stay_white_across_palettes() {
        for config in [
            ThemeConfig::default(),
            ThemeConfig {
                mode: ThemeMode::Dark,
                system_is_dark: false,
            },
        ] {
            assert_eq!(config.resolve(SemanticColor::White), Color::WHITE);
        }
    }
}
