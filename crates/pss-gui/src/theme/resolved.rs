//! Eagerly resolved colors for the active theme.
//!
//! Resolving every [`SemanticColor`] each time a view asks for one would mean
//! threading `&ThemeConfig` through the whole view tree. Instead the full set
//! is resolved once per theme change into this plain struct of `Color` fields,
//! which views read through the thread-local [`colors()`](super::colors)
//! accessor:
//!
//! ```rust,ignore
//! let c = colors();
//! text(station.name).color(c.text_primary)
//! ```

use iced::Color;

use super::ThemeConfig;
use super::semantic::SemanticColor;

/// Every semantic role resolved to a concrete color. `Copy`, so views can
/// grab it by value at the top of a function.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedColors {
    // Backgrounds
    pub background_primary: Color,
    pub background_secondary: Color,
    pub background_elevated: Color,
    pub background_inset: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub text_on_accent: Color,

    // Accent
    pub accent_primary: Color,
    pub accent_hover: Color,
    pub accent_pressed: Color,
    pub accent_disabled: Color,
    pub accent_primary_light: Color,
    pub accent_primary_medium: Color,

    // Destructive
    pub danger_hover: Color,
    pub danger_pressed: Color,

    // Status
    pub status_success: Color,
    pub status_warning: Color,
    pub status_warning_light: Color,
    pub status_error: Color,
    pub status_info: Color,

    // Borders
    pub border_default: Color,
    pub border_subtle: Color,
    pub border_focused: Color,
    pub border_error: Color,

    // Overlay & shadow
    pub white: Color,
    pub transparent: Color,
    pub shadow: Color,
    pub shadow_strong: Color,
    pub backdrop: Color,
}

impl ResolvedColors {
    /// Resolve the full role set against the palette `config` selects.
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            background_primary: config.resolve(SemanticColor::BackgroundPrimary),
            background_secondary: config.resolve(SemanticColor::BackgroundSecondary),
            background_elevated: config.resolve(SemanticColor::BackgroundElevated),
            background_inset: config.resolve(SemanticColor::BackgroundInset),

            text_primary: config.resolve(SemanticColor::TextPrimary),
            text_secondary: config.resolve(SemanticColor::TextSecondary),
            text_muted: config.resolve(SemanticColor::TextMuted),
            text_disabled: config.resolve(SemanticColor::TextDisabled),
            text_on_accent: config.resolve(SemanticColor::TextOnAccent),

            accent_primary: config.resolve(SemanticColor::AccentPrimary),
            accent_hover: config.resolve(SemanticColor::AccentHover),
            accent_pressed: config.resolve(SemanticColor::AccentPressed),
            accent_disabled: config.resolve(SemanticColor::AccentDisabled),
            accent_primary_light: config.resolve(SemanticColor::AccentPrimaryLight),
            accent_primary_medium: config.resolve(SemanticColor::AccentPrimaryMedium),

            danger_hover: config.resolve(SemanticColor::DangerHover),
            danger_pressed: config.resolve(SemanticColor::DangerPressed),

            status_success: config.resolve(SemanticColor::StatusSuccess),
            status_warning: config.resolve(SemanticColor::StatusWarning),
            status_warning_light: config.resolve(SemanticColor::StatusWarningLight),
            status_error: config.resolve(SemanticColor::StatusError),
            status_info: config.resolve(SemanticColor::StatusInfo),

            border_default: config.resolve(SemanticColor::BorderDefault),
            border_subtle: config.resolve(SemanticColor::BorderSubtle),
            border_focused: config.resolve(SemanticColor::BorderFocused),
            border_error: config.resolve(SemanticColor::BorderError),

            white: config.resolve(SemanticColor::White),
            transparent: config.resolve(SemanticColor::Transparent),
            shadow: config.resolve(SemanticColor::Shadow),
            shadow_strong: config.resolve(SemanticColor::ShadowStrong),
            backdrop: config.resolve(SemanticColor::Backdrop),
        }
    }
}

impl Default for ResolvedColors {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
