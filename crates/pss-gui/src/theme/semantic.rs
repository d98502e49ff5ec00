//! Semantic color roles for the scout theme.
//!
//! Views never name raw colors. They ask for a role (`TextMuted`,
//! `AccentPrimary`, ...) and the active palette decides what that role looks
//! like, so the light and dark palettes stay interchangeable.

use iced::Color;

/// What a color is FOR, independent of its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticColor {
    // === Backgrounds ===
    /// Main window background
    BackgroundPrimary,
    /// Cards and grouped surfaces
    BackgroundSecondary,
    /// Modals, dialogs, and inputs sitting above the page
    BackgroundElevated,
    /// Recessed areas such as the score fill track
    BackgroundInset,

    // === Text ===
    /// Headings and values that must be read first
    TextPrimary,
    /// Body copy
    TextSecondary,
    /// Hints, captions, relative timestamps
    TextMuted,
    /// Disabled labels and placeholder glyphs
    TextDisabled,
    /// Text drawn on top of the accent color
    TextOnAccent,

    // === Accent (interactive) ===
    /// Buttons, links, selected tabs
    AccentPrimary,
    /// Accent hover state
    AccentHover,
    /// Accent pressed state
    AccentPressed,
    /// Accent with interaction disabled
    AccentDisabled,
    /// Faint accent tint for hover backgrounds and section chips
    AccentPrimaryLight,
    /// Stronger accent tint for the selected station row
    AccentPrimaryMedium,

    // === Destructive ===
    /// Danger button hover
    DangerHover,
    /// Danger button pressed
    DangerPressed,

    // === Status ===
    /// Saved / complete
    StatusSuccess,
    /// Needs attention, save failed
    StatusWarning,
    /// Tinted background behind warning badges
    StatusWarningLight,
    /// Invalid input
    StatusError,
    /// Neutral informational accents
    StatusInfo,

    // === Borders ===
    /// Default border
    BorderDefault,
    /// Hairline separators
    BorderSubtle,
    /// Border of the focused input
    BorderFocused,
    /// Border of an input holding invalid text
    BorderError,

    // === Overlay & shadow ===
    /// Pure white regardless of palette
    White,
    /// Fully transparent
    Transparent,
    /// Card shadow
    Shadow,
    /// Modal shadow
    ShadowStrong,
    /// Dimming layer behind modals
    Backdrop,
}

/// Maps every semantic role to a concrete color.
///
/// Implemented once per appearance (`ScoutLight`, `ScoutDark`).
pub trait Palette: Send + Sync {
    fn resolve(&self, color: SemanticColor) -> Color;
}
