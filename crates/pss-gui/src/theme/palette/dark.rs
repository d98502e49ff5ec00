//! Dark palette - deep green-tinted surfaces with a brighter accent.

use iced::Color;

use super::super::semantic::{Palette, SemanticColor};

/// Scout dark palette.
pub struct ScoutDark;

impl Palette for ScoutDark {
    fn resolve(&self, color: SemanticColor) -> Color {
        match color {
            // Backgrounds
            SemanticColor::BackgroundPrimary => Color::from_rgb(0.09, 0.11, 0.09),
            SemanticColor::BackgroundSecondary => Color::from_rgb(0.12, 0.14, 0.12),
            SemanticColor::BackgroundElevated => Color::from_rgb(0.15, 0.18, 0.15),
            SemanticColor::BackgroundInset => Color::from_rgb(0.07, 0.08, 0.07),

            // Text
            SemanticColor::TextPrimary => Color::from_rgb(0.93, 0.95, 0.93),
            SemanticColor::TextSecondary => Color::from_rgb(0.80, 0.83, 0.80),
            SemanticColor::TextMuted => Color::from_rgb(0.60, 0.64, 0.60),
            SemanticColor::TextDisabled => Color::from_rgb(0.42, 0.45, 0.42),
            SemanticColor::TextOnAccent => Color::from_rgb(0.05, 0.12, 0.06),

            // Accent
            SemanticColor::AccentPrimary => Color::from_rgb(0.40, 0.78, 0.44), // #66C770
            SemanticColor::AccentHover => Color::from_rgb(0.49, 0.84, 0.52),
            SemanticColor::AccentPressed => Color::from_rgb(0.32, 0.68, 0.36),
            SemanticColor::AccentDisabled => Color::from_rgb(0.25, 0.35, 0.26),
            SemanticColor::AccentPrimaryLight => Color::from_rgba(0.40, 0.78, 0.44, 0.12),
            SemanticColor::AccentPrimaryMedium => Color::from_rgba(0.40, 0.78, 0.44, 0.25),

            // Destructive
            SemanticColor::DangerHover => Color::from_rgb(0.96, 0.55, 0.50),
            SemanticColor::DangerPressed => Color::from_rgb(0.85, 0.35, 0.30),

            // Status
            SemanticColor::StatusSuccess => Color::from_rgb(0.42, 0.80, 0.50), // #6BCC80
            SemanticColor::StatusWarning => Color::from_rgb(0.96, 0.72, 0.25), // #F5B840
            SemanticColor::StatusWarningLight => Color::from_rgba(0.96, 0.72, 0.25, 0.15),
            SemanticColor::StatusError => Color::from_rgb(0.94, 0.44, 0.40), // #F07066
            SemanticColor::StatusInfo => Color::from_rgb(0.45, 0.70, 0.92),  // #73B3EB

            // Borders
            SemanticColor::BorderDefault => Color::from_rgb(0.25, 0.28, 0.25),
            SemanticColor::BorderSubtle => Color::from_rgb(0.19, 0.22, 0.19),
            SemanticColor::BorderFocused => Color::from_rgb(0.40, 0.78, 0.44),
            SemanticColor::BorderError => Color::from_rgb(0.94, 0.44, 0.40),

            // Overlay & shadow
            SemanticColor::White => Color::WHITE,
            SemanticColor::Transparent => Color::TRANSPARENT,
            SemanticColor::Shadow => Color::from_rgba(0.0, 0.0, 0.0, 0.35),
            SemanticColor::ShadowStrong => Color::from_rgba(0.0, 0.0, 0.0, 0.55),
            SemanticColor::Backdrop => Color::from_rgba(0.0, 0.0, 0.0, 0.65),
        }
    }
}
