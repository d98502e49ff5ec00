//! Light palette - warm off-white surfaces with a forest-green accent.

use iced::Color;

use super::super::semantic::{Palette, SemanticColor};

/// Scout light palette (default).
pub struct ScoutLight;

impl Palette for ScoutLight {
    fn resolve(&self, color: SemanticColor) -> Color {
        match color {
            // Backgrounds
            SemanticColor::BackgroundPrimary => Color::from_rgb(0.98, 0.98, 0.97),
            SemanticColor::BackgroundSecondary => Color::from_rgb(0.95, 0.96, 0.94),
            SemanticColor::BackgroundElevated => Color::WHITE,
            SemanticColor::BackgroundInset => Color::from_rgb(0.92, 0.93, 0.91),

            // Text
            SemanticColor::TextPrimary => Color::from_rgb(0.11, 0.13, 0.11),
            SemanticColor::TextSecondary => Color::from_rgb(0.25, 0.28, 0.25),
            SemanticColor::TextMuted => Color::from_rgb(0.42, 0.46, 0.42),
            SemanticColor::TextDisabled => Color::from_rgb(0.62, 0.65, 0.62),
            SemanticColor::TextOnAccent => Color::WHITE,

            // Accent
            SemanticColor::AccentPrimary => Color::from_rgb(0.18, 0.49, 0.20), // #2E7D33
            SemanticColor::AccentHover => Color::from_rgb(0.11, 0.37, 0.13),   // #1C5E21
            SemanticColor::AccentPressed => Color::from_rgb(0.08, 0.28, 0.10),
            SemanticColor::AccentDisabled => Color::from_rgb(0.62, 0.72, 0.63),
            SemanticColor::AccentPrimaryLight => Color::from_rgb(0.91, 0.96, 0.91),
            SemanticColor::AccentPrimaryMedium => Color::from_rgb(0.78, 0.89, 0.79),

            // Destructive
            SemanticColor::DangerHover => Color::from_rgb(0.68, 0.16, 0.14),
            SemanticColor::DangerPressed => Color::from_rgb(0.55, 0.12, 0.10),

            // Status
            SemanticColor::StatusSuccess => Color::from_rgb(0.22, 0.62, 0.32), // #389F52
            SemanticColor::StatusWarning => Color::from_rgb(0.93, 0.60, 0.05), // #ED990D
            SemanticColor::StatusWarningLight => Color::from_rgb(0.99, 0.95, 0.85),
            SemanticColor::StatusError => Color::from_rgb(0.79, 0.21, 0.18), // #C9362E
            SemanticColor::StatusInfo => Color::from_rgb(0.13, 0.45, 0.71),  // #2173B5

            // Borders
            SemanticColor::BorderDefault => Color::from_rgb(0.85, 0.87, 0.84),
            SemanticColor::BorderSubtle => Color::from_rgb(0.91, 0.92, 0.90),
            SemanticColor::BorderFocused => Color::from_rgb(0.18, 0.49, 0.20),
            SemanticColor::BorderError => Color::from_rgb(0.79, 0.21, 0.18),

            // Overlay & shadow
            SemanticColor::White => Color::WHITE,
            SemanticColor::Transparent => Color::TRANSPARENT,
            SemanticColor::Shadow => Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            SemanticColor::ShadowStrong => Color::from_rgba(0.0, 0.0, 0.0, 0.18),
            SemanticColor::Backdrop => Color::from_rgba(0.0, 0.0, 0.0, 0.5),
        }
    }
}
