//! Scout theme for Patrol Score Studio.
//!
//! Provides the Iced [`Theme`] built from the scout palettes, plus shared
//! widget style functions used across views.
//!
//! Style functions read the thread-local [`colors()`] cache so they can be
//! passed directly to `.style(...)`:
//!
//! ```rust,ignore
//! button(text("Save")).style(button_primary)
//! ```

use iced::widget::button;
use iced::{Border, Color, Shadow, Theme, Vector};

use super::ThemeConfig;
use super::context::colors;
use super::spacing;

// =============================================================================
// THEME CREATION
// =============================================================================

/// Create the Iced theme for the given configuration.
///
/// The returned theme drives Iced's built-in widget defaults; most widgets
/// in this application override styling via the semantic color system.
pub fn scout_theme(config: ThemeConfig) -> Theme {
    let name = if config.is_dark() {
        "Scout Dark"
    } else {
        "Scout Light"
    };
    Theme::custom(name.to_string(), scout_palette(config))
}

/// Create the Iced base palette for the given configuration.
fn scout_palette(config: ThemeConfig) -> iced::theme::Palette {
    if config.is_dark() {
        iced::theme::Palette {
            background: Color::from_rgb(0.09, 0.11, 0.09), // Deep green-black
            text: Color::from_rgb(0.93, 0.95, 0.93),       // Near white
            primary: Color::from_rgb(0.40, 0.78, 0.44),    // Bright forest green
            success: Color::from_rgb(0.42, 0.80, 0.50),
            warning: Color::from_rgb(0.96, 0.72, 0.25),
            danger: Color::from_rgb(0.94, 0.44, 0.40),
        }
    } else {
        iced::theme::Palette {
            background: Color::from_rgb(0.98, 0.98, 0.97), // Warm off-white
            text: Color::from_rgb(0.11, 0.13, 0.11),       // Near black
            primary: Color::from_rgb(0.18, 0.49, 0.20),    // Forest green
            success: Color::from_rgb(0.22, 0.62, 0.32),
            warning: Color::from_rgb(0.93, 0.60, 0.05),
            danger: Color::from_rgb(0.79, 0.21, 0.18),
        }
    }
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary action button - filled forest green.
pub fn button_primary(_theme: &Theme, status: button::Status) -> button::Style {
    let c = colors();

    match status {
        button::Status::Active => button::Style {
            background: Some(c.accent_primary.into()),
            text_color: c.text_on_accent,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow {
                color: c.shadow,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(c.accent_hover.into()),
            text_color: c.text_on_accent,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow {
                color: c.shadow_strong,
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(c.accent_pressed.into()),
            text_color: c.text_on_accent,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(c.accent_disabled.into()),
            text_color: c.text_muted,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

/// Secondary button - outlined, neutral surface.
pub fn button_secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let c = colors();

    match status {
        button::Status::Active => button::Style {
            background: Some(c.background_elevated.into()),
            text_color: c.text_primary,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: c.border_default,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(c.background_secondary.into()),
            text_color: c.text_primary,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: c.border_focused,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(c.background_inset.into()),
            text_color: c.text_primary,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: c.border_focused,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(c.background_secondary.into()),
            text_color: c.text_disabled,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: c.border_subtle,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

/// Danger button - filled red, for destructive confirmations.
pub fn button_danger(_theme: &Theme, status: button::Status) -> button::Style {
    let c = colors();

    let background = match status {
        button::Status::Active => c.status_error,
        button::Status::Hovered => c.danger_hover,
        button::Status::Pressed => c.danger_pressed,
        button::Status::Disabled => c.accent_disabled,
    };
    let text_color = if status == button::Status::Disabled {
        c.text_muted
    } else {
        c.white
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Ghost button - borderless, for toolbars and inline actions.
pub fn button_ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let c = colors();

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => Some(c.background_secondary.into()),
        button::Status::Pressed => Some(c.background_inset.into()),
    };
    let text_color = if status == button::Status::Disabled {
        c.text_disabled
    } else {
        c.text_secondary
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}
