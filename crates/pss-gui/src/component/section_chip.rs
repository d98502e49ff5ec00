//! Section chips.
//!
//! Pill-shaped toggle buttons used for section allow-lists, the
//! competition's section line-up, and the scoring filter.

use iced::widget::{button, text};
use iced::{Border, Color, Element, Theme};

use crate::theme::{BORDER_RADIUS_FULL, FONT_SIZE_SMALL, SPACING_SM, SPACING_XS, colors};

/// A pill chip that reads as selected or not.
pub fn chip<'a, M: Clone + 'a>(label: &'a str, selected: bool, on_press: M) -> Element<'a, M> {
    button(text(label).size(FONT_SIZE_SMALL))
        .on_press(on_press)
        .padding([SPACING_XS, SPACING_SM])
        .style(move |_: &Theme, status| {
            let c = colors();
            let hovered = status == iced::widget::button::Status::Hovered;

            let (background, text_color, border_color) = if selected {
                (
                    c.accent_primary_light,
                    c.accent_primary,
                    if hovered { c.accent_primary } else { c.accent_primary_medium },
                )
            } else {
                (
                    c.background_elevated,
                    c.text_muted,
                    if hovered { c.border_focused } else { c.border_default },
                )
            };

            iced::widget::button::Style {
                background: Some(background.into()),
                text_color,
                border: Border {
                    radius: BORDER_RADIUS_FULL.into(),
                    width: 1.0,
                    color: border_color,
                },
                ..Default::default()
            }
        })
        .into()
}

/// Non-interactive pill badge in the given color.
pub fn badge<'a, M: 'a>(label: impl Into<String>, color: Color) -> Element<'a, M> {
    iced::widget::container(text(label.into()).size(FONT_SIZE_SMALL).color(color))
        .padding([2.0, SPACING_SM])
        .style(move |_| iced::widget::container::Style {
            background: Some(Color { a: 0.12, ..color }.into()),
            border: Border {
                radius: BORDER_RADIUS_FULL.into(),
                width: 1.0,
                color: Color { a: 0.35, ..color },
            },
            ..Default::default()
        })
        .into()
}
