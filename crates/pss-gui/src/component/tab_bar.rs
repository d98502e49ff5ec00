//! Tab bar navigation.
//!
//! Horizontal tab strip used by the setup screen.

use iced::widget::{button, container, row, text};
use iced::{Border, Color, Element, Length, Theme};

use crate::theme::{BORDER_RADIUS_SM, TAB_PADDING_X, TAB_PADDING_Y, colors};

/// A tab item for the tab bar.
pub struct Tab<M> {
    pub label: String,
    pub message: M,
}

impl<M> Tab<M> {
    /// Create a new tab.
    pub fn new(label: impl Into<String>, message: M) -> Self {
        Self {
            label: label.into(),
            message,
        }
    }
}

/// Creates a horizontal tab bar with the active tab highlighted.
pub fn tab_bar<'a, M: Clone + 'a>(tabs: Vec<Tab<M>>, active_index: usize) -> Element<'a, M> {
    let c = colors();
    let mut tab_row = row![].spacing(2.0);

    for (index, tab) in tabs.into_iter().enumerate() {
        let is_active = index == active_index;

        let tab_button = button(
            container(text(tab.label).size(14))
                .padding([TAB_PADDING_Y, TAB_PADDING_X])
                .center_x(Length::Shrink),
        )
        .on_press(tab.message)
        .padding(0)
        .style(move |_: &Theme, status| {
            let c = colors();
            let hovered = status == iced::widget::button::Status::Hovered;

            let (background, text_color) = if is_active {
                (Some(c.accent_primary_light.into()), c.accent_primary)
            } else if hovered {
                (Some(c.background_secondary.into()), c.text_primary)
            } else {
                (None, c.text_muted)
            };

            iced::widget::button::Style {
                background,
                text_color,
                border: Border {
                    radius: BORDER_RADIUS_SM.into(),
                    width: 0.0,
                    color: Color::TRANSPARENT,
                },
                ..Default::default()
            }
        });

        tab_row = tab_row.push(tab_button);
    }

    let border_color = c.border_subtle;
    container(tab_row)
        .width(Length::Fill)
        .padding([4.0, 4.0])
        .style(move |_| container::Style {
            background: None,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: BORDER_RADIUS_SM.into(),
            },
            ..Default::default()
        })
        .into()
}
