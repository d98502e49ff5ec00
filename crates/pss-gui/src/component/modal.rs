//! Modal dialog overlay.
//!
//! Centers a dialog over the full app view with a dimmed backdrop.
//! Clicking the backdrop does NOT close the dialog; every dialog offers an
//! explicit close or cancel control.

use iced::widget::{button, center, column, container, opaque, row, space, stack, text};
use iced::{Border, Element, Length, Shadow, Vector};
use iced_fonts::lucide;

use crate::theme::{
    BORDER_RADIUS_LG, FONT_SIZE_SUBTITLE, MODAL_WIDTH_MD, SPACING_LG, SPACING_MD, SPACING_SM,
    button_ghost, colors,
};

/// Creates a modal dialog overlay.
///
/// # Arguments
///
/// * `base` - The background content (entire app view)
/// * `title` - Dialog title text
/// * `content` - Dialog body content
/// * `on_close` - Message sent by the close button
/// * `actions` - Footer buttons, rendered right-aligned in order
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    content: Element<'a, M>,
    on_close: M,
    actions: Vec<Element<'a, M>>,
) -> Element<'a, M> {
    let c = colors();
    let backdrop_color = c.backdrop;
    let bg = c.background_elevated;
    let border_color = c.border_default;
    let shadow_color = c.shadow_strong;

    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(backdrop_color.into()),
            ..Default::default()
        });

    let header = row![
        text(title).size(FONT_SIZE_SUBTITLE).color(c.text_primary),
        space::horizontal(),
        button(lucide::x().size(20).color(c.text_muted))
            .on_press(on_close)
            .padding([4.0, 8.0])
            .style(button_ghost),
    ]
    .align_y(iced::Alignment::Center);

    let action_row = {
        let mut r = row![space::horizontal()].spacing(SPACING_SM);
        for action in actions {
            r = r.push(action);
        }
        r
    };

    let dialog = container(
        column![
            header,
            container(content).padding([SPACING_MD, 0.0]),
            action_row,
        ]
        .spacing(SPACING_MD),
    )
    .width(Length::Fixed(MODAL_WIDTH_MD))
    .padding(SPACING_LG)
    .style(move |_| container::Style {
        background: Some(bg.into()),
        border: Border {
            radius: BORDER_RADIUS_LG.into(),
            width: 1.0,
            color: border_color,
        },
        shadow: Shadow {
            color: shadow_color,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    });

    stack![base, opaque(backdrop), center(dialog)].into()
}
