//! Page header with title, optional back button, badge, and actions.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Border, Element, Length};
use iced_fonts::lucide;

use crate::theme::{
    BORDER_RADIUS_FULL, FONT_SIZE_CAPTION, FONT_SIZE_HEADING, FONT_SIZE_SMALL, SPACING_SM,
    SPACING_XS, button_ghost, colors,
};

/// Header block at the top of a screen.
///
/// Renders title, optional badge pill, a muted metadata line, and a
/// trailing action area, with an optional back button on the left.
pub struct PageHeader<'a, M> {
    title: String,
    on_back: Option<M>,
    badge: Option<(String, iced::Color)>,
    metadata: Vec<(String, String)>,
    trailing: Option<Element<'a, M>>,
}

impl<'a, M: Clone + 'a> PageHeader<'a, M> {
    /// Create a header with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            on_back: None,
            badge: None,
            metadata: Vec::new(),
            trailing: None,
        }
    }

    /// Add a back button sending the given message.
    pub fn on_back(mut self, message: M) -> Self {
        self.on_back = Some(message);
        self
    }

    /// Add a colored badge pill next to the title.
    pub fn badge(mut self, label: impl Into<String>, color: iced::Color) -> Self {
        self.badge = Some((label.into(), color));
        self
    }

    /// Add a `label: value` pair to the metadata line.
    pub fn metadata(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((label.into(), value.into()));
        self
    }

    /// Set the trailing action area (buttons, indicators).
    pub fn trailing(mut self, element: impl Into<Element<'a, M>>) -> Self {
        self.trailing = Some(element.into());
        self
    }

    /// Build the header element.
    pub fn view(self) -> Element<'a, M> {
        let c = colors();

        let mut title_row = row![].align_y(Alignment::Center).spacing(SPACING_SM);

        if let Some(message) = self.on_back {
            title_row = title_row.push(
                button(lucide::chevron_left().size(20).color(c.text_secondary))
                    .on_press(message)
                    .padding([4.0, 6.0])
                    .style(button_ghost),
            );
        }

        title_row = title_row.push(
            text(self.title)
                .size(FONT_SIZE_HEADING)
                .color(c.text_primary),
        );

        if let Some((label, color)) = self.badge {
            title_row = title_row.push(
                container(text(label).size(FONT_SIZE_CAPTION).color(c.white))
                    .padding([2.0, SPACING_SM])
                    .style(move |_| container::Style {
                        background: Some(color.into()),
                        border: Border {
                            radius: BORDER_RADIUS_FULL.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }),
            );
        }

        title_row = title_row.push(Space::new().width(Length::Fill));
        if let Some(trailing) = self.trailing {
            title_row = title_row.push(trailing);
        }

        let mut content = column![title_row].spacing(SPACING_XS);

        if !self.metadata.is_empty() {
            let mut meta_row = row![].spacing(SPACING_SM).align_y(Alignment::Center);
            for (i, (label, value)) in self.metadata.into_iter().enumerate() {
                if i > 0 {
                    meta_row = meta_row.push(
                        text("·").size(FONT_SIZE_SMALL).color(c.text_disabled),
                    );
                }
                meta_row = meta_row.push(
                    text(format!("{label}: {value}"))
                        .size(FONT_SIZE_SMALL)
                        .color(c.text_muted),
                );
            }
            content = content.push(meta_row);
        }

        content.into()
    }
}
