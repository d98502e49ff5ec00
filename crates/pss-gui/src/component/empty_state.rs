//! Empty state placeholder.
//!
//! Centered icon, title, and description for lists with nothing in them,
//! with an optional call-to-action button.

use iced::widget::{Text, column, container, text};
use iced::{Alignment, Element, Length};

use crate::theme::{FONT_SIZE_BODY, FONT_SIZE_SUBTITLE, SPACING_MD, SPACING_SM, colors};

/// A centered "nothing here yet" placeholder.
pub struct EmptyState<'a, M> {
    icon: Text<'a>,
    title: String,
    description: String,
    action: Option<Element<'a, M>>,
}

impl<'a, M: 'a> EmptyState<'a, M> {
    /// Create an empty state with a lucide icon, title, and description.
    pub fn new(icon: Text<'a>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            description: description.into(),
            action: None,
        }
    }

    /// Add a call-to-action below the description.
    pub fn action(mut self, action: impl Into<Element<'a, M>>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Build the element, filling the available area.
    pub fn view(self) -> Element<'a, M> {
        let c = colors();

        let mut content = column![
            self.icon.size(40).color(c.text_disabled),
            text(self.title)
                .size(FONT_SIZE_SUBTITLE)
                .color(c.text_secondary),
            text(self.description)
                .size(FONT_SIZE_BODY)
                .color(c.text_muted),
        ]
        .spacing(SPACING_SM)
        .align_x(Alignment::Center);

        if let Some(action) = self.action {
            content = content.push(container(action).padding([SPACING_MD, 0.0]));
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}
