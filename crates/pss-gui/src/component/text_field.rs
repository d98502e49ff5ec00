//! Labeled text field with validation.
//!
//! The standard form field: label row with optional character count, the
//! input itself, and an error line underneath when validation fails.

use iced::widget::{Space, column, row, text, text_input};
use iced::{Border, Color, Element, Length, Theme};

use crate::theme::{BORDER_RADIUS_SM, FONT_SIZE_CAPTION, FONT_SIZE_SMALL, colors};

/// A text input field with label, character count, and validation.
///
/// # Example
/// ```ignore
/// TextField::new("Station name", &form.name, "e.g. Knots", |s| {
///     Message::Setup(SetupMessage::StationNameChanged(s))
/// })
/// .max_length(MAX_CHARS_NAME)
/// .required(true)
/// .error(if form.name.trim().is_empty() { Some("Required") } else { None })
/// .view()
/// ```
pub struct TextField<M> {
    label: String,
    value: String,
    placeholder: String,
    on_change: Box<dyn Fn(String) -> M>,
    on_submit: Option<M>,
    max_length: Option<usize>,
    required: bool,
    error: Option<String>,
}

impl<M: Clone + 'static> TextField<M> {
    /// Create a new text field.
    pub fn new(
        label: impl Into<String>,
        value: &str,
        placeholder: impl Into<String>,
        on_change: impl Fn(String) -> M + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
            placeholder: placeholder.into(),
            on_change: Box::new(on_change),
            on_submit: None,
            max_length: None,
            required: false,
            error: None,
        }
    }

    /// Message sent when Enter is pressed in the field.
    pub fn on_submit(mut self, message: M) -> Self {
        self.on_submit = Some(message);
        self
    }

    /// Set maximum character length.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Mark field as required (adds a `*` to the label).
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set an error message to display.
    pub fn error(mut self, error: Option<impl Into<String>>) -> Self {
        self.error = error.map(Into::into);
        self
    }

    /// Build the text field element.
    pub fn view(self) -> Element<'static, M> {
        let c = colors();
        let error_color = c.status_error;
        let text_muted = c.text_muted;
        let text_disabled = c.text_disabled;
        let text_primary = c.text_primary;
        let border_default = c.border_default;
        let bg_elevated = c.background_elevated;
        let selection_bg = Color {
            a: 0.15,
            ..c.accent_primary
        };

        let char_count = self.value.len();
        let is_over = self.max_length.is_some_and(|max| char_count > max);
        let has_error = self.error.is_some() || is_over;

        let label_text = if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        };

        let count_display: Element<'static, M> = if let Some(max) = self.max_length {
            text(format!("{char_count}/{max}"))
                .size(FONT_SIZE_CAPTION)
                .color(if is_over { error_color } else { text_disabled })
                .into()
        } else {
            Space::new().width(0.0).into()
        };

        let error_el: Element<'static, M> = if let Some(err) = self.error {
            row![
                iced_fonts::lucide::circle_alert()
                    .size(12)
                    .color(error_color),
                Space::new().width(4.0),
                text(err).size(FONT_SIZE_CAPTION).color(error_color),
            ]
            .into()
        } else if is_over {
            text("Character limit exceeded")
                .size(FONT_SIZE_CAPTION)
                .color(error_color)
                .into()
        } else {
            Space::new().height(0.0).into()
        };

        let mut input = text_input(&self.placeholder, &self.value)
            .on_input(self.on_change)
            .padding([10.0, 12.0])
            .size(14)
            .style(move |_: &Theme, _status| text_input::Style {
                background: bg_elevated.into(),
                border: Border {
                    color: if has_error { error_color } else { border_default },
                    width: 1.0,
                    radius: BORDER_RADIUS_SM.into(),
                },
                icon: text_muted,
                placeholder: text_disabled,
                value: text_primary,
                selection: selection_bg,
            });
        if let Some(message) = self.on_submit {
            input = input.on_submit(message);
        }

        column![
            row![
                text(label_text).size(FONT_SIZE_SMALL).color(text_muted),
                Space::new().width(Length::Fill),
                count_display,
            ],
            Space::new().height(4.0),
            input,
            error_el,
        ]
        .into()
    }
}
