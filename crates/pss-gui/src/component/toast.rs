//! Toast notification component.
//!
//! Shows a temporary notification that auto-dismisses after a timeout
//! (driven by a subscription in the app). Rendered bottom-right, above the
//! regular content.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::message::Message;
use crate::theme::{SPACING_MD, SPACING_SM, SPACING_XS, button_ghost, colors};

/// Toast notification state.
#[derive(Debug, Clone)]
pub struct ToastState {
    /// The message to display.
    pub message: String,
    /// Toast type determines the icon and styling.
    pub toast_type: ToastType,
    /// Optional action button (e.g. "Show in folder").
    pub action: Option<ToastAction>,
}

/// Type of toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    /// Success notification (green check icon).
    Success,
    /// Information notification (blue info icon).
    Info,
    /// Warning notification (amber warning icon).
    Warning,
    /// Error notification (red X icon).
    Error,
}

impl ToastType {
    /// Icon color for this toast type.
    fn color(self) -> iced::Color {
        let c = colors();
        match self {
            ToastType::Success => c.status_success,
            ToastType::Info => c.status_info,
            ToastType::Warning => c.status_warning,
            ToastType::Error => c.status_error,
        }
    }
}

/// Optional action rendered as a small button inside the toast.
#[derive(Debug, Clone)]
pub struct ToastAction {
    /// Label for the action button.
    pub label: String,
    /// URL (or mailto:/file path) opened with the system handler.
    pub url: String,
}

/// Toast message for handling toast events.
#[derive(Debug, Clone)]
pub enum ToastMessage {
    /// Dismiss the toast.
    Dismiss,
    /// Perform the toast action.
    Action,
}

impl ToastState {
    /// Success toast with no action.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Success,
            action: None,
        }
    }

    /// Informational toast with no action.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Info,
            action: None,
        }
    }

    /// Warning toast with no action.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Warning,
            action: None,
        }
    }

    /// Error toast with no action.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Error,
            action: None,
        }
    }

    /// Attach an action button opening the given URL.
    pub fn with_action(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.action = Some(ToastAction {
            label: label.into(),
            url: url.into(),
        });
        self
    }
}

/// Renders a toast notification.
pub fn view_toast(state: &ToastState) -> Element<'_, Message> {
    let c = colors();
    let icon_color = state.toast_type.color();

    let icon = match state.toast_type {
        ToastType::Success => lucide::circle_check().size(18).color(icon_color),
        ToastType::Info => lucide::info().size(18).color(icon_color),
        ToastType::Warning => lucide::triangle_alert().size(18).color(icon_color),
        ToastType::Error => lucide::circle_x().size(18).color(icon_color),
    };

    let message_text = text(&state.message).size(14).color(c.text_secondary);

    let mut content = row![icon, Space::new().width(SPACING_SM), message_text]
        .align_y(Alignment::Center)
        .spacing(SPACING_XS);

    if let Some(action) = &state.action {
        let action_btn = button(text(&action.label).size(12))
            .on_press(Message::Toast(ToastMessage::Action))
            .padding([SPACING_XS, SPACING_SM])
            .style(button_ghost);

        content = content
            .push(Space::new().width(SPACING_MD))
            .push(action_btn);
    }

    let dismiss_btn = button(lucide::x().size(14).color(c.text_muted))
        .on_press(Message::Toast(ToastMessage::Dismiss))
        .padding(SPACING_XS)
        .style(button_ghost);

    content = content
        .push(Space::new().width(SPACING_SM))
        .push(dismiss_btn);

    let bg_color = c.background_elevated;
    let border_color = c.border_default;
    let shadow_color = c.shadow_strong;

    container(content)
        .padding([SPACING_SM, SPACING_MD])
        .width(Length::Shrink)
        .style(move |_| container::Style {
            background: Some(bg_color.into()),
            border: iced::Border {
                color: border_color,
                width: 1.0,
                radius: 8.0.into(),
            },
            shadow: iced::Shadow {
                color: shadow_color,
                offset: iced::Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        })
        .into()
}
