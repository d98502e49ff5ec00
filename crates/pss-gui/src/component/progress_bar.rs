//! Horizontal progress bar.
//!
//! Used for per-station completion in the scoring master list and the
//! overall progress card on the home screen. Fills green on completion.

use iced::widget::{Space, container, row, text};
use iced::{Border, Color, Element, Length};

use crate::theme::{FONT_SIZE_CAPTION, SPACING_SM, colors};

/// A horizontal progress bar with an optional percentage label.
pub struct ProgressBar {
    value: f32,
    height: f32,
    show_label: bool,
}

impl ProgressBar {
    /// Create a new progress bar with the given value (0.0 to 1.0).
    pub fn new(value: f32) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
            height: 6.0,
            show_label: false,
        }
    }

    /// Set the height of the track.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Show a percentage label next to the bar.
    pub fn show_label(mut self, show: bool) -> Self {
        self.show_label = show;
        self
    }

    /// Build the progress bar element.
    pub fn view<M: 'static>(self) -> Element<'static, M> {
        let c = colors();
        let height = self.height;
        let fill_color = if self.value >= 1.0 {
            c.status_success
        } else {
            c.accent_primary
        };
        let track_color = c.background_inset;

        // FillPortion keeps the split proportional at any width.
        let fill_width = if self.value > 0.0 {
            Length::FillPortion((self.value * 100.0).max(1.0) as u16)
        } else {
            Length::Fixed(0.0)
        };
        let empty_width = if self.value < 1.0 {
            Length::FillPortion(((1.0 - self.value) * 100.0).max(1.0) as u16)
        } else {
            Length::Fixed(0.0)
        };

        let fill: Element<'static, M> = container(Space::new())
            .width(fill_width)
            .height(height)
            .style(move |_| rounded(fill_color, height))
            .into();
        let empty: Element<'static, M> = Space::new().width(empty_width).height(height).into();

        let bar: Element<'static, M> = container(row![fill, empty].height(height))
            .width(Length::Fill)
            .height(height)
            .style(move |_| rounded(track_color, height))
            .into();

        if self.show_label {
            let label = text(format!("{}%", (self.value * 100.0).round() as u32))
                .size(FONT_SIZE_CAPTION)
                .color(c.text_muted);
            row![bar, label]
                .spacing(SPACING_SM)
                .align_y(iced::Alignment::Center)
                .into()
        } else {
            bar
        }
    }
}

fn rounded(color: Color, height: f32) -> container::Style {
    container::Style {
        background: Some(color.into()),
        border: Border {
            radius: (height / 2.0).into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
