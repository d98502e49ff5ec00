//! Score entry row.
//!
//! One row of the scoring sheet: patrol identity on the left, a
//! proportional fill bar in the middle, and the score text box with the
//! station maximum on the right.
//!
//! The text box reports every keystroke via `on_input` and commits on
//! Enter via `on_submit`; the state machine behind those messages lives in
//! `ScoreDraft`, not here.
//!
//! # Example
//! ```ignore
//! ScoreEntry::new("Hawks", draft.text(), 20, move |s| {
//!     Message::Scoring(ScoringMessage::ScoreInput { patrol_id, text: s })
//! }, Message::Scoring(ScoringMessage::ScoreSubmitted { patrol_id }))
//!     .caption("1st Hilltop - Scouts")
//!     .fill(draft.fill_ratio(20))
//!     .invalid(!draft.in_range(20))
//!     .view()
//! ```

use iced::widget::{Space, column, container, row, text, text_input};
use iced::{Alignment, Border, Color, Element, Length, Theme};

use super::progress_bar::ProgressBar;
use crate::theme::{
    BORDER_RADIUS_MD, BORDER_RADIUS_SM, FONT_SIZE_BODY, FONT_SIZE_CAPTION, FONT_SIZE_SMALL,
    SPACING_MD, SPACING_SM, SPACING_XS, colors,
};

/// A single patrol's score entry row.
pub struct ScoreEntry<M> {
    patrol_name: String,
    caption: String,
    value: String,
    max_score: u32,
    fill: f32,
    invalid: bool,
    on_input: Box<dyn Fn(String) -> M>,
    on_submit: M,
}

impl<M: Clone + 'static> ScoreEntry<M> {
    /// Create a score entry row.
    pub fn new(
        patrol_name: impl Into<String>,
        value: &str,
        max_score: u32,
        on_input: impl Fn(String) -> M + 'static,
        on_submit: M,
    ) -> Self {
        Self {
            patrol_name: patrol_name.into(),
            caption: String::new(),
            value: value.to_string(),
            max_score,
            fill: 0.0,
            invalid: false,
            on_input: Box::new(on_input),
            on_submit,
        }
    }

    /// Secondary line under the patrol name (group and section).
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Proportional fill (0.0 to 1.0) of the station maximum.
    pub fn fill(mut self, fill: f32) -> Self {
        self.fill = fill;
        self
    }

    /// Mark the text box as holding out-of-range or unparsable text.
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Build the row element.
    pub fn view(self) -> Element<'static, M> {
        let c = colors();
        let text_primary = c.text_primary;
        let text_muted = c.text_muted;
        let text_disabled = c.text_disabled;
        let bg_elevated = c.background_elevated;
        let border_default = c.border_default;
        let border_error = c.border_error;
        let selection_bg = Color {
            a: 0.15,
            ..c.accent_primary
        };
        let invalid = self.invalid;

        let mut identity = column![
            text(self.patrol_name)
                .size(FONT_SIZE_BODY)
                .color(text_primary),
        ]
        .spacing(2.0)
        .width(Length::Fill);
        if !self.caption.is_empty() {
            identity = identity.push(
                text(self.caption)
                    .size(FONT_SIZE_CAPTION)
                    .color(text_muted),
            );
        }

        let fill_bar: Element<'static, M> = container(ProgressBar::new(self.fill).height(4.0).view())
            .width(Length::Fixed(120.0))
            .into();

        let score_box = text_input("0", &self.value)
            .on_input(self.on_input)
            .on_submit(self.on_submit)
            .padding([8.0, 10.0])
            .size(FONT_SIZE_BODY)
            .width(Length::Fixed(72.0))
            .style(move |_: &Theme, _status| text_input::Style {
                background: bg_elevated.into(),
                border: Border {
                    color: if invalid { border_error } else { border_default },
                    width: 1.0,
                    radius: BORDER_RADIUS_SM.into(),
                },
                icon: text_muted,
                placeholder: text_disabled,
                value: text_primary,
                selection: selection_bg,
            });

        let content = row![
            identity,
            fill_bar,
            Space::new().width(SPACING_MD),
            score_box,
            Space::new().width(SPACING_XS),
            text(format!("/ {}", self.max_score))
                .size(FONT_SIZE_SMALL)
                .color(text_muted),
        ]
        .align_y(Alignment::Center);

        container(content)
            .padding([SPACING_SM, SPACING_MD])
            .width(Length::Fill)
            .style(move |_| container::Style {
                background: Some(bg_elevated.into()),
                border: Border {
                    color: border_default,
                    width: 1.0,
                    radius: BORDER_RADIUS_MD.into(),
                },
                ..Default::default()
            })
            .into()
    }
}
