//! Save status indicator.
//!
//! Small icon-plus-label row shown in the scoring header. Maps the save
//! lifecycle to a visual affordance; idle renders nothing at all.

use iced::widget::{Space, row, text};
use iced::{Alignment, Element};
use iced_fonts::lucide;

use crate::state::{Affordance, SaveState};
use crate::theme::{FONT_SIZE_SMALL, SPACING_XS, colors};

/// Render the save indicator for the given state.
///
/// `error_detail` is appended (muted) when the indicator shows a warning,
/// so leaders can see why the last save failed without opening anything.
pub fn save_indicator<'a, M: 'a>(state: SaveState, error_detail: Option<&'a str>) -> Element<'a, M> {
    let c = colors();

    let Some(affordance) = state.affordance() else {
        return Space::new().into();
    };

    let (icon, label, color) = match affordance {
        Affordance::InProgress => (lucide::loader().size(14), "Saving...", c.text_muted),
        Affordance::Success => (lucide::circle_check().size(14), "Saved", c.status_success),
        Affordance::Warning => (
            lucide::triangle_alert().size(14),
            "Save failed",
            c.status_warning,
        ),
    };

    let mut content = row![
        icon.color(color),
        Space::new().width(SPACING_XS),
        text(label).size(FONT_SIZE_SMALL).color(color),
    ]
    .align_y(Alignment::Center);

    if affordance == Affordance::Warning
        && let Some(detail) = error_detail
    {
        content = content.push(Space::new().width(SPACING_XS)).push(
            text(format!("({detail})"))
                .size(FONT_SIZE_SMALL)
                .color(c.text_muted),
        );
    }

    content.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Element construction must not panic for any state.
    #[test]
    fn builds_for_every_state() {
        for state in [
            SaveState::Idle,
            SaveState::Saving,
            SaveState::Saved,
            SaveState::Error,
        ] {
            let _: Element<'_, ()> = save_indicator(state, Some("disk full"));
        }
    }
}
