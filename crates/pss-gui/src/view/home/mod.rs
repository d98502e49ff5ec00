//! Home view.
//!
//! The home screen shows either:
//! - Welcome screen (no competition loaded) - logo, create form, recent files
//! - Competition overview (loaded) - headline numbers and jumping-off points

mod overview;
mod welcome;

use iced::Element;

use crate::message::Message;
use crate::state::AppState;

pub use overview::view_overview;
pub use welcome::view_welcome;

/// Render the home view, routing on whether a competition is loaded.
pub fn view_home(state: &AppState) -> Element<'_, Message> {
    if let Some(competition) = &state.competition {
        view_overview(state, competition)
    } else {
        view_welcome(state)
    }
}
