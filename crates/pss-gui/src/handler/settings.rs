//! Settings screen message handling.
//!
//! Every change applies immediately and is written straight through to the
//! config file. A failed write is logged and the in-memory value kept, so
//! the session still behaves as configured.

use iced::Task;

use crate::error::GuiError;
use crate::handler::MessageHandler;
use crate::message::{Message, SettingsMessage};
use crate::state::AppState;
use crate::theme::set_theme;

pub struct SettingsHandler;

impl MessageHandler<SettingsMessage> for SettingsHandler {
    fn handle(&self, state: &mut AppState, msg: SettingsMessage) -> Task<Message> {
        match msg {
            SettingsMessage::ThemeModeSelected(mode) => {
                state.settings.display.theme_mode = mode;
                set_theme(state.theme_config());
            }
            SettingsMessage::AutoSaveToggled(enabled) => {
                state.settings.general.auto_save.enabled = enabled;
            }
            SettingsMessage::ClearRecentCompetitions => {
                state.settings.clear_recent();
            }
        }
        persist(state);
        Task::none()
    }
}

fn persist(state: &AppState) {
    if let Err(reason) = state.settings.save() {
        tracing::warn!(error = %GuiError::settings(reason), "settings not persisted");
    }
}
