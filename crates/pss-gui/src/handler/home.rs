//! Home screen message handling: creating a competition and reopening
//! recent files.

use iced::Task;
use pss_model::Competition;
use pss_persistence::DirtyTracker;

use crate::component::ToastState;
use crate::handler::{MessageHandler, save};
use crate::message::{HomeMessage, Message};
use crate::state::{AppState, SetupState, SetupTab, ViewState};

pub struct HomeHandler;

impl MessageHandler<HomeMessage> for HomeHandler {
    fn handle(&self, state: &mut AppState, msg: HomeMessage) -> Task<Message> {
        match msg {
            HomeMessage::NewNameChanged(name) => {
                if let ViewState::Home(home) = &mut state.view {
                    home.new_name = name;
                }
                Task::none()
            }

            HomeMessage::CreateCompetition => {
                let ViewState::Home(home) = &mut state.view else {
                    return Task::none();
                };
                let name = home.new_name.trim().to_string();
                if name.is_empty() {
                    return Task::none();
                }

                tracing::info!(name = %name, "creating competition");
                let competition = Competition::new(name);
                state.view = ViewState::Setup(SetupState::for_competition(
                    &competition,
                    SetupTab::Details,
                ));
                state.competition = Some(competition);
                state.competition_path = None;
                // Unsaved from the first moment; it has no file yet.
                state.dirty_tracker = DirtyTracker::new();
                state.dirty_tracker.mark_dirty();
                Task::none()
            }

            HomeMessage::OpenRecent(path) => {
                if !path.exists() {
                    state.toast =
                        Some(ToastState::warning("That file has moved or was deleted"));
                    // Drop the dead entry; the pruned list is written out
                    // with the next settings save.
                    state.settings.remove_recent(&path);
                    return Task::none();
                }
                save::begin_load(state, path)
            }

            HomeMessage::RemoveRecent(path) => {
                state.settings.remove_recent(&path);
                save::persist_settings(state);
                Task::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HomeState;
    use std::path::PathBuf;

    #[test]
    fn create_needs_a_non_blank_name() {
        let mut state = AppState::default();
        let _ = HomeHandler.handle(
            &mut state,
            HomeMessage::NewNameChanged("   ".to_string()),
        );
        let _ = HomeHandler.handle(&mut state, HomeMessage::CreateCompetition);

        assert!(state.competition.is_none());
        assert!(matches!(state.view, ViewState::Home(_)));
    }

    #[test]
    fn create_opens_setup_with_unsaved_changes() {
        let mut state = AppState::default();
        let _ = HomeHandler.handle(
            &mut state,
            HomeMessage::NewNameChanged("  Spring Rally  ".to_string()),
        );
        let _ = HomeHandler.handle(&mut state, HomeMessage::CreateCompetition);

        let competition = state.competition.as_ref().unwrap();
        assert_eq!(competition.name, "Spring Rally");
        assert!(state.competition_path.is_none());
        assert!(state.dirty_tracker.is_dirty());

        let ViewState::Setup(setup) = &state.view else {
            panic!("expected setup view");
        };
        assert_eq!(setup.tab, SetupTab::Details);
        assert_eq!(setup.name_draft, "Spring Rally");
    }

    #[test]
    fn missing_recent_is_pruned_with_a_warning() {
        let mut state = AppState {
            view: ViewState::Home(HomeState::default()),
            ..AppState::default()
        };
        let gone = PathBuf::from("/nonexistent/summer-camp.pss");
        state.settings.add_recent(gone.clone(), "Summer Camp");

        let _ = HomeHandler.handle(&mut state, HomeMessage::OpenRecent(gone));

        assert!(state.toast.is_some());
        assert!(state.settings.general.recent_competitions.is_empty());
        assert!(!state.is_loading);
    }
}
