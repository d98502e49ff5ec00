//! Modal dialog message handling.
//!
//! Dialogs are taken out of state before acting so a double-click cannot
//! run the confirmed action twice.

use iced::Task;

use crate::component::ToastState;
use crate::handler::{MessageHandler, save};
use crate::message::{DialogMessage, Message};
use crate::state::{AppState, DeleteTarget, DialogState, ViewState};

pub struct DialogHandler;

impl MessageHandler<DialogMessage> for DialogHandler {
    fn handle(&self, state: &mut AppState, msg: DialogMessage) -> Task<Message> {
        match msg {
            DialogMessage::Cancel => {
                state.dialog = None;
                Task::none()
            }

            DialogMessage::UnsavedSave => {
                let Some(DialogState::UnsavedChanges(pending)) = state.dialog.take() else {
                    return Task::none();
                };
                state.pending_after_save = Some(pending);
                save::handle_save_competition(state)
            }

            DialogMessage::UnsavedDiscard => {
                let Some(DialogState::UnsavedChanges(pending)) = state.dialog.take() else {
                    return Task::none();
                };
                save::resume_pending(state, pending)
            }

            DialogMessage::ConfirmDelete => {
                let Some(DialogState::ConfirmDelete(target)) = state.dialog.take() else {
                    return Task::none();
                };
                apply_delete(state, target)
            }
        }
    }
}

/// Carry out a confirmed delete, then repair any view state that pointed
/// at the removed entity.
fn apply_delete(state: &mut AppState, target: DeleteTarget) -> Task<Message> {
    let Some(competition) = &mut state.competition else {
        return Task::none();
    };

    match target {
        DeleteTarget::Station(id) => {
            let Some(station) = competition.remove_station(id) else {
                return Task::none();
            };
            state.dirty_tracker.mark_dirty();
            state.toast = Some(ToastState::info(format!("Removed {}", station.name)));

            if let ViewState::Scoring(scoring) = &mut state.view
                && scoring.selected_station == Some(id)
            {
                scoring.selected_station =
                    competition.stations_by_name().first().map(|s| s.id);
                scoring.rebuild_drafts(competition);
            }
            if let ViewState::Setup(setup) = &mut state.view
                && setup
                    .station_form
                    .as_ref()
                    .is_some_and(|form| form.id == Some(id))
            {
                setup.station_form = None;
            }
        }

        DeleteTarget::Group(id) => {
            let Some(group) = competition.remove_group(id) else {
                return Task::none();
            };
            state.dirty_tracker.mark_dirty();
            state.toast = Some(ToastState::info(format!("Removed {}", group.name)));

            // Removing a group cascades to its patrols, so any open drafts
            // for those patrols are gone too.
            if let ViewState::Scoring(scoring) = &mut state.view {
                scoring.rebuild_drafts(competition);
            }
            if let ViewState::Setup(setup) = &mut state.view {
                if setup.group_form.as_ref().is_some_and(|form| form.id == id) {
                    setup.group_form = None;
                }
                if let Some(form) = &mut setup.patrol_form
                    && form.group.as_ref().is_some_and(|choice| choice.id == id)
                {
                    form.group = None;
                }
            }
        }
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PendingAction, SaveState, ScoringState};
    use pss_model::{Competition, ScoutSection, Station};

    #[test]
    fn cancel_closes_the_dialog_without_acting() {
        let mut competition = Competition::new("Rally");
        let id = competition
            .add_station(Station::new("Knots", "", 20))
            .unwrap();
        let mut state = AppState::default();
        state.competition = Some(competition);
        state.dialog = Some(DialogState::ConfirmDelete(DeleteTarget::Station(id)));

        let _ = DialogHandler.handle(&mut state, DialogMessage::Cancel);

        assert_eq!(state.dialog, None);
        assert_eq!(state.competition.as_ref().unwrap().station_count(), 1);
    }

    #[test]
    fn confirmed_station_delete_moves_the_scoring_selection() {
        let mut competition = Competition::new("Rally");
        let knots = competition
            .add_station(Station::new("Knots", "", 20))
            .unwrap();
        let archery = competition
            .add_station(Station::new("Archery", "", 10))
            .unwrap();
        let group = competition.add_group("1st Hilltop").unwrap();
        competition
            .add_patrol("Eagles", group, ScoutSection::Scouts)
            .unwrap();

        let mut scoring = ScoringState::for_competition(&competition);
        scoring.selected_station = Some(archery);
        scoring.rebuild_drafts(&competition);

        let mut state = AppState::default();
        state.view = ViewState::Scoring(scoring);
        state.competition = Some(competition);
        state.dialog = Some(DialogState::ConfirmDelete(DeleteTarget::Station(archery)));

        let _ = DialogHandler.handle(&mut state, DialogMessage::ConfirmDelete);

        let ViewState::Scoring(scoring) = &state.view else {
            panic!("expected scoring view");
        };
        assert_eq!(scoring.selected_station, Some(knots));
        assert_eq!(state.competition.as_ref().unwrap().station_count(), 1);
        assert!(state.dirty_tracker.is_dirty());
        assert!(state.toast.is_some());
    }

    #[test]
    fn discard_resumes_the_blocked_action() {
        let mut state = AppState::default();
        state.competition = Some(Competition::new("Rally"));
        state.dirty_tracker.mark_dirty();
        state.dialog = Some(DialogState::UnsavedChanges(PendingAction::NewCompetition));

        let _ = DialogHandler.handle(&mut state, DialogMessage::UnsavedDiscard);

        assert_eq!(state.dialog, None);
        assert!(state.competition.is_none());
        assert!(matches!(state.view, ViewState::Home(_)));
    }

    #[test]
    fn save_choice_parks_the_action_behind_the_save() {
        let mut state = AppState::default();
        state.competition = Some(Competition::new("Rally"));
        state.competition_path = Some(std::path::PathBuf::from("/tmp/rally.pss"));
        state.dirty_tracker.mark_dirty();
        state.dialog = Some(DialogState::UnsavedChanges(PendingAction::Quit));

        let _ = DialogHandler.handle(&mut state, DialogMessage::UnsavedSave);

        assert_eq!(state.dialog, None);
        assert_eq!(state.pending_after_save, Some(PendingAction::Quit));
        assert_eq!(state.save_state, SaveState::Saving);
    }
}
