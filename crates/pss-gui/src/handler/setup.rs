//! Setup screen message handling: competition details, stations, groups
//! and patrols.
//!
//! Edits hit the model immediately where they are always valid (the name
//! field) and go through a form with an explicit save everywhere else.
//! Model-level rejections surface as warning toasts rather than dialogs.

use iced::Task;
use pss_model::{Patrol, Station};

use crate::component::ToastState;
use crate::handler::MessageHandler;
use crate::message::{Message, SetupMessage};
use crate::state::{
    AppState, DeleteTarget, DialogState, GroupChoice, GroupForm, PatrolForm, StationForm, ViewState,
};

pub struct SetupHandler;

impl MessageHandler<SetupMessage> for SetupHandler {
    fn handle(&self, state: &mut AppState, msg: SetupMessage) -> Task<Message> {
        // Every setup message needs an open competition and the setup screen.
        let Some(competition) = &mut state.competition else {
            return Task::none();
        };
        let ViewState::Setup(setup) = &mut state.view else {
            return Task::none();
        };

        match msg {
            // ===== Tabs =====
            SetupMessage::TabSelected(tab) => {
                setup.tab = tab;
            }

            // ===== Details =====
            SetupMessage::NameChanged(text) => {
                setup.name_draft = text;
                let trimmed = setup.name_draft.trim();
                if !trimmed.is_empty() && trimmed != competition.name {
                    competition.name = trimmed.to_string();
                    state.dirty_tracker.mark_dirty();
                }
            }
            SetupMessage::NameSubmitted => {
                // Snap a blank or whitespace-padded draft back to the
                // committed name.
                setup.name_draft = competition.name.clone();
            }
            SetupMessage::DateChanged(text) => {
                setup.date_draft = text;
            }
            SetupMessage::DateSubmitted => {
                let text = setup.date_draft.trim().to_string();
                if text.is_empty() {
                    if competition.date.is_some() {
                        competition.date = None;
                        state.dirty_tracker.mark_dirty();
                    }
                } else {
                    match chrono::NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
                        Ok(date) => {
                            if competition.date != Some(date) {
                                competition.date = Some(date);
                                state.dirty_tracker.mark_dirty();
                            }
                            setup.date_draft = date.format("%Y-%m-%d").to_string();
                        }
                        Err(_) => {
                            state.toast =
                                Some(ToastState::warning("Enter the date as YYYY-MM-DD"));
                            setup.date_draft = competition
                                .date
                                .map(|d| d.format("%Y-%m-%d").to_string())
                                .unwrap_or_default();
                        }
                    }
                }
            }
            SetupMessage::SectionToggled(section) => {
                if let Some(pos) = competition.sections.iter().position(|s| *s == section) {
                    competition.sections.remove(pos);
                } else {
                    competition.sections.push(section);
                    competition.sections.sort();
                }
                state.dirty_tracker.mark_dirty();
            }

            // ===== Stations =====
            SetupMessage::NewStation => {
                setup.station_form = Some(StationForm::new());
            }
            SetupMessage::EditStation(id) => {
                if let Some(station) = competition.station(id) {
                    setup.station_form = Some(StationForm::for_station(station));
                }
            }
            SetupMessage::StationNameChanged(text) => {
                if let Some(form) = &mut setup.station_form {
                    form.name = text;
                }
            }
            SetupMessage::StationDescriptionChanged(text) => {
                if let Some(form) = &mut setup.station_form {
                    form.description = text;
                }
            }
            SetupMessage::StationMaxChanged(text) => {
                if let Some(form) = &mut setup.station_form {
                    form.max_score = text;
                }
            }
            SetupMessage::StationEmailChanged(text) => {
                if let Some(form) = &mut setup.station_form {
                    form.leader_email = text;
                }
            }
            SetupMessage::StationAllowAllToggled(allow_all) => {
                if let Some(form) = &mut setup.station_form {
                    form.allow_all = allow_all;
                }
            }
            SetupMessage::StationSectionToggled(section) => {
                if let Some(form) = &mut setup.station_form
                    && !form.selected_sections.remove(&section)
                {
                    form.selected_sections.insert(section);
                }
            }
            SetupMessage::SaveStation => {
                let Some(form) = &setup.station_form else {
                    return Task::none();
                };
                if !form.is_valid() {
                    return Task::none();
                }
                let Some(max) = form.parsed_max() else {
                    return Task::none();
                };
                let email = Some(form.leader_email.trim())
                    .filter(|e| !e.is_empty())
                    .map(str::to_string);
                let allowed = form.allowed_sections();

                let result = match form.id {
                    None => {
                        let mut station =
                            Station::new(form.name.trim(), form.description.trim(), max);
                        station.leader_email = email;
                        station.allowed_sections = allowed;
                        competition.add_station(station).map(|_| ())
                    }
                    Some(id) => {
                        let Some(mut station) = competition.station(id).cloned() else {
                            tracing::warn!(station = %id, "edited station no longer exists");
                            return Task::none();
                        };
                        station.name = form.name.trim().to_string();
                        station.description = form.description.trim().to_string();
                        station.max_score = max;
                        station.leader_email = email;
                        station.allowed_sections = allowed;
                        competition.update_station(station)
                    }
                };
                match result {
                    Ok(()) => {
                        setup.station_form = None;
                        state.dirty_tracker.mark_dirty();
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "station save rejected");
                        state.toast = Some(ToastState::warning(err.to_string()));
                    }
                }
            }
            SetupMessage::CancelStationForm => {
                setup.station_form = None;
            }
            SetupMessage::DeleteStationClicked(id) => {
                state.dialog = Some(DialogState::ConfirmDelete(DeleteTarget::Station(id)));
            }

            // ===== Groups =====
            SetupMessage::GroupAddNameChanged(text) => {
                setup.group_add_name = text;
            }
            SetupMessage::AddGroup => {
                let name = setup.group_add_name.trim().to_string();
                if name.is_empty() {
                    return Task::none();
                }
                match competition.add_group(name) {
                    Ok(_) => {
                        setup.group_add_name.clear();
                        state.dirty_tracker.mark_dirty();
                    }
                    Err(err) => {
                        state.toast = Some(ToastState::warning(err.to_string()));
                    }
                }
            }
            SetupMessage::EditGroup(id) => {
                if let Some(group) = competition.group(id) {
                    setup.group_form = Some(GroupForm {
                        id,
                        name: group.name.clone(),
                    });
                }
            }
            SetupMessage::GroupNameChanged(text) => {
                if let Some(form) = &mut setup.group_form {
                    form.name = text;
                }
            }
            SetupMessage::SaveGroup => {
                let Some(form) = &setup.group_form else {
                    return Task::none();
                };
                let id = form.id;
                let name = form.name.trim().to_string();
                if name.is_empty() {
                    return Task::none();
                }
                match competition.rename_group(id, name) {
                    Ok(()) => {
                        setup.group_form = None;
                        state.dirty_tracker.mark_dirty();
                    }
                    Err(err) => {
                        state.toast = Some(ToastState::warning(err.to_string()));
                    }
                }
            }
            SetupMessage::CancelGroupForm => {
                setup.group_form = None;
            }
            SetupMessage::DeleteGroupClicked(id) => {
                state.dialog = Some(DialogState::ConfirmDelete(DeleteTarget::Group(id)));
            }

            // ===== Patrols =====
            SetupMessage::NewPatrol => {
                setup.patrol_form = Some(PatrolForm::new());
            }
            SetupMessage::EditPatrol(id) => {
                if let Some(patrol) = competition.patrol(id) {
                    let group = competition.group(patrol.group_id).map(|g| GroupChoice {
                        id: g.id,
                        name: g.name.clone(),
                    });
                    setup.patrol_form = Some(PatrolForm {
                        id: Some(id),
                        name: patrol.name.clone(),
                        group,
                        section: patrol.section,
                    });
                }
            }
            SetupMessage::PatrolNameChanged(text) => {
                if let Some(form) = &mut setup.patrol_form {
                    form.name = text;
                }
            }
            SetupMessage::PatrolGroupSelected(choice) => {
                if let Some(form) = &mut setup.patrol_form {
                    form.group = Some(choice);
                }
            }
            SetupMessage::PatrolSectionSelected(section) => {
                if let Some(form) = &mut setup.patrol_form {
                    form.section = section;
                }
            }
            SetupMessage::SavePatrol => {
                let Some(form) = &setup.patrol_form else {
                    return Task::none();
                };
                if !form.is_valid() {
                    return Task::none();
                }
                let Some(group) = form.group.clone() else {
                    return Task::none();
                };
                let name = form.name.trim().to_string();
                let result = match form.id {
                    None => competition
                        .add_patrol(name, group.id, form.section)
                        .map(|_| ()),
                    Some(id) => competition.update_patrol(Patrol {
                        id,
                        name,
                        group_id: group.id,
                        section: form.section,
                    }),
                };
                match result {
                    Ok(()) => {
                        setup.patrol_form = None;
                        state.dirty_tracker.mark_dirty();
                    }
                    Err(err) => {
                        state.toast = Some(ToastState::warning(err.to_string()));
                    }
                }
            }
            SetupMessage::CancelPatrolForm => {
                setup.patrol_form = None;
            }
            SetupMessage::DeletePatrol(id) => {
                if competition.remove_patrol(id).is_some() {
                    state.dirty_tracker.mark_dirty();
                    state.toast = Some(ToastState::info("Patrol removed"));
                }
            }
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{SetupState, SetupTab};
    use pss_model::{Competition, ScoutSection};
    use uuid::Uuid;

    fn setup_state(competition: Competition, tab: SetupTab) -> AppState {
        let mut state = AppState::default();
        state.view = ViewState::Setup(SetupState::for_competition(&competition, tab));
        state.competition = Some(competition);
        state
    }

    fn setup_view(state: &mut AppState) -> &mut SetupState {
        let ViewState::Setup(setup) = &mut state.view else {
            panic!("expected setup view");
        };
        setup
    }

    #[test]
    fn save_station_creates_with_section_allow_list() {
        let mut state = setup_state(Competition::new("Rally"), SetupTab::Stations);
        let _ = SetupHandler.handle(&mut state, SetupMessage::NewStation);
        let _ = SetupHandler.handle(
            &mut state,
            SetupMessage::StationNameChanged("Abseiling".to_string()),
        );
        let _ = SetupHandler.handle(
            &mut state,
            SetupMessage::StationMaxChanged("50".to_string()),
        );
        let _ = SetupHandler.handle(&mut state, SetupMessage::StationAllowAllToggled(false));
        let _ = SetupHandler.handle(
            &mut state,
            SetupMessage::StationSectionToggled(ScoutSection::Venturers),
        );
        let _ = SetupHandler.handle(&mut state, SetupMessage::SaveStation);

        let competition = state.competition.as_ref().unwrap();
        let station = competition.stations().next().unwrap();
        assert_eq!(station.name, "Abseiling");
        assert_eq!(station.max_score, 50);
        assert_eq!(
            station.allowed_sections,
            Some(vec![ScoutSection::Venturers])
        );
        assert_eq!(station.leader_email, None);
        assert!(setup_view(&mut state).station_form.is_none());
        assert!(state.dirty_tracker.is_dirty());
    }

    #[test]
    fn save_station_rejects_unusable_max() {
        let mut state = setup_state(Competition::new("Rally"), SetupTab::Stations);
        let _ = SetupHandler.handle(&mut state, SetupMessage::NewStation);
        let _ = SetupHandler.handle(
            &mut state,
            SetupMessage::StationNameChanged("Knots".to_string()),
        );
        let _ = SetupHandler.handle(&mut state, SetupMessage::StationMaxChanged("0".to_string()));
        let _ = SetupHandler.handle(&mut state, SetupMessage::SaveStation);

        assert_eq!(state.competition.as_ref().unwrap().station_count(), 0);
        // Form stays open so the typed values are not lost.
        assert!(setup_view(&mut state).station_form.is_some());
    }

    #[test]
    fn editing_station_keeps_its_identity() {
        let mut competition = Competition::new("Rally");
        let id = competition
            .add_station(Station::new("Knots", "Six knots", 20))
            .unwrap();
        let mut state = setup_state(competition, SetupTab::Stations);

        let _ = SetupHandler.handle(&mut state, SetupMessage::EditStation(id));
        let _ = SetupHandler.handle(
            &mut state,
            SetupMessage::StationMaxChanged("25".to_string()),
        );
        let _ = SetupHandler.handle(
            &mut state,
            SetupMessage::StationEmailChanged("leader@example.org".to_string()),
        );
        let _ = SetupHandler.handle(&mut state, SetupMessage::SaveStation);

        let competition = state.competition.as_ref().unwrap();
        let station = competition.station(id).unwrap();
        assert_eq!(station.max_score, 25);
        assert_eq!(station.description, "Six knots");
        assert_eq!(station.leader_email.as_deref(), Some("leader@example.org"));
    }

    #[test]
    fn add_group_trims_and_clears_the_field() {
        let mut state = setup_state(Competition::new("Rally"), SetupTab::Groups);
        let _ = SetupHandler.handle(
            &mut state,
            SetupMessage::GroupAddNameChanged("  1st Hilltop  ".to_string()),
        );
        let _ = SetupHandler.handle(&mut state, SetupMessage::AddGroup);

        let competition = state.competition.as_ref().unwrap();
        let names: Vec<_> = competition.groups().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["1st Hilltop"]);
        assert!(setup_view(&mut state).group_add_name.is_empty());
    }

    #[test]
    fn save_patrol_moves_it_to_the_picked_group() {
        let mut competition = Competition::new("Rally");
        let first = competition.add_group("1st Hilltop").unwrap();
        let second = competition.add_group("2nd Riverside").unwrap();
        let patrol_id = competition
            .add_patrol("Eagles", first, ScoutSection::Scouts)
            .unwrap();
        let mut state = setup_state(competition, SetupTab::Patrols);

        let _ = SetupHandler.handle(&mut state, SetupMessage::EditPatrol(patrol_id));
        let _ = SetupHandler.handle(
            &mut state,
            SetupMessage::PatrolGroupSelected(GroupChoice {
                id: second,
                name: "2nd Riverside".to_string(),
            }),
        );
        let _ = SetupHandler.handle(
            &mut state,
            SetupMessage::PatrolSectionSelected(ScoutSection::Venturers),
        );
        let _ = SetupHandler.handle(&mut state, SetupMessage::SavePatrol);

        let competition = state.competition.as_ref().unwrap();
        let patrol = competition.patrol(patrol_id).unwrap();
        assert_eq!(patrol.group_id, second);
        assert_eq!(patrol.section, ScoutSection::Venturers);
    }

    #[test]
    fn malformed_date_reverts_and_warns() {
        let mut competition = Competition::new("Rally");
        competition.date = chrono::NaiveDate::from_ymd_opt(2026, 10, 17);
        let mut state = setup_state(competition, SetupTab::Details);

        let _ = SetupHandler.handle(
            &mut state,
            SetupMessage::DateChanged("17/10/2026".to_string()),
        );
        let _ = SetupHandler.handle(&mut state, SetupMessage::DateSubmitted);

        assert!(state.toast.is_some());
        assert_eq!(setup_view(&mut state).date_draft, "2026-10-17");
        assert_eq!(
            state.competition.as_ref().unwrap().date,
            chrono::NaiveDate::from_ymd_opt(2026, 10, 17)
        );
    }

    #[test]
    fn delete_clicks_open_a_confirmation() {
        let mut competition = Competition::new("Rally");
        let id = competition
            .add_station(Station::new("Knots", "", 20))
            .unwrap();
        let mut state = setup_state(competition, SetupTab::Stations);

        let _ = SetupHandler.handle(&mut state, SetupMessage::DeleteStationClicked(id));
        assert_eq!(
            state.dialog,
            Some(DialogState::ConfirmDelete(DeleteTarget::Station(id)))
        );
        // Nothing removed until the dialog confirms.
        assert_eq!(state.competition.as_ref().unwrap().station_count(), 1);
    }

    #[test]
    fn blank_name_is_held_until_submit_restores_it() {
        let mut state = setup_state(Competition::new("Rally"), SetupTab::Details);
        let _ = SetupHandler.handle(&mut state, SetupMessage::NameChanged(String::new()));
        assert_eq!(state.competition.as_ref().unwrap().name, "Rally");
        assert!(setup_view(&mut state).name_draft.is_empty());

        let _ = SetupHandler.handle(&mut state, SetupMessage::NameSubmitted);
        assert_eq!(setup_view(&mut state).name_draft, "Rally");
    }

    #[test]
    fn unknown_patrol_delete_is_ignored() {
        let mut state = setup_state(Competition::new("Rally"), SetupTab::Patrols);
        let _ = SetupHandler.handle(&mut state, SetupMessage::DeletePatrol(Uuid::new_v4()));
        assert!(!state.dirty_tracker.is_dirty());
        assert!(state.toast.is_none());
    }
}
