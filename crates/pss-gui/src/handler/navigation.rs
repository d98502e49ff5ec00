//! Screen navigation.
//!
//! Leaving the scoring screen discards its per-patrol drafts, so every
//! navigation first sweeps open drafts into the competition. Without that
//! sweep a half-typed entry would vanish when the user clicks away.

use iced::Task;

use crate::message::Message;
use crate::state::{AppState, HomeState, Screen, ScoringState, SetupState, ViewState};

/// Switch to `screen`, committing any open score drafts first.
///
/// Setup and scoring require a loaded competition; navigating there without
/// one lands on the home screen instead.
pub fn navigate(state: &mut AppState, screen: Screen) -> Task<Message> {
    commit_open_drafts(state);
    state.view = match screen {
        Screen::Home => ViewState::Home(HomeState::default()),
        Screen::Setup(tab) => match &state.competition {
            Some(competition) => ViewState::Setup(SetupState::for_competition(competition, tab)),
            None => ViewState::Home(HomeState::default()),
        },
        Screen::Scoring => match &state.competition {
            Some(competition) => ViewState::Scoring(ScoringState::for_competition(competition)),
            None => ViewState::Home(HomeState::default()),
        },
        Screen::Settings => ViewState::Settings,
    };
    Task::none()
}

/// Commit every open draft on the scoring screen into the competition.
///
/// Each draft snaps to its station's valid range on commit, matching what
/// happens when a single field loses focus. No-op outside the scoring
/// screen.
pub fn commit_open_drafts(state: &mut AppState) {
    let ViewState::Scoring(scoring) = &mut state.view else {
        return;
    };
    let Some(competition) = &mut state.competition else {
        return;
    };
    let Some(station_id) = scoring.selected_station else {
        return;
    };
    let Some(max) = competition.station(station_id).map(|s| s.max_score) else {
        return;
    };

    let mut changed = false;
    for (patrol_id, draft) in &mut scoring.drafts {
        let Some(value) = draft.commit(max) else {
            continue;
        };
        match competition.record_score(*patrol_id, station_id, value) {
            Ok(applied) => {
                draft.sync_external(applied);
                changed = true;
            }
            Err(err) => {
                tracing::warn!(patrol = %patrol_id, error = %err, "score commit rejected");
            }
        }
    }
    if changed {
        state.dirty_tracker.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pss_model::{Competition, ScoutSection, Station};

    fn state_with_scoring() -> (AppState, uuid::Uuid, uuid::Uuid) {
        let mut competition = Competition::new("Autumn Camp");
        let station_id = competition
            .add_station(Station::new("Knots", "", 20))
            .unwrap();
        let group_id = competition.add_group("1st Hilltop").unwrap();
        let patrol_id = competition
            .add_patrol("Eagles", group_id, ScoutSection::Scouts)
            .unwrap();

        let mut state = AppState::default();
        state.view = ViewState::Scoring(ScoringState::for_competition(&competition));
        state.competition = Some(competition);
        (state, station_id, patrol_id)
    }

    #[test]
    fn navigating_away_commits_typed_drafts() {
        let (mut state, station_id, patrol_id) = state_with_scoring();

        if let ViewState::Scoring(scoring) = &mut state.view {
            let draft = scoring.drafts.get_mut(&patrol_id).unwrap();
            // Over-max text that was never propagated mid-keystroke.
            draft.input("99".to_string(), 20);
        }

        let _ = navigate(&mut state, Screen::Settings);

        let competition = state.competition.as_ref().unwrap();
        assert_eq!(competition.score_value(patrol_id, station_id), Some(20));
        assert!(state.dirty_tracker.is_dirty());
        assert!(matches!(state.view, ViewState::Settings));
    }

    #[test]
    fn setup_without_competition_falls_back_to_home() {
        let mut state = AppState::default();
        let _ = navigate(&mut state, Screen::Scoring);
        assert!(matches!(state.view, ViewState::Home(_)));
    }

    #[test]
    fn untouched_drafts_do_not_mark_dirty() {
        let (mut state, _, _) = state_with_scoring();
        let _ = navigate(&mut state, Screen::Home);
        assert!(!state.dirty_tracker.is_dirty());
    }
}
