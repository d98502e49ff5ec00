//! Scoring screen message handling.
//!
//! Keystrokes flow through [`ScoreDraft`] so the rules live in one place:
//! an in-range parse records immediately, anything else waits in the draft
//! until commit (Enter, station switch, or navigation) snaps it into range.

use iced::Task;
use uuid::Uuid;

use crate::handler::{MessageHandler, navigation};
use crate::message::{Message, ScoringMessage};
use crate::state::{AppState, ScoreDraft, ViewState};

pub struct ScoringHandler;

impl MessageHandler<ScoringMessage> for ScoringHandler {
    fn handle(&self, state: &mut AppState, msg: ScoringMessage) -> Task<Message> {
        match msg {
            ScoringMessage::StationSelected(station_id) => {
                // Commit before the draft map is rebuilt for the new station.
                navigation::commit_open_drafts(state);
                let ViewState::Scoring(scoring) = &mut state.view else {
                    return Task::none();
                };
                let Some(competition) = &state.competition else {
                    return Task::none();
                };
                scoring.selected_station = Some(station_id);
                scoring.rebuild_drafts(competition);
                Task::none()
            }

            ScoringMessage::SectionFilterChanged(filter) => {
                if let ViewState::Scoring(scoring) = &mut state.view {
                    scoring.section_filter = filter;
                }
                Task::none()
            }

            ScoringMessage::ScoreInput { patrol_id, text } => {
                apply_draft_edit(state, patrol_id, move |draft, max| draft.input(text, max))
            }

            ScoringMessage::ScoreSubmitted { patrol_id } => {
                apply_draft_edit(state, patrol_id, |draft, max| draft.commit(max))
            }

            ScoringMessage::EmailLeader(email) => {
                Task::done(Message::OpenUrl(format!("mailto:{email}")))
            }
        }
    }
}

/// Run one draft edit and record the value it propagates, if any.
///
/// `record_score` re-clamps defensively and returns the applied value, which
/// is fed back so the draft knows the next store echo is its own.
fn apply_draft_edit<F>(state: &mut AppState, patrol_id: Uuid, edit: F) -> Task<Message>
where
    F: FnOnce(&mut ScoreDraft, u32) -> Option<u32>,
{
    let ViewState::Scoring(scoring) = &mut state.view else {
        return Task::none();
    };
    let Some(competition) = &mut state.competition else {
        return Task::none();
    };
    let Some(station_id) = scoring.selected_station else {
        return Task::none();
    };
    let Some(max) = competition.station(station_id).map(|s| s.max_score) else {
        return Task::none();
    };
    let Some(draft) = scoring.drafts.get_mut(&patrol_id) else {
        return Task::none();
    };

    if let Some(value) = edit(draft, max) {
        match competition.record_score(patrol_id, station_id, value) {
            Ok(applied) => {
                draft.sync_external(applied);
                state.dirty_tracker.mark_dirty();
            }
            Err(err) => {
                tracing::warn!(patrol = %patrol_id, error = %err, "score rejected");
            }
        }
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ScoringState;
    use pss_model::{Competition, ScoutSection, Station};

    struct Fixture {
        state: AppState,
        knots: Uuid,
        archery: Uuid,
        patrol: Uuid,
    }

    /// Two stations; "Archery" sorts first so it is the initial selection.
    fn fixture() -> Fixture {
        let mut competition = Competition::new("District Challenge");
        let knots = competition
            .add_station(Station::new("Knots", "", 20))
            .unwrap();
        let archery = competition
            .add_station(Station::new("Archery", "", 10))
            .unwrap();
        let group = competition.add_group("1st Hilltop").unwrap();
        let patrol = competition
            .add_patrol("Eagles", group, ScoutSection::Scouts)
            .unwrap();

        let mut state = AppState::default();
        state.view = ViewState::Scoring(ScoringState::for_competition(&competition));
        state.competition = Some(competition);
        Fixture {
            state,
            knots,
            archery,
            patrol,
        }
    }

    fn draft_text(state: &AppState, patrol: Uuid) -> String {
        let ViewState::Scoring(scoring) = &state.view else {
            panic!("expected scoring view");
        };
        scoring.drafts[&patrol].text().to_string()
    }

    #[test]
    fn in_range_input_records_immediately() {
        let Fixture {
            mut state,
            archery,
            patrol,
            ..
        } = fixture();

        let _ = ScoringHandler.handle(
            &mut state,
            ScoringMessage::ScoreInput {
                patrol_id: patrol,
                text: "7".to_string(),
            },
        );

        let competition = state.competition.as_ref().unwrap();
        assert_eq!(competition.score_value(patrol, archery), Some(7));
        assert!(state.dirty_tracker.is_dirty());
    }

    #[test]
    fn out_of_range_input_stays_in_draft() {
        let Fixture {
            mut state,
            archery,
            patrol,
            ..
        } = fixture();

        let _ = ScoringHandler.handle(
            &mut state,
            ScoringMessage::ScoreInput {
                patrol_id: patrol,
                text: "25".to_string(),
            },
        );

        let competition = state.competition.as_ref().unwrap();
        assert_eq!(competition.score_value(patrol, archery), None);
        assert_eq!(draft_text(&state, patrol), "25");
        assert!(!state.dirty_tracker.is_dirty());
    }

    #[test]
    fn submit_clamps_overflow_to_station_max() {
        let Fixture {
            mut state,
            archery,
            patrol,
            ..
        } = fixture();

        let _ = ScoringHandler.handle(
            &mut state,
            ScoringMessage::ScoreInput {
                patrol_id: patrol,
                text: "25".to_string(),
            },
        );
        let _ = ScoringHandler.handle(
            &mut state,
            ScoringMessage::ScoreSubmitted { patrol_id: patrol },
        );

        let competition = state.competition.as_ref().unwrap();
        assert_eq!(competition.score_value(patrol, archery), Some(10));
        assert_eq!(draft_text(&state, patrol), "10");
    }

    #[test]
    fn station_switch_commits_then_rebuilds_drafts() {
        let Fixture {
            mut state,
            knots,
            archery,
            patrol,
        } = fixture();

        // Unpropagated overflow for Archery, then switch to Knots.
        let _ = ScoringHandler.handle(
            &mut state,
            ScoringMessage::ScoreInput {
                patrol_id: patrol,
                text: "12".to_string(),
            },
        );
        let _ = ScoringHandler.handle(&mut state, ScoringMessage::StationSelected(knots));

        let competition = state.competition.as_ref().unwrap();
        assert_eq!(competition.score_value(patrol, archery), Some(10));
        assert_eq!(competition.score_value(patrol, knots), None);
        // Fresh draft for the new station starts from its stored value.
        assert_eq!(draft_text(&state, patrol), "0");
    }
}
