//! Scoring screen messages.

use pss_model::ScoutSection;
use uuid::Uuid;

/// Messages from the scoring master-detail screen.
#[derive(Debug, Clone)]
pub enum ScoringMessage {
    /// Select a station in the master list. Commits open drafts for the
    /// previous station first.
    StationSelected(Uuid),
    /// Filter the patrol list by section (`None` shows all).
    SectionFilterChanged(Option<ScoutSection>),
    /// A keystroke in a patrol's score box.
    ScoreInput { patrol_id: Uuid, text: String },
    /// Enter pressed in a patrol's score box; commits that draft.
    ScoreSubmitted { patrol_id: Uuid },
    /// Open the default mail client addressed to the station leader.
    EmailLeader(String),
}
