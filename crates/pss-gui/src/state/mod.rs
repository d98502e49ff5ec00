//! Application state management.
//!
//! The architecture separates concerns into:
//!
//! - **AppState**: Root state (competition, settings, save lifecycle)
//! - **ViewState**: Per-screen transient state (forms, drafts, filters)
//! - **ScoreDraft**: The score text box state machine
//! - **SaveState**: Ephemeral save indicator lifecycle
//! - **Settings**: Persisted preferences

mod app_state;
mod save_state;
mod score_draft;
mod settings;
mod view_state;

pub use app_state::AppState;
pub use save_state::{Affordance, SaveState};
pub use score_draft::ScoreDraft;
pub use settings::{DisplaySettings, GeneralSettings, RecentCompetition, Settings};
pub use view_state::{
    DeleteTarget, DialogState, GroupChoice, GroupForm, HomeState, PatrolForm, PendingAction,
    Screen, ScoringState, SetupState, SetupTab, StationForm, ViewState,
};
