//! Competition save and load flows.
//!
//! Saves run on the async runtime and every save is stamped with a
//! generation number. A completion whose generation no longer matches the
//! latest save is dropped, so the save indicator always describes the most
//! recent save rather than whichever write happened to finish last.
//!
//! New/open/quit all funnel through the unsaved-changes prompt when the
//! competition is dirty; the blocked action is parked in
//! `pending_after_save` and resumed once the save completes.

use std::path::PathBuf;

use iced::Task;
use pss_model::Competition;
use pss_persistence::{
    CompetitionFile, DirtyTracker, FromSnapshot, ToSnapshot, load_competition_async,
    save_competition_async,
};

use crate::component::ToastState;
use crate::error::GuiError;
use crate::handler::navigation;
use crate::message::Message;
use crate::state::{AppState, DialogState, HomeState, PendingAction, SaveState, ViewState};

// =============================================================================
// NEW / CLOSE
// =============================================================================

/// Return to the welcome screen, prompting about unsaved changes first.
///
/// Backs both "new competition" and "close competition"; the welcome screen
/// is where a new one gets created.
pub fn handle_new_competition(state: &mut AppState) -> Task<Message> {
    navigation::commit_open_drafts(state);
    if state.dirty_tracker.is_dirty() && state.competition.is_some() {
        state.dialog = Some(DialogState::UnsavedChanges(PendingAction::NewCompetition));
        return Task::none();
    }
    resume_pending(state, PendingAction::NewCompetition)
}

// =============================================================================
// OPEN
// =============================================================================

/// Open a competition file, prompting about unsaved changes first.
pub fn handle_open_competition(state: &mut AppState) -> Task<Message> {
    navigation::commit_open_drafts(state);
    if state.dirty_tracker.is_dirty() && state.competition.is_some() {
        state.dialog = Some(DialogState::UnsavedChanges(PendingAction::OpenCompetition));
        return Task::none();
    }
    open_file_dialog_task()
}

/// Show the file picker.
pub fn open_file_dialog_task() -> Task<Message> {
    // On macOS, use synchronous dialog to avoid security-scoped access issues
    #[cfg(target_os = "macos")]
    {
        let path = rfd::FileDialog::new()
            .set_title("Open Competition")
            .add_filter("Competition", &["pss"])
            .pick_file();

        Task::done(Message::OpenPathSelected(path))
    }

    #[cfg(not(target_os = "macos"))]
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .set_title("Open Competition")
                .add_filter("Competition", &["pss"])
                .pick_file()
                .await
                .map(|f| f.path().to_path_buf())
        },
        Message::OpenPathSelected,
    )
}

/// Handle file selection from the open dialog.
pub fn handle_open_path_selected(state: &mut AppState, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    begin_load(state, path)
}

/// Kick off an async load of `path`.
pub fn begin_load(state: &mut AppState, path: PathBuf) -> Task<Message> {
    state.is_loading = true;

    let load_path = path.clone();
    Task::perform(
        async move {
            let file = load_competition_async(load_path)
                .await
                .map_err(|e| e.user_message())?;
            Competition::from_snapshot(file.competition).map_err(|e| e.user_message())
        },
        move |result| Message::CompetitionLoaded {
            path: path.clone(),
            result: result.map(Box::new),
        },
    )
}

/// Handle a finished load.
pub fn handle_competition_loaded(
    state: &mut AppState,
    path: PathBuf,
    result: Result<Box<Competition>, String>,
) -> Task<Message> {
    state.is_loading = false;

    match result {
        Ok(competition) => {
            tracing::info!(name = %competition.name, path = %path.display(), "competition loaded");
            state.settings.add_recent(path.clone(), competition.name.clone());
            persist_settings(state);

            state.competition = Some(*competition);
            state.competition_path = Some(path);
            state.dirty_tracker = DirtyTracker::new();
            state.save_state = SaveState::Idle;
            state.last_save_error = None;
            state.pending_after_save = None;
            state.view = ViewState::Home(HomeState::default());
            Task::none()
        }
        Err(reason) => {
            let error = GuiError::load(reason);
            tracing::error!(error = %error, path = %path.display(), "competition load failed");
            state.toast = Some(error_toast(&error));
            Task::none()
        }
    }
}

// =============================================================================
// SAVE
// =============================================================================

/// Save to the known path, or fall through to Save As for a fresh file.
pub fn handle_save_competition(state: &mut AppState) -> Task<Message> {
    match state.competition_path.clone() {
        Some(path) => do_save(state, path),
        None => handle_save_competition_as(state),
    }
}

/// Prompt for a save location.
pub fn handle_save_competition_as(state: &mut AppState) -> Task<Message> {
    let file_name = state
        .competition
        .as_ref()
        .map_or_else(|| "competition.pss".to_string(), |c| format!("{}.pss", c.name));

    // On macOS, use synchronous dialog to avoid security-scoped access issues
    #[cfg(target_os = "macos")]
    {
        let path = rfd::FileDialog::new()
            .set_title("Save Competition As")
            .add_filter("Competition", &["pss"])
            .set_file_name(file_name)
            .save_file();

        Task::done(Message::SavePathSelected(path))
    }

    #[cfg(not(target_os = "macos"))]
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title("Save Competition As")
                .add_filter("Competition", &["pss"])
                .set_file_name(file_name)
                .save_file()
                .await
                .map(|f| f.path().to_path_buf())
        },
        Message::SavePathSelected,
    )
}

/// Handle path selection from the save dialog.
pub fn handle_save_path_selected(state: &mut AppState, path: Option<PathBuf>) -> Task<Message> {
    let Some(mut path) = path else {
        // Cancelled; anything queued behind this save is abandoned with it.
        state.pending_after_save = None;
        return Task::none();
    };

    // Ensure .pss extension
    if path.extension().is_none() || path.extension() != Some(std::ffi::OsStr::new("pss")) {
        path.set_extension("pss");
    }

    do_save(state, path)
}

/// Start an async save of the current competition to `path`.
fn do_save(state: &mut AppState, path: PathBuf) -> Task<Message> {
    let Some(competition) = &state.competition else {
        return Task::none();
    };

    let file = CompetitionFile::new(competition.to_snapshot());
    let generation = state.next_save_generation();
    state.dirty_tracker.start_save();
    state.save_state = SaveState::Saving;

    let save_path = path.clone();
    state.competition_path = Some(path);

    Task::perform(
        async move {
            match save_competition_async(file, save_path.clone()).await {
                Ok(()) => Ok(save_path),
                Err(e) => Err(e.user_message()),
            }
        },
        move |result| Message::CompetitionSaved { generation, result },
    )
}

/// Handle save completion.
///
/// Completions carry the generation of the save that produced them; only
/// the latest generation may update the indicator or the tracker.
pub fn handle_competition_saved(
    state: &mut AppState,
    generation: u64,
    result: Result<PathBuf, String>,
) -> Task<Message> {
    if generation != state.save_generation {
        tracing::debug!(
            generation,
            current = state.save_generation,
            "stale save completion dropped"
        );
        return Task::none();
    }

    match result {
        Ok(path) => {
            tracing::info!(path = %path.display(), "competition saved");
            state.dirty_tracker.save_complete();
            state.save_state = SaveState::Saved;
            state.last_save_error = None;
            state.competition_path = Some(path.clone());

            if let Some(competition) = &state.competition {
                state.settings.add_recent(path, competition.name.clone());
                persist_settings(state);
            }

            if let Some(pending) = state.pending_after_save.take() {
                return resume_pending(state, pending);
            }
            Task::none()
        }
        Err(reason) => {
            let error = GuiError::save(&reason);
            tracing::error!(error = %error, "competition save failed");
            state.dirty_tracker.save_failed();
            state.save_state = SaveState::Error;
            state.last_save_error = Some(reason);
            // The blocked action must not run against an unsaved file.
            state.pending_after_save = None;
            state.toast = Some(error_toast(&error));
            Task::none()
        }
    }
}

// =============================================================================
// AUTO-SAVE
// =============================================================================

/// Handle the periodic auto-save tick.
pub fn handle_auto_save_tick(state: &mut AppState) -> Task<Message> {
    if !state
        .dirty_tracker
        .should_auto_save(&state.settings.general.auto_save)
    {
        return Task::none();
    }

    // The first save still needs the user to pick a path.
    let Some(path) = state.competition_path.clone() else {
        return Task::none();
    };

    tracing::debug!(path = %path.display(), "auto-saving competition");
    do_save(state, path)
}

// =============================================================================
// PENDING ACTIONS
// =============================================================================

/// Run the action that was parked behind an unsaved-changes prompt.
pub fn resume_pending(state: &mut AppState, action: PendingAction) -> Task<Message> {
    match action {
        PendingAction::NewCompetition => {
            close_to_welcome(state);
            Task::none()
        }
        PendingAction::OpenCompetition => open_file_dialog_task(),
        PendingAction::Quit => iced::exit(),
    }
}

/// Drop the open competition and return to the welcome screen.
pub fn close_to_welcome(state: &mut AppState) {
    state.competition = None;
    state.competition_path = None;
    state.dirty_tracker = DirtyTracker::new();
    state.save_state = SaveState::Idle;
    state.last_save_error = None;
    state.pending_after_save = None;
    state.view = ViewState::Home(HomeState::default());
}

pub(crate) fn persist_settings(state: &AppState) {
    if let Err(reason) = state.settings.save() {
        tracing::warn!(error = %GuiError::settings(reason), "settings not persisted");
    }
}

/// Error toast with the recovery hint appended when one exists.
fn error_toast(error: &GuiError) -> ToastState {
    let mut message = error.user_message();
    if let Some(hint) = error.suggestion() {
        message.push(' ');
        message.push_str(hint);
    }
    ToastState::error(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_save_completion_is_dropped() {
        let mut state = AppState::default();
        state.save_generation = 3;
        state.save_state = SaveState::Saving;

        let _ = handle_competition_saved(&mut state, 2, Ok(PathBuf::from("/tmp/old.pss")));

        // Still waiting on generation 3.
        assert_eq!(state.save_state, SaveState::Saving);
        assert_eq!(state.competition_path, None);
    }

    #[test]
    fn matching_save_completion_lands() {
        let mut state = AppState::default();
        state.save_generation = 3;
        state.save_state = SaveState::Saving;
        state.dirty_tracker.mark_dirty();
        state.dirty_tracker.start_save();

        let _ = handle_competition_saved(&mut state, 3, Ok(PathBuf::from("/tmp/rally.pss")));

        assert_eq!(state.save_state, SaveState::Saved);
        assert_eq!(state.last_save_error, None);
        assert_eq!(state.competition_path, Some(PathBuf::from("/tmp/rally.pss")));
        assert!(!state.dirty_tracker.is_dirty());
    }

    #[test]
    fn failed_save_reports_and_clears_pending() {
        let mut state = AppState::default();
        state.save_generation = 1;
        state.save_state = SaveState::Saving;
        state.pending_after_save = Some(PendingAction::Quit);

        let _ = handle_competition_saved(&mut state, 1, Err("disk full".to_string()));

        assert_eq!(state.save_state, SaveState::Error);
        assert_eq!(state.last_save_error.as_deref(), Some("disk full"));
        assert_eq!(state.pending_after_save, None);
        assert!(state.toast.is_some());
    }

    #[test]
    fn close_to_welcome_resets_everything() {
        let mut state = AppState::default();
        state.competition = Some(Competition::new("Rally"));
        state.competition_path = Some(PathBuf::from("/tmp/rally.pss"));
        state.dirty_tracker.mark_dirty();
        state.save_state = SaveState::Error;
        state.last_save_error = Some("disk full".to_string());

        close_to_welcome(&mut state);

        assert!(state.competition.is_none());
        assert!(state.competition_path.is_none());
        assert!(!state.dirty_tracker.is_dirty());
        assert_eq!(state.save_state, SaveState::Idle);
        assert!(matches!(state.view, ViewState::Home(_)));
    }
}
