//! Message types for the Iced application.
//!
//! The root [`Message`] enum fans out to per-screen sub-enums so handlers
//! stay small. Background task results cross the task boundary as
//! `Result<_, String>` because messages must be `Clone + Send`.

pub mod dialog;
pub mod home;
pub mod scoring;
pub mod settings;
pub mod setup;

pub use dialog::DialogMessage;
pub use home::HomeMessage;
pub use scoring::ScoringMessage;
pub use settings::SettingsMessage;
pub use setup::SetupMessage;

use std::path::PathBuf;

use iced::keyboard;
use pss_model::Competition;

pub use crate::component::ToastMessage;

use crate::state::Screen;

/// Root application message.
#[derive(Debug, Clone)]
pub enum Message {
    // ===== Navigation =====
    /// Switch screens, committing any open score drafts first.
    Navigate(Screen),

    // ===== Screen messages =====
    Home(HomeMessage),
    Setup(SetupMessage),
    Scoring(ScoringMessage),
    Settings(SettingsMessage),
    Dialog(DialogMessage),

    // ===== Competition lifecycle =====
    /// Start a new competition (asks about unsaved changes first).
    NewCompetition,
    /// Open a competition file via the native dialog.
    OpenCompetition,
    /// File dialog result for opening (None = cancelled).
    OpenPathSelected(Option<PathBuf>),
    /// Background load finished.
    CompetitionLoaded {
        path: PathBuf,
        result: Result<Box<Competition>, String>,
    },
    /// Close the competition and return to the welcome screen.
    CloseCompetition,

    // ===== Saving =====
    /// Save to the known path, or fall through to save-as.
    SaveCompetition,
    /// Save to a new path via the native dialog.
    SaveCompetitionAs,
    /// File dialog result for saving (None = cancelled).
    SavePathSelected(Option<PathBuf>),
    /// Background save finished. `generation` identifies which save attempt
    /// this completion belongs to; stale completions are dropped.
    CompetitionSaved {
        generation: u64,
        result: Result<PathBuf, String>,
    },
    /// Periodic tick driving debounced auto-save.
    AutoSaveTick,

    // ===== Window & system =====
    /// OS close button pressed; may open the unsaved-changes dialog.
    WindowCloseRequested,
    /// OS light/dark appearance changed.
    SystemThemeChanged(iced::theme::Mode),
    /// Keyboard shortcut candidate.
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    // ===== Feedback =====
    Toast(ToastMessage),
    /// Open a URL (or mailto:) with the system handler.
    OpenUrl(String),
    /// No-op, used by subscriptions that filter events.
    Noop,
}

impl Message {
    /// Convenience constructor for returning to the home screen.
    pub fn go_home() -> Self {
        Self::Navigate(Screen::Home)
    }
}
