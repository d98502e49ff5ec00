//! Home screen messages.

use std::path::PathBuf;

/// Messages from the welcome screen and competition overview.
#[derive(Debug, Clone)]
pub enum HomeMessage {
    /// The "new competition" name field changed.
    NewNameChanged(String),
    /// Create a competition from the typed name.
    CreateCompetition,
    /// Open a file from the recent list.
    OpenRecent(PathBuf),
    /// Remove a file from the recent list without opening it.
    RemoveRecent(PathBuf),
}
