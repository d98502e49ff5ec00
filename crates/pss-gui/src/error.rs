//! GUI-level error type.
//!
//! Errors that cross a task boundary arrive as plain strings (messages must
//! be `Clone + Send`); handlers wrap them into [`GuiError`] so user-facing
//! wording lives in one place instead of being scattered across handlers.

use thiserror::Error;

/// Errors surfaced to the user via toasts and the save indicator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    /// A competition file could not be read or parsed.
    #[error("failed to load competition: {reason}")]
    CompetitionLoad { reason: String },

    /// A competition file could not be written.
    #[error("failed to save competition: {reason}")]
    CompetitionSave { reason: String },

    /// Settings could not be persisted.
    #[error("failed to save settings: {reason}")]
    SettingsSave { reason: String },

    /// A named operation failed for a stated reason.
    #[error("{operation} failed: {reason}")]
    Operation { operation: String, reason: String },
}

impl GuiError {
    /// A competition file could not be loaded.
    pub fn load(reason: impl std::fmt::Display) -> Self {
        Self::CompetitionLoad {
            reason: reason.to_string(),
        }
    }

    /// A competition file could not be saved.
    pub fn save(reason: impl std::fmt::Display) -> Self {
        Self::CompetitionSave {
            reason: reason.to_string(),
        }
    }

    /// Settings could not be persisted.
    pub fn settings(reason: impl std::fmt::Display) -> Self {
        Self::SettingsSave {
            reason: reason.to_string(),
        }
    }

    /// A named operation failed.
    pub fn operation(operation: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Operation {
            operation: operation.into(),
            reason: reason.to_string(),
        }
    }

    /// Plain-language message for toasts.
    ///
    /// Load and save reasons arrive pre-worded from the persistence layer,
    /// so they read as a second sentence here.
    pub fn user_message(&self) -> String {
        match self {
            Self::CompetitionLoad { reason } => {
                format!("Could not open the competition file. {reason}")
            }
            Self::CompetitionSave { reason } => format!("Could not save the competition. {reason}"),
            Self::SettingsSave { .. } => "Could not save settings.".to_string(),
            Self::Operation { operation, .. } => format!("{operation} failed."),
        }
    }

    /// Optional recovery hint shown alongside the message.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::CompetitionLoad { .. } => {
                Some("Check that the file exists and is a .pss competition file.")
            }
            Self::CompetitionSave { .. } => {
                Some("Check disk space and that the folder is writable, then save again.")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_reason() {
        let err = GuiError::load("bad magic");
        assert_eq!(err.to_string(), "failed to load competition: bad magic");
    }

    #[test]
    fn user_message_is_plain_language() {
        let err = GuiError::operation("Delete station", "not found");
        assert_eq!(err.user_message(), "Delete station failed.");
        assert!(err.suggestion().is_none());
        assert!(GuiError::save("disk full").suggestion().is_some());
    }

    #[test]
    fn user_message_carries_the_persistence_wording() {
        let err = GuiError::load("The file is damaged.");
        assert_eq!(
            err.user_message(),
            "Could not open the competition file. The file is damaged."
        );
    }
}
