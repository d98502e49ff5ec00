//! Modal dialog messages.

/// Resolutions of the currently open dialog.
#[derive(Debug, Clone, Copy)]
pub enum DialogMessage {
    /// Unsaved-changes dialog: save first, then continue the pending action.
    UnsavedSave,
    /// Unsaved-changes dialog: drop changes and continue the pending action.
    UnsavedDiscard,
    /// Delete confirmation: perform the delete.
    ConfirmDelete,
    /// Close the dialog without acting.
    Cancel,
}
