//! Modal dialog views.
//!
//! Dialogs render in-window, stacked over the current screen. The backdrop
//! click and the Cancel button both resolve to [`DialogMessage::Cancel`].

use iced::Element;
use iced::widget::{button, column, text};

use crate::component::modal;
use crate::message::{DialogMessage, Message};
use crate::state::{AppState, DeleteTarget, DialogState, PendingAction};
use crate::theme::{
    FONT_SIZE_BODY, SPACING_MD, SPACING_XS, button_danger, button_primary, button_secondary,
    colors,
};

/// Wrap the given screen with the currently open dialog.
pub fn view_dialog<'a>(
    base: Element<'a, Message>,
    dialog: &DialogState,
    state: &'a AppState,
) -> Element<'a, Message> {
    match dialog {
        DialogState::UnsavedChanges(pending) => view_unsaved_changes(base, *pending, state),
        DialogState::ConfirmDelete(target) => view_confirm_delete(base, *target, state),
    }
}

fn view_unsaved_changes<'a>(
    base: Element<'a, Message>,
    pending: PendingAction,
    state: &'a AppState,
) -> Element<'a, Message> {
    let c = colors();

    let name = state
        .competition
        .as_ref()
        .map_or_else(|| "This competition".to_owned(), |comp| format!("\"{}\"", comp.name));
    // NewCompetition backs both "new" and "close"; either way the current
    // competition is about to go away.
    let question = match pending {
        PendingAction::NewCompetition => "Save before closing it?",
        PendingAction::OpenCompetition => "Save before opening another?",
        PendingAction::Quit => "Save before quitting?",
    };
    let body = column![
        text(format!("{name} has unsaved changes."))
            .size(FONT_SIZE_BODY)
            .color(c.text_primary),
        text(question).size(FONT_SIZE_BODY).color(c.text_secondary),
    ]
    .spacing(SPACING_XS);

    let actions = vec![
        dialog_button("Cancel", DialogMessage::Cancel, button_secondary),
        dialog_button("Discard", DialogMessage::UnsavedDiscard, button_danger),
        dialog_button("Save", DialogMessage::UnsavedSave, button_primary),
    ];

    modal(
        base,
        "Unsaved Changes",
        body.into(),
        Message::Dialog(DialogMessage::Cancel),
        actions,
    )
}

fn view_confirm_delete<'a>(
    base: Element<'a, Message>,
    target: DeleteTarget,
    state: &'a AppState,
) -> Element<'a, Message> {
    let c = colors();

    let (title, body) = match target {
        DeleteTarget::Station(id) => {
            let name = state
                .competition
                .as_ref()
                .and_then(|comp| comp.station(id))
                .map_or_else(|| "this station".to_owned(), |station| {
                    format!("\"{}\"", station.name)
                });
            (
                "Delete Station",
                format!("Delete {name}? Any scores recorded at it are removed with it."),
            )
        }
        DeleteTarget::Group(id) => {
            let name = state
                .competition
                .as_ref()
                .and_then(|comp| comp.group(id))
                .map_or_else(|| "this group".to_owned(), |group| format!("\"{}\"", group.name));
            (
                "Delete Group",
                format!("Delete {name}? Its patrols and their scores are removed with it."),
            )
        }
    };

    let actions = vec![
        dialog_button("Cancel", DialogMessage::Cancel, button_secondary),
        dialog_button("Delete", DialogMessage::ConfirmDelete, button_danger),
    ];

    modal(
        base,
        title,
        text(body).size(FONT_SIZE_BODY).color(c.text_secondary).into(),
        Message::Dialog(DialogMessage::Cancel),
        actions,
    )
}

fn dialog_button<'a>(
    label: &'a str,
    message: DialogMessage,
    style: fn(&iced::Theme, button::Status) -> button::Style,
) -> Element<'a, Message> {
    button(text(label).size(FONT_SIZE_BODY))
        .on_press(Message::Dialog(message))
        .padding([SPACING_XS, SPACING_MD])
        .style(style)
        .into()
}
