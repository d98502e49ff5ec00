//! Setup screen messages (details, stations, groups, patrols).

use pss_model::ScoutSection;
use uuid::Uuid;

use crate::state::{GroupChoice, SetupTab};

/// Messages from the setup screen.
#[derive(Debug, Clone)]
pub enum SetupMessage {
    TabSelected(SetupTab),

    // ===== Details tab =====
    /// Competition name field changed. Valid names commit immediately.
    NameChanged(String),
    /// Competition name field submitted; resyncs the field to the model.
    NameSubmitted,
    /// Competition date field changed (held until submit).
    DateChanged(String),
    /// Competition date field submitted; parses and commits.
    DateSubmitted,
    /// Toggle a section in the competition's section list.
    SectionToggled(ScoutSection),

    // ===== Stations tab =====
    NewStation,
    EditStation(Uuid),
    StationNameChanged(String),
    StationDescriptionChanged(String),
    StationMaxChanged(String),
    StationEmailChanged(String),
    StationAllowAllToggled(bool),
    StationSectionToggled(ScoutSection),
    SaveStation,
    CancelStationForm,
    /// Opens the delete confirmation dialog.
    DeleteStationClicked(Uuid),

    // ===== Groups tab =====
    GroupAddNameChanged(String),
    AddGroup,
    EditGroup(Uuid),
    GroupNameChanged(String),
    SaveGroup,
    CancelGroupForm,
    /// Opens the delete confirmation dialog.
    DeleteGroupClicked(Uuid),

    // ===== Patrols tab =====
    NewPatrol,
    EditPatrol(Uuid),
    PatrolNameChanged(String),
    PatrolGroupSelected(GroupChoice),
    PatrolSectionSelected(ScoutSection),
    SavePatrol,
    CancelPatrolForm,
    /// Deletes immediately; a patrol carries at most its own scores.
    DeletePatrol(Uuid),
}
