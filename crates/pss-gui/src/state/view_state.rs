//! Per-screen UI state.
//!
//! Each screen owns its transient state (drafts, open forms, filters) in a
//! [`ViewState`] variant. Navigating away drops that state; anything worth
//! keeping must be committed to the competition model first, which the
//! navigation handler takes care of.

use std::collections::{BTreeMap, BTreeSet};

use pss_model::{Competition, ScoutSection, Station};
use uuid::Uuid;

use super::score_draft::ScoreDraft;

// =============================================================================
// SCREENS
// =============================================================================

/// Navigation target. Carries only what is needed to build the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Setup(SetupTab),
    Scoring,
    Settings,
}

/// Tabs of the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupTab {
    #[default]
    Details,
    Stations,
    Groups,
    Patrols,
}

impl SetupTab {
    /// Tab order as rendered.
    pub const ALL: [Self; 4] = [Self::Details, Self::Stations, Self::Groups, Self::Patrols];

    /// Label shown on the tab strip.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Details => "Details",
            Self::Stations => "Stations",
            Self::Groups => "Groups",
            Self::Patrols => "Patrols",
        }
    }

    /// Position in [`Self::ALL`], used by the tab bar highlight.
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|tab| tab == self).unwrap_or(0)
    }
}

// =============================================================================
// VIEW STATE
// =============================================================================

/// State owned by the currently visible screen.
#[derive(Debug, Clone)]
pub enum ViewState {
    Home(HomeState),
    Setup(SetupState),
    Scoring(ScoringState),
    Settings,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::Home(HomeState::default())
    }
}

/// Home screen state: the "create competition" name draft.
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub new_name: String,
}

// =============================================================================
// SETUP
// =============================================================================

/// Setup screen state: active tab plus any open editor form.
#[derive(Debug, Clone, Default)]
pub struct SetupState {
    pub tab: SetupTab,
    /// Competition name as typed. Valid names commit on every keystroke;
    /// a blank field is held here until submit resyncs it.
    pub name_draft: String,
    /// Competition date as typed, committed on Enter.
    pub date_draft: String,
    pub station_form: Option<StationForm>,
    pub group_form: Option<GroupForm>,
    /// Inline "add group" field on the groups tab.
    pub group_add_name: String,
    pub patrol_form: Option<PatrolForm>,
}

impl SetupState {
    /// Build setup state for a loaded competition.
    pub fn for_competition(competition: &Competition, tab: SetupTab) -> Self {
        Self {
            tab,
            name_draft: competition.name.clone(),
            date_draft: competition
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            ..Self::default()
        }
    }
}

/// Station editor form, used for both create and edit.
#[derive(Debug, Clone)]
pub struct StationForm {
    /// `None` when creating a new station.
    pub id: Option<Uuid>,
    pub name: String,
    pub description: String,
    /// Maximum score as typed; validated on save.
    pub max_score: String,
    pub leader_email: String,
    /// When set, the station is open to every section and the explicit
    /// selection below is ignored.
    pub allow_all: bool,
    pub selected_sections: BTreeSet<ScoutSection>,
}

impl StationForm {
    /// Blank form for a new station.
    pub fn new() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            max_score: "10".to_string(),
            leader_email: String::new(),
            allow_all: true,
            selected_sections: BTreeSet::new(),
        }
    }

    /// Form pre-filled from an existing station.
    pub fn for_station(station: &Station) -> Self {
        Self {
            id: Some(station.id),
            name: station.name.clone(),
            description: station.description.clone(),
            max_score: station.max_score.to_string(),
            leader_email: station.leader_email.clone().unwrap_or_default(),
            allow_all: station.allowed_sections.is_none(),
            selected_sections: station
                .allowed_sections
                .as_ref()
                .map(|sections| sections.iter().copied().collect())
                .unwrap_or_default(),
        }
    }

    /// Maximum score if the text parses to a usable value.
    pub fn parsed_max(&self) -> Option<u32> {
        self.max_score
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|max| *max > 0)
    }

    /// Allow-list for the model: `None` means open to all sections.
    pub fn allowed_sections(&self) -> Option<Vec<ScoutSection>> {
        if self.allow_all {
            None
        } else {
            Some(self.selected_sections.iter().copied().collect())
        }
    }

    /// Whether the form can be saved.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.parsed_max().is_some()
            && (self.allow_all || !self.selected_sections.is_empty())
    }
}

impl Default for StationForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Rename form for an existing group.
#[derive(Debug, Clone)]
pub struct GroupForm {
    pub id: Uuid,
    pub name: String,
}

/// Patrol editor form, used for both create and edit.
#[derive(Debug, Clone)]
pub struct PatrolForm {
    /// `None` when creating a new patrol.
    pub id: Option<Uuid>,
    pub name: String,
    pub group: Option<GroupChoice>,
    pub section: ScoutSection,
}

impl PatrolForm {
    /// Blank form for a new patrol.
    pub fn new() -> Self {
        Self {
            id: None,
            name: String::new(),
            group: None,
            section: ScoutSection::Scouts,
        }
    }

    /// Whether the form can be saved.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.group.is_some()
    }
}

impl Default for PatrolForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Group option for the patrol form's pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupChoice {
    pub id: Uuid,
    pub name: String,
}

impl std::fmt::Display for GroupChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

// =============================================================================
// SCORING
// =============================================================================

/// Scoring screen state: selected station, section filter, and one score
/// draft per eligible patrol.
#[derive(Debug, Clone, Default)]
pub struct ScoringState {
    pub selected_station: Option<Uuid>,
    pub section_filter: Option<ScoutSection>,
    /// Keyed by patrol id. Rebuilt whenever the selected station changes.
    pub drafts: BTreeMap<Uuid, ScoreDraft>,
}

impl ScoringState {
    /// Build scoring state for a loaded competition, selecting the first
    /// station in display order.
    pub fn for_competition(competition: &Competition) -> Self {
        let mut state = Self {
            selected_station: competition
                .stations_by_name()
                .first()
                .map(|station| station.id),
            ..Self::default()
        };
        state.rebuild_drafts(competition);
        state
    }

    /// Rebuild all drafts from stored scores for the selected station.
    ///
    /// This is the "external identity" reset: any in-progress typing is
    /// replaced, so callers must commit drafts they want to keep first.
    pub fn rebuild_drafts(&mut self, competition: &Competition) {
        self.drafts.clear();
        let Some(station_id) = self.selected_station else {
            return;
        };
        for patrol in competition.patrols_for_station(station_id) {
            let stored = competition.score_value(patrol.id, station_id).unwrap_or(0);
            self.drafts.insert(patrol.id, ScoreDraft::new(stored));
        }
    }
}

// =============================================================================
// DIALOGS
// =============================================================================

/// Modal dialog currently blocking the window, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    /// "You have unsaved changes" with save/discard/cancel.
    UnsavedChanges(PendingAction),
    /// Destructive delete confirmation.
    ConfirmDelete(DeleteTarget),
}

/// What to do once the unsaved-changes dialog is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    NewCompetition,
    OpenCompetition,
    Quit,
}

/// What a delete confirmation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Station(Uuid),
    Group(Uuid),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pss_model::Station;

    fn competition_with_two_stations() -> Competition {
        let mut comp = Competition::new("Autumn Camp");
        comp.add_station(Station::new("Knots", "Tie six knots", 20))
            .unwrap();
        comp.add_station(Station::new("Archery", "Ten arrows", 50))
            .unwrap();
        comp
    }

    #[test]
    fn scoring_state_selects_first_station_by_name() {
        let comp = competition_with_two_stations();
        let state = ScoringState::for_competition(&comp);

        let selected = state.selected_station.unwrap();
        assert_eq!(comp.station(selected).unwrap().name, "Archery");
    }

    #[test]
    fn rebuild_drafts_reads_stored_scores() {
        let mut comp = competition_with_two_stations();
        let group_id = comp.add_group("1st Hilltop").unwrap();
        let patrol_id = comp
            .add_patrol("Hawks", group_id, ScoutSection::Scouts)
            .unwrap();
        let station_id = comp.stations_by_name()[0].id;
        comp.record_score(patrol_id, station_id, 17).unwrap();

        let mut state = ScoringState {
            selected_station: Some(station_id),
            ..ScoringState::default()
        };
        state.rebuild_drafts(&comp);

        assert_eq!(state.drafts[&patrol_id].text(), "17");
    }

    #[test]
    fn rebuild_drafts_skips_ineligible_patrols() {
        let mut comp = Competition::new("Sectioned");
        let mut station = Station::new("Abseiling", "", 30);
        station.allowed_sections = Some(vec![ScoutSection::Venturers]);
        let station_id = comp.add_station(station).unwrap();
        let group_id = comp.add_group("2nd River").unwrap();
        comp.add_patrol("Joey Mob", group_id, ScoutSection::Joeys)
            .unwrap();
        let eligible = comp
            .add_patrol("Venturer Unit", group_id, ScoutSection::Venturers)
            .unwrap();

        let mut state = ScoringState {
            selected_station: Some(station_id),
            ..ScoringState::default()
        };
        state.rebuild_drafts(&comp);

        assert_eq!(state.drafts.len(), 1);
        assert!(state.drafts.contains_key(&eligible));
    }

    #[test]
    fn station_form_validation() {
        let mut form = StationForm::new();
        assert!(!form.is_valid());

        form.name = "Knots".to_string();
        assert!(form.is_valid());

        form.max_score = "0".to_string();
        assert!(!form.is_valid());
        form.max_score = "abc".to_string();
        assert!(!form.is_valid());
        form.max_score = "25".to_string();

        form.allow_all = false;
        assert!(!form.is_valid());
        form.selected_sections.insert(ScoutSection::Cubs);
        assert!(form.is_valid());
        assert_eq!(form.allowed_sections(), Some(vec![ScoutSection::Cubs]));
    }

    #[test]
    fn setup_state_formats_competition_date() {
        let mut comp = Competition::new("Dated");
        comp.date = chrono::NaiveDate::from_ymd_opt(2026, 4, 18);

        let state = SetupState::for_competition(&comp, SetupTab::Details);
        assert_eq!(state.date_draft, "2026-04-18");

        comp.date = None;
        let state = SetupState::for_competition(&comp, SetupTab::Details);
        assert!(state.date_draft.is_empty());
    }
}
