//! Root competition file type.

use chrono::{DateTime, Utc};
use rkyv::{Archive, Deserialize, Serialize};

use super::{GroupSnapshot, PatrolSnapshot, ScoreSnapshot, SectionSnapshot, StationSnapshot};

/// Root structure serialized to .pss files.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[rkyv(compare(PartialEq))]
pub struct CompetitionFile {
    /// Schema version (for future migrations).
    pub schema_version: u32,

    /// When the file was first created, RFC 3339.
    pub created_at: String,

    /// When the file was last saved, RFC 3339.
    pub last_saved_at: String,

    /// The competition itself.
    pub competition: CompetitionSnapshot,
}

impl CompetitionFile {
    pub fn new(competition: CompetitionSnapshot) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            schema_version: super::CURRENT_SCHEMA_VERSION,
            created_at: now.clone(),
            last_saved_at: now,
            competition,
        }
    }

    /// Update the last saved timestamp.
    pub fn touch(&mut self) {
        self.last_saved_at = Utc::now().to_rfc3339();
    }

    /// Parse the last_saved_at timestamp.
    pub fn last_saved_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.last_saved_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Stored form of the competition aggregate.
///
/// Collections are vectors; the loader re-keys them. The event date is a
/// `YYYY-MM-DD` string when set.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[rkyv(compare(PartialEq))]
pub struct CompetitionSnapshot {
    pub id: String,
    pub name: String,
    pub date: Option<String>,
    pub sections: Vec<SectionSnapshot>,
    pub created_at: String,
    pub groups: Vec<GroupSnapshot>,
    pub patrols: Vec<PatrolSnapshot>,
    pub stations: Vec<StationSnapshot>,
    pub scores: Vec<ScoreSnapshot>,
}
