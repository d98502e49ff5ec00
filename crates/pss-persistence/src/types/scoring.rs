//! Stored forms of stations and scores.

use rkyv::{Archive, Deserialize, Serialize};

use super::SectionSnapshot;

/// Stored station. Timestamps are RFC 3339 strings.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[rkyv(compare(PartialEq))]
pub struct StationSnapshot {
    pub id: String,
    pub name: String,
    pub description: String,
    pub max_score: u32,
    pub leader_email: Option<String>,
    /// `None` means every section is eligible, matching the model.
    pub allowed_sections: Option<Vec<SectionSnapshot>>,
    pub created_at: String,
}

/// Stored score for one patrol/station pair.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[rkyv(compare(PartialEq))]
pub struct ScoreSnapshot {
    pub id: String,
    pub patrol_id: String,
    pub station_id: String,
    pub score: u32,
    pub updated_at: String,
}
