//! Stored forms of the roster types (sections, groups, patrols).

use rkyv::{Archive, Deserialize, Serialize};

/// Scout section for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[rkyv(compare(PartialEq))]
pub enum SectionSnapshot {
    Joeys,
    Cubs,
    Scouts,
    Venturers,
    Rovers,
}

/// Stored scout group.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[rkyv(compare(PartialEq))]
pub struct GroupSnapshot {
    pub id: String,
    pub name: String,
}

/// Stored patrol.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[rkyv(compare(PartialEq))]
pub struct PatrolSnapshot {
    pub id: String,
    pub name: String,
    pub group_id: String,
    pub section: SectionSnapshot,
}
