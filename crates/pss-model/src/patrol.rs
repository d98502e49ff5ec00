use crate::section::ScoutSection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A patrol: the team unit that rotates through stations and gets scored.
/// Every patrol belongs to one scout group and competes in one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patrol {
    pub id: Uuid,
    pub name: String,
    pub group_id: Uuid,
    pub section: ScoutSection,
}

impl Patrol {
    pub fn new(name: impl Into<String>, group_id: Uuid, section: ScoutSection) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            group_id,
            section,
        }
    }
}
