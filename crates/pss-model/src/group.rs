use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scout group (the home organisation patrols belong to, e.g. "1st Hoppers
/// Crossing"). Groups exist so rosters and results can be grouped by where a
/// patrol comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoutGroup {
    pub id: Uuid,
    pub name: String,
}

impl ScoutGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}
