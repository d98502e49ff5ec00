use crate::section::ScoutSection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An activity base patrols rotate through (knots, first aid, orienteering).
/// Each station defines the maximum score it can award; score validity is
/// always judged against the station's current `max_score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Highest score this station can award. Always at least 1.
    pub max_score: u32,
    /// Contact for the leader running the station, if known.
    pub leader_email: Option<String>,
    /// Sections eligible to attempt this station. `None` means every
    /// section is eligible.
    pub allowed_sections: Option<Vec<ScoutSection>>,
    pub created_at: DateTime<Utc>,
}

impl Station {
    pub fn new(name: impl Into<String>, description: impl Into<String>, max_score: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            max_score,
            leader_email: None,
            allowed_sections: None,
            created_at: Utc::now(),
        }
    }

    /// Whether patrols from `section` may attempt this station.
    pub fn accepts(&self, section: ScoutSection) -> bool {
        match &self.allowed_sections {
            None => true,
            Some(sections) => sections.contains(&section),
        }
    }

    /// Clamp a raw value into this station's valid score range.
    pub fn clamp_score(&self, value: u32) -> u32 {
        value.min(self.max_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_everyone_without_an_allow_list() {
        let station = Station::new("Knots", "Tie six knots", 20);
        for section in ScoutSection::ALL {
            assert!(station.accepts(section));
        }
    }

    #[test]
    fn accepts_only_listed_sections() {
        let mut station = Station::new("Abseiling", "Harness and descend", 50);
        station.allowed_sections = Some(vec![ScoutSection::Venturers, ScoutSection::Rovers]);
        assert!(station.accepts(ScoutSection::Rovers));
        assert!(!station.accepts(ScoutSection::Joeys));
    }

    #[test]
    fn clamps_to_max_score() {
        let station = Station::new("Knots", "", 20);
        assert_eq!(station.clamp_score(7), 7);
        assert_eq!(station.clamp_score(20), 20);
        assert_eq!(station.clamp_score(9999), 20);
    }

    #[test]
    fn serde_round_trip_keeps_allow_list() {
        let mut station = Station::new("First Aid", "Treat a snake bite", 30);
        station.allowed_sections = Some(vec![ScoutSection::Scouts]);
        station.leader_email = Some("leader@example.org".to_string());
        let json = serde_json::to_string(&station).unwrap();
        let back: Station = serde_json::from_str(&json).unwrap();
        assert_eq!(back, station);
    }
}
