pub mod competition;
pub mod error;
pub mod group;
pub mod patrol;
pub mod score;
pub mod section;
pub mod station;

pub use competition::Competition;
pub use error::{ModelError, Result};
pub use group::ScoutGroup;
pub use patrol::Patrol;
pub use score::Score;
pub use section::ScoutSection;
pub use station::Station;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn competition_defaults_open_all_sections() {
        let comp = Competition::new("District Camp");
        assert_eq!(comp.date, None);
        assert_eq!(comp.sections, ScoutSection::ALL.to_vec());
        assert_eq!(comp.station_count(), 0);
    }

    #[test]
    fn patrol_serializes_with_section_tag() {
        let group = ScoutGroup::new("2nd Bayside");
        let patrol = Patrol::new("Kookaburras", group.id, ScoutSection::Venturers);
        let json = serde_json::to_string(&patrol).expect("serialize patrol");
        assert!(json.contains("\"venturers\""));
        let round: Patrol = serde_json::from_str(&json).expect("deserialize patrol");
        assert_eq!(round, patrol);
    }
}
