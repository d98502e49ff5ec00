//! Conversions between the domain model and stored snapshots.
//!
//! Saving is infallible: every model value has an exact stored form.
//! Restoring is fallible because snapshots carry ids, dates and timestamps
//! as strings; a file that decodes but holds a malformed id surfaces as a
//! `Deserialization` error instead of silently rebuilding the entity.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::{PersistenceError, Result};
use crate::types::{
    CompetitionSnapshot, GroupSnapshot, PatrolSnapshot, ScoreSnapshot, SectionSnapshot,
    StationSnapshot,
};
use pss_model::{Competition, Patrol, Score, ScoutGroup, ScoutSection, Station};

/// Trait for types that can be converted to a persistence snapshot.
pub trait ToSnapshot {
    /// The snapshot type.
    type Snapshot;

    /// Convert to a snapshot for persistence.
    fn to_snapshot(&self) -> Self::Snapshot;
}

/// Trait for types that can be restored from a persistence snapshot.
pub trait FromSnapshot: Sized {
    /// The snapshot type.
    type Snapshot;

    /// Restore from a snapshot.
    fn from_snapshot(snapshot: Self::Snapshot) -> Result<Self>;
}

// =============================================================================
// SECTIONS
// =============================================================================

impl From<ScoutSection> for SectionSnapshot {
    fn from(section: ScoutSection) -> Self {
        match section {
            ScoutSection::Joeys => SectionSnapshot::Joeys,
            ScoutSection::Cubs => SectionSnapshot::Cubs,
            ScoutSection::Scouts => SectionSnapshot::Scouts,
            ScoutSection::Venturers => SectionSnapshot::Venturers,
            ScoutSection::Rovers => SectionSnapshot::Rovers,
        }
    }
}

impl From<SectionSnapshot> for ScoutSection {
    fn from(snapshot: SectionSnapshot) -> Self {
        match snapshot {
            SectionSnapshot::Joeys => ScoutSection::Joeys,
            SectionSnapshot::Cubs => ScoutSection::Cubs,
            SectionSnapshot::Scouts => ScoutSection::Scouts,
            SectionSnapshot::Venturers => ScoutSection::Venturers,
            SectionSnapshot::Rovers => ScoutSection::Rovers,
        }
    }
}

// =============================================================================
// ROSTER
// =============================================================================

impl ToSnapshot for ScoutGroup {
    type Snapshot = GroupSnapshot;

    fn to_snapshot(&self) -> GroupSnapshot {
        GroupSnapshot {
            id: self.id.to_string(),
            name: self.name.clone(),
        }
    }
}

impl FromSnapshot for ScoutGroup {
    type Snapshot = GroupSnapshot;

    fn from_snapshot(snapshot: GroupSnapshot) -> Result<Self> {
        Ok(Self {
            id: parse_id(&snapshot.id)?,
            name: snapshot.name,
        })
    }
}

impl ToSnapshot for Patrol {
    type Snapshot = PatrolSnapshot;

    fn to_snapshot(&self) -> PatrolSnapshot {
        PatrolSnapshot {
            id: self.id.to_string(),
            name: self.name.clone(),
            group_id: self.group_id.to_string(),
            section: self.section.into(),
        }
    }
}

impl FromSnapshot for Patrol {
    type Snapshot = PatrolSnapshot;

    fn from_snapshot(snapshot: PatrolSnapshot) -> Result<Self> {
        Ok(Self {
            id: parse_id(&snapshot.id)?,
            name: snapshot.name,
            group_id: parse_id(&snapshot.group_id)?,
            section: snapshot.section.into(),
        })
    }
}

// =============================================================================
// SCORING
// =============================================================================

impl ToSnapshot for Station {
    type Snapshot = StationSnapshot;

    fn to_snapshot(&self) -> StationSnapshot {
        StationSnapshot {
            id: self.id.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            max_score: self.max_score,
            leader_email: self.leader_email.clone(),
            allowed_sections: self
                .allowed_sections
                .as_ref()
                .map(|sections| sections.iter().copied().map(Into::into).collect()),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

impl FromSnapshot for Station {
    type Snapshot = StationSnapshot;

    fn from_snapshot(snapshot: StationSnapshot) -> Result<Self> {
        Ok(Self {
            id: parse_id(&snapshot.id)?,
            name: snapshot.name,
            description: snapshot.description,
            max_score: snapshot.max_score,
            leader_email: snapshot.leader_email,
            allowed_sections: snapshot
                .allowed_sections
                .map(|sections| sections.into_iter().map(Into::into).collect()),
            created_at: parse_timestamp(&snapshot.created_at)?,
        })
    }
}

impl ToSnapshot for Score {
    type Snapshot = ScoreSnapshot;

    fn to_snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            id: self.id.to_string(),
            patrol_id: self.patrol_id.to_string(),
            station_id: self.station_id.to_string(),
            score: self.score,
            updated_at: self.updated_at.to_rfc3339(),
        }
    }
}

impl FromSnapshot for Score {
    type Snapshot = ScoreSnapshot;

    fn from_snapshot(snapshot: ScoreSnapshot) -> Result<Self> {
        Ok(Self {
            id: parse_id(&snapshot.id)?,
            patrol_id: parse_id(&snapshot.patrol_id)?,
            station_id: parse_id(&snapshot.station_id)?,
            score: snapshot.score,
            updated_at: parse_timestamp(&snapshot.updated_at)?,
        })
    }
}

// =============================================================================
// COMPETITION
// =============================================================================

impl ToSnapshot for Competition {
    type Snapshot = CompetitionSnapshot;

    fn to_snapshot(&self) -> CompetitionSnapshot {
        CompetitionSnapshot {
            id: self.id.to_string(),
            name: self.name.clone(),
            date: self.date.map(|d| d.to_string()),
            sections: self.sections.iter().copied().map(Into::into).collect(),
            created_at: self.created_at.to_rfc3339(),
            groups: self.groups().map(ToSnapshot::to_snapshot).collect(),
            patrols: self.patrols().map(ToSnapshot::to_snapshot).collect(),
            stations: self.stations().map(ToSnapshot::to_snapshot).collect(),
            scores: self.scores().map(ToSnapshot::to_snapshot).collect(),
        }
    }
}

impl FromSnapshot for Competition {
    type Snapshot = CompetitionSnapshot;

    fn from_snapshot(snapshot: CompetitionSnapshot) -> Result<Self> {
        let id = parse_id(&snapshot.id)?;
        let date = snapshot.date.as_deref().map(parse_date).transpose()?;
        let created_at = parse_timestamp(&snapshot.created_at)?;
        let sections = snapshot
            .sections
            .into_iter()
            .map(ScoutSection::from)
            .collect();
        let groups: Vec<ScoutGroup> = snapshot
            .groups
            .into_iter()
            .map(ScoutGroup::from_snapshot)
            .collect::<Result<_>>()?;
        let patrols: Vec<Patrol> = snapshot
            .patrols
            .into_iter()
            .map(Patrol::from_snapshot)
            .collect::<Result<_>>()?;
        let stations: Vec<Station> = snapshot
            .stations
            .into_iter()
            .map(Station::from_snapshot)
            .collect::<Result<_>>()?;
        let scores: Vec<Score> = snapshot
            .scores
            .into_iter()
            .map(Score::from_snapshot)
            .collect::<Result<_>>()?;

        Ok(Competition::from_parts(
            id, snapshot.name, date, sections, created_at, groups, patrols, stations, scores,
        ))
    }
}

fn parse_id(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|_| malformed("id", value))
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| malformed("timestamp", value))
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| malformed("date", value))
}

fn malformed(what: &str, value: &str) -> PersistenceError {
    PersistenceError::Deserialization {
        source: Box::new(std::io::Error::other(format!("malformed {what}: {value}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_competition() -> Competition {
        let mut comp = Competition::new("Autumn Camp");
        comp.date = NaiveDate::from_ymd_opt(2026, 4, 18);
        let group_id = comp.add_group("3rd Glen Iris").unwrap();
        let patrol_id = comp
            .add_patrol("Echidnas", group_id, ScoutSection::Cubs)
            .unwrap();
        let mut station = Station::new("Fire Lighting", "One match, wet wood", 25);
        station.leader_email = Some("fires@example.org".to_string());
        station.allowed_sections = Some(vec![ScoutSection::Cubs, ScoutSection::Scouts]);
        let station_id = comp.add_station(station).unwrap();
        comp.record_score(patrol_id, station_id, 19).unwrap();
        comp
    }

    #[test]
    fn competition_round_trips_through_snapshot() {
        let comp = sample_competition();
        let snapshot = comp.to_snapshot();
        let restored = Competition::from_snapshot(snapshot).unwrap();
        assert_eq!(restored, comp);
    }

    #[test]
    fn snapshot_stores_date_as_iso_string() {
        let comp = sample_competition();
        let snapshot = comp.to_snapshot();
        assert_eq!(snapshot.date.as_deref(), Some("2026-04-18"));
    }

    #[test]
    fn malformed_id_is_a_deserialization_error() {
        let snapshot = GroupSnapshot {
            id: "not-a-uuid".to_string(),
            name: "1st Nowhere".to_string(),
        };
        let result = ScoutGroup::from_snapshot(snapshot);
        assert!(matches!(
            result,
            Err(PersistenceError::Deserialization { .. })
        ));
    }
}
