use crate::error::{ModelError, Result};
use crate::group::ScoutGroup;
use crate::patrol::Patrol;
use crate::score::Score;
use crate::section::ScoutSection;
use crate::station::Station;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;
use uuid::Uuid;

/// The competition aggregate: one scoring day's stations, groups, patrols
/// and recorded scores. All mutation goes through methods so referential
/// cleanup (removing a patrol removes its scores, and so on) cannot be
/// skipped.
///
/// Collections are `BTreeMap`s so iteration order is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Competition {
    pub id: Uuid,
    pub name: String,
    /// Event date. Left unset while the event is still being planned.
    pub date: Option<NaiveDate>,
    /// Sections this competition is open to.
    pub sections: Vec<ScoutSection>,
    pub created_at: DateTime<Utc>,
    groups: BTreeMap<Uuid, ScoutGroup>,
    patrols: BTreeMap<Uuid, Patrol>,
    stations: BTreeMap<Uuid, Station>,
    /// Keyed by (patrol id, station id); one score per pair.
    scores: BTreeMap<(Uuid, Uuid), Score>,
}

impl Competition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            date: None,
            sections: ScoutSection::ALL.to_vec(),
            created_at: Utc::now(),
            groups: BTreeMap::new(),
            patrols: BTreeMap::new(),
            stations: BTreeMap::new(),
            scores: BTreeMap::new(),
        }
    }

    /// Rebuild an aggregate from previously stored parts. Input is trusted;
    /// this is the loader's constructor, not a public editing path.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: Uuid,
        name: String,
        date: Option<NaiveDate>,
        sections: Vec<ScoutSection>,
        created_at: DateTime<Utc>,
        groups: Vec<ScoutGroup>,
        patrols: Vec<Patrol>,
        stations: Vec<Station>,
        scores: Vec<Score>,
    ) -> Self {
        Self {
            id,
            name,
            date,
            sections,
            created_at,
            groups: groups.into_iter().map(|g| (g.id, g)).collect(),
            patrols: patrols.into_iter().map(|p| (p.id, p)).collect(),
            stations: stations.into_iter().map(|s| (s.id, s)).collect(),
            scores: scores
                .into_iter()
                .map(|s| ((s.patrol_id, s.station_id), s))
                .collect(),
        }
    }

    // ===== Stations =====

    pub fn add_station(&mut self, mut station: Station) -> Result<Uuid> {
        station.name = non_empty(station.name, "station")?;
        if station.max_score == 0 {
            return Err(ModelError::InvalidMaxScore);
        }
        let id = station.id;
        self.stations.insert(id, station);
        Ok(id)
    }

    /// Replace a station wholesale. Recorded scores are left untouched even
    /// if the new `max_score` is lower; validity is judged at read time.
    pub fn update_station(&mut self, mut station: Station) -> Result<()> {
        station.name = non_empty(station.name, "station")?;
        if station.max_score == 0 {
            return Err(ModelError::InvalidMaxScore);
        }
        if !self.stations.contains_key(&station.id) {
            return Err(ModelError::StationNotFound(station.id));
        }
        self.stations.insert(station.id, station);
        Ok(())
    }

    pub fn remove_station(&mut self, id: Uuid) -> Option<Station> {
        let removed = self.stations.remove(&id);
        if removed.is_some() {
            self.scores.retain(|(_, station_id), _| *station_id != id);
        }
        removed
    }

    pub fn station(&self, id: Uuid) -> Option<&Station> {
        self.stations.get(&id)
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Stations sorted by name for display.
    pub fn stations_by_name(&self) -> Vec<&Station> {
        let mut stations: Vec<&Station> = self.stations.values().collect();
        stations.sort_by_key(|s| s.name.to_lowercase());
        stations
    }

    // ===== Groups =====

    pub fn add_group(&mut self, name: impl Into<String>) -> Result<Uuid> {
        let name = non_empty(name.into(), "group")?;
        let group = ScoutGroup::new(name);
        let id = group.id;
        self.groups.insert(id, group);
        Ok(id)
    }

    pub fn rename_group(&mut self, id: Uuid, name: impl Into<String>) -> Result<()> {
        let name = non_empty(name.into(), "group")?;
        let group = self
            .groups
            .get_mut(&id)
            .ok_or(ModelError::GroupNotFound(id))?;
        group.name = name;
        Ok(())
    }

    /// Remove a group together with its patrols and their scores.
    pub fn remove_group(&mut self, id: Uuid) -> Option<ScoutGroup> {
        let removed = self.groups.remove(&id)?;
        let orphaned: Vec<Uuid> = self
            .patrols
            .values()
            .filter(|p| p.group_id == id)
            .map(|p| p.id)
            .collect();
        for patrol_id in orphaned {
            self.remove_patrol(patrol_id);
        }
        Some(removed)
    }

    pub fn group(&self, id: Uuid) -> Option<&ScoutGroup> {
        self.groups.get(&id)
    }

    pub fn groups(&self) -> impl Iterator<Item = &ScoutGroup> {
        self.groups.values()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn groups_by_name(&self) -> Vec<&ScoutGroup> {
        let mut groups: Vec<&ScoutGroup> = self.groups.values().collect();
        groups.sort_by_key(|g| g.name.to_lowercase());
        groups
    }

    // ===== Patrols =====

    pub fn add_patrol(
        &mut self,
        name: impl Into<String>,
        group_id: Uuid,
        section: ScoutSection,
    ) -> Result<Uuid> {
        let name = non_empty(name.into(), "patrol")?;
        if !self.groups.contains_key(&group_id) {
            return Err(ModelError::GroupNotFound(group_id));
        }
        let patrol = Patrol::new(name, group_id, section);
        let id = patrol.id;
        self.patrols.insert(id, patrol);
        Ok(id)
    }

    pub fn update_patrol(&mut self, mut patrol: Patrol) -> Result<()> {
        patrol.name = non_empty(patrol.name, "patrol")?;
        if !self.patrols.contains_key(&patrol.id) {
            return Err(ModelError::PatrolNotFound(patrol.id));
        }
        if !self.groups.contains_key(&patrol.group_id) {
            return Err(ModelError::GroupNotFound(patrol.group_id));
        }
        self.patrols.insert(patrol.id, patrol);
        Ok(())
    }

    pub fn remove_patrol(&mut self, id: Uuid) -> Option<Patrol> {
        let removed = self.patrols.remove(&id);
        if removed.is_some() {
            self.scores.retain(|(patrol_id, _), _| *patrol_id != id);
        }
        removed
    }

    pub fn patrol(&self, id: Uuid) -> Option<&Patrol> {
        self.patrols.get(&id)
    }

    pub fn patrols(&self) -> impl Iterator<Item = &Patrol> {
        self.patrols.values()
    }

    pub fn patrol_count(&self) -> usize {
        self.patrols.len()
    }

    pub fn patrols_in_group(&self, group_id: Uuid) -> Vec<&Patrol> {
        let mut patrols: Vec<&Patrol> = self
            .patrols
            .values()
            .filter(|p| p.group_id == group_id)
            .collect();
        patrols.sort_by_key(|p| p.name.to_lowercase());
        patrols
    }

    /// Patrols eligible to be scored at a station, sorted by name. A station
    /// without an allow-list accepts every section.
    pub fn patrols_for_station(&self, station_id: Uuid) -> Vec<&Patrol> {
        let Some(station) = self.stations.get(&station_id) else {
            return Vec::new();
        };
        let mut eligible: Vec<&Patrol> = self
            .patrols
            .values()
            .filter(|p| station.accepts(p.section))
            .collect();
        eligible.sort_by_key(|p| p.name.to_lowercase());
        eligible
    }

    // ===== Scores =====

    pub fn score_value(&self, patrol_id: Uuid, station_id: Uuid) -> Option<u32> {
        self.scores.get(&(patrol_id, station_id)).map(|s| s.score)
    }

    /// Record a score for a patrol at a station, overwriting any previous
    /// value for the pair. The value is clamped into the station's range;
    /// the applied value is returned.
    pub fn record_score(&mut self, patrol_id: Uuid, station_id: Uuid, value: u32) -> Result<u32> {
        let station = self
            .stations
            .get(&station_id)
            .ok_or(ModelError::StationNotFound(station_id))?;
        if !self.patrols.contains_key(&patrol_id) {
            return Err(ModelError::PatrolNotFound(patrol_id));
        }
        let applied = station.clamp_score(value);
        match self.scores.get_mut(&(patrol_id, station_id)) {
            Some(existing) => existing.set_value(applied),
            None => {
                self.scores
                    .insert((patrol_id, station_id), Score::new(patrol_id, station_id, applied));
            }
        }
        Ok(applied)
    }

    pub fn scores(&self) -> impl Iterator<Item = &Score> {
        self.scores.values()
    }

    /// (recorded, expected) for one station, counting only eligible patrols.
    pub fn station_progress(&self, station_id: Uuid) -> (usize, usize) {
        let eligible = self.patrols_for_station(station_id);
        let recorded = eligible
            .iter()
            .filter(|p| self.scores.contains_key(&(p.id, station_id)))
            .count();
        (recorded, eligible.len())
    }

    /// (recorded, expected) across the whole competition.
    pub fn scoring_progress(&self) -> (usize, usize) {
        let mut recorded = 0;
        let mut expected = 0;
        for station_id in self.stations.keys() {
            let (r, e) = self.station_progress(*station_id);
            recorded += r;
            expected += e;
        }
        (recorded, expected)
    }
}

fn non_empty(name: String, entity: &'static str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ModelError::EmptyName { entity });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competition_with_roster() -> (Competition, Uuid, Uuid, Uuid) {
        let mut comp = Competition::new("District Camp 2026");
        let group_id = comp.add_group("1st Ringwood").unwrap();
        let patrol_id = comp
            .add_patrol("Wombats", group_id, ScoutSection::Scouts)
            .unwrap();
        let station_id = comp.add_station(Station::new("Knots", "Six knots", 20)).unwrap();
        (comp, group_id, patrol_id, station_id)
    }

    #[test]
    fn rejects_blank_names_and_zero_max() {
        let mut comp = Competition::new("Camp");
        assert_eq!(
            comp.add_group("   "),
            Err(ModelError::EmptyName { entity: "group" })
        );
        assert_eq!(
            comp.add_station(Station::new("Knots", "", 0)),
            Err(ModelError::InvalidMaxScore)
        );
    }

    #[test]
    fn add_patrol_requires_existing_group() {
        let mut comp = Competition::new("Camp");
        let missing = Uuid::new_v4();
        assert_eq!(
            comp.add_patrol("Wombats", missing, ScoutSection::Cubs),
            Err(ModelError::GroupNotFound(missing))
        );
    }

    #[test]
    fn record_score_inserts_then_overwrites() {
        let (mut comp, _, patrol_id, station_id) = competition_with_roster();
        assert_eq!(comp.score_value(patrol_id, station_id), None);

        assert_eq!(comp.record_score(patrol_id, station_id, 12).unwrap(), 12);
        assert_eq!(comp.score_value(patrol_id, station_id), Some(12));

        assert_eq!(comp.record_score(patrol_id, station_id, 7).unwrap(), 7);
        assert_eq!(comp.score_value(patrol_id, station_id), Some(7));
        assert_eq!(comp.scores().count(), 1);
    }

    #[test]
    fn record_score_clamps_to_station_max() {
        let (mut comp, _, patrol_id, station_id) = competition_with_roster();
        assert_eq!(comp.record_score(patrol_id, station_id, 9999).unwrap(), 20);
        assert_eq!(comp.score_value(patrol_id, station_id), Some(20));
    }

    #[test]
    fn removing_a_station_drops_its_scores() {
        let (mut comp, _, patrol_id, station_id) = competition_with_roster();
        comp.record_score(patrol_id, station_id, 5).unwrap();
        assert!(comp.remove_station(station_id).is_some());
        assert_eq!(comp.scores().count(), 0);
        assert_eq!(comp.score_value(patrol_id, station_id), None);
    }

    #[test]
    fn removing_a_group_cascades_to_patrols_and_scores() {
        let (mut comp, group_id, patrol_id, station_id) = competition_with_roster();
        comp.record_score(patrol_id, station_id, 5).unwrap();

        assert!(comp.remove_group(group_id).is_some());
        assert_eq!(comp.patrol_count(), 0);
        assert_eq!(comp.scores().count(), 0);
    }

    #[test]
    fn eligibility_filters_patrols_for_station() {
        let (mut comp, group_id, _, _) = competition_with_roster();
        comp.add_patrol("Possums", group_id, ScoutSection::Joeys)
            .unwrap();

        let mut station = Station::new("Abseiling", "", 50);
        station.allowed_sections = Some(vec![ScoutSection::Scouts]);
        let station_id = comp.add_station(station).unwrap();

        let eligible = comp.patrols_for_station(station_id);
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].name, "Wombats");
    }

    #[test]
    fn progress_counts_eligible_pairs_only() {
        let (mut comp, group_id, patrol_id, knots_id) = competition_with_roster();
        comp.add_patrol("Possums", group_id, ScoutSection::Joeys)
            .unwrap();

        let mut abseil = Station::new("Abseiling", "", 50);
        abseil.allowed_sections = Some(vec![ScoutSection::Scouts]);
        let abseil_id = comp.add_station(abseil).unwrap();

        // Knots accepts everyone (2 patrols); abseiling only Scouts (1).
        assert_eq!(comp.scoring_progress(), (0, 3));

        comp.record_score(patrol_id, knots_id, 10).unwrap();
        assert_eq!(comp.station_progress(knots_id), (1, 2));
        assert_eq!(comp.station_progress(abseil_id), (0, 1));
        assert_eq!(comp.scoring_progress(), (1, 3));
    }

    #[test]
    fn update_station_leaves_existing_scores_alone() {
        let (mut comp, _, patrol_id, station_id) = competition_with_roster();
        comp.record_score(patrol_id, station_id, 18).unwrap();

        let mut lowered = comp.station(station_id).unwrap().clone();
        lowered.max_score = 10;
        comp.update_station(lowered).unwrap();

        // Stored value stays; new writes clamp to the new maximum.
        assert_eq!(comp.score_value(patrol_id, station_id), Some(18));
        assert_eq!(comp.record_score(patrol_id, station_id, 18).unwrap(), 10);
    }

    #[test]
    fn from_parts_round_trips() {
        let (mut comp, _, patrol_id, station_id) = competition_with_roster();
        comp.record_score(patrol_id, station_id, 11).unwrap();

        let rebuilt = Competition::from_parts(
            comp.id,
            comp.name.clone(),
            comp.date,
            comp.sections.clone(),
            comp.created_at,
            comp.groups().cloned().collect(),
            comp.patrols().cloned().collect(),
            comp.stations().cloned().collect(),
            comp.scores().cloned().collect(),
        );
        assert_eq!(rebuilt, comp);
    }
}
