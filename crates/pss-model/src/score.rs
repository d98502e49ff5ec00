use crate::station::Station;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One patrol's result at one station. At most one score exists per
/// patrol/station pair; re-scoring overwrites the value and refreshes
/// `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub id: Uuid,
    pub patrol_id: Uuid,
    pub station_id: Uuid,
    pub score: u32,
    pub updated_at: DateTime<Utc>,
}

impl Score {
    pub fn new(patrol_id: Uuid, station_id: Uuid, score: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            patrol_id,
            station_id,
            score,
            updated_at: Utc::now(),
        }
    }

    /// Overwrite the value and stamp the write time.
    pub fn set_value(&mut self, score: u32) {
        self.score = score;
        self.updated_at = Utc::now();
    }

    /// A score is valid for a station when it targets that station and sits
    /// within the station's current range.
    pub fn is_valid_for(&self, station: &Station) -> bool {
        self.station_id == station.id && self.score <= station.max_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn set_value_refreshes_timestamp() {
        let mut score = Score::new(Uuid::new_v4(), Uuid::new_v4(), 5);
        let first = score.updated_at;
        thread::sleep(Duration::from_millis(10));
        score.set_value(9);
        assert_eq!(score.score, 9);
        assert!(score.updated_at > first);
    }

    #[test]
    fn validity_is_relative_to_current_max() {
        let mut station = Station::new("Knots", "", 20);
        let score = Score::new(Uuid::new_v4(), station.id, 15);
        assert!(score.is_valid_for(&station));

        // Lowering the maximum afterwards makes the stored score stale but
        // nothing rewrites it.
        station.max_score = 10;
        assert!(!score.is_valid_for(&station));

        let other = Station::new("First Aid", "", 100);
        assert!(!score.is_valid_for(&other));
    }
}
