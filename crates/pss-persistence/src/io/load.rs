//! Competition loading operations.

use std::fs;
use std::path::Path;

use crate::error::{PersistenceError, Result};
use crate::types::{CURRENT_SCHEMA_VERSION, CompetitionFile, MAGIC_BYTES};

/// Load a competition from a .pss file.
pub fn load_competition(path: &Path) -> Result<CompetitionFile> {
    let bytes = fs::read(path).map_err(|e| PersistenceError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_competition_bytes(&bytes, path)
}

/// Load a competition asynchronously.
///
/// Spawns the load on a blocking thread pool so the UI runtime never waits
/// on disk.
pub async fn load_competition_async(path: std::path::PathBuf) -> Result<CompetitionFile> {
    tokio::task::spawn_blocking(move || load_competition(&path))
        .await
        .map_err(|e| PersistenceError::Deserialization {
            source: Box::new(e),
        })?
}

/// Validate the header and decode the payload.
fn parse_competition_bytes(bytes: &[u8], path: &Path) -> Result<CompetitionFile> {
    // Minimum size: magic (4) + version (4) + some payload
    if bytes.len() < 12 {
        return Err(PersistenceError::InvalidFormat {
            path: path.to_path_buf(),
            reason: "File too small".to_string(),
        });
    }

    if bytes[0..4] != MAGIC_BYTES {
        return Err(PersistenceError::InvalidFormat {
            path: path.to_path_buf(),
            reason: "Not a PSS competition file (invalid magic bytes)".to_string(),
        });
    }

    let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    if version > CURRENT_SCHEMA_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: version,
            max_supported: CURRENT_SCHEMA_VERSION,
            path: path.to_path_buf(),
        });
    }

    let payload = &bytes[8..];
    let file: CompetitionFile = rkyv::from_bytes::<CompetitionFile, rkyv::rancor::Error>(payload)
        .map_err(|e| PersistenceError::Deserialization {
            source: Box::new(std::io::Error::other(format!(
                "rkyv deserialization failed: {e}"
            ))),
        })?;

    tracing::info!("Loaded competition from {}", path.display());
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{FromSnapshot, ToSnapshot};
    use crate::io::save::save_competition;
    use pss_model::{Competition, ScoutSection, Station};
    use tempfile::tempdir;

    #[test]
    fn round_trip_preserves_scores() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("camp.pss");

        let mut comp = Competition::new("Spring Rally");
        let group_id = comp.add_group("5th Brunswick").unwrap();
        let patrol_id = comp
            .add_patrol("Goannas", group_id, ScoutSection::Scouts)
            .unwrap();
        let station_id = comp
            .add_station(Station::new("Compass Course", "Five bearings", 40))
            .unwrap();
        comp.record_score(patrol_id, station_id, 33).unwrap();

        let mut file = CompetitionFile::new(comp.to_snapshot());
        save_competition(&mut file, &path).unwrap();

        let loaded = load_competition(&path).unwrap();
        let restored = Competition::from_snapshot(loaded.competition).unwrap();
        assert_eq!(restored, comp);
        assert_eq!(restored.score_value(patrol_id, station_id), Some(33));
    }

    #[test]
    fn rejects_invalid_magic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid.pss");

        fs::write(&path, b"NOT_A_PSS_FILE_DATA").unwrap();

        let result = load_competition(&path);
        assert!(matches!(
            result,
            Err(PersistenceError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn rejects_future_schema_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("future.pss");

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&MAGIC_BYTES);
        bytes.extend_from_slice(&999u32.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 100]);
        fs::write(&path, bytes).unwrap();

        let result = load_competition(&path);
        assert!(matches!(
            result,
            Err(PersistenceError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn rejects_truncated_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.pss");

        fs::write(&path, b"PSS").unwrap();

        let result = load_competition(&path);
        assert!(matches!(
            result,
            Err(PersistenceError::InvalidFormat { .. })
        ));
    }
}
