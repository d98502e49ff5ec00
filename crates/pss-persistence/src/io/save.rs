//! Competition saving operations.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{PersistenceError, Result};
use crate::types::{CURRENT_SCHEMA_VERSION, CompetitionFile, MAGIC_BYTES};

/// Save a competition to a .pss file.
///
/// Uses atomic write (temp file + rename) so a crash mid-save never leaves
/// a truncated file where a good one used to be.
pub fn save_competition(file: &mut CompetitionFile, path: &Path) -> Result<()> {
    file.touch();

    let bytes = serialize_competition(file)?;

    // Write to a temp file first, then rename for atomicity
    let temp_path = path.with_extension("pss.tmp");

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut out = File::create(&temp_path).map_err(|e| PersistenceError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    out.write_all(&bytes).map_err(|e| PersistenceError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    out.sync_all().map_err(|e| PersistenceError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| PersistenceError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!("Saved competition to {}", path.display());
    Ok(())
}

/// Save a competition asynchronously.
///
/// Spawns the save on a blocking thread pool so the UI runtime never waits
/// on disk.
pub async fn save_competition_async(file: CompetitionFile, path: std::path::PathBuf) -> Result<()> {
    tokio::task::spawn_blocking(move || {
        let mut file = file;
        save_competition(&mut file, &path)
    })
    .await
    .map_err(|e| PersistenceError::Serialization {
        source: Box::new(e),
    })?
}

/// Serialize a competition file to bytes.
///
/// Format:
/// - 4 bytes: Magic ("PSS\x01")
/// - 4 bytes: Schema version (u32 little-endian)
/// - N bytes: rkyv payload
fn serialize_competition(file: &CompetitionFile) -> Result<Vec<u8>> {
    let payload = rkyv::to_bytes::<rkyv::rancor::Error>(file).map_err(|e| {
        PersistenceError::Serialization {
            source: Box::new(std::io::Error::other(format!(
                "rkyv serialization failed: {e}"
            ))),
        }
    })?;

    let mut output = Vec::with_capacity(8 + payload.len());
    output.extend_from_slice(&MAGIC_BYTES);
    output.extend_from_slice(&CURRENT_SCHEMA_VERSION.to_le_bytes());
    output.extend_from_slice(&payload);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::ToSnapshot;
    use pss_model::Competition;
    use tempfile::tempdir;

    #[test]
    fn save_writes_magic_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("camp.pss");

        let comp = Competition::new("District Camp");
        let mut file = CompetitionFile::new(comp.to_snapshot());

        save_competition(&mut file, &path).unwrap();

        assert!(path.exists());
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[0..4], &MAGIC_BYTES);
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("camp.pss");

        let comp = Competition::new("District Camp");
        let mut file = CompetitionFile::new(comp.to_snapshot());
        save_competition(&mut file, &path).unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn save_touches_last_saved_timestamp() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("camp.pss");

        let comp = Competition::new("District Camp");
        let mut file = CompetitionFile::new(comp.to_snapshot());
        let before = file.last_saved_at.clone();

        std::thread::sleep(std::time::Duration::from_millis(10));
        save_competition(&mut file, &path).unwrap();
        assert_ne!(file.last_saved_at, before);
    }
}
