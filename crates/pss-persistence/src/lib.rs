//! Persistent storage for Patrol Score Studio competitions.
//!
//! This crate saves and loads `.pss` competition files so a scoring day can
//! be closed and picked up again later.
//!
//! # Features
//!
//! - **Compact binary serialization** with rkyv
//! - **Atomic writes** to prevent data corruption
//! - **Auto-save** with debounce and a maximum-delay ceiling
//!
//! # File Format
//!
//! `.pss` files use a simple binary format:
//!
//! ```text
//! +------------------+
//! | Magic: "PSS\x01" | 4 bytes - file identification
//! +------------------+
//! | Version: 1       | 4 bytes - u32 little-endian schema version
//! +------------------+
//! | rkyv Payload     | Variable - the competition snapshot
//! +------------------+
//! ```
//!
//! # Example
//!
//! ```ignore
//! use pss_persistence::{CompetitionFile, FromSnapshot, ToSnapshot};
//! use pss_persistence::{load_competition, save_competition};
//! use pss_model::Competition;
//!
//! // Snapshot the in-memory competition and save it
//! let comp = Competition::new("District Camp");
//! let mut file = CompetitionFile::new(comp.to_snapshot());
//! save_competition(&mut file, Path::new("camp.pss"))?;
//!
//! // Load it back into the model
//! let loaded = load_competition(Path::new("camp.pss"))?;
//! let comp = Competition::from_snapshot(loaded.competition)?;
//! ```
//!
//! # Architecture
//!
//! The crate is organized into:
//!
//! - `types/` - rkyv-serializable snapshot types
//! - `io/` - save/load with atomic writes and header validation
//! - `autosave/` - `DirtyTracker` and debounce policy
//! - `convert.rs` - model <-> snapshot conversion traits
//! - `error.rs` - error types with user-friendly messages

mod autosave;
mod convert;
mod error;
mod io;
mod types;

// Re-export main types
pub use autosave::{AutoSaveConfig, DirtyTracker};
pub use convert::{FromSnapshot, ToSnapshot};
pub use error::{PersistenceError, Result};
pub use io::{
    load_competition, load_competition_async, save_competition, save_competition_async,
};
pub use types::{
    CURRENT_SCHEMA_VERSION, CompetitionFile, CompetitionSnapshot, GroupSnapshot, MAGIC_BYTES,
    PatrolSnapshot, ScoreSnapshot, SectionSnapshot, StationSnapshot,
};
