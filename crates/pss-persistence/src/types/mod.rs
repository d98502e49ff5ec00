//! Persistence types for competition serialization.
//!
//! These types mirror the domain model but are flattened for storage:
//! ids and timestamps become strings, maps become vectors. Restoring them
//! back into the model goes through `convert`.

mod competition;
mod roster;
mod scoring;

pub use competition::{CompetitionFile, CompetitionSnapshot};
pub use roster::{GroupSnapshot, PatrolSnapshot, SectionSnapshot};
pub use scoring::{ScoreSnapshot, StationSnapshot};

/// Current schema version.
///
/// Increment this when making breaking changes to the persistence format.
/// The loader will reject files with version > CURRENT_SCHEMA_VERSION.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Magic bytes at the start of .pss files.
///
/// Format: "PSS" + version byte (0x01 for v1)
pub const MAGIC_BYTES: [u8; 4] = [b'P', b'S', b'S', 0x01];
