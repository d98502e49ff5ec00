//! Error type for reading and writing competition files.
//!
//! [`PersistenceError`] keeps enough structure for the GUI to build a
//! readable dialog: [`user_message`](PersistenceError::user_message) is the
//! headline and [`suggestion`](PersistenceError::suggestion) an optional
//! next step for the scorekeeper. Neither exposes rkyv or I/O internals.

use std::path::PathBuf;
use thiserror::Error;

/// Anything that can go wrong while loading or saving a competition.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Plain filesystem failure while reading or writing.
    #[error("Could not {operation} {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes on disk do not carry the `.pss` header.
    #[error("Not a competition file: {path}")]
    InvalidFormat { path: PathBuf, reason: String },

    /// Written by a build newer than this one.
    #[error("Competition file schema {found} is newer than supported {max_supported}")]
    UnsupportedVersion {
        found: u32,
        max_supported: u32,
        path: PathBuf,
    },

    /// The in-memory competition could not be encoded.
    #[error("Could not encode competition data")]
    Serialization {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The stored payload could not be decoded back into a competition.
    #[error("Could not decode competition data")]
    Deserialization {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The temp file was written but could not replace the target.
    #[error("Could not move saved data into place at {target_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    /// One-sentence headline suitable for a dialog or toast.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => format!("{} failed for {}.", capitalize(operation), path.display()),
            Self::InvalidFormat { path, reason } => format!(
                "{} doesn't look like a competition file ({reason}).",
                path.display()
            ),
            Self::UnsupportedVersion {
                found,
                max_supported,
                ..
            } => format!(
                "This competition was saved by a newer Patrol Score Studio \
                 (schema {found}; this build reads up to {max_supported})."
            ),
            Self::Serialization { .. } => {
                "The competition could not be prepared for saving.".to_string()
            }
            Self::Deserialization { .. } => {
                "The competition data in this file is damaged or incomplete.".to_string()
            }
            Self::AtomicWriteFailed { target_path, .. } => format!(
                "The save could not be finished at {}.",
                target_path.display()
            ),
        }
    }

    /// Optional next step to pair with [`user_message`](Self::user_message).
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Io { operation, .. } if *operation == "read" => {
                Some("Check that the file still exists and is readable.")
            }
            Self::Io { .. } | Self::AtomicWriteFailed { .. } => {
                Some("Check free disk space and write permissions, or save somewhere else.")
            }
            Self::InvalidFormat { .. } => Some("Pick a .pss file saved by Patrol Score Studio."),
            Self::UnsupportedVersion { .. } => {
                Some("Update Patrol Score Studio, then open the file again.")
            }
            Self::Deserialization { .. } => Some("Open a backup copy if you have one."),
            Self::Serialization { .. } => None,
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_names_the_file() {
        let err = PersistenceError::Io {
            operation: "read",
            path: PathBuf::from("/camp/spring.pss"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.user_message(), "Read failed for /camp/spring.pss.");
        assert_eq!(
            err.suggestion(),
            Some("Check that the file still exists and is readable.")
        );
    }

    #[test]
    fn newer_schema_asks_for_an_update() {
        let err = PersistenceError::UnsupportedVersion {
            found: 9,
            max_supported: 1,
            path: PathBuf::from("future.pss"),
        };
        assert!(err.user_message().contains("schema 9"));
        assert_eq!(
            err.suggestion(),
            Some("Update Patrol Score Studio, then open the file again.")
        );
    }

    #[test]
    fn encode_failures_have_no_hint() {
        let err = PersistenceError::Serialization {
            source: "boom".into(),
        };
        assert!(err.suggestion().is_none());
    }
}
