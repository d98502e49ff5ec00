//! Auto-save support for the open competition.
//!
//! Provides:
//! - `DirtyTracker` - tracks unsaved changes and in-flight saves
//! - `AutoSaveConfig` - debounce/ceiling policy settings

mod config;
mod tracker;

pub use config::AutoSaveConfig;
pub use tracker::DirtyTracker;
