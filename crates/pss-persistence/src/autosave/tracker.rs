//! Dirty state tracking for the open competition.

use std::time::Instant;

/// Tracks unsaved changes to the open competition.
///
/// Backs both the debounced auto-save decision and the unsaved-changes
/// marker in the window title. Saves run in the background, so the tracker
/// also remembers edits that arrive while a save is in flight: those were
/// not in the snapshot being written and must stay unsaved when the save
/// completes.
#[derive(Debug, Clone, Default)]
pub struct DirtyTracker {
    /// Most recent edit, saved or not. Drives the debounce clock.
    last_change: Option<Instant>,

    /// First edit not yet covered by a successful save. Presence of a value
    /// is what "dirty" means; it also drives the max-delay clock.
    first_unsaved_change: Option<Instant>,

    /// First edit that arrived after the in-flight save snapshotted.
    changed_during_save: Option<Instant>,

    /// Whether a save is currently in flight.
    saving: bool,
}

impl DirtyTracker {
    /// A tracker with no unsaved changes.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dirty(&self) -> bool {
        self.first_unsaved_change.is_some()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Record an edit.
    pub fn mark_dirty(&mut self) {
        let now = Instant::now();
        self.last_change = Some(now);
        self.first_unsaved_change.get_or_insert(now);
        if self.saving {
            self.changed_during_save.get_or_insert(now);
        }
    }

    /// A save has started; the snapshot covers everything up to now.
    pub fn start_save(&mut self) {
        self.saving = true;
        self.changed_during_save = None;
    }

    /// The in-flight save finished successfully.
    ///
    /// Edits that raced the save become the new unsaved baseline; without
    /// them the tracker is clean.
    pub fn save_complete(&mut self) {
        self.saving = false;
        self.first_unsaved_change = self.changed_during_save.take();
    }

    /// The in-flight save failed; everything is still unsaved.
    pub fn save_failed(&mut self) {
        self.saving = false;
        self.changed_during_save = None;
    }

    /// Milliseconds since the most recent change.
    pub fn ms_since_last_change(&self) -> Option<u64> {
        self.last_change.map(|t| t.elapsed().as_millis() as u64)
    }

    /// Milliseconds since the first unsaved change.
    pub fn ms_since_first_unsaved(&self) -> Option<u64> {
        self.first_unsaved_change
            .map(|t| t.elapsed().as_millis() as u64)
    }

    /// Whether an auto-save is due under `config`.
    pub fn should_auto_save(&self, config: &super::AutoSaveConfig) -> bool {
        if !config.enabled || self.saving || !self.is_dirty() {
            return false;
        }
        match (self.ms_since_last_change(), self.ms_since_first_unsaved()) {
            (Some(since_last), Some(since_first)) => config.should_save(since_last, since_first),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autosave::AutoSaveConfig;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn new_tracker_is_clean() {
        let tracker = DirtyTracker::new();
        assert!(!tracker.is_dirty());
        assert!(!tracker.is_saving());
    }

    #[test]
    fn marking_dirty_starts_both_clocks() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_dirty();
        assert!(tracker.is_dirty());
        assert!(tracker.ms_since_last_change().is_some());
        assert!(tracker.ms_since_first_unsaved().is_some());
    }

    #[test]
    fn successful_save_clears_dirty_state() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_dirty();
        tracker.start_save();
        assert!(tracker.is_saving());

        tracker.save_complete();
        assert!(!tracker.is_dirty());
        assert!(!tracker.is_saving());
    }

    #[test]
    fn failed_save_keeps_changes_dirty() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_dirty();
        tracker.start_save();
        tracker.save_failed();

        assert!(tracker.is_dirty());
        assert!(!tracker.is_saving());
    }

    #[test]
    fn edits_that_race_a_save_stay_unsaved() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_dirty();
        tracker.start_save();
        // The scorekeeper keeps typing while the save runs.
        tracker.mark_dirty();
        tracker.save_complete();

        assert!(tracker.is_dirty());
        assert!(tracker.ms_since_first_unsaved().is_some());
    }

    #[test]
    fn auto_save_waits_for_debounce_and_skips_while_saving() {
        let mut tracker = DirtyTracker::new();
        let config = AutoSaveConfig {
            debounce_ms: 50, // short debounce for the test
            ..Default::default()
        };

        assert!(!tracker.should_auto_save(&config));

        tracker.mark_dirty();
        assert!(!tracker.should_auto_save(&config));

        thread::sleep(Duration::from_millis(60));
        assert!(tracker.should_auto_save(&config));

        tracker.start_save();
        assert!(!tracker.should_auto_save(&config));
    }
}
