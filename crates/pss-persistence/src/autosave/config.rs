//! Auto-save configuration.

use serde::{Deserialize, Serialize};

/// User-facing auto-save settings.
///
/// Scoring days produce bursts of edits as a patrol's results come in, so
/// the policy is debounce-with-a-ceiling: wait for a pause in the edits,
/// but never sit on unsaved changes longer than `max_delay_ms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoSaveConfig {
    /// Whether auto-save is enabled.
    pub enabled: bool,

    /// How long to wait after the latest change before saving, in
    /// milliseconds. Each new change resets the wait.
    pub debounce_ms: u64,

    /// Upper bound on how long changes may stay unsaved, in milliseconds.
    /// A steady stream of edits cannot postpone the save past this.
    pub max_delay_ms: u64,
}

impl Default for AutoSaveConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            debounce_ms: 2000,    // 2 seconds
            max_delay_ms: 30_000, // 30 seconds max
        }
    }
}

impl AutoSaveConfig {
    /// An auto-save config with saving switched off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Decide whether a save is due, given how long ago the latest change
    /// and the first unsaved change happened.
    pub fn should_save(&self, since_last_change_ms: u64, since_first_unsaved_ms: u64) -> bool {
        if !self.enabled {
            return false;
        }
        if since_last_change_ms >= self.debounce_ms {
            return true;
        }
        since_first_unsaved_ms >= self.max_delay_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_enabled_with_two_second_debounce() {
        let config = AutoSaveConfig::default();
        assert!(config.enabled);
        assert_eq!(config.debounce_ms, 2000);
    }

    #[test]
    fn disabled_config_never_saves() {
        let config = AutoSaveConfig::disabled();
        assert!(!config.should_save(10_000, 60_000));
    }

    #[test]
    fn saves_once_debounce_has_passed() {
        let config = AutoSaveConfig::default();
        assert!(!config.should_save(1000, 1000));
        assert!(config.should_save(2500, 2500));
    }

    #[test]
    fn rapid_edits_cannot_postpone_past_max_delay() {
        let config = AutoSaveConfig::default();
        // Still typing, but within the ceiling.
        assert!(!config.should_save(500, 25_000));
        // Still typing, ceiling exceeded.
        assert!(config.should_save(500, 35_000));
    }
}
