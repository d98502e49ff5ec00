//! Editable score entry state.
//!
//! A [`ScoreDraft`] backs one score text box in the scoring sheet. It keeps
//! the raw display string separate from the committed score so leaders can
//! type freely (including transient states like `""`, `"-"`, or `"120"`)
//! while the competition model only ever sees valid values.
//!
//! The rules, in order:
//!
//! - Every keystroke updates the display string, valid or not.
//! - A keystroke that parses to a value within `0..=max` propagates that
//!   value to the caller immediately; anything else is held in the display
//!   until commit.
//! - Commit (Enter, switching patrols or stations, navigating away) snaps
//!   the display to a canonical value: unparsable or negative text becomes
//!   `0`, values above the station maximum become the maximum, and in-range
//!   text is only re-formatted (`"007"` -> `"7"`) without re-propagating.
//! - When the stored score changes from outside (file load, another widget),
//!   the display resyncs to it. Changes the draft itself propagated are
//!   recognized and do NOT clobber what the leader is typing.

/// Draft state for a single score text box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreDraft {
    /// Raw display string, exactly as typed.
    text: String,
    /// Last value seen from the store, used to detect external changes.
    last_external: u32,
    /// Last value this draft propagated itself. An incoming store update
    /// matching it is our own echo and must not reset the display.
    last_emitted: Option<u32>,
}

impl ScoreDraft {
    /// Create a draft showing the given stored score.
    pub fn new(value: u32) -> Self {
        Self {
            text: value.to_string(),
            last_external: value,
            last_emitted: None,
        }
    }

    /// The current display string.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Record a keystroke.
    ///
    /// The display always takes the new text. Returns `Some(value)` when the
    /// text parses to a score within `0..=max`, which the caller must apply
    /// to the store synchronously; returns `None` otherwise (the invalid
    /// text stays visible until [`commit`](Self::commit)).
    pub fn input(&mut self, text: String, max: u32) -> Option<u32> {
        self.text = text;
        match parse_score(&self.text) {
            Some(n) if n >= 0 && n <= i128::from(max) => {
                let value = n as u32;
                self.last_emitted = Some(value);
                Some(value)
            }
            _ => None,
        }
    }

    /// Commit the draft, snapping the display to a canonical value.
    ///
    /// Returns `Some(value)` when the caller must apply a corrected value to
    /// the store (unparsable/negative text snaps to `0`, overflow snaps to
    /// the station maximum). Returns `None` for in-range text: the value was
    /// already propagated keystroke by keystroke, so only the display is
    /// normalized.
    pub fn commit(&mut self, max: u32) -> Option<u32> {
        match parse_score(&self.text) {
            None => {
                self.text = "0".to_string();
                self.last_emitted = Some(0);
                Some(0)
            }
            Some(n) if n < 0 => {
                self.text = "0".to_string();
                self.last_emitted = Some(0);
                Some(0)
            }
            Some(n) if n > i128::from(max) => {
                self.text = max.to_string();
                self.last_emitted = Some(max);
                Some(max)
            }
            Some(n) => {
                self.text = (n as u32).to_string();
                None
            }
        }
    }

    /// Notify the draft that the stored score is now `value`.
    ///
    /// If the value is unchanged, or the change is our own propagation
    /// echoing back, the display is left alone. A genuinely external change
    /// resets the display to the stored value.
    pub fn sync_external(&mut self, value: u32) {
        if value == self.last_external {
            return;
        }
        self.last_external = value;
        if self.last_emitted == Some(value) {
            self.last_emitted = None;
            return;
        }
        self.last_emitted = None;
        self.text = value.to_string();
    }

    /// Whether the display currently parses to a score within `0..=max`.
    /// Drives the invalid styling on the score box.
    pub fn in_range(&self, max: u32) -> bool {
        matches!(parse_score(&self.text), Some(n) if n >= 0 && n <= i128::from(max))
    }

    /// Proportion of the station maximum the current display represents,
    /// clamped to `0.0..=1.0`. Unparsable text and a zero maximum yield 0.
    pub fn fill_ratio(&self, max: u32) -> f32 {
        if max == 0 {
            return 0.0;
        }
        match parse_score(&self.text) {
            Some(n) if n > 0 => (n as f64 / f64::from(max)).clamp(0.0, 1.0) as f32,
            _ => 0.0,
        }
    }
}

impl Default for ScoreDraft {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Parse a score string as a signed integer.
///
/// Signed so that negative input is distinguishable from unparsable input,
/// and wide enough that any realistic digit string parses rather than
/// overflowing into the unparsable branch.
fn parse_score(text: &str) -> Option<i128> {
    text.trim().parse::<i128>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn in_range_keystroke_propagates_synchronously() {
        let mut draft = ScoreDraft::new(0);
        assert_eq!(draft.input("7".to_string(), 20), Some(7));
        assert_eq!(draft.text(), "7");
        assert_eq!(draft.input("15".to_string(), 20), Some(15));
    }

    #[test]
    fn out_of_range_keystroke_updates_display_without_propagating() {
        let mut draft = ScoreDraft::new(5);
        assert_eq!(draft.input("25".to_string(), 20), None);
        assert_eq!(draft.text(), "25");
        assert_eq!(draft.input("abc".to_string(), 20), None);
        assert_eq!(draft.text(), "abc");
        assert_eq!(draft.input("-5".to_string(), 20), None);
        assert_eq!(draft.text(), "-5");
        assert_eq!(draft.input(String::new(), 20), None);
        assert_eq!(draft.text(), "");
    }

    #[test]
    fn commit_snaps_unparsable_to_zero() {
        for bad in ["", "abc", "12abc", "1.5"] {
            let mut draft = ScoreDraft::new(5);
            draft.input(bad.to_string(), 20);
            assert_eq!(draft.commit(20), Some(0), "input {bad:?}");
            assert_eq!(draft.text(), "0");
        }
    }

    #[test]
    fn commit_snaps_negative_to_zero() {
        let mut draft = ScoreDraft::new(5);
        draft.input("-3".to_string(), 20);
        assert_eq!(draft.commit(20), Some(0));
        assert_eq!(draft.text(), "0");
    }

    #[test]
    fn commit_clamps_overflow_to_maximum() {
        let mut draft = ScoreDraft::new(5);
        draft.input("25".to_string(), 20);
        assert_eq!(draft.commit(20), Some(20));
        assert_eq!(draft.text(), "20");

        // Digit strings beyond u32 still land on the maximum.
        let mut draft = ScoreDraft::new(5);
        draft.input("999999999999".to_string(), 20);
        assert_eq!(draft.commit(20), Some(20));
        assert_eq!(draft.text(), "20");
    }

    #[test]
    fn commit_in_range_normalizes_without_repropagating() {
        let mut draft = ScoreDraft::new(5);
        assert_eq!(draft.input("007".to_string(), 20), Some(7));
        assert_eq!(draft.commit(20), None);
        assert_eq!(draft.text(), "7");

        // Committing an untouched draft is a no-op.
        let mut draft = ScoreDraft::new(12);
        assert_eq!(draft.commit(20), None);
        assert_eq!(draft.text(), "12");
    }

    #[test]
    fn external_change_resyncs_display() {
        let mut draft = ScoreDraft::new(5);
        draft.input("9".to_string(), 20);
        draft.sync_external(9);

        // Another widget wrote 12; the display must follow.
        draft.sync_external(12);
        assert_eq!(draft.text(), "12");
    }

    #[test]
    fn self_propagated_change_keeps_display() {
        let mut draft = ScoreDraft::new(5);
        assert_eq!(draft.input("007".to_string(), 20), Some(7));

        // The store echoes our own 7 back. "007" must survive.
        draft.sync_external(7);
        assert_eq!(draft.text(), "007");

        // A later external write still resyncs.
        draft.sync_external(3);
        assert_eq!(draft.text(), "3");
    }

    #[test]
    fn unchanged_store_value_never_resets_display() {
        let mut draft = ScoreDraft::new(5);
        draft.input("garbage".to_string(), 20);
        draft.sync_external(5);
        assert_eq!(draft.text(), "garbage");
    }

    #[test]
    fn fill_ratio_is_proportional_and_clamped() {
        let mut draft = ScoreDraft::new(5);
        assert!((draft.fill_ratio(20) - 0.25).abs() < f32::EPSILON);

        draft.input("30".to_string(), 20);
        assert!((draft.fill_ratio(20) - 1.0).abs() < f32::EPSILON);

        draft.input("abc".to_string(), 20);
        assert!(draft.fill_ratio(20).abs() < f32::EPSILON);

        let draft = ScoreDraft::new(0);
        assert!(draft.fill_ratio(0).abs() < f32::EPSILON);
    }

    proptest! {
        /// A draft seeded from a stored score displays its decimal string.
        #[test]
        fn seeded_draft_displays_the_stored_value(value in 0u32..=10_000) {
            let draft = ScoreDraft::new(value);
            prop_assert_eq!(draft.text(), value.to_string());
        }

        /// The display always mirrors the keystroke, and a value is
        /// propagated exactly when the text parses into range.
        #[test]
        fn keystrokes_never_panic(text in ".*", max in 0u32..=1000) {
            let mut draft = ScoreDraft::new(0);
            let emitted = draft.input(text.clone(), max);
            prop_assert_eq!(draft.text(), text.as_str());
            if let Some(value) = emitted {
                prop_assert!(value <= max);
            }
        }

        /// Commit always lands on a canonical in-range display.
        #[test]
        fn commit_always_canonicalizes(text in ".*", max in 0u32..=1000) {
            let mut draft = ScoreDraft::new(0);
            draft.input(text, max);
            draft.commit(max);
            let value: u32 = draft.text().parse().unwrap();
            prop_assert!(value <= max);
        }
    }
}
