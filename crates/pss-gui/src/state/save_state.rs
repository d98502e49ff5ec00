//! Ephemeral save status shown in the scoring sheet header.

/// Lifecycle of the most recent save, as shown to the user.
///
/// This is UI feedback only and is never persisted. Variants deliberately
/// carry no payload; details such as the failure reason live elsewhere in
/// the application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveState {
    /// Nothing in flight and nothing to report.
    #[default]
    Idle,
    /// A save is currently running.
    Saving,
    /// The most recent save completed successfully.
    Saved,
    /// The most recent save failed.
    Error,
}

/// What the save indicator should render for a given [`SaveState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    /// Spinner plus "Saving..." label.
    InProgress,
    /// Check mark plus "Saved" label.
    Success,
    /// Warning triangle plus "Save failed" label.
    Warning,
}

impl SaveState {
    /// Map the state to its visual affordance.
    ///
    /// `Idle` renders nothing. Any state this mapping does not recognize
    /// surfaces as a warning rather than disappearing silently.
    pub fn affordance(self) -> Option<Affordance> {
        match self {
            Self::Idle => None,
            Self::Saving => Some(Affordance::InProgress),
            Self::Saved => Some(Affordance::Success),
            _ => Some(Affordance::Warning),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_renders_nothing() {
        assert_eq!(SaveState::Idle.affordance(), None);
    }

    #[test]
    fn each_state_maps_to_its_affordance() {
        assert_eq!(SaveState::Saving.affordance(), Some(Affordance::InProgress));
        assert_eq!(SaveState::Saved.affordance(), Some(Affordance::Success));
        assert_eq!(SaveState::Error.affordance(), Some(Affordance::Warning));
    }
}
