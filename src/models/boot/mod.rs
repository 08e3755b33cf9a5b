use serde::{Deserialize, Serialize};

/// Highest value `progress` can reach.
pub const MAX_PROGRESS: u8 = 100;

/// Snapshot of the boot sequence handed to the display layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BootState {
    /// Percentage in 0..=100, never decreases between ticks.
    pub progress: u8,
    /// Current status line, drawn from the configured ordered list.
    pub message: String,
    /// Transitions false -> true exactly once and never reverts.
    pub complete: bool,
}

impl BootState {
    pub fn new(initial_message: impl Into<String>) -> Self {
        Self {
            progress: 0,
            message: initial_message.into(),
            complete: false,
        }
    }

    pub fn is_full(&self) -> bool {
        self.progress >= MAX_PROGRESS
    }
}

impl Default for BootState {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_at_zero() {
        let state = BootState::new("INITIALIZING_SYSTEM...");
        assert_eq!(state.progress, 0);
        assert_eq!(state.message, "INITIALIZING_SYSTEM...");
        assert!(!state.complete);
        assert!(!state.is_full());
    }

    #[test]
    fn state_serializes_round_trip() {
        let state = BootState {
            progress: 42,
            message: "LOADING_KERNELS...".to_string(),
            complete: false,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: BootState = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, state);
    }
}
