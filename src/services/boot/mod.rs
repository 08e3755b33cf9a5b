use chrono::{DateTime, Duration, Local};

use crate::models::boot::{BootState, MAX_PROGRESS};

/// Outcome of a single boot tick.
#[derive(Debug, Clone)]
pub struct BootTickResult {
    pub state: BootState,
    /// True on exactly one tick: the first one observed after `progress` has
    /// held 100 for the full settle delay.
    pub just_completed: bool,
}

/// Advances the cosmetic boot progress bar one step per tick.
///
/// The sequencer has no timer of its own; the host drives it by calling
/// [`BootSequencer::tick_at`] on whatever cadence it controls and passing the
/// current instant in, which keeps the whole thing testable with synthetic
/// time.
pub struct BootSequencer {
    state: BootState,
    messages: Vec<String>,
    step: u8,
    settle_delay: Duration,
    full_since: Option<DateTime<Local>>,
}

impl BootSequencer {
    pub fn new(
        initial_message: impl Into<String>,
        messages: Vec<String>,
        step: u8,
        settle_delay: Duration,
    ) -> Self {
        Self {
            state: BootState::new(initial_message),
            messages,
            step,
            settle_delay,
            full_since: None,
        }
    }

    pub fn state(&self) -> &BootState {
        &self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state.complete
    }

    /// Advance the sequence by one tick at instant `now`.
    ///
    /// Progress moves up by the configured step until it clamps at 100; the
    /// status message is re-bucketed from the new progress. Once 100 has been
    /// held for the settle delay, `just_completed` is reported on that call
    /// only and every later tick is a no-op.
    pub fn tick_at(&mut self, now: DateTime<Local>) -> BootTickResult {
        if self.state.complete {
            return BootTickResult {
                state: self.state.clone(),
                just_completed: false,
            };
        }

        if self.state.progress < MAX_PROGRESS {
            self.state.progress = self
                .state
                .progress
                .saturating_add(self.step)
                .min(MAX_PROGRESS);
            if let Some(message) = self.message_for(self.state.progress) {
                self.state.message = message;
            }
            if self.state.is_full() {
                self.full_since = Some(now);
            }
            return BootTickResult {
                state: self.state.clone(),
                just_completed: false,
            };
        }

        // Progress is pinned at 100; wait out the settle delay so the final
        // status line stays readable before the view switches.
        let full_since = *self.full_since.get_or_insert(now);
        let just_completed = now.signed_duration_since(full_since) >= self.settle_delay;
        if just_completed {
            self.state.complete = true;
            log::info!("boot sequence complete after settle delay");
        }

        BootTickResult {
            state: self.state.clone(),
            just_completed,
        }
    }

    fn message_for(&self, progress: u8) -> Option<String> {
        if self.messages.is_empty() {
            return None;
        }
        let index = message_index(progress, self.messages.len());
        self.messages.get(index).cloned()
    }
}

/// Floor-based message bucketing: `floor(progress/100 * count)`, clamped to
/// the last valid index so 100% still maps to the final message.
pub fn message_index(progress: u8, message_count: usize) -> usize {
    debug_assert!(message_count > 0);
    let index = (progress as usize * message_count) / 100;
    index.min(message_count.saturating_sub(1))
}
