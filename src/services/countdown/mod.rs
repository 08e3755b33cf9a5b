use chrono::{DateTime, Local};

use crate::models::countdown::CountdownSnapshot;

/// Computes the remaining time toward a fixed target instant.
///
/// `recompute` is a pure function of `(target, now)`: each call derives the
/// snapshot fresh from the instant the host passes in, so a missed tick never
/// accumulates drift and repeated calls with the same `now` yield the same
/// output.
#[derive(Debug, Clone, Copy)]
pub struct CountdownTimer {
    target: DateTime<Local>,
}

impl CountdownTimer {
    pub fn new(target: DateTime<Local>) -> Self {
        Self { target }
    }

    pub fn target(&self) -> DateTime<Local> {
        self.target
    }

    /// Recompute the remaining-time breakdown for instant `now`.
    pub fn recompute(&self, now: DateTime<Local>) -> CountdownSnapshot {
        let diff_ms = self.target.signed_duration_since(now).num_milliseconds();
        CountdownSnapshot::from_diff_millis(diff_ms)
    }
}
