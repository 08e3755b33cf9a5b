use std::fmt;

use serde::{Deserialize, Serialize};

pub const MILLIS_PER_DAY: i64 = 86_400_000;
pub const MILLIS_PER_HOUR: i64 = 3_600_000;
pub const MILLIS_PER_MINUTE: i64 = 60_000;
pub const MILLIS_PER_SECOND: i64 = 1_000;

/// Remaining time toward the target instant, decomposed from a millisecond
/// difference with truncating integer division at each step.
///
/// Past expiry the diff goes negative and the truncating chain produces
/// negative components; that output is cosmetic and callers should switch on
/// [`CountdownSnapshot::expired`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RemainingTime {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl RemainingTime {
    /// Decompose a millisecond difference. Each unit is derived from the raw
    /// diff via remainder-then-divide, not by subtracting higher units out.
    pub fn from_millis(diff_ms: i64) -> Self {
        Self {
            days: diff_ms / MILLIS_PER_DAY,
            hours: (diff_ms % MILLIS_PER_DAY) / MILLIS_PER_HOUR,
            minutes: (diff_ms % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE,
            seconds: (diff_ms % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND,
        }
    }
}

/// Renders the fixed display token consumed by the display layer:
/// `"{days}d:{hours}h:{minutes}m:{seconds}s"`, no internal spaces.
impl fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d:{}h:{}m:{}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// One per-second countdown recomputation handed to the display layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownSnapshot {
    pub remaining: RemainingTime,
    /// Pre-rendered `"{d}d:{h}h:{m}m:{s}s"` token.
    pub text: String,
    /// True once the current instant has reached the target.
    pub expired: bool,
}

impl CountdownSnapshot {
    pub fn from_diff_millis(diff_ms: i64) -> Self {
        let remaining = RemainingTime::from_millis(diff_ms);
        Self {
            text: remaining.to_string(),
            expired: diff_ms <= 0,
            remaining,
        }
    }
}
