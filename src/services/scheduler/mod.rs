use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Local};

use crate::models::boot::BootState;
use crate::models::countdown::CountdownSnapshot;
use crate::services::boot::BootSequencer;
use crate::services::countdown::CountdownTimer;
use crate::services::settings::SplashConfig;

/// What fired during one scheduler pass, plus a hint for how long the host
/// can sleep before anything is due again.
#[derive(Debug, Clone, Default)]
pub struct SchedulerTickResult {
    /// Present when the boot sequencer advanced this pass.
    pub boot: Option<BootState>,
    /// True on the single pass where the boot completion signal fired.
    pub boot_completed: bool,
    /// Present when the countdown recomputed this pass.
    pub countdown: Option<CountdownSnapshot>,
    pub next_due_in: Option<StdDuration>,
}

/// Explicit driving-loop state for the splash session.
///
/// Owns the boot sequencer and countdown timer together with their cadences
/// and per-component next-due instants. The host calls [`tick`] (or
/// [`tick_at`] with a synthetic instant in tests) as often as it likes; each
/// component only fires when its own cadence says it is due, so the scheduler
/// itself carries no timer dependency.
///
/// The countdown stays silent until the boot sequence has completed, matching
/// the splash-then-countdown view switch, and reschedules from the observed
/// `now` so missed passes are never backfilled.
///
/// [`tick`]: SplashScheduler::tick
/// [`tick_at`]: SplashScheduler::tick_at
pub struct SplashScheduler {
    boot: BootSequencer,
    countdown: CountdownTimer,
    boot_tick: Duration,
    countdown_tick: Duration,
    boot_next_at: Option<DateTime<Local>>,
    countdown_next_at: Option<DateTime<Local>>,
}

impl SplashScheduler {
    pub fn from_config(config: &SplashConfig) -> Self {
        Self {
            boot: BootSequencer::new(
                config.initial_message.clone(),
                config.boot_messages.clone(),
                config.boot_step,
                config.settle_delay,
            ),
            countdown: CountdownTimer::new(config.target),
            boot_tick: config.boot_tick,
            countdown_tick: config.countdown_tick,
            // None means due on the next pass.
            boot_next_at: None,
            countdown_next_at: None,
        }
    }

    pub fn boot_state(&self) -> &BootState {
        self.boot.state()
    }

    pub fn countdown_target(&self) -> DateTime<Local> {
        self.countdown.target()
    }

    pub fn tick(&mut self) -> SchedulerTickResult {
        self.tick_at(Local::now())
    }

    pub fn tick_at(&mut self, now: DateTime<Local>) -> SchedulerTickResult {
        let mut result = SchedulerTickResult::default();

        if !self.boot.is_complete() && is_due(self.boot_next_at, now) {
            let tick = self.boot.tick_at(now);
            result.boot_completed = tick.just_completed;
            result.boot = Some(tick.state);

            if self.boot.is_complete() {
                self.boot_next_at = None;
                // First countdown recomputation happens on this same pass.
                self.countdown_next_at = Some(now);
            } else {
                self.boot_next_at = Some(now + self.boot_tick);
            }
        }

        if self.boot.is_complete() && is_due(self.countdown_next_at, now) {
            result.countdown = Some(self.countdown.recompute(now));
            self.countdown_next_at = Some(now + self.countdown_tick);
        }

        result.next_due_in = self.next_due_in(now);
        result
    }

    fn next_due_in(&self, now: DateTime<Local>) -> Option<StdDuration> {
        let pending = if self.boot.is_complete() {
            self.countdown_next_at
        } else {
            self.boot_next_at
        };

        pending.map(|next_at| {
            let delta = next_at - now;
            if delta <= Duration::zero() {
                StdDuration::from_secs(0)
            } else {
                delta.to_std().unwrap_or_else(|_| StdDuration::from_secs(0))
            }
        })
    }
}

fn is_due(next_at: Option<DateTime<Local>>, now: DateTime<Local>) -> bool {
    next_at.is_none_or(|next_at| now >= next_at)
}
