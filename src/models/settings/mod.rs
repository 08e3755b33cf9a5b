use serde::{Deserialize, Serialize};

/// Raw splash configuration as it appears in the TOML config file.
///
/// Every field has a built-in default matching the deployed splash screen, so
/// a missing or partial config file still yields a working session. Resolution
/// and validation into typed values happens in [`crate::services::settings`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SplashSettings {
    /// Target instant for the countdown, in the deployment's local time.
    /// Accepts `"January 25, 2026 00:00:00"` or ISO-like forms.
    pub target_date: String,
    /// Status line shown before the first boot tick fires.
    pub initial_message: String,
    /// Ordered status lines the boot sequencer steps through.
    pub boot_messages: Vec<String>,
    /// Progress added per boot tick, in percent.
    pub boot_step: u8,
    /// Boot tick cadence in milliseconds.
    pub boot_tick_ms: u64,
    /// Pause after reaching 100% before the completion signal fires.
    pub settle_delay_ms: u64,
    /// Countdown recompute cadence in milliseconds.
    pub countdown_tick_ms: u64,
    /// Banner line printed above the boot bar.
    pub banner: String,
    /// Footer lines printed under the countdown once boot completes.
    pub footer_lines: Vec<String>,
}

impl Default for SplashSettings {
    fn default() -> Self {
        Self {
            target_date: default_target_date(),
            initial_message: default_initial_message(),
            boot_messages: default_boot_messages(),
            boot_step: default_boot_step(),
            boot_tick_ms: default_boot_tick_ms(),
            settle_delay_ms: default_settle_delay_ms(),
            countdown_tick_ms: default_countdown_tick_ms(),
            banner: default_banner(),
            footer_lines: default_footer_lines(),
        }
    }
}

pub(crate) fn default_target_date() -> String {
    "January 25, 2026 00:00:00".to_string()
}

pub(crate) fn default_initial_message() -> String {
    "INITIALIZING_SYSTEM...".to_string()
}

pub(crate) fn default_boot_messages() -> Vec<String> {
    [
        "LOADING_KERNELS...",
        "ESTABLISHING_SECURE_CONNECTION...",
        "DECRYPTING_NONYDEV_LOGIC...",
        "FETCHING_3D_ASSETS...",
        "CALIBRATING_PARTICLE_FIELD...",
        "SYNCING_COUNTDOWN_CLOCK...",
        "PREPARING_ENVIRONMENT_2026...",
        "READY_FOR_DEPLOYMENT...",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

pub(crate) const fn default_boot_step() -> u8 {
    1
}

pub(crate) const fn default_boot_tick_ms() -> u64 {
    200
}

pub(crate) const fn default_settle_delay_ms() -> u64 {
    800
}

pub(crate) const fn default_countdown_tick_ms() -> u64 {
    1000
}

pub(crate) fn default_banner() -> String {
    "NONYDEV_OS v1.0".to_string()
}

pub(crate) fn default_footer_lines() -> Vec<String> {
    vec![
        "> SYSTEM: NONYDEV_OS".to_string(),
        "> STATUS: INITIALIZING_CHALLENGE_2026...".to_string(),
    ]
}
