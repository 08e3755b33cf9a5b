use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Local};
use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::SplashSettings;
use crate::utils::date::parse_target_instant;

/// Configuration problems that must stop the session at startup rather than
/// surface mid-display.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid target_date {value:?}: {reason}")]
    InvalidTargetDate { value: String, reason: String },
    #[error("boot_messages must contain at least one status line")]
    EmptyBootMessages,
    #[error("boot_step must be at least 1")]
    ZeroBootStep,
    #[error("{field} must be at least 1 millisecond")]
    ZeroCadence { field: &'static str },
}

/// Validated runtime configuration resolved from [`SplashSettings`].
#[derive(Debug, Clone)]
pub struct SplashConfig {
    pub target: DateTime<Local>,
    pub initial_message: String,
    pub boot_messages: Vec<String>,
    pub boot_step: u8,
    pub boot_tick: Duration,
    pub settle_delay: Duration,
    pub countdown_tick: Duration,
    pub banner: String,
    pub footer_lines: Vec<String>,
}

impl SplashConfig {
    /// Validate raw settings and resolve them into typed values.
    pub fn resolve(settings: &SplashSettings) -> Result<Self, SettingsError> {
        let target = parse_target_instant(&settings.target_date).map_err(|err| {
            SettingsError::InvalidTargetDate {
                value: settings.target_date.clone(),
                reason: err.to_string(),
            }
        })?;

        if settings.boot_messages.is_empty() {
            return Err(SettingsError::EmptyBootMessages);
        }
        if settings.boot_step == 0 {
            return Err(SettingsError::ZeroBootStep);
        }
        if settings.boot_tick_ms == 0 {
            return Err(SettingsError::ZeroCadence {
                field: "boot_tick_ms",
            });
        }
        if settings.countdown_tick_ms == 0 {
            return Err(SettingsError::ZeroCadence {
                field: "countdown_tick_ms",
            });
        }

        Ok(Self {
            target,
            initial_message: settings.initial_message.clone(),
            boot_messages: settings.boot_messages.clone(),
            boot_step: settings.boot_step,
            boot_tick: Duration::milliseconds(settings.boot_tick_ms as i64),
            settle_delay: Duration::milliseconds(settings.settle_delay_ms as i64),
            countdown_tick: Duration::milliseconds(settings.countdown_tick_ms as i64),
            banner: settings.banner.clone(),
            footer_lines: settings.footer_lines.clone(),
        })
    }
}

/// Load raw settings from a TOML file. A missing file yields the built-in
/// defaults, matching how the countdown snapshot loader treats absent state.
pub fn load_settings(path: &Path) -> Result<SplashSettings> {
    if !path.exists() {
        log::info!("no config at {}, using defaults", path.display());
        return Ok(SplashSettings::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config from {}", path.display()))?;
    let settings = toml::from_str(&data)
        .with_context(|| format!("failed to parse config from {}", path.display()))?;
    Ok(settings)
}

/// Default config file location under the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "nonydev", "rust-splash")
        .map(|dirs| dirs.config_dir().join("splash.toml"))
}

/// Load and validate the session configuration.
///
/// `path` overrides the default location; when neither exists the built-in
/// defaults apply. Validation failures abort startup with a descriptive
/// error.
pub fn load_config(path: Option<&Path>) -> Result<SplashConfig> {
    let settings = match path {
        Some(path) => load_settings(path)?,
        None => match default_config_path() {
            Some(path) => load_settings(&path)?,
            None => SplashSettings::default(),
        },
    };

    let config = SplashConfig::resolve(&settings)?;
    Ok(config)
}
