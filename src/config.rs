//! Configuration management for netstream
//!
//! Handles config file loading. Config is stored at
//! ~/.config/netstream/config.toml unless `--config` points elsewhere.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::browse::RowGeometry;
use crate::models::ScreenMode;

/// Errors from reading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Upper bound for every seconds value; a day keeps `Instant` arithmetic
/// and `Duration` conversion in range.
pub const MAX_SECS: f64 = 86_400.0;

/// Negative or non-finite values fall back; huge ones clamp to `MAX_SECS`
fn bounded_secs(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value.min(MAX_SECS)
    } else {
        fallback
    }
}

/// Playback session behaviour
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Inactivity window before the transport overlay hides
    pub controls_hide_secs: f64,
    /// How long a session may sit in Loading before it fails
    pub load_timeout_secs: f64,
    /// Jump size for the rewind/forward controls
    pub seek_step_secs: f64,
    pub volume_step: f32,
    pub initial_volume: f32,
    pub initial_screen_mode: ScreenMode,
    /// Length reported by the simulated provider when an item has no runtime
    pub sample_duration_secs: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            controls_hide_secs: 5.0,
            load_timeout_secs: 15.0,
            seek_step_secs: 10.0,
            volume_step: 0.1,
            initial_volume: 1.0,
            initial_screen_mode: ScreenMode::Fit,
            sample_duration_secs: 600.0,
        }
    }
}

impl PlayerConfig {
    pub fn controls_hide(&self) -> Duration {
        Duration::from_secs_f64(self.controls_hide_secs)
    }

    pub fn load_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.load_timeout_secs)
    }

    fn sanitize(&mut self) {
        let defaults = Self::default();
        self.controls_hide_secs = bounded_secs(self.controls_hide_secs, defaults.controls_hide_secs);
        self.load_timeout_secs = bounded_secs(self.load_timeout_secs, defaults.load_timeout_secs);
        self.seek_step_secs = bounded_secs(self.seek_step_secs, defaults.seek_step_secs);
        self.sample_duration_secs =
            bounded_secs(self.sample_duration_secs, defaults.sample_duration_secs);

        if !self.volume_step.is_finite() {
            self.volume_step = defaults.volume_step;
        }
        self.volume_step = self.volume_step.clamp(0.0, 1.0);
        if !self.initial_volume.is_finite() {
            self.initial_volume = defaults.initial_volume;
        }
        self.initial_volume = self.initial_volume.clamp(0.0, 1.0);
    }
}

/// Terminal front end behaviour
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event loop poll interval
    pub tick_ms: u64,
    /// How long a toast stays on the status line
    pub toast_secs: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            toast_secs: 2.0,
        }
    }
}

impl UiConfig {
    const MIN_TICK_MS: u64 = 10;

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_secs_f64(self.toast_secs)
    }

    fn sanitize(&mut self) {
        self.tick_ms = self.tick_ms.max(Self::MIN_TICK_MS);
        self.toast_secs = bounded_secs(self.toast_secs, Self::default().toast_secs);
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub row: RowGeometry,
    pub ui: UiConfig,
}

impl Config {
    /// Get config file path (~/.config/netstream/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("netstream").join("config.toml"))
    }

    /// Load config from the default location, or return defaults if it is
    /// missing or unreadable
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|err| {
            warn!(error = %err, "using default config");
            Self::default()
        })
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse and sanitise TOML text
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(text)?;
        config.sanitize();
        Ok(config)
    }

    fn sanitize(&mut self) {
        self.player.sanitize();
        self.ui.sanitize();

        let defaults = RowGeometry::default();
        if !self.row.item_width.is_finite() || self.row.item_width < 0.0 {
            self.row.item_width = defaults.item_width;
        }
        if !self.row.spacing.is_finite() || self.row.spacing < 0.0 {
            self.row.spacing = defaults.spacing;
        }
    }
}
