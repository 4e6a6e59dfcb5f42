use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scroll::EasingType;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub controller: ControllerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub audio: AudioConfig,
}

/// Tuning for the section-scroll controller.
///
/// The canonical constants: the original had near-duplicate variants with
/// cool-downs of 500 ms in one place and 1000 ms in another; this config
/// standardizes on one set and documents it here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Accumulated wheel delta (px) required to trigger a section change.
    #[serde(default = "default_wheel_threshold")]
    pub wheel_threshold: f64,
    /// Touch swipe distance (px) required to trigger a section change.
    #[serde(default = "default_touch_threshold")]
    pub touch_threshold: f64,
    /// Minimum time between two accepted wheel/touch intents.
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
    /// Quiet period before a coalesced wheel intent is acted on.
    #[serde(default = "default_wheel_debounce_ms")]
    pub wheel_debounce_ms: u64,
    /// Duration of the interpolated scroll to a section boundary.
    #[serde(default = "default_navigation_duration_ms")]
    pub navigation_duration_ms: u64,
    /// Hard cap after which an in-flight navigation is forced to complete.
    #[serde(default = "default_navigation_timeout_ms")]
    pub navigation_timeout_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            wheel_threshold: default_wheel_threshold(),
            touch_threshold: default_touch_threshold(),
            cooldown_ms: default_cooldown_ms(),
            wheel_debounce_ms: default_wheel_debounce_ms(),
            navigation_duration_ms: default_navigation_duration_ms(),
            navigation_timeout_ms: default_navigation_timeout_ms(),
            easing: EasingType::default(),
        }
    }
}

impl ControllerConfig {
    #[inline]
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    #[inline]
    pub fn wheel_debounce(&self) -> Duration {
        Duration::from_millis(self.wheel_debounce_ms)
    }

    #[inline]
    pub fn navigation_duration(&self) -> Duration {
        Duration::from_millis(self.navigation_duration_ms)
    }

    #[inline]
    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_millis(self.navigation_timeout_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle event poll interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Frame rate while a navigation is animating.
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            animation_fps: default_animation_fps(),
        }
    }
}

impl UiConfig {
    #[inline]
    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    #[inline]
    pub fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Master switch for audio cues.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Start the ambient background track after the first interaction.
    #[serde(default = "default_true")]
    pub background_track: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            background_track: default_true(),
        }
    }
}

impl AppConfig {
    /// Load from the user config file, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit config file path. Unlike [`load`](Self::load),
    /// a missing file is an error here: the caller asked for that file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("could not determine config directory".into()))?;
        Ok(dir.join("scrollytale").join("config.toml"))
    }
}

fn default_wheel_threshold() -> f64 {
    10.0
}

fn default_touch_threshold() -> f64 {
    50.0
}

fn default_cooldown_ms() -> u64 {
    1000
}

fn default_wheel_debounce_ms() -> u64 {
    50
}

fn default_navigation_duration_ms() -> u64 {
    1000
}

fn default_navigation_timeout_ms() -> u64 {
    3000
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_animation_fps() -> u16 {
    60
}

fn default_true() -> bool {
    true
}
