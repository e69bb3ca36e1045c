//! Simulation and frame-loop configuration.
//!
//! Every field has a default matching the reference tuning, so a config file
//! only needs the values it overrides:
//!
//! ```json
//! { "sim": { "gravity": 30.0 }, "frame": { "frame_rate": 30.0, "max_frames": 600 } }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file was not valid JSON for [`Config`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The config parsed but holds a value the simulation cannot run with.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tuning constants used by the systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Downward acceleration, world units per second².
    pub gravity: f32,
    /// Horizontal speed while `right` or `left` is held.
    pub move_speed: f32,
    /// Vertical speed a grounded jump sets.
    pub jump_speed: f32,
    /// Vertical speed an activated jet boost sets.
    pub jet_boost_speed: f32,
    /// Energy an augmentation activation costs.
    pub augment_cost: i32,
    /// Attack reach along X (exclusive).
    pub attack_range_x: f32,
    /// Attack reach along Y (exclusive).
    pub attack_range_y: f32,
    /// Length of one energy-sharing window in milliseconds.
    pub share_window_ms: u64,
    /// Energy the favoured player holds in a window.
    pub share_high: i32,
    /// Energy the other player holds in a window.
    pub share_low: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: 20.0,
            move_speed: 5.0,
            jump_speed: 10.0,
            jet_boost_speed: 15.0,
            augment_cost: 20,
            attack_range_x: 30.0,
            attack_range_y: 10.0,
            share_window_ms: 2_000,
            share_high: 80,
            share_low: 20,
        }
    }
}

impl SimConfig {
    /// Override gravity.
    #[must_use]
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Override the energy-sharing window length.
    #[must_use]
    pub fn with_share_window_ms(mut self, window_ms: u64) -> Self {
        self.share_window_ms = window_ms;
        self
    }
}

/// Configuration for the frame loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Target frames per second.
    pub frame_rate: f64,
    /// Maximum number of frames to run (0 = unlimited).
    pub max_frames: u64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60.0,
            max_frames: 0,
        }
    }
}

impl FrameConfig {
    /// Wall-clock time one frame may take, or `None` if `frame_rate` is not
    /// a finite positive rate with a representable period.
    #[must_use]
    pub fn frame_budget(&self) -> Option<Duration> {
        if !self.frame_rate.is_finite() || self.frame_rate <= 0.0 {
            return None;
        }
        Duration::try_from_secs_f64(1.0 / self.frame_rate).ok()
    }
}

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sim: SimConfig,
    pub frame: FrameConfig,
}

impl Config {
    /// Parse a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a valid config and
    /// [`ConfigError::Invalid`] if it fails [`validate`](Self::validate).
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the frame rate is not finite and
    /// positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame.frame_budget().is_none() {
            return Err(ConfigError::Invalid(format!(
                "frame_rate must be finite and positive, got {}",
                self.frame.frame_rate
            )));
        }
        Ok(())
    }

    /// Read and parse a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_json`](Self::from_json).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
