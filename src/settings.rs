//! Driver settings
//!
//! Read from a JSON file. Field geometry is fixed and not configurable.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::FRAMES_PER_SECOND;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Driver settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; a clock-derived seed is used when absent
    pub seed: Option<u64>,
    /// Frames to simulate in a headless run
    pub frames: u32,
    /// Sound effects volume (0 - 255)
    pub sfx_volume: u8,
    pub muted: bool,
    /// Let the driver steer the player paddle
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            frames: 60 * FRAMES_PER_SECOND,
            sfx_volume: 255,
            muted: false,
            autopilot: true,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "ds-pong.json";

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults if the file is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{} ({}), using default settings", e, path.display());
                Self::default()
            }
        }
    }
}
