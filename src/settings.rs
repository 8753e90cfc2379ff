//! Driver settings and launch configuration
//!
//! Loaded from JSON. Missing fields take their defaults and every simulation
//! value is clamped into range on load, so a hand-edited file can never put the
//! simulation into an invalid state.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::SimulationConfig;

/// Errors reading or parsing a settings file
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Driver settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Launch parameters
    pub simulation: SimulationConfig,

    // === Driver ===
    /// Tick rate used by the headless driver (Hz)
    pub tick_hz: f32,

    // === Presentation ===
    /// Show the predicted path while idle
    pub show_prediction: bool,
    /// Draw the flight trail
    pub trails: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            tick_hz: 60.0,
            show_prediction: true,
            trails: true,
        }
    }
}

impl Settings {
    /// Tick rate bounds for the headless driver
    const MIN_TICK_HZ: f32 = 20.0;
    const MAX_TICK_HZ: f32 = 1000.0;

    /// Parse settings from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults if the file is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json_string(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Copy with every value forced into its valid range
    pub fn sanitized(mut self) -> Self {
        self.simulation = self.simulation.clamped();
        self.tick_hz = if self.tick_hz.is_finite() {
            self.tick_hz.clamp(Self::MIN_TICK_HZ, Self::MAX_TICK_HZ)
        } else {
            Self::default().tick_hz
        };
        self
    }

    /// Fixed dt for the headless driver
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_hz
    }
}
