//! Sketch settings
//!
//! Every tunable the sketches consume lives here, including the RNG seed,
//! so a settings file pins down an entire run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SPEED_LIMIT;

/// Bouncing-bubbles sketch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BubbleSettings {
    pub count: usize,
    pub diameter: f32,
    /// Cap on the randomized per-axis speeds
    pub speed_limit: f32,
}

impl Default for BubbleSettings {
    fn default() -> Self {
        Self {
            count: 100,
            diameter: 50.0,
            speed_limit: DEFAULT_SPEED_LIMIT,
        }
    }
}

/// Colliding-bubbles sketch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionSettings {
    pub count: usize,
    pub diameter: f32,
    pub speed_limit: f32,
}

impl Default for CollisionSettings {
    fn default() -> Self {
        Self {
            count: 50,
            diameter: 20.0,
            speed_limit: DEFAULT_SPEED_LIMIT,
        }
    }
}

/// Drifting-blocks sketch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockSettings {
    pub count: usize,
    pub block_size: f32,
}

impl Default for BlockSettings {
    fn default() -> Self {
        Self {
            count: 1000,
            block_size: 10.0,
        }
    }
}

/// Tethered-balls sketch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TetherSettings {
    /// Satellites around the center ball
    pub count: usize,
    pub center_diameter: f32,
    pub satellite_diameter: f32,
    /// Vertical speed of the center ball
    pub center_speed: f32,
    pub line_weight: f32,
}

impl Default for TetherSettings {
    fn default() -> Self {
        Self {
            count: 500,
            center_diameter: 50.0,
            satellite_diameter: 20.0,
            center_speed: 5.0,
            line_weight: 5.0,
        }
    }
}

/// Oscillating-blocks sketch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillatorSettings {
    pub count: usize,
    pub block_size: f32,
    /// Vertical gap between spawned blocks
    pub spacing: f32,
}

impl Default for OscillatorSettings {
    fn default() -> Self {
        Self {
            count: 2,
            block_size: 10.0,
            spacing: 100.0,
        }
    }
}

/// All sketch settings plus the run seed and surface size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Seed for every randomized draw; equal seeds reproduce runs exactly
    pub seed: u64,
    pub width: f32,
    pub height: f32,
    pub bubbles: BubbleSettings,
    pub collisions: CollisionSettings,
    pub blocks: BlockSettings,
    pub tether: TetherSettings,
    pub oscillator: OscillatorSettings,
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults on any
    /// missing or malformed input
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings {}: {err}", path.display());
                    Self::default_sized()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default_sized()
            }
        }
    }

    /// Defaults with a non-degenerate surface size
    pub fn default_sized() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            ..Self::default()
        }
    }

    /// Write settings as JSON; failures are logged and ignored
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if fs::write(path, json).is_ok() {
                    log::info!("Settings saved to {}", path.display());
                }
            }
            Err(err) => log::warn!("Could not serialize settings: {err}"),
        }
    }
}
