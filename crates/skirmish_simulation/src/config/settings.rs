//! Simulation-wide tunables.

use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::{ConfigError, ConfigResult};

/// Simulation settings resource (loaded once, read-only afterwards)
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Fixed simulation tick rate (Hz)
    pub tick_hz: f64,
    /// How long a single camera shake lasts (seconds)
    pub camera_shake_duration: f32,
    /// Total duration of the kamikaze explosion effect (seconds)
    pub kamikaze_explosion_duration: f32,
    /// Encounter spawning: inner radius of the spawn ring around the player
    pub spawn_ring_min_radius: f32,
    /// Encounter spawning: outer radius of the spawn ring around the player
    pub spawn_ring_max_radius: f32,
}

const DEFAULT_CAMERA_SHAKE_SECS: f32 = 0.2;
const DEFAULT_KAMIKAZE_EXPLOSION_SECS: f32 = 2.0;

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            tick_hz: 60.0,
            camera_shake_duration: DEFAULT_CAMERA_SHAKE_SECS,
            kamikaze_explosion_duration: DEFAULT_KAMIKAZE_EXPLOSION_SECS,
            spawn_ring_min_radius: 10.0,
            spawn_ring_max_radius: 15.0,
        }
    }
}

impl SimulationSettings {
    /// Parse from RON; missing fields fall back to defaults.
    pub fn from_ron(text: &str) -> ConfigResult<Self> {
        let settings: SimulationSettings = ron::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let positive = [
            ("tick_hz", self.tick_hz),
            ("camera_shake_duration", self.camera_shake_duration as f64),
            ("kamikaze_explosion_duration", self.kamikaze_explosion_duration as f64),
            ("spawn_ring_max_radius", self.spawn_ring_max_radius as f64),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::InvalidSetting { field, value });
            }
        }

        if !(self.spawn_ring_min_radius >= 0.0 && self.spawn_ring_min_radius <= self.spawn_ring_max_radius) {
            return Err(ConfigError::InvalidSetting {
                field: "spawn_ring_min_radius",
                value: self.spawn_ring_min_radius as f64,
            });
        }

        Ok(())
    }

    /// Out-of-range values (never present after `validate`) read as the default.
    pub fn camera_shake_duration(&self) -> Duration {
        seconds_or(self.camera_shake_duration, DEFAULT_CAMERA_SHAKE_SECS)
    }

    /// Out-of-range values (never present after `validate`) read as the default.
    pub fn kamikaze_explosion_duration(&self) -> Duration {
        seconds_or(self.kamikaze_explosion_duration, DEFAULT_KAMIKAZE_EXPLOSION_SECS)
    }
}

fn seconds_or(seconds: f32, fallback: f32) -> Duration {
    Duration::try_from_secs_f32(seconds)
        .ok()
        .filter(|duration| !duration.is_zero())
        .unwrap_or(Duration::from_secs_f32(fallback))
}

/// System: settings replaced at runtime are validated before any tick uses them
///
/// Invalid → logged as a setup error, defaults restored.
pub fn reject_invalid_settings(mut settings: ResMut<SimulationSettings>) {
    if let Err(err) = settings.validate() {
        crate::logger::log_error(&format!("SimulationSettings rejected: {}", err));
        *settings = SimulationSettings::default();
    }
}
