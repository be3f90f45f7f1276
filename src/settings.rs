//! Game settings and difficulty tuning
//!
//! Loaded from JSON; every field has a default so partial files are fine.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{FIRE_COOLDOWN, GAME_OVER_DELAY};
use crate::error::{ConfigError, ensure_positive};

/// Spawn cadence and formation speed ramp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyTuning {
    /// Ticks between the first formations
    pub initial_spawn_interval: u32,
    /// Above this interval the large step is used, at or below it the small one
    pub spawn_interval_threshold: u32,
    pub spawn_interval_step_large: u32,
    pub spawn_interval_step_small: u32,
    /// Floor for the spawn interval
    pub min_spawn_interval: u32,

    /// Formation speed before the first ratchet (pixels per tick)
    pub initial_grid_speed: f32,
    /// Speed added at every spawn
    pub grid_speed_step: f32,
    /// Speed cap
    pub max_grid_speed: f32,
}

impl Default for DifficultyTuning {
    fn default() -> Self {
        Self {
            initial_spawn_interval: 1000,
            spawn_interval_threshold: 500,
            spawn_interval_step_large: 100,
            spawn_interval_step_small: 50,
            min_spawn_interval: 200,

            initial_grid_speed: 3.0,
            grid_speed_step: 0.25,
            max_grid_speed: 7.0,
        }
    }
}

impl DifficultyTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("min_spawn_interval", self.min_spawn_interval as f64)?;
        ensure_positive("initial_grid_speed", self.initial_grid_speed as f64)?;
        ensure_positive("max_grid_speed", self.max_grid_speed as f64)?;
        if self.min_spawn_interval > self.initial_spawn_interval {
            return Err(ConfigError::InvalidRange {
                field: "spawn_interval",
                min: self.min_spawn_interval as f64,
                max: self.initial_spawn_interval as f64,
            });
        }
        if self.initial_grid_speed > self.max_grid_speed {
            return Err(ConfigError::InvalidRange {
                field: "grid_speed",
                min: self.initial_grid_speed as f64,
                max: self.max_grid_speed as f64,
            });
        }
        if self.grid_speed_step < 0.0 || self.grid_speed_step.is_nan() {
            return Err(ConfigError::NonPositive {
                field: "grid_speed_step",
                value: self.grid_speed_step as f64,
            });
        }
        Ok(())
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    /// Run seed (None = chosen by the host)
    pub seed: Option<u64>,

    /// Number of background stars
    pub star_count: usize,

    // === Timers (wall clock) ===
    /// Minimum time between two player shots
    pub fire_cooldown_ms: u64,
    /// Time between the lethal hit and the loop halting
    pub game_over_delay_ms: u64,

    pub difficulty: DifficultyTuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: 1024.0,
            canvas_height: 576.0,
            seed: None,
            star_count: 100,
            fire_cooldown_ms: FIRE_COOLDOWN.as_millis() as u64,
            game_over_delay_ms: GAME_OVER_DELAY.as_millis() as u64,
            difficulty: DifficultyTuning::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("canvas_width", self.canvas_width as f64)?;
        ensure_positive("canvas_height", self.canvas_height as f64)?;
        self.difficulty.validate()
    }

    pub fn fire_cooldown(&self) -> Duration {
        Duration::from_millis(self.fire_cooldown_ms)
    }

    pub fn game_over_delay(&self) -> Duration {
        Duration::from_millis(self.game_over_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
        assert_eq!(Settings::default().fire_cooldown(), Duration::from_millis(100));
        assert_eq!(Settings::default().game_over_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings =
            Settings::from_json(r#"{ "canvas_width": 800, "difficulty": { "max_grid_speed": 9.0 } }"#)
                .unwrap();
        assert_eq!(settings.canvas_width, 800.0);
        assert_eq!(settings.canvas_height, 576.0);
        assert_eq!(settings.difficulty.max_grid_speed, 9.0);
        assert_eq!(settings.difficulty.initial_spawn_interval, 1000);
    }

    #[test]
    fn test_negative_canvas_rejected() {
        let err = Settings::from_json(r#"{ "canvas_height": -10 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive {
                field: "canvas_height",
                ..
            }
        ));
    }

    #[test]
    fn test_inverted_speed_range_rejected() {
        let mut settings = Settings::default();
        settings.difficulty.initial_grid_speed = 10.0;
        settings.difficulty.max_grid_speed = 5.0;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidRange { field: "grid_speed", .. })
        ));
    }

    #[test]
    fn test_bad_json_is_json_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
