//! Game configuration (window, input, world, simulation tuning). Loaded from config.ron at startup.

use physics::{JumpConfig, SpeedConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::meters::MeterConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Settings read from `config.ron` in the current directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Window width in logical pixels.
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    /// Window height in logical pixels.
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    /// Mouse sensitivity multiplier (1.0 = default).
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f32,
    /// Seed for forest generation.
    #[serde(default)]
    pub world_seed: u64,
    #[serde(default)]
    pub sim: SimConfig,
}

fn default_window_width() -> u32 {
    1280
}
fn default_window_height() -> u32 {
    720
}
fn default_sensitivity() -> f32 {
    1.0
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            sensitivity: default_sensitivity(),
            world_seed: 0,
            sim: SimConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load config from `config.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            log::info!("No config at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Read and validate a config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn parse(data: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(data)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sensitivity.is_finite() && self.sensitivity > 0.0) {
            return Err(invalid("sensitivity", "must be positive"));
        }
        self.sim.validate()
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join("config.ron")
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

/// Simulation tuning. Distances are world units, per-tick values assume one
/// tick per rendered frame, rates are per second.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Eye height while standing on the ground.
    pub ground_height: f32,
    pub gravity: f32,
    pub jump_power: f32,
    pub base_speed: f32,
    pub sprint_multiplier: f32,
    /// Speed multiplier while scoped.
    pub zoom_multiplier: f32,
    pub player_radius: f32,
    /// Hunger lost per second while sprinting.
    pub hunger_drain_rate: f32,
    /// Hunger regained per second while not sprinting.
    pub hunger_regen_rate: f32,
    /// Health lost per second while starving.
    pub health_drain_rate: f32,
    /// Health regained per regen tick.
    pub health_regen_amount: f32,
    /// Minimum seconds between hunger/starvation updates.
    pub meter_interval: f32,
    /// Minimum seconds between health regen ticks.
    pub health_regen_interval: f32,
    pub max_meter: f32,
    pub normal_fov: f32,
    pub zoomed_fov: f32,
    /// Starting eye position.
    pub spawn: [f32; 3],
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ground_height: 1.6,
            gravity: 0.015,
            jump_power: 0.3,
            base_speed: 0.08,
            sprint_multiplier: 1.8,
            zoom_multiplier: 0.4,
            player_radius: 0.8,
            hunger_drain_rate: 5.0,
            hunger_regen_rate: 0.5,
            health_drain_rate: 3.0,
            health_regen_amount: 2.0,
            meter_interval: 0.2,
            health_regen_interval: 1.0,
            max_meter: 100.0,
            normal_fov: 75.0,
            zoomed_fov: 30.0,
            spawn: [0.0, 1.6, 40.0],
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("gravity", self.gravity),
            ("jump_power", self.jump_power),
            ("base_speed", self.base_speed),
            ("player_radius", self.player_radius),
            ("meter_interval", self.meter_interval),
            ("health_regen_interval", self.health_regen_interval),
            ("max_meter", self.max_meter),
            ("normal_fov", self.normal_fov),
            ("zoomed_fov", self.zoomed_fov),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, "must be positive"));
            }
        }

        let rates = [
            ("hunger_drain_rate", self.hunger_drain_rate),
            ("hunger_regen_rate", self.hunger_regen_rate),
            ("health_drain_rate", self.health_drain_rate),
            ("health_regen_amount", self.health_regen_amount),
        ];
        for (field, value) in rates {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(field, "must not be negative"));
            }
        }

        let finite = [
            ("ground_height", self.ground_height),
            ("sprint_multiplier", self.sprint_multiplier),
            ("spawn", self.spawn[0]),
            ("spawn", self.spawn[1]),
            ("spawn", self.spawn[2]),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }

        if !(self.sprint_multiplier >= 1.0) {
            return Err(invalid("sprint_multiplier", "must be at least 1"));
        }
        if !(self.zoom_multiplier > 0.0 && self.zoom_multiplier <= 1.0) {
            return Err(invalid("zoom_multiplier", "must be in (0, 1]"));
        }
        if self.zoomed_fov > self.normal_fov {
            return Err(invalid("zoomed_fov", "must not be wider than normal_fov"));
        }
        Ok(())
    }

    pub fn jump(&self) -> JumpConfig {
        JumpConfig {
            jump_power: self.jump_power,
            gravity: self.gravity,
            ground_height: self.ground_height,
        }
    }

    pub fn speed(&self) -> SpeedConfig {
        SpeedConfig {
            base_speed: self.base_speed,
            sprint_multiplier: self.sprint_multiplier,
            zoom_multiplier: self.zoom_multiplier,
        }
    }

    pub fn meters(&self) -> MeterConfig {
        MeterConfig {
            max: self.max_meter,
            hunger_drain_rate: self.hunger_drain_rate,
            hunger_regen_rate: self.hunger_regen_rate,
            health_drain_rate: self.health_drain_rate,
            health_regen_amount: self.health_regen_amount,
            update_interval: interval(self.meter_interval),
            regen_interval: interval(self.health_regen_interval),
        }
    }
}

/// Seconds to a whole-millisecond duration, so 0.2 means exactly 200 ms.
/// Non-finite or negative input saturates instead of panicking.
fn interval(secs: f32) -> Duration {
    Duration::from_millis((secs.max(0.0) * 1000.0).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config = GameConfig::parse("(world_seed: 7, sim: (base_speed: 0.1))").unwrap();
        assert_eq!(config.world_seed, 7);
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.sim.base_speed, 0.1);
        assert_eq!(config.sim.sprint_multiplier, 1.8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn garbage_fails_to_parse() {
        assert!(GameConfig::parse("(world_seed: \"seven\")").is_err());
    }

    #[test]
    fn zoom_must_slow_down() {
        let sim = SimConfig {
            zoom_multiplier: 1.5,
            ..Default::default()
        };
        match sim.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "zoom_multiplier"),
            other => panic!("expected invalid zoom, got {:?}", other),
        }
    }

    #[test]
    fn negative_rate_rejected() {
        let sim = SimConfig {
            hunger_drain_rate: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            sim.validate(),
            Err(ConfigError::Invalid { field: "hunger_drain_rate", .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = GameConfig::load_from(Path::new("/nonexistent/greenwood/config.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn derived_configs_carry_values() {
        let sim = SimConfig::default();
        assert_eq!(sim.jump().ground_height, 1.6);
        assert_eq!(sim.speed().zoom_multiplier, 0.4);
        assert_eq!(sim.meters().update_interval, Duration::from_millis(200));
        assert_eq!(sim.meters().regen_interval, Duration::from_secs(1));
    }

    #[test]
    fn infinite_interval_rejected() {
        let config = GameConfig::parse("(sim: (meter_interval: inf))").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "meter_interval", .. })
        ));
        // Even unvalidated, converting it must not panic.
        let _ = config.sim.meters();
    }

    #[test]
    fn non_finite_values_rejected() {
        let sim = SimConfig {
            hunger_regen_rate: f32::INFINITY,
            ..Default::default()
        };
        assert!(sim.validate().is_err());
        let sim = SimConfig {
            spawn: [0.0, f32::NAN, 40.0],
            ..Default::default()
        };
        assert!(sim.validate().is_err());
        let config = GameConfig {
            sensitivity: f32::INFINITY,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
