use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::ConfigError;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "roids.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ShipConfig {
    /// Speed set directly while thrusting (units per frame)
    pub speed: f32,
    /// Radians per frame
    pub rotational_speed: f32,
    /// Velocity multiplier applied every frame without thrust
    pub friction: f32,
    pub radius: f32,
    /// Distance from the ship centre to its nose, where projectiles appear
    pub nose_offset: f32,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            speed: 3.0,
            rotational_speed: 0.05,
            friction: 0.97,
            radius: 5.0,
            nose_offset: 30.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ProjectileConfig {
    pub speed: f32,
    pub radius: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: 3.0,
            radius: 5.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnerConfig {
    /// Wall-clock milliseconds between asteroid spawns
    pub interval_ms: u64,
    pub radius_min: f32,
    /// Exclusive upper bound
    pub radius_max: f32,
    /// Fixed seed for reproducible runs. Omitted = OS entropy.
    pub seed: Option<u64>,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            interval_ms: 3000,
            radius_min: 10.0,
            radius_max: 60.0,
            seed: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Target frame time. The simulation advances one tick per frame, so this
    /// also sets game speed.
    pub frame_interval_ms: u64,
    /// World units covered by one terminal column
    pub cell_width: f32,
    /// World units covered by one terminal row
    pub cell_height: f32,
    /// Explicit world size; derived from the terminal size when omitted
    pub viewport: Option<ViewportSize>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            cell_width: 8.0,
            cell_height: 16.0,
            viewport: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Frames a held key stays down without a repeat event, for terminals
    /// that never report key releases. Must outlast the OS auto-repeat delay
    /// (usually 250-600 ms) or a held key stutters before repeats start.
    pub hold_frames: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { hold_frames: 30 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub ship: ShipConfig,
    pub projectile: ProjectileConfig,
    pub spawner: SpawnerConfig,
    pub display: DisplayConfig,
    pub input: InputConfig,
    pub log_file: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ship: ShipConfig::default(),
            projectile: ProjectileConfig::default(),
            spawner: SpawnerConfig::default(),
            display: DisplayConfig::default(),
            input: InputConfig::default(),
            log_file: "roids.log".into(),
        }
    }
}

impl GameConfig {
    /// Parses a TOML document and validates it
    pub fn from_toml_str(data: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(data)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads and validates a config file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Self::from_toml_str(&data)
    }

    /// Loads `path` if it exists, otherwise returns the defaults. A file that
    /// exists but fails to parse or validate is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Checks every tunable and reports all problems at once
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems: Vec<String> = Vec::new();

        let positive = [
            ("ship.speed", self.ship.speed),
            ("ship.rotational_speed", self.ship.rotational_speed),
            ("ship.radius", self.ship.radius),
            ("projectile.speed", self.projectile.speed),
            ("projectile.radius", self.projectile.radius),
            ("spawner.radius_min", self.spawner.radius_min),
            ("display.cell_width", self.display.cell_width),
            ("display.cell_height", self.display.cell_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                problems.push(format!("{name} must be > 0"));
            }
        }

        if !self.ship.nose_offset.is_finite() || self.ship.nose_offset < 0.0 {
            problems.push("ship.nose_offset must be >= 0".into());
        }
        if !(self.ship.friction > 0.0 && self.ship.friction <= 1.0) {
            problems.push("ship.friction must be in (0, 1]".into());
        }
        if !(self.spawner.radius_max.is_finite() && self.spawner.radius_min < self.spawner.radius_max)
        {
            problems.push("spawner.radius_min must be below spawner.radius_max".into());
        }
        if self.spawner.interval_ms == 0 {
            problems.push("spawner.interval_ms must be > 0".into());
        }
        if self.display.frame_interval_ms == 0 {
            problems.push("display.frame_interval_ms must be > 0".into());
        }
        if let Some(size) = self.display.viewport
            && !(size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0)
        {
            problems.push("display.viewport must be positive".into());
        }
        if self.log_file.trim().is_empty() {
            problems.push("log_file must not be empty".into());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_tuning() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.ship.speed, 3.0);
        assert_eq!(cfg.ship.rotational_speed, 0.05);
        assert_eq!(cfg.ship.friction, 0.97);
        assert_eq!(cfg.ship.radius, 5.0);
        assert_eq!(cfg.projectile.speed, 3.0);
        assert_eq!(cfg.projectile.radius, 5.0);
        assert_eq!(cfg.spawner.interval_ms, 3000);
        assert_eq!(cfg.spawner.radius_min, 10.0);
        assert_eq!(cfg.spawner.radius_max, 60.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_default_hold_outlasts_auto_repeat_delay() {
        let cfg = GameConfig::default();
        let hold_ms = u64::from(cfg.input.hold_frames) * cfg.display.frame_interval_ms;
        assert!(hold_ms >= 450, "held keys lapse after only {hold_ms} ms");
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let cfg = GameConfig::from_toml_str(
            r#"
            [spawner]
            interval_ms = 1500
            seed = 7

            [display]
            viewport = { width = 800.0, height = 600.0 }
            "#,
        )
        .unwrap();

        assert_eq!(cfg.spawner.interval_ms, 1500);
        assert_eq!(cfg.spawner.seed, Some(7));
        assert_eq!(cfg.spawner.radius_max, 60.0);
        assert_eq!(
            cfg.display.viewport,
            Some(ViewportSize {
                width: 800.0,
                height: 600.0
            })
        );
        assert_eq!(cfg.ship, ShipConfig::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = GameConfig::from_toml_str(
            r#"
            [ship]
            friction = 1.5

            [spawner]
            radius_min = 60.0
            radius_max = 10.0
            "#,
        )
        .unwrap_err();

        match err {
            ConfigError::Invalid(msg) => {
                assert!(msg.contains("ship.friction"));
                assert!(msg.contains("spawner.radius_min"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = GameConfig::from_toml_str("[ship\nspeed = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let cfg = GameConfig::load_or_default("definitely/not/here/roids.toml").unwrap();
        assert_eq!(cfg, GameConfig::default());
    }
}
