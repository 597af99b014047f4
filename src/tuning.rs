//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. The default is the reference
//! tuning from [`crate::consts`]; a JSON file can override any subset of it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Gameplay tuning constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Player ===
    /// Degrees per tick while a steering key is held
    pub player_rotation_speed: f32,
    /// Velocity added per tick of thrust
    pub player_acceleration: f32,
    /// Per-tick velocity damping factor
    pub player_friction: f32,
    pub player_max_speed: f32,

    // === Bullets ===
    pub bullet_speed: f32,
    /// Drawn radius only; collisions treat bullets as points
    pub bullet_radius: f32,

    // === Asteroids ===
    pub spawn_interval_ticks: u32,
    pub asteroid_spawn_y: f32,
    pub asteroid_min_speed: f32,
    pub asteroid_max_speed: f32,
    pub asteroid_size: f32,
    pub asteroid_despawn_margin: f32,

    // === Pacing ===
    pub tick_rate_hz: u32,
    pub round_over_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            player_rotation_speed: PLAYER_ROTATION_SPEED,
            player_acceleration: PLAYER_ACCELERATION,
            player_friction: PLAYER_FRICTION,
            player_max_speed: PLAYER_MAX_SPEED,

            bullet_speed: BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,

            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            asteroid_spawn_y: ASTEROID_SPAWN_Y,
            asteroid_min_speed: ASTEROID_MIN_SPEED,
            asteroid_max_speed: ASTEROID_MAX_SPEED,
            asteroid_size: ASTEROID_SIZE,
            asteroid_despawn_margin: ASTEROID_DESPAWN_MARGIN,

            tick_rate_hz: TICK_RATE_HZ,
            round_over_ticks: ROUND_OVER_TICKS,
        }
    }
}

impl Tuning {
    /// Environment variable naming an optional tuning file
    pub const ENV_VAR: &'static str = "SPACE_ROCKS_TUNING";

    /// Parse and validate tuning from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject tunings the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(name: &str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid(format!("{name} must be positive, got {value}")))
            }
        }

        fn finite(name: &str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() {
                Ok(())
            } else {
                Err(TuningError::Invalid(format!("{name} must be finite, got {value}")))
            }
        }

        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;
        positive("player_max_speed", self.player_max_speed)?;
        positive("bullet_speed", self.bullet_speed)?;
        positive("asteroid_size", self.asteroid_size)?;

        finite("player_rotation_speed", self.player_rotation_speed)?;
        finite("player_acceleration", self.player_acceleration)?;
        finite("bullet_radius", self.bullet_radius)?;
        finite("asteroid_spawn_y", self.asteroid_spawn_y)?;
        finite("asteroid_min_speed", self.asteroid_min_speed)?;
        finite("asteroid_max_speed", self.asteroid_max_speed)?;
        finite("asteroid_despawn_margin", self.asteroid_despawn_margin)?;

        if !(self.player_friction > 0.0 && self.player_friction <= 1.0) {
            return Err(TuningError::Invalid(format!(
                "player_friction must be in (0, 1], got {}",
                self.player_friction
            )));
        }
        if self.asteroid_min_speed > self.asteroid_max_speed {
            return Err(TuningError::Invalid(format!(
                "asteroid speed range is inverted: {}..{}",
                self.asteroid_min_speed, self.asteroid_max_speed
            )));
        }
        if !(self.asteroid_max_speed - self.asteroid_min_speed).is_finite() {
            return Err(TuningError::Invalid(format!(
                "asteroid speed range is too wide to sample: {}..{}",
                self.asteroid_min_speed, self.asteroid_max_speed
            )));
        }
        if self.tick_rate_hz == 0 {
            return Err(TuningError::Invalid("tick_rate_hz must be non-zero".into()));
        }
        Ok(())
    }
}
