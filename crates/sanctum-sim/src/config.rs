//! Tuning configuration for a simulation run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sanctum_core::constants::*;

/// Errors raised while loading a `SimConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Configuration for starting a new simulation.
///
/// Every field defaults to the shipped tuning, so a config file only needs
/// to name the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Wall-clock multiplier applied by the host loop (1.0 = normal).
    pub time_scale: f64,

    // --- Player movement ---
    pub move_speed: f32,
    pub friction: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub eye_height: f32,
    pub stair_blend: f32,
    pub snap_epsilon: f32,
    pub world_bound: f32,
    pub look_sensitivity: f32,

    // --- Spawn governor ---
    pub spawn_interval_secs: f64,
    pub spawn_chance: f64,
    pub spawn_ring_min: f32,
    pub spawn_ring_max: f32,
    pub base_enemy_cap: u32,
    pub captain_chance: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            move_speed: MOVE_SPEED,
            friction: FRICTION,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            eye_height: EYE_HEIGHT,
            stair_blend: STAIR_BLEND,
            snap_epsilon: SNAP_EPSILON,
            world_bound: WORLD_BOUND,
            look_sensitivity: LOOK_SENSITIVITY,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            spawn_chance: SPAWN_CHANCE,
            spawn_ring_min: SPAWN_RING_MIN,
            spawn_ring_max: SPAWN_RING_MAX,
            base_enemy_cap: BASE_ENEMY_CAP,
            captain_chance: CAPTAIN_CHANCE,
        }
    }
}

impl SimConfig {
    /// Parse a JSON document and validate the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every tuning value for range and finiteness.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("time_scale", self.time_scale)?;
        positive("move_speed", self.move_speed as f64)?;
        non_negative("friction", self.friction as f64)?;
        non_negative("gravity", self.gravity as f64)?;
        non_negative("jump_impulse", self.jump_impulse as f64)?;
        positive("eye_height", self.eye_height as f64)?;
        positive("world_bound", self.world_bound as f64)?;
        positive("look_sensitivity", self.look_sensitivity as f64)?;
        positive("spawn_interval_secs", self.spawn_interval_secs)?;
        non_negative("snap_epsilon", self.snap_epsilon as f64)?;

        unit_interval("stair_blend", self.stair_blend as f64)?;
        unit_interval("spawn_chance", self.spawn_chance)?;
        unit_interval("captain_chance", self.captain_chance)?;

        non_negative("spawn_ring_min", self.spawn_ring_min as f64)?;
        positive("spawn_ring_max", self.spawn_ring_max as f64)?;
        if self.spawn_ring_min >= self.spawn_ring_max {
            return Err(ConfigError::Invalid {
                field: "spawn_ring_min",
                reason: format!(
                    "must be below spawn_ring_max ({} >= {})",
                    self.spawn_ring_min, self.spawn_ring_max
                ),
            });
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be finite, got {value}"),
        })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be positive, got {value}"),
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must not be negative, got {value}"),
        })
    }
}

fn unit_interval(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must lie in [0, 1], got {value}"),
        })
    }
}
