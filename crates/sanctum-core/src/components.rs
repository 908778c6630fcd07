//! ECS components for hecs entities, plus the player body.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::Archetype;
use crate::types::EnemyId;

/// Identity and category of an enemy entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub archetype: Archetype,
}

/// Position on the ground plane. Elevation is always derived from terrain.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GroundPosition(pub Vec2);

/// Hit points. Entities are despawned the moment `current` reaches zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vitals {
    pub current: u32,
    pub max: u32,
}

/// Movement parameters and heading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Locomotion {
    /// Ground speed (units/s).
    pub speed: f32,
    /// Yaw toward the last pursued target. 0 faces -Z.
    pub facing: f32,
}

/// A visual forward lunge awaiting reversion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lunge {
    pub offset: Vec2,
    /// Matches the scheduled revert that owns this lunge.
    pub ticket: u64,
}

/// Melee attack timing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MeleeState {
    /// Wall-clock time of the last strike.
    pub last_attack_secs: Option<f64>,
    pub lunge: Option<Lunge>,
}

/// The player's physical state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Eye position in world space.
    pub position: Vec3,
    /// Camera-frame velocity: `-x` strafes right, `-z` moves forward, `y` is world up.
    pub velocity: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Grounded and allowed to jump.
    pub can_jump: bool,
}

impl Default for PlayerBody {
    fn default() -> Self {
        Self {
            position: Vec3::from_array(crate::constants::PLAYER_SPAWN),
            velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            can_jump: true,
        }
    }
}
