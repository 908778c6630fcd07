//! Game state snapshot: the complete visible state handed to presentation each tick.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioEvent, FeedbackEvent};
use crate::types::{EnemyId, SimTime};

/// Read-only view of the session after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub health: u32,
    pub score: u32,
    pub wave: u32,
    pub player: PlayerView,
    /// Live enemies ordered by id.
    pub enemies: Vec<EnemyView>,
    pub weapon: WeaponView,
    pub feedback: Vec<FeedbackEvent>,
    pub audio_events: Vec<AudioEvent>,
}

impl GameStateSnapshot {
    /// Whether a hit marker pulse is currently alive.
    pub fn hit_marker_visible(&self) -> bool {
        self.feedback
            .iter()
            .any(|f| f.kind == FeedbackKind::HitMarker)
    }
}

/// Player camera and body state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub grounded: bool,
}

/// A live enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EnemyId,
    pub archetype: Archetype,
    /// Ground position used by the simulation.
    pub ground: Vec2,
    /// Render position: ground plus any lunge offset, at floor elevation.
    pub position: Vec3,
    pub facing: f32,
    pub health: u32,
    pub max_health: u32,
}

/// Active weapon and magazine state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponView {
    pub active: WeaponId,
    pub ammo: u32,
    pub max_ammo: u32,
    pub reloading: bool,
    pub muzzle_flash: bool,
    /// Current ammo for every weapon in slot order.
    pub ammo_by_weapon: Vec<(WeaponId, u32)>,
}
