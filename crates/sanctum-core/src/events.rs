//! Events emitted by the simulation for audio and visual feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{FeedbackKind, WeaponId};

/// Audio cues for the presentation layer, drained every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A round left the barrel.
    Shot { weapon: WeaponId },
    /// Trigger pulled on an empty magazine.
    Empty,
    /// Reload started.
    Reload { weapon: WeaponId },
    /// A pellet connected.
    Hit,
    /// The player took melee damage.
    PlayerHurt { amount: u32 },
    /// An enemy died.
    EnemyKilled,
    /// Score crossed the wave threshold.
    WaveAdvanced { wave: u32 },
    /// Health reached zero.
    GameOver,
}

/// A short-lived visual pulse, removed once older than its lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEvent {
    pub kind: FeedbackKind,
    pub position: Vec3,
    pub color: String,
    /// Wall-clock creation time (seconds).
    pub created_at: f64,
}
