//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level session phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Weapon identifiers, in slot order (keys 1-5).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeaponId {
    #[default]
    Pistol,
    Rifle,
    Shotgun,
    Sniper,
    Laser,
}

impl WeaponId {
    /// Every weapon in slot order.
    pub const ALL: [WeaponId; 5] = [
        WeaponId::Pistol,
        WeaponId::Rifle,
        WeaponId::Shotgun,
        WeaponId::Sniper,
        WeaponId::Laser,
    ];

    /// Weapon bound to a 1-based selection slot.
    pub fn from_slot(slot: u8) -> Option<Self> {
        match slot {
            1..=5 => Some(Self::ALL[slot as usize - 1]),
            _ => None,
        }
    }

    /// Dense index into per-weapon tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Enemy archetype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Baseline infantry.
    #[default]
    Soldier,
    /// Elite: tougher, slower, hits harder, worth more.
    Captain,
}

/// Kind of short-lived visual feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackKind {
    /// Crosshair hit confirmation.
    HitMarker,
    /// Impact particle at a world position.
    Particle,
}
