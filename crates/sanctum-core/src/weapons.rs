//! Static weapon catalog.
//!
//! One immutable entry per `WeaponId`. Never mutated at runtime.

use serde::Serialize;

use crate::enums::WeaponId;

/// Stats for a single weapon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeaponConfig {
    pub id: WeaponId,
    pub name: &'static str,
    /// Damage applied per pellet that connects.
    pub damage: u32,
    /// Minimum seconds between shots.
    pub fire_interval_secs: f64,
    /// Per-axis aim noise amplitude.
    pub spread: f32,
    /// Independent hit tests per shot.
    pub pellets: u32,
    /// Magazine capacity.
    pub max_ammo: u32,
    /// Seconds to refill the magazine.
    pub reload_secs: f64,
    /// Held trigger keeps firing.
    pub automatic: bool,
    /// Tracer/flash color for presentation.
    pub color: &'static str,
}

static CATALOG: [WeaponConfig; 5] = [
    WeaponConfig {
        id: WeaponId::Pistol,
        name: "Maccabee Pistol",
        damage: 35,
        fire_interval_secs: 0.3,
        spread: 0.02,
        pellets: 1,
        max_ammo: 12,
        reload_secs: 1.2,
        automatic: false,
        color: "#ffd700",
    },
    WeaponConfig {
        id: WeaponId::Rifle,
        name: "Assault Rifle",
        damage: 20,
        fire_interval_secs: 0.1,
        spread: 0.04,
        pellets: 1,
        max_ammo: 30,
        reload_secs: 2.0,
        automatic: true,
        color: "#00ffff",
    },
    WeaponConfig {
        id: WeaponId::Shotgun,
        name: "Staff of Wrath",
        damage: 12,
        fire_interval_secs: 0.9,
        spread: 0.12,
        pellets: 6,
        max_ammo: 6,
        reload_secs: 2.5,
        automatic: false,
        color: "#ff4400",
    },
    WeaponConfig {
        id: WeaponId::Sniper,
        name: "Bow of Jonathan",
        damage: 150,
        fire_interval_secs: 1.5,
        spread: 0.001,
        pellets: 1,
        max_ammo: 4,
        reload_secs: 3.0,
        automatic: false,
        color: "#00ff00",
    },
    WeaponConfig {
        id: WeaponId::Laser,
        name: "Eternal Flame",
        damage: 8,
        fire_interval_secs: 0.05,
        spread: 0.02,
        pellets: 1,
        max_ammo: 50,
        reload_secs: 3.5,
        automatic: true,
        color: "#4444ff",
    },
];

/// Look up the catalog entry for a weapon.
pub fn weapon_config(id: WeaponId) -> &'static WeaponConfig {
    &CATALOG[id.index()]
}

/// The whole catalog in slot order.
pub fn catalog() -> &'static [WeaponConfig] {
    &CATALOG
}
