//! Archetype-specific stat profiles.
//!
//! Consolidates per-archetype parameters for spawning, movement,
//! melee, and scoring.

use sanctum_core::enums::Archetype;

/// Stat profile for an enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchetypeProfile {
    /// Health before wave scaling.
    pub base_health: u32,
    /// Health added per wave.
    pub health_per_wave: u32,
    /// Ground speed (units/s).
    pub speed: f32,
    /// Damage per melee strike.
    pub melee_damage: u32,
    /// Score awarded on death.
    pub score_value: u32,
}

impl ArchetypeProfile {
    /// Spawn health at the given wave.
    pub fn health_for_wave(&self, wave: u32) -> u32 {
        self.base_health + self.health_per_wave * wave
    }
}

/// Get the stat profile for a given archetype.
pub fn get_profile(archetype: Archetype) -> ArchetypeProfile {
    match archetype {
        Archetype::Soldier => ArchetypeProfile {
            base_health: 80,
            health_per_wave: 15,
            speed: 5.5,
            melee_damage: 10,
            score_value: 10,
        },
        Archetype::Captain => ArchetypeProfile {
            base_health: 200,
            health_per_wave: 30,
            speed: 3.5,
            melee_damage: 25,
            score_value: 50,
        },
    }
}
