//! Entity spawn factories for the enemy arena.
//!
//! Creates enemy entities with the component bundle every system expects.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use sanctum_ai::profiles::get_profile;
use sanctum_core::components::*;
use sanctum_core::enums::Archetype;
use sanctum_core::types::{yaw_towards, EnemyId};

use crate::config::SimConfig;

/// Spawn an enemy of `archetype` at `position`, with health scaled to `wave`.
pub fn spawn_enemy_at(
    world: &mut World,
    id: EnemyId,
    archetype: Archetype,
    position: Vec2,
    wave: u32,
) -> hecs::Entity {
    let profile = get_profile(archetype);
    let health = profile.health_for_wave(wave);

    world.spawn((
        Enemy { id, archetype },
        GroundPosition(position),
        Vitals {
            current: health,
            max: health,
        },
        Locomotion {
            speed: profile.speed,
            facing: yaw_towards(position, Vec2::ZERO),
        },
        MeleeState::default(),
    ))
}

/// Spawn an enemy at a random point on the spawn ring around the origin.
/// Rolls the archetype: captain with `captain_chance`, else soldier.
pub fn spawn_random_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    id: EnemyId,
    wave: u32,
) -> hecs::Entity {
    let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let radius = config.spawn_ring_min
        + rng.gen::<f32>() * (config.spawn_ring_max - config.spawn_ring_min);
    let position = Vec2::new(angle.cos(), angle.sin()) * radius;

    let archetype = if rng.gen::<f64>() < config.captain_chance {
        Archetype::Captain
    } else {
        Archetype::Soldier
    };

    spawn_enemy_at(world, id, archetype, position, wave)
}
