//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use sanctum_core::components::*;
use sanctum_core::enums::GamePhase;
use sanctum_core::events::AudioEvent;
use sanctum_core::state::*;
use sanctum_core::types::{lift, SimTime};
use sanctum_core::weapons::weapon_config;
use sanctum_terrain::floor_at;

use crate::session::Session;
use crate::systems::enemy_ai::lunge_offset;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    session: &Session,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        health: session.health,
        score: session.score,
        wave: session.wave,
        player: build_player(&session.player),
        enemies: build_enemies(world),
        weapon: build_weapon(session),
        feedback: session.feedback.clone(),
        audio_events,
    }
}

fn build_player(body: &PlayerBody) -> PlayerView {
    PlayerView {
        position: body.position,
        yaw: body.yaw,
        pitch: body.pitch,
        grounded: body.can_jump,
    }
}

/// Build EnemyView list ordered by id. Elevation is derived from the floor
/// under the rendered (lunging) position.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &GroundPosition, &Vitals, &Locomotion, &MeleeState)>()
        .iter()
        .map(|(_, (enemy, pos, vitals, locomotion, melee))| {
            let render = pos.0 + lunge_offset(melee);
            EnemyView {
                id: enemy.id,
                archetype: enemy.archetype,
                ground: pos.0,
                position: lift(render, floor_at(render)),
                facing: locomotion.facing,
                health: vitals.current,
                max_health: vitals.max,
            }
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_weapon(session: &Session) -> WeaponView {
    let armory = &session.armory;
    let active = armory.active();
    WeaponView {
        active,
        ammo: armory.active_ammo(),
        max_ammo: weapon_config(active).max_ammo,
        reloading: armory.is_reloading(),
        muzzle_flash: session.muzzle_flash.is_some(),
        ammo_by_weapon: armory.ammo_by_weapon(),
    }
}
