//! Hitscan resolution: pellet spread and ray-versus-enemy tests.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use sanctum_core::components::{Enemy, GroundPosition};
use sanctum_core::constants::{ENEMY_CHEST_HEIGHT, HIT_RADIUS};
use sanctum_core::types::{lift, EnemyId};
use sanctum_terrain::floor_at;

/// An enemy's hit-test point.
#[derive(Debug, Clone, Copy)]
pub struct Target {
    pub id: EnemyId,
    pub position: Vec3,
}

/// The nearest enemy struck by a pellet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub id: EnemyId,
    /// Distance along the ray to the projection of the hit-test point.
    pub distance: f32,
    /// Point on the ray nearest the enemy.
    pub point: Vec3,
}

/// Hit-test points for every live enemy, in id order.
pub fn collect_targets(world: &World) -> Vec<Target> {
    let mut targets: Vec<Target> = world
        .query::<(&Enemy, &GroundPosition)>()
        .iter()
        .map(|(_, (enemy, pos))| Target {
            id: enemy.id,
            position: lift(pos.0, floor_at(pos.0) + ENEMY_CHEST_HEIGHT),
        })
        .collect();
    targets.sort_by_key(|t| t.id);
    targets
}

/// Jitter an aim direction by independent per-axis noise in `[-spread/2, spread/2)`.
pub fn perturb(aim: Vec3, spread: f32, rng: &mut ChaCha8Rng) -> Vec3 {
    let noise = Vec3::new(
        rng.gen::<f32>() - 0.5,
        rng.gen::<f32>() - 0.5,
        rng.gen::<f32>() - 0.5,
    ) * spread;
    (aim + noise).try_normalize().unwrap_or(aim)
}

/// Nearest target within `HIT_RADIUS` of the ray, ignoring anything behind the origin.
pub fn resolve_pellet(origin: Vec3, direction: Vec3, targets: &[Target]) -> Option<RayHit> {
    let mut best: Option<RayHit> = None;

    for target in targets {
        let t = (target.position - origin).dot(direction);
        if t <= 0.0 {
            continue;
        }
        let point = origin + direction * t;
        if point.distance(target.position) >= HIT_RADIUS {
            continue;
        }
        if best.map_or(true, |b| t < b.distance) {
            best = Some(RayHit {
                id: target.id,
                distance: t,
                point,
            });
        }
    }

    best
}
