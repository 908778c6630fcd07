//! Enemy steering and melee decisions.
//!
//! Pure functions that compute one agent's step from its own state, its
//! neighbours, and the player's position. The caller owns ordering and
//! write-back.

use glam::{Vec2, Vec3};

use sanctum_core::constants::*;
use sanctum_core::enums::Archetype;
use sanctum_core::types::{ground, ground_basis, lift, yaw_towards, EnemyId};

use crate::profiles::get_profile;

/// Distances below this are treated as coincident.
const COINCIDENT_EPSILON: f32 = 1e-4;

/// Another agent as seen by the separation pass.
#[derive(Debug, Clone, Copy)]
pub struct Neighbor {
    pub id: EnemyId,
    pub position: Vec2,
}

/// Averaged repulsion from every other agent inside `SEPARATION_RADIUS`.
///
/// Each contribution points away from the neighbour with length
/// `SEPARATION_RADIUS - distance`. Coincident agents are split along X by id
/// order so they still diverge.
pub fn separation(id: EnemyId, position: Vec2, neighbors: &[Neighbor]) -> Vec2 {
    let mut push = Vec2::ZERO;
    let mut count = 0u32;

    for other in neighbors {
        if other.id == id {
            continue;
        }
        let away = position - other.position;
        let dist = away.length();
        if dist >= SEPARATION_RADIUS {
            continue;
        }
        let dir = if dist < COINCIDENT_EPSILON {
            if id < other.id {
                Vec2::NEG_X
            } else {
                Vec2::X
            }
        } else {
            away / dist
        };
        push += dir * (SEPARATION_RADIUS - dist);
        count += 1;
    }

    if count > 0 {
        push / count as f32
    } else {
        Vec2::ZERO
    }
}

/// Input to the behavior evaluation for a single agent.
#[derive(Debug, Clone, Copy)]
pub struct AgentContext {
    pub id: EnemyId,
    pub archetype: Archetype,
    pub position: Vec2,
    /// Floor elevation under the agent.
    pub elevation: f32,
    pub speed: f32,
    pub facing: f32,
    /// Player eye position.
    pub player: Vec3,
    /// Result of `separation` for this agent.
    pub separation: Vec2,
    /// Wall-clock time now.
    pub now_secs: f64,
    pub last_attack_secs: Option<f64>,
    pub dt: f32,
}

/// What the agent does this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AgentAction {
    /// Moved toward the player.
    Advance { position: Vec2, facing: f32 },
    /// Struck the player.
    Strike { damage: u32, lunge: Vec2 },
    /// In melee range, waiting on cooldown.
    Hold,
}

/// Evaluate one agent. Returns the chosen action.
pub fn evaluate(ctx: &AgentContext) -> AgentAction {
    let body = lift(ctx.position, ctx.elevation);
    let distance = body.distance(ctx.player);

    if distance > MELEE_RANGE {
        let to_player = (ground(ctx.player) - ctx.position).normalize_or_zero();
        let heading = (to_player + ctx.separation * SEPARATION_WEIGHT).normalize_or_zero();
        let position = ctx.position + heading * ctx.speed * ctx.dt;
        let facing = yaw_towards(ctx.position, ground(ctx.player));
        return AgentAction::Advance { position, facing };
    }

    let ready = ctx
        .last_attack_secs
        .map_or(true, |t| ctx.now_secs - t > ATTACK_COOLDOWN_SECS);
    if !ready {
        return AgentAction::Hold;
    }

    // Lunge toward the player; fall back to the current facing when directly below.
    let toward = (ground(ctx.player) - ctx.position).normalize_or_zero();
    let forward = if toward == Vec2::ZERO {
        ground_basis(ctx.facing).0
    } else {
        toward
    };
    AgentAction::Strike {
        damage: get_profile(ctx.archetype).melee_damage,
        lunge: forward * LUNGE_DISTANCE,
    }
}
