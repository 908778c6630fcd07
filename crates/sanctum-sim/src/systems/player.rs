//! Player controller: look, movement integration, and floor following.

use glam::Vec2;

use sanctum_core::components::PlayerBody;
use sanctum_core::constants::MAX_PITCH;
use sanctum_core::input::InputState;
use sanctum_core::types::{ground, ground_basis};
use sanctum_terrain::{floor_height, CollisionModel};

use crate::config::SimConfig;

/// Rotate the view by a pointer delta. Pitch is clamped short of vertical.
pub fn apply_look(body: &mut PlayerBody, look_delta: Vec2, sensitivity: f32) {
    if look_delta == Vec2::ZERO {
        return;
    }
    body.yaw -= look_delta.x * sensitivity;
    body.pitch = (body.pitch - look_delta.y * sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
}

/// Apply the jump impulse if grounded. Returns whether the jump happened.
pub fn jump(body: &mut PlayerBody, impulse: f32) -> bool {
    if !body.can_jump {
        return false;
    }
    body.velocity.y = impulse;
    body.can_jump = false;
    true
}

/// Integrate one step of player motion.
pub fn step(
    body: &mut PlayerBody,
    input: &InputState,
    collision: &CollisionModel,
    config: &SimConfig,
    dt: f32,
) {
    let v = &mut body.velocity;

    // Friction, then gravity.
    v.x -= v.x * config.friction * dt;
    v.z -= v.z * config.friction * dt;
    v.y -= config.gravity * dt;

    // Camera frame: -x is right, -z is forward.
    let intent = input.intent();
    v.x -= intent.x * config.move_speed * dt;
    v.z -= intent.y * config.move_speed * dt;

    let (forward, right) = ground_basis(body.yaw);
    let displacement = right * (-v.x * dt) + forward * (-v.z * dt);

    // Axis-separated moves so blocked motion slides along walls.
    let start = ground(body.position);
    let mut next = start;
    next.x += displacement.x;
    if collision.is_blocked(next) {
        next.x = start.x;
    }
    next.y += displacement.y;
    if collision.is_blocked(next) {
        next.y = start.y;
    }
    body.position.x = next.x;
    body.position.z = next.y;

    body.position.y += v.y * dt;

    let target = floor_height(body.position.x, body.position.z) + config.eye_height;
    if body.position.y < target {
        v.y = 0.0;
        body.position.y += (target - body.position.y) * config.stair_blend;
        if (target - body.position.y).abs() < config.snap_epsilon {
            body.position.y = target;
        }
        body.can_jump = true;
    }

    let bound = config.world_bound;
    body.position.x = body.position.x.clamp(-bound, bound);
    body.position.z = body.position.z.clamp(-bound, bound);
}
