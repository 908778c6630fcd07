//! Fundamental geometric and simulation types.
//!
//! World space is Y-up. Ground-plane coordinates are carried as `Vec2`
//! where `x` is world X and `y` is world Z.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Stable identifier of an enemy within one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

/// Simulation time tracking. Only advances while a session is playing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulated ticks.
    pub tick: u64,
    /// Elapsed simulated time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Project a world position onto the ground plane.
pub fn ground(p: Vec3) -> Vec2 {
    Vec2::new(p.x, p.z)
}

/// Lift a ground-plane position to world space at elevation `y`.
pub fn lift(p: Vec2, y: f32) -> Vec3 {
    Vec3::new(p.x, y, p.y)
}

/// Unit forward vector for a yaw/pitch pair. Yaw 0 faces -Z.
pub fn look_direction(yaw: f32, pitch: f32) -> Vec3 {
    let (sy, cy) = yaw.sin_cos();
    let (sp, cp) = pitch.sin_cos();
    Vec3::new(-sy * cp, sp, -cy * cp)
}

/// Ground-plane forward and right unit vectors for a yaw.
pub fn ground_basis(yaw: f32) -> (Vec2, Vec2) {
    let (s, c) = yaw.sin_cos();
    (Vec2::new(-s, -c), Vec2::new(c, -s))
}

/// Yaw that faces from `from` toward `to` on the ground plane.
pub fn yaw_towards(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    (-d.x).atan2(-d.y)
}
