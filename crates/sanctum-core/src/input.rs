//! Held input state sampled every tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Level-triggered input produced by whatever captures the devices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    /// Trigger held. Drives automatic weapons.
    pub fire_held: bool,
    /// Pointer movement since the previous tick.
    pub look_delta: Vec2,
}

impl InputState {
    /// Movement intent as (strafe, forward), normalized. Zero when idle.
    pub fn intent(&self) -> Vec2 {
        let strafe = self.right as i32 - self.left as i32;
        let forward = self.forward as i32 - self.back as i32;
        Vec2::new(strafe as f32, forward as f32).normalize_or_zero()
    }
}
