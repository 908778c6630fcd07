//! Per-session player state: vitals, progression, weapons, and feedback.
//!
//! The enemy roster lives in the engine's ECS world. Everything else a
//! session resets lives here.

use sanctum_core::components::PlayerBody;
use sanctum_core::constants::{MAX_HEALTH, SCORE_PER_WAVE};
use sanctum_core::events::FeedbackEvent;

use crate::armory::Armory;
use crate::scheduler::TaskId;

/// Outcome of damage applied to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerDamage {
    /// Health dropped but the player lives.
    Hurt,
    /// Health reached zero with this hit.
    Killed,
}

/// Mutable session state other than enemies.
#[derive(Debug, Clone)]
pub struct Session {
    pub health: u32,
    pub score: u32,
    pub wave: u32,
    pub player: PlayerBody,
    pub armory: Armory,
    pub feedback: Vec<FeedbackEvent>,
    /// Wall-clock time of the last shot or empty click.
    pub last_shot_secs: Option<f64>,
    /// The muzzle-flash expiry currently owning the flash.
    pub muzzle_flash: Option<TaskId>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Full health, zero score, wave 1, pistol drawn, player at spawn.
    pub fn new() -> Self {
        Self {
            health: MAX_HEALTH,
            score: 0,
            wave: 1,
            player: PlayerBody::default(),
            armory: Armory::new(),
            feedback: Vec::new(),
            last_shot_secs: None,
            muzzle_flash: None,
        }
    }

    /// Subtract health, clamped at zero. Returns `None` if already dead.
    pub fn damage(&mut self, amount: u32) -> Option<PlayerDamage> {
        if self.health == 0 {
            return None;
        }
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            Some(PlayerDamage::Killed)
        } else {
            Some(PlayerDamage::Hurt)
        }
    }

    /// Add health, clamped at the maximum. The dead stay dead.
    pub fn heal(&mut self, amount: u32) {
        if self.health == 0 {
            return;
        }
        self.health = self.health.saturating_add(amount).min(MAX_HEALTH);
    }

    /// Award points. Returns true if the wave advanced.
    ///
    /// The wave moves by one step at most, however far the score overshoots.
    pub fn award(&mut self, points: u32) -> bool {
        self.score = self.score.saturating_add(points);
        if self.score > self.wave.saturating_mul(SCORE_PER_WAVE) {
            self.wave += 1;
            true
        } else {
            false
        }
    }
}
