//! Spawn governor: periodic, probabilistic enemy spawning.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Interval gate for spawn attempts.
#[derive(Debug, Clone, Copy)]
pub struct SpawnGovernor {
    last_attempt_secs: f64,
}

impl SpawnGovernor {
    /// The first attempt comes one full interval after `now_secs`.
    pub fn new(now_secs: f64) -> Self {
        Self {
            last_attempt_secs: now_secs,
        }
    }

    /// Whether an attempt is due. Consumes the interval when it is.
    pub fn attempt_due(&mut self, now_secs: f64, interval_secs: f64) -> bool {
        if now_secs - self.last_attempt_secs > interval_secs {
            self.last_attempt_secs = now_secs;
            true
        } else {
            false
        }
    }
}

/// Roll whether a due attempt produces an enemy.
pub fn roll_spawn(rng: &mut ChaCha8Rng, chance: f64) -> bool {
    rng.gen::<f64>() < chance
}

/// Live enemy cap for a wave.
pub fn enemy_cap(base_cap: u32, wave: u32) -> usize {
    base_cap.saturating_add(wave) as usize
}
