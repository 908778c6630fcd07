//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands are edge-triggered and queued for processing at the next tick boundary.
//! Held state (movement keys, trigger, look delta) travels in `InputState` instead.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponId;

/// All discrete player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Start a session from the menu.
    StartGame,
    /// Toggle between playing and paused.
    TogglePause,
    /// Reinitialize the session and resume play.
    ResetGame,
    /// Abandon the session and return to the menu.
    ReturnToMenu,

    // --- Combat ---
    /// Trigger pressed. Fires once for semi-automatic weapons.
    FirePressed,
    /// Begin reloading the active weapon.
    Reload,
    /// Select a weapon directly.
    SwitchWeapon { weapon: WeaponId },
    /// Select a weapon by 1-based slot.
    SelectSlot { slot: u8 },

    // --- Movement ---
    /// Jump if grounded.
    Jump,
}
