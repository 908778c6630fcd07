//! Per-weapon magazines and the reload state machine.
//!
//! A reload is identified by the `TaskId` of its scheduled completion.
//! Completion only applies when that exact request is still pending for
//! the weapon that is still active.

use sanctum_core::enums::WeaponId;
use sanctum_core::weapons::weapon_config;

use crate::scheduler::TaskId;

/// A reload waiting on its completion task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReload {
    pub weapon: WeaponId,
    pub task: TaskId,
}

/// Ammo for every weapon, the active weapon, and any pending reload.
#[derive(Debug, Clone)]
pub struct Armory {
    active: WeaponId,
    ammo: [u32; WeaponId::ALL.len()],
    reload: Option<PendingReload>,
}

impl Default for Armory {
    fn default() -> Self {
        Self::new()
    }
}

impl Armory {
    /// Pistol drawn, every magazine full.
    pub fn new() -> Self {
        Self {
            active: WeaponId::default(),
            ammo: WeaponId::ALL.map(|w| weapon_config(w).max_ammo),
            reload: None,
        }
    }

    pub fn active(&self) -> WeaponId {
        self.active
    }

    pub fn ammo(&self, weapon: WeaponId) -> u32 {
        self.ammo[weapon.index()]
    }

    pub fn active_ammo(&self) -> u32 {
        self.ammo(self.active)
    }

    pub fn is_reloading(&self) -> bool {
        self.reload.is_some()
    }

    pub fn pending_reload(&self) -> Option<PendingReload> {
        self.reload
    }

    /// Spend one round from the active magazine. False when empty.
    pub fn consume_round(&mut self) -> bool {
        let slot = &mut self.ammo[self.active.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Whether a reload of the active weapon may begin.
    pub fn can_reload(&self) -> bool {
        self.reload.is_none()
    }

    /// Record the reload whose completion is `task`.
    pub fn begin_reload(&mut self, task: TaskId) {
        self.reload = Some(PendingReload {
            weapon: self.active,
            task,
        });
    }

    /// Apply a fired completion. Stale completions are ignored.
    pub fn complete_reload(&mut self, task: TaskId, weapon: WeaponId) -> bool {
        let current = PendingReload { weapon, task };
        if self.reload != Some(current) || self.active != weapon {
            return false;
        }
        self.ammo[weapon.index()] = weapon_config(weapon).max_ammo;
        self.reload = None;
        true
    }

    /// Change weapons. Returns the reload that was cancelled, if any.
    pub fn switch(&mut self, weapon: WeaponId) -> Option<PendingReload> {
        self.active = weapon;
        self.reload.take()
    }

    /// Ammo for every weapon in slot order.
    pub fn ammo_by_weapon(&self) -> Vec<(WeaponId, u32)> {
        WeaponId::ALL.iter().map(|&w| (w, self.ammo(w))).collect()
    }
}
