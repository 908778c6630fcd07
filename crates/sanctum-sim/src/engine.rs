//! Simulation engine. Owns the world and runs every tick.
//!
//! `SimulationEngine` owns the hecs ECS world (the enemy roster), the
//! session state, and the deferred-task scheduler. It processes player
//! commands, runs all systems, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.
//!
//! Two clocks run here. The wall clock advances on every step, paused or
//! not, and drives cooldowns, timers, and feedback ages. `SimTime` only
//! advances while a session is playing.

use std::collections::{HashMap, VecDeque};

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use sanctum_ai::profiles::get_profile;
use sanctum_core::commands::PlayerCommand;
use sanctum_core::components::{Enemy, GroundPosition, Vitals};
use sanctum_core::constants::*;
use sanctum_core::enums::{Archetype, GamePhase, WeaponId};
use sanctum_core::events::AudioEvent;
use sanctum_core::input::InputState;
use sanctum_core::state::GameStateSnapshot;
use sanctum_core::types::{lift, look_direction, EnemyId, SimTime};
use sanctum_core::weapons::weapon_config;
use sanctum_terrain::{floor_at, CollisionModel};

use crate::config::SimConfig;
use crate::scheduler::Scheduler;
use crate::session::{PlayerDamage, Session};
use crate::systems;
use crate::systems::spawner::SpawnGovernor;
use crate::world_setup;

/// Work deferred to a later wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// Refill the magazine of `weapon` if its reload is still current.
    ReloadComplete { weapon: WeaponId },
    /// Hide the muzzle flash if no later shot has re-lit it.
    MuzzleFlashOff,
    /// Pull a lunging enemy back to its ground position.
    LungeRevert { enemy: EnemyId },
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    enemy_index: HashMap<EnemyId, Entity>,
    next_enemy_id: u32,
    config: SimConfig,
    collision: CollisionModel,
    time: SimTime,
    wall_secs: f64,
    phase: GamePhase,
    rng: ChaCha8Rng,
    session: Session,
    scheduler: Scheduler<DeferredTask>,
    governor: SpawnGovernor,
    input: InputState,
    command_queue: VecDeque<PlayerCommand>,
    audio_events: Vec<AudioEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            enemy_index: HashMap::new(),
            next_enemy_id: 0,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            collision: CollisionModel::temple(),
            time: SimTime::default(),
            wall_secs: 0.0,
            phase: GamePhase::default(),
            session: Session::new(),
            scheduler: Scheduler::new(),
            governor: SpawnGovernor::new(0.0),
            input: InputState::default(),
            command_queue: VecDeque::new(),
            audio_events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Replace the held input state. The look delta is consumed by the next step.
    pub fn set_input(&mut self, input: InputState) {
        self.input = input;
    }

    /// Advance the simulation by one nominal tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.advance(DT)
    }

    /// Advance by `dt` seconds of wall time (clamped to `MAX_STEP_SECS`).
    pub fn advance(&mut self, dt: f64) -> GameStateSnapshot {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_STEP_SECS)
        } else {
            0.0
        };
        self.wall_secs += dt;

        self.process_commands();
        self.run_deferred();

        if self.phase == GamePhase::Playing {
            self.run_systems(dt as f32);
            self.time.advance(dt);
        }

        systems::feedback::cleanup(&mut self.session.feedback, self.wall_secs);

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.session,
            audio_events,
        )
    }

    /// Build a snapshot of the current state without stepping.
    /// Pending audio events are included but not drained.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.session,
            self.audio_events.clone(),
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Seconds of wall time stepped since the engine was created.
    pub fn wall_secs(&self) -> f64 {
        self.wall_secs
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn collision(&self) -> &CollisionModel {
        &self.collision
    }

    /// Number of live enemies.
    pub fn enemy_count(&self) -> usize {
        self.enemy_index.len()
    }

    /// Mutable session access for tests that need to stage a situation.
    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    // --- Session transitions ---

    /// Menu → playing with a fresh session.
    pub fn start(&mut self) {
        if self.phase != GamePhase::Menu {
            return;
        }
        self.begin_session();
        self.phase = GamePhase::Playing;
        info!(seed = self.config.seed, "session started");
    }

    /// Playing ↔ paused. Ignored in any other phase.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Playing => {
                self.phase = GamePhase::Paused;
                info!("paused");
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Playing;
                info!("resumed");
            }
            _ => {}
        }
    }

    /// Reinitialize the session and play from scratch, from any phase.
    pub fn reset(&mut self) {
        self.begin_session();
        self.phase = GamePhase::Playing;
        info!("session reset");
    }

    /// Abandon the session and return to the menu.
    pub fn return_to_menu(&mut self) {
        self.begin_session();
        self.phase = GamePhase::Menu;
        info!("returned to menu");
    }

    fn begin_session(&mut self) {
        self.world.clear();
        self.enemy_index.clear();
        self.scheduler.clear();
        self.session = Session::new();
        self.time = SimTime::default();
        self.governor = SpawnGovernor::new(self.wall_secs);
        self.input = InputState::default();
    }

    // --- Player vitals ---

    /// Damage the player. Reaching zero health ends the session.
    pub fn damage_player(&mut self, amount: u32) {
        if self.phase != GamePhase::Playing {
            return;
        }
        match self.session.damage(amount) {
            Some(PlayerDamage::Hurt) => {
                self.audio_events.push(AudioEvent::PlayerHurt { amount });
            }
            Some(PlayerDamage::Killed) => {
                self.audio_events.push(AudioEvent::PlayerHurt { amount });
                self.audio_events.push(AudioEvent::GameOver);
                self.phase = GamePhase::GameOver;
                info!(
                    score = self.session.score,
                    wave = self.session.wave,
                    "game over"
                );
            }
            None => {}
        }
    }

    pub fn heal_player(&mut self, amount: u32) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.session.heal(amount);
    }

    // --- Weapons ---

    /// Change the active weapon, cancelling any pending reload. Ammo is kept.
    pub fn switch_weapon(&mut self, weapon: WeaponId) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if let Some(cancelled) = self.session.armory.switch(weapon) {
            self.scheduler.cancel(cancelled.task);
            debug!(weapon = ?cancelled.weapon, "reload cancelled");
        }
        debug!(?weapon, "weapon switched");
    }

    /// Start reloading the active weapon. Returns false if not started.
    pub fn reload(&mut self) -> bool {
        if self.phase != GamePhase::Playing || !self.session.armory.can_reload() {
            return false;
        }
        let weapon = self.session.armory.active();
        let due = self.wall_secs + weapon_config(weapon).reload_secs;
        let task = self
            .scheduler
            .schedule(due, DeferredTask::ReloadComplete { weapon });
        self.session.armory.begin_reload(task);
        self.audio_events.push(AudioEvent::Reload { weapon });
        debug!(?weapon, "reload started");
        true
    }

    /// Pull the trigger once. Returns whether a round was fired.
    ///
    /// Rate-limited by the weapon's fire interval and blocked while
    /// reloading. An empty magazine starts a reload and clicks instead.
    pub fn fire(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        let now = self.wall_secs;
        let weapon = self.session.armory.active();
        let config = weapon_config(weapon);

        if let Some(last) = self.session.last_shot_secs {
            if now - last + FIRE_INTERVAL_EPSILON < config.fire_interval_secs {
                return false;
            }
        }
        if self.session.armory.is_reloading() {
            return false;
        }

        // Empty pulls click on the same cadence as shots.
        if !self.session.armory.consume_round() {
            self.audio_events.push(AudioEvent::Empty);
            self.session.last_shot_secs = Some(now);
            self.reload();
            return false;
        }

        self.session.last_shot_secs = Some(now);
        self.audio_events.push(AudioEvent::Shot { weapon });
        self.light_muzzle_flash();

        let body = self.session.player;
        let origin = body.position;
        let aim = look_direction(body.yaw, body.pitch);

        for _ in 0..config.pellets {
            let direction = systems::combat::perturb(aim, config.spread, &mut self.rng);
            let targets = systems::combat::collect_targets(&self.world);
            if let Some(hit) = systems::combat::resolve_pellet(origin, direction, &targets) {
                trace!(enemy = hit.id.0, distance = hit.distance, "pellet hit");
                self.session
                    .feedback
                    .push(systems::feedback::impact_particle(hit.point, now));
                self.audio_events.push(AudioEvent::Hit);
                self.damage_enemy(hit.id, config.damage);
            }
        }

        true
    }

    fn light_muzzle_flash(&mut self) {
        if let Some(previous) = self.session.muzzle_flash.take() {
            self.scheduler.cancel(previous);
        }
        let task = self.scheduler.schedule(
            self.wall_secs + MUZZLE_FLASH_SECS,
            DeferredTask::MuzzleFlashOff,
        );
        self.session.muzzle_flash = Some(task);
    }

    // --- Enemies ---

    /// Apply damage to an enemy. Unknown ids are ignored.
    ///
    /// A killed enemy is removed at once, its score value awarded, and the
    /// wave advanced by one if the score passed the threshold.
    pub fn damage_enemy(&mut self, id: EnemyId, damage: u32) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let Some(&entity) = self.enemy_index.get(&id) else {
            return;
        };
        let Ok((enemy, pos, vitals)) = self
            .world
            .query_one_mut::<(&Enemy, &GroundPosition, &mut Vitals)>(entity)
        else {
            return;
        };

        let chest = lift(pos.0, floor_at(pos.0) + ENEMY_CHEST_HEIGHT);
        let archetype = enemy.archetype;
        vitals.current = vitals.current.saturating_sub(damage);
        let killed = vitals.current == 0;

        self.session
            .feedback
            .push(systems::feedback::hit_marker(chest, self.wall_secs));

        if !killed {
            return;
        }

        // Despawning also drops any pending lunge; its revert becomes a no-op.
        let _ = self.world.despawn(entity);
        self.enemy_index.remove(&id);
        self.audio_events.push(AudioEvent::EnemyKilled);

        let points = get_profile(archetype).score_value;
        let advanced = self.session.award(points);
        debug!(enemy = id.0, ?archetype, score = self.session.score, "enemy killed");
        if advanced {
            let wave = self.session.wave;
            self.audio_events.push(AudioEvent::WaveAdvanced { wave });
            info!(wave, "wave advanced");
        }
    }

    /// Spawn a random enemy on the spawn ring. Skipped at the enemy cap.
    pub fn spawn_enemy(&mut self) -> Option<EnemyId> {
        if !self.can_spawn() {
            return None;
        }
        let id = self.allocate_enemy_id();
        let entity = world_setup::spawn_random_enemy(
            &mut self.world,
            &mut self.rng,
            &self.config,
            id,
            self.session.wave,
        );
        self.enemy_index.insert(id, entity);
        debug!(enemy = id.0, wave = self.session.wave, "enemy spawned");
        Some(id)
    }

    /// Spawn an enemy of a chosen archetype at a chosen ground position.
    /// Same phase and cap rules as `spawn_enemy`.
    pub fn spawn_enemy_at(&mut self, archetype: Archetype, position: Vec2) -> Option<EnemyId> {
        if !self.can_spawn() {
            return None;
        }
        let id = self.allocate_enemy_id();
        let entity =
            world_setup::spawn_enemy_at(&mut self.world, id, archetype, position, self.session.wave);
        self.enemy_index.insert(id, entity);
        debug!(enemy = id.0, ?archetype, "enemy placed");
        Some(id)
    }

    fn can_spawn(&self) -> bool {
        self.phase == GamePhase::Playing
            && self.enemy_index.len()
                < systems::spawner::enemy_cap(self.config.base_enemy_cap, self.session.wave)
    }

    fn allocate_enemy_id(&mut self) -> EnemyId {
        let id = EnemyId(self.next_enemy_id);
        self.next_enemy_id += 1;
        id
    }

    // --- Tick internals ---

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => self.start(),
            PlayerCommand::TogglePause => self.toggle_pause(),
            PlayerCommand::ResetGame => self.reset(),
            PlayerCommand::ReturnToMenu => self.return_to_menu(),
            PlayerCommand::FirePressed => {
                // Automatic weapons fire from the held trigger instead.
                if !weapon_config(self.session.armory.active()).automatic {
                    self.fire();
                }
            }
            PlayerCommand::Reload => {
                self.reload();
            }
            PlayerCommand::SwitchWeapon { weapon } => self.switch_weapon(weapon),
            PlayerCommand::SelectSlot { slot } => {
                if let Some(weapon) = WeaponId::from_slot(slot) {
                    self.switch_weapon(weapon);
                }
            }
            PlayerCommand::Jump => {
                if self.phase == GamePhase::Playing {
                    systems::player::jump(&mut self.session.player, self.config.jump_impulse);
                }
            }
        }
    }

    /// Run every deferred task that has come due. Stale tasks do nothing.
    fn run_deferred(&mut self) {
        for (task_id, task) in self.scheduler.drain_due(self.wall_secs) {
            match task {
                DeferredTask::ReloadComplete { weapon } => {
                    if self.session.armory.complete_reload(task_id, weapon) {
                        debug!(?weapon, "reload complete");
                    }
                }
                DeferredTask::MuzzleFlashOff => {
                    if self.session.muzzle_flash == Some(task_id) {
                        self.session.muzzle_flash = None;
                    }
                }
                DeferredTask::LungeRevert { enemy } => {
                    if let Some(&entity) = self.enemy_index.get(&enemy) {
                        systems::enemy_ai::revert_lunge(&mut self.world, entity, task_id);
                    }
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Look and movement
        let look_delta = std::mem::take(&mut self.input.look_delta);
        systems::player::apply_look(
            &mut self.session.player,
            look_delta,
            self.config.look_sensitivity,
        );
        systems::player::step(
            &mut self.session.player,
            &self.input,
            &self.collision,
            &self.config,
            dt,
        );

        // 2. Held trigger on automatic weapons
        if self.input.fire_held && weapon_config(self.session.armory.active()).automatic {
            self.fire();
        }

        // 3. Spawn governor
        if self
            .governor
            .attempt_due(self.wall_secs, self.config.spawn_interval_secs)
            && systems::spawner::roll_spawn(&mut self.rng, self.config.spawn_chance)
        {
            self.spawn_enemy();
        }

        // 4. Enemy pursuit and melee
        let hits = systems::enemy_ai::run(
            &mut self.world,
            &mut self.scheduler,
            self.session.player.position,
            self.wall_secs,
            dt,
        );
        for hit in hits {
            trace!(enemy = hit.enemy.0, damage = hit.damage, "melee hit");
            self.damage_player(hit.damage);
        }
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
