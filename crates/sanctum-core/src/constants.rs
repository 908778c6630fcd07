//! Simulation constants and tuning parameters.

/// Nominal simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per nominal tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Largest delta the engine will integrate in one step (seconds).
pub const MAX_STEP_SECS: f64 = 0.1;

// --- Session ---

/// Player health at session start and the upper clamp.
pub const MAX_HEALTH: u32 = 100;

/// Score required per wave before the next wave begins.
pub const SCORE_PER_WAVE: u32 = 500;

// --- Player movement ---

/// Horizontal acceleration from held movement keys (units/s²).
pub const MOVE_SPEED: f32 = 250.0;

/// Horizontal exponential-decay friction coefficient (1/s).
pub const FRICTION: f32 = 8.0;

/// Downward acceleration (units/s²).
pub const GRAVITY: f32 = 25.0;

/// Upward velocity applied by a jump.
pub const JUMP_IMPULSE: f32 = 8.0;

/// Camera height above the floor.
pub const EYE_HEIGHT: f32 = 1.8;

/// Per-tick blend factor toward the floor target when grounded.
pub const STAIR_BLEND: f32 = 0.25;

/// Distance from the floor target below which the camera snaps.
pub const SNAP_EPSILON: f32 = 0.05;

/// Absolute clamp on player X and Z.
pub const WORLD_BOUND: f32 = 200.0;

/// Radians of look rotation per unit of pointer delta.
pub const LOOK_SENSITIVITY: f32 = 0.002;

/// Pitch limit, just short of straight up/down.
pub const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Initial camera position (east entrance of the women's court).
pub const PLAYER_SPAWN: [f32; 3] = [0.0, 5.0, 120.0];

// --- Firing ---

/// Tolerance on fire-interval checks against the accumulated wall clock (seconds).
pub const FIRE_INTERVAL_EPSILON: f64 = 1e-6;

/// Muzzle flash visibility after a shot (seconds).
pub const MUZZLE_FLASH_SECS: f64 = 0.05;

/// Perpendicular distance under which a ray hits an enemy.
pub const HIT_RADIUS: f32 = 1.0;

/// Height of an enemy's hit-test point above its floor.
pub const ENEMY_CHEST_HEIGHT: f32 = 1.5;

// --- Feedback ---

/// Lifetime of impact particles (seconds).
pub const PARTICLE_LIFETIME_SECS: f64 = 0.5;

/// Lifetime of the crosshair hit marker (seconds).
pub const HIT_MARKER_LIFETIME_SECS: f64 = 0.1;

/// Color of blood impact particles.
pub const IMPACT_COLOR: &str = "#ff0000";

// --- Enemy behavior ---

/// Radius inside which enemies push each other apart.
pub const SEPARATION_RADIUS: f32 = 2.5;

/// Weight of separation relative to pursuit.
pub const SEPARATION_WEIGHT: f32 = 3.0;

/// Distance to the player at which enemies stop and strike.
pub const MELEE_RANGE: f32 = 2.5;

/// Seconds between melee strikes.
pub const ATTACK_COOLDOWN_SECS: f64 = 1.2;

/// Forward lunge distance on a strike (visual only).
pub const LUNGE_DISTANCE: f32 = 0.5;

/// Seconds before a lunge is reverted.
pub const LUNGE_REVERT_SECS: f64 = 0.2;

// --- Spawn governor ---

/// Seconds between spawn attempts.
pub const SPAWN_INTERVAL_SECS: f64 = 2.5;

/// Probability that a spawn attempt produces an enemy.
pub const SPAWN_CHANCE: f64 = 0.7;

/// Inner radius of the spawn ring.
pub const SPAWN_RING_MIN: f32 = 80.0;

/// Outer radius of the spawn ring.
pub const SPAWN_RING_MAX: f32 = 100.0;

/// Enemy cap at wave 0; the live cap is this plus the wave number.
pub const BASE_ENEMY_CAP: u32 = 10;

/// Probability a spawned enemy is a captain.
pub const CAPTAIN_CHANCE: f64 = 0.1;
