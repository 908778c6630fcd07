//! Simulation engine for SANCTUM.
//!
//! Owns the hecs ECS world holding the enemy roster, runs systems every
//! step, and produces GameStateSnapshots for presentation.

pub mod armory;
pub mod config;
pub mod engine;
pub mod scheduler;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use config::{ConfigError, SimConfig};
pub use engine::{DeferredTask, SimulationEngine};
pub use sanctum_core as core;
