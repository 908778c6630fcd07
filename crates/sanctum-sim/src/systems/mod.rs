//! Systems that operate on the simulation each tick.
//!
//! Systems are free functions over the world and session state.
//! They do not own state: enemy state lives in components, everything
//! else in the engine's `Session`.

pub mod combat;
pub mod enemy_ai;
pub mod feedback;
pub mod player;
pub mod snapshot;
pub mod spawner;
