//! SANCTUM headless host.
//!
//! Runs the simulation on a fixed-rate loop thread and exposes it
//! through a channel-backed control handle.

pub mod error;
pub mod game_loop;
pub mod handle;
pub mod state;

pub use error::AppError;
pub use handle::SimulationHandle;
pub use sanctum_core as core;
