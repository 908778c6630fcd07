//! Core types and definitions for the SANCTUM arena simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, input state, snapshots, events, the weapon
//! catalog, and constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;
pub mod weapons;

#[cfg(test)]
mod tests;
