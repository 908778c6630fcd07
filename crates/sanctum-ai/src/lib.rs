//! Enemy behavior for SANCTUM.
//!
//! Archetype profiles plus pure steering and melee decisions
//! computed from plain data. No ECS dependency.

pub mod behavior;
pub mod profiles;

pub use sanctum_core as core;
