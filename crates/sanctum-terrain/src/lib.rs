//! Static level model for SANCTUM.
//!
//! Floor elevation over the multi-level temple courts and the
//! axis-aligned wall set with its gate exceptions.

pub use sanctum_core as core;

pub mod collision;
pub mod floor;

// Re-export key types for convenience.
pub use collision::{Aabb, CollisionModel, GateZone};
pub use floor::{floor_at, floor_height, region_at, Region};
