//! Physics module for the GalaxyWar client
//!
//! Hand-rolled collision for the local player against static buildings.
//! No physics library: every building is an axis-aligned box and the player
//! is a unit cube, so overlap tests are a handful of comparisons.
//!
//! # Unit System
//!
//! The reference game works in scene units per rendered frame rather than SI
//! units per second. Speeds, jump velocity and gravity in
//! [`crate::player::MovementConfig`] are all per nominal frame.
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types re-exported from glam
//! - [`collision`] - AABB overlap tests and the insertion-ordered volume set

pub mod collision;
pub mod types;

// Re-export commonly used types at the physics module level
pub use collision::{Aabb, CollisionVolume, CollisionWorld, PLAYER_BOX_EXTENT};
pub use types::{Vec2, Vec3};
