//! Physics type re-exports from glam
//!
//! Positions and displacements are `Vec3`; pointer deltas are `Vec2`.

pub use glam::{Vec2, Vec3};
