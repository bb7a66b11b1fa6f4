//! Player Module
//!
//! Local player movement.
//!
//! # Components
//!
//! - [`MovementConfig`] - Speed, jump, gravity, floor and arena bounds
//! - [`KinematicState`] - Position, vertical velocity, airborne flag, facing
//! - [`advance`] - The per-tick movement integrator
//! - [`TickScale`] - How many nominal frames one tick covers

pub mod config;
pub mod integrator;

pub use config::{
    MovementConfig, MovementConfigError,
    PLAYER_SPEED, JUMP_SPEED, GRAVITY, FLOOR_Y, HALF_HEIGHT, ARENA_HALF_EXTENT, LANDING_TOLERANCE,
};
pub use integrator::{
    KinematicState, TickScale, advance, horizontal_displacement,
    NOMINAL_FRAME_RATE, MAX_TICK_SCALE,
};
