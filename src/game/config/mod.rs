//! Config Module
//!
//! Client configuration: server, room, movement tuning and building layout.

pub mod game_config;

pub use game_config::{BuildingSpec, ConfigError, DEFAULT_SERVER_URL, GameConfig};
