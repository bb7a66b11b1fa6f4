//! Game Configuration
//!
//! Everything a client needs to join a match, loadable from a JSON file.
//! Every field has a default, so an empty object `{}` is a valid config;
//! unknown fields are rejected so typos surface at load time.
//!
//! ```json
//! {
//!   "server_url": "http://localhost:3000",
//!   "room_id": "galaxy-1",
//!   "movement": { "speed": 0.1, "jump_speed": 0.3 },
//!   "buildings": [
//!     { "x": 5.0, "z": -4.0, "width": 2.0, "depth": 2.0, "height": 3.0 }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::physics::{CollisionVolume, CollisionWorld};
use crate::player::{MovementConfig, MovementConfigError};

/// Room server the reference client connects to.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid movement settings: {0}")]
    Movement(#[from] MovementConfigError),
    #[error("building {index}: {reason}")]
    Building { index: usize, reason: String },
}

/// A box-shaped building standing on the floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildingSpec {
    /// Footprint center X
    pub x: f32,
    /// Footprint center Z
    pub z: f32,
    pub width: f32,
    pub depth: f32,
    /// Height above the floor
    pub height: f32,
}

impl BuildingSpec {
    pub fn to_volume(&self, floor_y: f32) -> CollisionVolume {
        CollisionVolume::building(self.x, self.z, self.width, self.depth, self.height, floor_y)
    }

    fn check(&self) -> Result<(), String> {
        let values = [self.x, self.z, self.width, self.depth, self.height];
        if values.iter().any(|v| !v.is_finite()) {
            return Err("values must be finite".into());
        }
        if self.width <= 0.0 || self.depth <= 0.0 || self.height <= 0.0 {
            return Err(format!(
                "extent must be positive, got {}x{}x{}",
                self.width, self.depth, self.height
            ));
        }
        Ok(())
    }
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub server_url: String,
    /// Room to join; `None` asks the server to create one
    pub room_id: Option<String>,
    pub movement: MovementConfig,
    /// Buildings in collision order
    pub buildings: Vec<BuildingSpec>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            room_id: None,
            movement: MovementConfig::default(),
            buildings: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        log::info!(
            "loaded config from {} ({} building(s))",
            path.display(),
            config.buildings.len()
        );
        Ok(config)
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.movement.validate()?;
        for (index, building) in self.buildings.iter().enumerate() {
            building
                .check()
                .map_err(|reason| ConfigError::Building { index, reason })?;
        }
        Ok(())
    }

    /// Collision volumes for the configured buildings, in file order.
    pub fn collision_world(&self) -> CollisionWorld {
        self.buildings
            .iter()
            .map(|b| b.to_volume(self.movement.floor_y))
            .collect()
    }
}
