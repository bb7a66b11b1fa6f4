//! Movement Configuration
//!
//! Immutable tuning for the local player. `Default` returns the values the
//! reference game ships with. All rates are per nominal rendered frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::{PITCH_LIMIT, POINTER_SENSITIVITY};

/// Horizontal speed in units per frame
pub const PLAYER_SPEED: f32 = 0.1;

/// Upward velocity given by a jump, in units per frame
pub const JUMP_SPEED: f32 = 0.3;

/// Gravity in units per frame per frame
pub const GRAVITY: f32 = 0.01;

/// Y of the arena floor plane
pub const FLOOR_Y: f32 = -1.0;

/// Half the player's height; the player rests at `FLOOR_Y + HALF_HEIGHT`
pub const HALF_HEIGHT: f32 = 0.5;

/// The arena spans `[-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT]` on X and Z
pub const ARENA_HALF_EXTENT: f32 = 10.0;

/// How far below a roof the player may be and still land on it
pub const LANDING_TOLERANCE: f32 = 0.1;

/// Invalid movement tuning, reported when a configuration is loaded.
#[derive(Debug, Error, PartialEq)]
pub enum MovementConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("half_height must be positive, got {0}")]
    NonPositiveHalfHeight(f32),
    #[error("{axis} bounds are inverted: min {min} > max {max}")]
    InvertedBounds { axis: &'static str, min: f32, max: f32 },
    #[error("pitch_limit must be below a quarter turn, got {0}")]
    PitchLimitTooLarge(f32),
}

/// Tuning for the movement integrator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MovementConfig {
    /// Horizontal displacement per held direction key, per frame
    pub speed: f32,
    /// Vertical velocity at jump launch
    pub jump_speed: f32,
    /// Subtracted from vertical velocity each airborne frame
    pub gravity: f32,
    /// Y of the floor plane
    pub floor_y: f32,
    /// Half the player's height
    pub half_height: f32,
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
    /// Radians of yaw per pixel of pointer motion (pitch uses half)
    pub pointer_sensitivity: f32,
    /// Pitch is clamped to `[-pitch_limit, pitch_limit]`
    pub pitch_limit: f32,
    /// Landing window below a roof
    pub landing_tolerance: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            jump_speed: JUMP_SPEED,
            gravity: GRAVITY,
            floor_y: FLOOR_Y,
            half_height: HALF_HEIGHT,
            min_x: -ARENA_HALF_EXTENT,
            max_x: ARENA_HALF_EXTENT,
            min_z: -ARENA_HALF_EXTENT,
            max_z: ARENA_HALF_EXTENT,
            pointer_sensitivity: POINTER_SENSITIVITY,
            pitch_limit: PITCH_LIMIT,
            landing_tolerance: LANDING_TOLERANCE,
        }
    }
}

impl MovementConfig {
    /// Y at which a grounded player rests on the floor.
    #[inline]
    pub fn floor_rest_height(&self) -> f32 {
        self.floor_y + self.half_height
    }

    /// Clamp X and Z into the arena independently. Y is untouched.
    #[inline]
    pub fn clamp_horizontal(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            position.x.clamp(self.min_x, self.max_x),
            position.y,
            position.z.clamp(self.min_z, self.max_z),
        )
    }

    /// Check the preconditions the integrator relies on.
    pub fn validate(&self) -> Result<(), MovementConfigError> {
        let fields = [
            ("speed", self.speed),
            ("jump_speed", self.jump_speed),
            ("gravity", self.gravity),
            ("floor_y", self.floor_y),
            ("half_height", self.half_height),
            ("min_x", self.min_x),
            ("max_x", self.max_x),
            ("min_z", self.min_z),
            ("max_z", self.max_z),
            ("pointer_sensitivity", self.pointer_sensitivity),
            ("pitch_limit", self.pitch_limit),
            ("landing_tolerance", self.landing_tolerance),
        ];
        if let Some(&(field, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(MovementConfigError::NotFinite { field, value });
        }

        let non_negative = [
            ("speed", self.speed),
            ("jump_speed", self.jump_speed),
            ("gravity", self.gravity),
            ("pitch_limit", self.pitch_limit),
            ("landing_tolerance", self.landing_tolerance),
        ];
        if let Some(&(field, value)) = non_negative.iter().find(|(_, v)| *v < 0.0) {
            return Err(MovementConfigError::Negative { field, value });
        }

        if self.half_height <= 0.0 {
            return Err(MovementConfigError::NonPositiveHalfHeight(self.half_height));
        }
        if self.min_x > self.max_x {
            return Err(MovementConfigError::InvertedBounds {
                axis: "x",
                min: self.min_x,
                max: self.max_x,
            });
        }
        if self.min_z > self.max_z {
            return Err(MovementConfigError::InvertedBounds {
                axis: "z",
                min: self.min_z,
                max: self.max_z,
            });
        }
        if self.pitch_limit >= std::f32::consts::FRAC_PI_2 {
            return Err(MovementConfigError::PitchLimitTooLarge(self.pitch_limit));
        }
        Ok(())
    }
}
