//! Pointer-Look Module
//!
//! First-person look angles driven directly by pointer motion while the
//! pointer is captured. No smoothing: every pixel of motion maps straight to
//! an angle change.
//!
//! # Conventions
//!
//! - Yaw rotates counter-clockwise about +Y. Moving the pointer right
//!   DECREASES yaw, which turns the view to the right.
//! - Vertical sensitivity is half the horizontal one.
//! - Pitch is positive up and clamped to a small window (±5° by default) so
//!   the view stays close to the horizon.
//! - At yaw = 0, pitch = 0 the view looks toward -Z.

use glam::Vec3;

/// Default pitch limit: π/36 radians (5 degrees) either side of the horizon.
pub const PITCH_LIMIT: f32 = std::f32::consts::PI / 36.0;

/// Default pointer sensitivity in radians per pixel.
pub const POINTER_SENSITIVITY: f32 = 0.003;

/// Yaw/pitch of the local player's view.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LookAngles {
    /// Horizontal angle (radians), unrestricted
    pub yaw: f32,
    /// Vertical angle (radians), kept within the pitch limit
    pub pitch: f32,
}

impl LookAngles {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// Apply a pointer delta in pixels.
    ///
    /// # Arguments
    /// * `dx` - Horizontal motion. Positive = pointer moved right = turn right
    /// * `dy` - Vertical motion. Positive = pointer moved down = look down
    /// * `sensitivity` - Radians per pixel horizontally; vertical uses half
    /// * `pitch_limit` - Pitch is clamped to `[-pitch_limit, pitch_limit]`
    pub fn apply_pointer_delta(&mut self, dx: f32, dy: f32, sensitivity: f32, pitch_limit: f32) {
        self.yaw -= dx * sensitivity;
        self.pitch -= dy * (sensitivity / 2.0);
        self.pitch = self.pitch.clamp(-pitch_limit, pitch_limit);
    }

    /// Forward on the ground plane: camera -Z rotated by yaw only.
    ///
    /// Pitch never tilts horizontal movement.
    #[inline]
    pub fn flat_forward(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Right on the ground plane: camera +X rotated by yaw only.
    #[inline]
    pub fn flat_right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    /// Unit view direction from yaw and pitch.
    #[inline]
    pub fn look_direction(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(
            -self.yaw.sin() * cos_pitch,
            sin_pitch,
            -self.yaw.cos() * cos_pitch,
        )
    }

    /// Yaw the player model is given so it faces the look direction's
    /// horizontal projection: `atan2(look.x, look.z)`.
    #[inline]
    pub fn body_yaw(&self) -> f32 {
        let look = self.look_direction();
        look.x.atan2(look.z)
    }
}
