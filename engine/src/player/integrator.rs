//! Player Movement Integrator
//!
//! Advances the local player's kinematic state by one rendered frame:
//! look update, camera-relative horizontal movement, AABB collision against
//! buildings, jump/gravity integration, arena bounds and model facing.
//!
//! # Physics Model
//!
//! - Every rate is per nominal frame. [`TickScale::FRAME`] integrates exactly
//!   one frame; other scales multiply speed, velocity and gravity linearly.
//! - Direction keys compose additively and are NOT normalized: holding
//!   forward and right moves `speed * sqrt(2)` per frame.
//! - Buildings are scanned in insertion order and the first intersecting one
//!   decides the outcome, not the nearest.
//! - Explicit Euler for the vertical axis: position uses the velocity from
//!   the start of the frame, then gravity is applied.
//!
//! # Usage
//!
//! ```rust,ignore
//! use galaxy_war_engine::player::{advance, KinematicState, MovementConfig, TickScale};
//!
//! let config = MovementConfig::default();
//! let mut state = KinematicState::spawn();
//!
//! // Each frame:
//! let input = collector.sample();
//! state = advance(&state, &input, &world, &config, TickScale::FRAME);
//! ```

use glam::Vec3;
use static_assertions::assert_impl_all;

use super::config::MovementConfig;
use crate::camera::LookAngles;
use crate::input::{InputState, MovementKeys};
use crate::physics::{Aabb, CollisionWorld, PLAYER_BOX_EXTENT};

/// Refresh rate the per-frame tuning was authored against.
pub const NOMINAL_FRAME_RATE: f32 = 60.0;

/// Upper bound on a single tick, in frames. Long stalls (tab in background)
/// would otherwise tunnel through roofs.
pub const MAX_TICK_SCALE: f32 = 6.0;

/// How much simulated time one call to [`advance`] covers, in nominal frames.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TickScale(f32);

impl TickScale {
    /// Exactly one nominal frame.
    pub const FRAME: TickScale = TickScale(1.0);

    /// Scale from a frame count, clamped to `[0, MAX_TICK_SCALE]`.
    pub fn frames(frames: f32) -> Self {
        Self(frames.clamp(0.0, MAX_TICK_SCALE))
    }

    /// Scale from elapsed wall time at the given nominal rate.
    pub fn from_seconds(seconds: f32, nominal_hz: f32) -> Self {
        Self::frames(seconds * nominal_hz)
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for TickScale {
    fn default() -> Self {
        Self::FRAME
    }
}

/// Position, vertical motion and orientation of the local player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    /// Player position; the collision box base sits at `position.y`
    pub position: Vec3,
    /// Positive = upward
    pub vertical_velocity: f32,
    /// Subject to gravity rather than resting on the floor or a roof
    pub airborne: bool,
    /// Look yaw in radians
    pub facing_yaw: f32,
    /// Look pitch in radians, within the configured pitch limit
    pub facing_pitch: f32,
    /// Yaw of the player model, derived from the look direction each tick
    pub body_yaw: f32,
}

assert_impl_all!(KinematicState: Copy, Send, Sync);

impl Default for KinematicState {
    fn default() -> Self {
        Self::spawn()
    }
}

impl KinematicState {
    /// State at match start: origin, grounded, at rest, looking down -Z.
    pub fn spawn() -> Self {
        Self::at(Vec3::ZERO)
    }

    /// Grounded and at rest at `position`.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            vertical_velocity: 0.0,
            airborne: false,
            facing_yaw: 0.0,
            facing_pitch: 0.0,
            body_yaw: 0.0,
        }
    }

    /// Grounded on the floor at the arena origin.
    pub fn on_floor(config: &MovementConfig) -> Self {
        Self::at(Vec3::new(0.0, config.floor_rest_height(), 0.0))
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        !self.airborne
    }

    #[inline]
    pub fn look(&self) -> LookAngles {
        LookAngles::new(self.facing_yaw, self.facing_pitch)
    }

    fn land(&mut self, y: f32) {
        self.position.y = y;
        self.airborne = false;
        self.vertical_velocity = 0.0;
    }
}

/// Sum of the held direction contributions for one frame, before collision.
///
/// Each held key adds `±speed` along the yaw-only forward or right vector.
pub fn horizontal_displacement(look: &LookAngles, keys: &MovementKeys, speed: f32) -> Vec3 {
    let forward = look.flat_forward();
    let right = look.flat_right();

    let mut displacement = Vec3::ZERO;
    if keys.forward {
        displacement += forward * speed;
    }
    if keys.backward {
        displacement += forward * -speed;
    }
    if keys.left {
        displacement += right * -speed;
    }
    if keys.right {
        displacement += right * speed;
    }
    displacement
}

/// Advance the player by one tick.
///
/// Pure: the result depends only on the arguments. Never fails; a malformed
/// configuration or building is a caller bug caught by
/// [`MovementConfig::validate`] at load time.
pub fn advance(
    state: &KinematicState,
    input: &InputState,
    world: &CollisionWorld,
    config: &MovementConfig,
    dt: TickScale,
) -> KinematicState {
    let scale = dt.get();
    let tolerance = config.landing_tolerance;
    let rest_height = config.floor_rest_height();
    let mut next = *state;

    let was_on_roof = !state.airborne
        && world
            .supporting(&Aabb::player_box(state.position, PLAYER_BOX_EXTENT), state.position.y, tolerance)
            .is_some();

    // Look
    let mut look = state.look();
    look.apply_pointer_delta(
        input.look_delta.x,
        input.look_delta.y,
        config.pointer_sensitivity,
        config.pitch_limit,
    );
    next.facing_yaw = look.yaw;
    next.facing_pitch = look.pitch;

    // Horizontal move against buildings
    let displacement = horizontal_displacement(&look, &input.movement, config.speed) * scale;
    let candidate = next.position + displacement;
    let candidate_box = Aabb::player_box(candidate, PLAYER_BOX_EXTENT);

    match world.first_intersecting(&candidate_box) {
        Some(volume) => {
            let top = volume.top();
            if next.position.y >= top - tolerance && next.vertical_velocity <= 0.0 {
                log::trace!("stepped onto roof at y={top}");
                next.position = candidate;
                next.land(top);
            } else {
                log::trace!("side collision at {candidate:?}, holding position");
            }
        }
        None => next.position = candidate,
    }

    // Vertical
    if next.airborne {
        let prev_y = next.position.y;
        let step_velocity = next.vertical_velocity;
        next.position.y += step_velocity * scale;
        next.vertical_velocity -= config.gravity * scale;

        let footprint = Aabb::player_box(next.position, PLAYER_BOX_EXTENT);
        let roof = if step_velocity <= 0.0 {
            world
                .landing_surface(&footprint, prev_y, next.position.y, tolerance)
                .map(|v| v.top())
        } else {
            None
        };

        if let Some(top) = roof {
            log::trace!("landed on roof at y={top}");
            next.land(top);
        } else if next.position.y <= rest_height {
            log::trace!("landed on floor");
            next.land(rest_height);
        }
    } else if was_on_roof {
        // Only leaving a roof starts a fall; a grounded player elsewhere keeps its height
        let footprint = Aabb::player_box(next.position, PLAYER_BOX_EXTENT);
        if world.supporting(&footprint, next.position.y, tolerance).is_none() {
            log::trace!("walked off roof at y={}, falling", next.position.y);
            next.airborne = true;
            next.vertical_velocity = 0.0;
        }
    }

    if input.jump && !next.airborne {
        log::debug!("jump from y={}", next.position.y);
        next.airborne = true;
        next.vertical_velocity = config.jump_speed;
    }

    // Arena bounds, floor as the lower limit
    next.position = config.clamp_horizontal(next.position);
    next.position.y = next.position.y.max(rest_height);

    next.body_yaw = look.body_yaw();
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::CollisionVolume;
    use glam::Vec2;

    const EPS: f32 = 1e-5;

    fn keys(forward: bool, backward: bool, left: bool, right: bool) -> MovementKeys {
        MovementKeys {
            forward,
            backward,
            left,
            right,
        }
    }

    fn held(movement: MovementKeys) -> InputState {
        InputState::with_movement(movement)
    }

    fn jump() -> InputState {
        InputState {
            jump: true,
            ..InputState::default()
        }
    }

    /// Building with a roof at y = 2.0 covering x, z in [-1, 1].
    fn tower() -> CollisionVolume {
        CollisionVolume::building(0.0, 0.0, 2.0, 2.0, 3.0, -1.0)
    }

    #[test]
    fn test_tick_scale_clamps() {
        assert_eq!(TickScale::FRAME.get(), 1.0);
        assert_eq!(TickScale::frames(-1.0).get(), 0.0);
        assert_eq!(TickScale::frames(100.0).get(), MAX_TICK_SCALE);
        assert!((TickScale::from_seconds(1.0 / 60.0, NOMINAL_FRAME_RATE).get() - 1.0).abs() < EPS);
        assert_eq!(TickScale::default(), TickScale::FRAME);
    }

    #[test]
    fn test_spawn_state() {
        let state = KinematicState::spawn();
        assert_eq!(state.position, Vec3::ZERO);
        assert!(state.is_grounded());
        assert_eq!(state.vertical_velocity, 0.0);
    }

    #[test]
    fn test_displacement_composes_without_normalizing() {
        let look = LookAngles::default();
        let d = horizontal_displacement(&look, &keys(true, false, false, true), 0.1);
        assert!((d.length() - 0.1 * std::f32::consts::SQRT_2).abs() < EPS);
        assert_eq!(d.y, 0.0);

        let cancel = horizontal_displacement(&look, &keys(true, true, true, true), 0.1);
        assert!(cancel.length() < EPS);
    }

    #[test]
    fn test_pitch_does_not_tilt_movement() {
        let look = LookAngles::new(0.4, 0.08);
        let d = horizontal_displacement(&look, &keys(true, false, false, false), 0.1);
        assert_eq!(d.y, 0.0);
        assert!((d.length() - 0.1).abs() < EPS);
    }

    #[test]
    fn test_half_tick_moves_half_as_far() {
        let config = MovementConfig::default();
        let world = CollisionWorld::default();
        let start = KinematicState::on_floor(&config);
        let input = held(keys(true, false, false, false));

        let next = advance(&start, &input, &world, &config, TickScale::frames(0.5));
        assert!((next.position.z - (-0.05)).abs() < EPS);
    }

    #[test]
    fn test_look_delta_applied_every_tick() {
        let config = MovementConfig::default();
        let world = CollisionWorld::default();
        let input = InputState {
            look_delta: Vec2::new(10.0, -1000.0),
            ..InputState::default()
        };
        let next = advance(&KinematicState::on_floor(&config), &input, &world, &config, TickScale::FRAME);
        assert!((next.facing_yaw - (-0.03)).abs() < EPS);
        assert_eq!(next.facing_pitch, config.pitch_limit);
    }

    #[test]
    fn test_grounded_with_roof_support_does_not_fall() {
        let config = MovementConfig::default();
        let world = CollisionWorld::new(vec![tower()]);
        let on_roof = KinematicState::at(Vec3::new(0.0, 2.0, 0.0));

        let next = advance(&on_roof, &InputState::default(), &world, &config, TickScale::FRAME);
        assert!(next.is_grounded());
        assert_eq!(next.position, on_roof.position);
    }

    #[test]
    fn test_step_up_onto_low_roof() {
        // A curb whose roof is within the landing tolerance of the floor rest height
        let config = MovementConfig::default();
        let curb = CollisionVolume::new(Vec3::new(0.55, -1.0, -1.0), Vec3::new(3.0, -0.45, 1.0));
        let world = CollisionWorld::new(vec![curb]);
        let start = KinematicState::on_floor(&config);

        let next = advance(&start, &held(keys(false, false, false, true)), &world, &config, TickScale::FRAME);
        assert!((next.position.x - 0.1).abs() < EPS);
        assert_eq!(next.position.y, -0.45);
        assert!(next.is_grounded());
    }

    #[test]
    fn test_ascending_player_is_blocked_not_snapped() {
        let config = MovementConfig::default();
        let world = CollisionWorld::new(vec![tower()]);
        // Rising past the roof edge, right next to the wall
        let state = KinematicState {
            position: Vec3::new(-1.45, 1.95, 0.0),
            vertical_velocity: 0.2,
            airborne: true,
            ..KinematicState::spawn()
        };

        let next = advance(&state, &held(keys(false, false, false, true)), &world, &config, TickScale::FRAME);
        assert_eq!(next.position.x, -1.45);
        assert!(next.airborne);
        assert!((next.position.y - 2.15).abs() < EPS);
    }

    #[test]
    fn test_grounded_above_floor_without_roof_keeps_height() {
        let config = MovementConfig::default();
        let world = CollisionWorld::default();
        let mut state = KinematicState::spawn();
        for _ in 0..20 {
            state = advance(&state, &InputState::default(), &world, &config, TickScale::FRAME);
        }
        assert_eq!(state.position, Vec3::ZERO);
        assert!(state.is_grounded());
    }

    #[test]
    fn test_jump_ignored_while_airborne() {
        let config = MovementConfig::default();
        let world = CollisionWorld::default();
        let state = KinematicState {
            position: Vec3::new(0.0, 1.0, 0.0),
            vertical_velocity: -0.05,
            airborne: true,
            ..KinematicState::spawn()
        };
        let next = advance(&state, &jump(), &world, &config, TickScale::FRAME);
        assert!((next.vertical_velocity - (-0.06)).abs() < EPS);
    }
}
