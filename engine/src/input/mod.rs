//! Input Module
//!
//! Collects keyboard and pointer events between frames and hands the
//! integrator one immutable [`InputState`] per tick.
//!
//! # Example
//!
//! ```rust,ignore
//! use galaxy_war_engine::input::InputCollector;
//!
//! let mut input = InputCollector::new();
//!
//! // From DOM event handlers
//! input.handle_key_event("w", true);
//! input.handle_key_event(" ", true);
//! input.handle_pointer_motion(12.0, -3.0);
//!
//! // Once per frame
//! let tick = input.sample();
//! assert!(tick.movement.forward);
//! assert!(tick.jump);
//! ```

pub mod keyboard;
pub mod pointer;

use glam::Vec2;

// Re-export commonly used types at module level
pub use keyboard::{JumpTrigger, KeyCode, MovementKeys};
pub use pointer::PointerDelta;

/// Input for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    /// Held direction flags
    pub movement: MovementKeys,
    /// One-shot jump request, already debounced by the input layer
    pub jump: bool,
    /// Pointer motion in pixels since the previous tick
    pub look_delta: Vec2,
}

impl InputState {
    /// Only the given movement flags, no jump, no look motion.
    pub fn with_movement(movement: MovementKeys) -> Self {
        Self {
            movement,
            ..Self::default()
        }
    }
}

/// Event-side input state, sampled into an [`InputState`] once per tick.
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    pub movement: MovementKeys,
    pub jump: JumpTrigger,
    pub pointer: PointerDelta,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a DOM key event by `KeyboardEvent.key` name.
    ///
    /// Returns `true` if the key is one the match reacts to.
    pub fn handle_key_event(&mut self, key_name: &str, pressed: bool) -> bool {
        let key = KeyCode::from_key_name(key_name);
        if key == KeyCode::Space {
            if pressed {
                self.jump.press();
            } else {
                self.jump.release();
            }
            return true;
        }
        self.movement.handle_key(key, pressed)
    }

    /// Handle a pointer motion event (`movementX`, `movementY`).
    pub fn handle_pointer_motion(&mut self, dx: f32, dy: f32) {
        self.pointer.accumulate(dx, dy);
    }

    /// Pointer lock changed. Losing the lock drops motion not yet sampled.
    pub fn set_pointer_captured(&mut self, captured: bool) {
        if !captured {
            self.pointer.reset();
        }
    }

    /// Build this tick's input. Consumes the jump request and pointer motion;
    /// held keys stay held.
    pub fn sample(&mut self) -> InputState {
        InputState {
            movement: self.movement,
            jump: self.jump.take(),
            look_delta: self.pointer.consume(),
        }
    }

    /// Release everything, e.g. when the page loses focus.
    pub fn reset(&mut self) {
        self.movement.reset();
        self.jump.reset();
        self.pointer.reset();
    }
}
