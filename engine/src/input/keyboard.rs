//! Keyboard Input Module
//!
//! Held movement flags and the jump trigger. Keys arrive as DOM
//! `KeyboardEvent.key` names ("w", "ArrowUp", " ") and are mapped onto a small
//! generic key set, so nothing here depends on a windowing system.

/// Generic key codes for the keys the match reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Map a DOM `KeyboardEvent.key` value. Letters match in either case so a
    /// held Shift or Caps Lock does not drop movement.
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "w" | "W" => KeyCode::W,
            "a" | "A" => KeyCode::A,
            "s" | "S" => KeyCode::S,
            "d" | "D" => KeyCode::D,
            " " | "Spacebar" => KeyCode::Space,
            "ArrowUp" => KeyCode::ArrowUp,
            "ArrowDown" => KeyCode::ArrowDown,
            "ArrowLeft" => KeyCode::ArrowLeft,
            "ArrowRight" => KeyCode::ArrowRight,
            _ => KeyCode::Unknown,
        }
    }
}

/// Tracks which of the four movement directions are held.
///
/// The flags are independent; holding opposite keys is allowed and cancels
/// out in the integrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    /// W / ArrowUp
    pub forward: bool,
    /// S / ArrowDown
    pub backward: bool,
    /// A / ArrowLeft
    pub left: bool,
    /// D / ArrowRight
    pub right: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled,
    /// `false` otherwise.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W | KeyCode::ArrowUp => {
                self.forward = pressed;
                true
            }
            KeyCode::S | KeyCode::ArrowDown => {
                self.backward = pressed;
                true
            }
            KeyCode::A | KeyCode::ArrowLeft => {
                self.left = pressed;
                true
            }
            KeyCode::D | KeyCode::ArrowRight => {
                self.right = pressed;
                true
            }
            _ => false,
        }
    }

    /// Reset all movement keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Edge-triggered jump request.
///
/// Key auto-repeat delivers a stream of press events while Space is held.
/// Only the first press after a release arms a request; `take` hands the
/// request to one tick and clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpTrigger {
    held: bool,
    requested: bool,
}

impl JumpTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a press. Returns `true` if this press armed a new request.
    pub fn press(&mut self) -> bool {
        if self.held {
            return false;
        }
        self.held = true;
        self.requested = true;
        true
    }

    /// Register a release, allowing the next press to arm again.
    pub fn release(&mut self) {
        self.held = false;
    }

    /// Consume the pending request, if any.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.requested)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
