//! Camera Module
//!
//! First-person look state for the local player. Window-system agnostic: it
//! only turns pointer deltas into angles and angles into direction vectors.

pub mod look;

pub use look::{LookAngles, PITCH_LIMIT, POINTER_SENSITIVITY};
