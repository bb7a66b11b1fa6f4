//! Captured-Pointer Delta Accumulator
//!
//! Pointer-lock motion events (`movementX`/`movementY`) can arrive several
//! times per frame. They accumulate here and are consumed once per tick.

use glam::Vec2;

/// Accumulates raw pointer motion between ticks.
///
/// # Example
///
/// ```rust,ignore
/// use galaxy_war_engine::input::PointerDelta;
///
/// let mut pointer = PointerDelta::new();
/// pointer.accumulate(10.0, -5.0);
/// pointer.accumulate(3.0, 2.0);
///
/// let delta = pointer.consume(); // (13.0, -3.0)
/// ```
#[derive(Debug, Clone, Default)]
pub struct PointerDelta {
    /// Accumulated motion since last consume.
    delta: Vec2,
}

impl PointerDelta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate raw pointer motion.
    #[inline]
    pub fn accumulate(&mut self, dx: f32, dy: f32) {
        self.delta += Vec2::new(dx, dy);
    }

    /// Return the accumulated motion and reset it to zero.
    #[inline]
    pub fn consume(&mut self) -> Vec2 {
        std::mem::take(&mut self.delta)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
