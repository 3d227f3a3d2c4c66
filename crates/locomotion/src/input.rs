//! Input sample structures.
//!
//! The locomotion core does not talk to input devices. Whatever collects
//! keys/mouse/gamepad state writes an [`InputSample`] once per tick and the
//! controller reads it once per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Player intent for a single simulation tick.
///
/// Movement and look axes are level-triggered: they describe the state of the
/// sticks for this tick. The jump flag is edge-triggered: it is set when the
/// jump input transitions from released to pressed and clears itself after
/// one consuming read, so a held jump key produces exactly one jump request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputSample {
    /// Movement axes in the character/camera frame: x strafe, y forward.
    ///
    /// Digital input sends ±1.0; analog sticks send their deflection, which
    /// may exceed unit length on diagonals and is normalized by the
    /// controller before use.
    pub move_axes: Vec2,

    /// Look delta for this tick in radians: x yaw, y pitch.
    pub look_delta: Vec2,

    /// Sprint input is currently held.
    pub sprint_held: bool,

    /// One-shot jump edge. Private so the only way to lower it is the
    /// consuming read.
    jump_edge: bool,
}

impl InputSample {
    /// Register a jump press edge.
    ///
    /// Call on the released-to-pressed transition only (see [`EdgeTrigger`]),
    /// not every tick the key is held.
    pub fn press_jump(&mut self) {
        self.jump_edge = true;
    }

    /// True if a jump edge is waiting to be consumed.
    #[inline]
    pub fn jump_pending(&self) -> bool {
        self.jump_edge
    }

    /// Consume the jump edge, returning whether one was set.
    ///
    /// The flag resets regardless of what the caller does with the result.
    pub fn take_jump_edge(&mut self) -> bool {
        std::mem::take(&mut self.jump_edge)
    }

    /// Reset every field, including a pending jump edge.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Converts a held button into one-tick rising edges.
///
/// Feed it the button's level state every tick; it reports `true` only on the
/// tick the button went down.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EdgeTrigger {
    held: bool,
}

impl EdgeTrigger {
    /// Update with this tick's button level, returning whether a rising edge
    /// occurred.
    pub fn update(&mut self, pressed: bool) -> bool {
        let rising = pressed && !self.held;
        self.held = pressed;
        rising
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_edge_consumed_once() {
        let mut sample = InputSample::default();
        assert!(!sample.take_jump_edge());

        sample.press_jump();
        assert!(sample.jump_pending());
        assert!(sample.take_jump_edge());
        assert!(!sample.jump_pending());
        assert!(!sample.take_jump_edge(), "edge must not survive a read");
    }

    #[test]
    fn test_double_press_before_read_is_one_edge() {
        let mut sample = InputSample::default();
        sample.press_jump();
        sample.press_jump();
        assert!(sample.take_jump_edge());
        assert!(!sample.take_jump_edge());
    }

    #[test]
    fn test_clear_drops_pending_edge() {
        let mut sample = InputSample::default();
        sample.move_axes = Vec2::new(0.5, 1.0);
        sample.sprint_held = true;
        sample.press_jump();

        sample.clear();
        assert_eq!(sample.move_axes, Vec2::ZERO);
        assert!(!sample.sprint_held);
        assert!(!sample.take_jump_edge());
    }

    #[test]
    fn test_edge_trigger_fires_on_transition_only() {
        let mut trigger = EdgeTrigger::default();
        assert!(!trigger.update(false));
        assert!(trigger.update(true), "press should fire");
        assert!(!trigger.update(true), "holding must not re-fire");
        assert!(!trigger.update(false));
        assert!(trigger.update(true), "re-press should fire again");
    }
}
