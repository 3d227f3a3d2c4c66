//! Locomotion state.

use serde::{Deserialize, Serialize};

/// Vertical classification of the character for one tick.
///
/// Exactly one phase holds per tick: grounded, or airborne moving up, or
/// airborne moving down. An airborne character with zero vertical velocity
/// (the instant at a jump's apex) counts as `Descending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalPhase {
    /// Resting on a walkable surface.
    Grounded,
    /// Airborne with positive vertical velocity.
    Ascending,
    /// Airborne with non-positive vertical velocity.
    Descending,
}

/// Mutable locomotion state, advanced once per tick by the controller.
///
/// Position and facing live in the character body, not here; this struct
/// holds only what the movement rules themselves evolve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocomotionState {
    /// Vertical velocity (meters/second). Held slightly negative while
    /// grounded, never exactly zero on the ground.
    pub vertical_velocity: f32,

    /// Resting on a walkable surface, per the last vertical sweep.
    pub grounded: bool,

    /// Horizontal speed selected this tick (meters/second). Zero when the
    /// movement input sat inside the deadzone.
    pub current_horizontal_speed: f32,

    /// Vertical phase derived at the end of the tick.
    pub phase: VerticalPhase,
}

impl Default for LocomotionState {
    fn default() -> Self {
        // Airborne until the first vertical sweep proves otherwise.
        Self {
            vertical_velocity: 0.0,
            grounded: false,
            current_horizontal_speed: 0.0,
            phase: VerticalPhase::Descending,
        }
    }
}

impl LocomotionState {
    /// Create a fresh state.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when not resting on a surface.
    #[inline]
    pub fn airborne(&self) -> bool {
        !self.grounded
    }
}
