//! Look angles and the boom camera rig.
//!
//! The controller owns the yaw/pitch numbers; this module gives the renderer
//! a pose to sample after the tick. Nothing here feeds back into movement.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Camera look angles in radians.
///
/// Yaw turns around the vertical axis and is kept wrapped to -PI..PI by the
/// controller; pitch is positive looking up and clamped to the configured
/// range. In the first-person scheme yaw doubles as the character's facing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LookAngles {
    pub yaw: f32,
    pub pitch: f32,
}

impl LookAngles {
    /// Create look angles.
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }
}

/// A camera pose for the renderer: where the eye sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
}

/// Third-person boom arm.
///
/// The camera orbits a pivot above the character's feet at a fixed distance,
/// steered by [`LookAngles`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraRig {
    /// Distance from the pivot to the eye (meters).
    pub boom_length: f32,

    /// Pivot height above the character's feet (meters).
    pub boom_height: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            boom_length: 4.0,
            boom_height: 1.7,
        }
    }
}

impl CameraRig {
    /// Compute the camera pose for a character at `anchor` (feet position).
    pub fn pose(&self, anchor: Vec3, look: LookAngles) -> CameraPose {
        let pivot = anchor + Vec3::new(0.0, self.boom_height, 0.0);

        let (sin_pitch, cos_pitch) = look.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = look.yaw.sin_cos();
        let direction = Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw);

        CameraPose {
            eye: pivot - direction * self.boom_length,
            target: pivot,
        }
    }
}
