//! The character body seam.
//!
//! Collision resolution is not this crate's job. The controller drives a
//! [`CharacterBody`], which owns the character's transform and implements a
//! sweep-style `translate` that reports whether the body ended the move
//! resting on a walkable surface. A real game backs this with its collision
//! engine; [`GroundPlaneBody`] is a flat-world implementation for tests and
//! headless demos.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Result of sweeping the character body through the world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveContact {
    /// The body ended the move resting on a walkable surface.
    pub resting_on_surface: bool,
}

/// A movable character transform with surface contact reporting.
///
/// The controller issues two `translate` calls per moving tick: one purely
/// vertical (gravity/jump), one purely horizontal. Grounding is derived only
/// from the vertical call's contact, so implementations do not need to report
/// contact for lateral sweeps.
pub trait CharacterBody {
    /// Sweep the body by `displacement`, stopping at obstructions.
    fn translate(&mut self, displacement: Vec3) -> MoveContact;

    /// Current position in world space (feet).
    fn position(&self) -> Vec3;

    /// Current facing angle around the vertical axis, in radians.
    fn yaw(&self) -> f32;

    /// Set the facing angle, in radians.
    fn set_yaw(&mut self, yaw: f32);
}

/// Distance above the surface within which a downward move counts as contact.
const CONTACT_SKIN: f32 = 1e-4;

/// A character body over an infinite horizontal ground plane.
///
/// Downward sweeps clamp at the plane and report surface contact; upward
/// sweeps never do. The plane height is adjustable, which is enough to model
/// steps and ledges in tests ([`set_ground_height`](Self::set_ground_height)).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundPlaneBody {
    position: Vec3,
    yaw: f32,
    ground_height: f32,
}

impl GroundPlaneBody {
    /// Create a body at `position` over a ground plane at height zero.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            ground_height: 0.0,
        }
    }

    /// Height of the ground plane under the body.
    pub fn ground_height(&self) -> f32 {
        self.ground_height
    }

    /// Move the ground plane, e.g. when the character walks over a ledge.
    pub fn set_ground_height(&mut self, height: f32) {
        self.ground_height = height;
    }
}

impl CharacterBody for GroundPlaneBody {
    fn translate(&mut self, displacement: Vec3) -> MoveContact {
        self.position += displacement;

        // Moving upward cannot land; everything else clamps at the plane.
        let mut resting = false;
        if displacement.y <= 0.0 && self.position.y <= self.ground_height + CONTACT_SKIN {
            self.position.y = self.ground_height;
            resting = true;
        }

        MoveContact {
            resting_on_surface: resting,
        }
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn yaw(&self) -> f32 {
        self.yaw
    }

    fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fall_above_plane_has_no_contact() {
        let mut body = GroundPlaneBody::new(Vec3::new(0.0, 5.0, 0.0));
        let contact = body.translate(Vec3::new(0.0, -1.0, 0.0));
        assert!(!contact.resting_on_surface);
        assert_eq!(body.position().y, 4.0);
    }

    #[test]
    fn test_landing_clamps_to_plane() {
        let mut body = GroundPlaneBody::new(Vec3::new(0.0, 0.5, 0.0));
        let contact = body.translate(Vec3::new(0.0, -2.0, 0.0));
        assert!(contact.resting_on_surface);
        assert_eq!(body.position().y, 0.0, "should stop at the plane");
    }

    #[test]
    fn test_upward_move_is_never_contact() {
        let mut body = GroundPlaneBody::new(Vec3::ZERO);
        let contact = body.translate(Vec3::new(0.0, 0.1, 0.0));
        assert!(!contact.resting_on_surface);
        assert_eq!(body.position().y, 0.1);
    }

    #[test]
    fn test_lateral_move_on_plane_keeps_contact() {
        let mut body = GroundPlaneBody::new(Vec3::ZERO);
        let contact = body.translate(Vec3::new(1.0, 0.0, 0.0));
        assert!(contact.resting_on_surface);
        assert_eq!(body.position(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_lowering_the_plane_breaks_contact() {
        let mut body = GroundPlaneBody::new(Vec3::ZERO);
        body.set_ground_height(-1.0);

        // Standing at y=0 over a plane at y=-1: a small downward move is a
        // fall, not a landing.
        let contact = body.translate(Vec3::new(0.0, -0.05, 0.0));
        assert!(!contact.resting_on_surface);

        let contact = body.translate(Vec3::new(0.0, -2.0, 0.0));
        assert!(contact.resting_on_surface);
        assert_eq!(body.position().y, -1.0);
    }
}
