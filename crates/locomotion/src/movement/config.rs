//! Locomotion configuration constants.
//!
//! All tunable movement parameters are grouped here. The first- and
//! third-person control schemes are the same controller with different
//! configurations; see [`LocomotionConfig::first_person`] and
//! [`LocomotionConfig::third_person`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named horizontal speed tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedTier {
    /// Slow deliberate movement.
    Walk,
    /// Default traversal speed.
    Run,
    /// Top speed while the sprint input is held.
    Sprint,
}

/// Which frame movement axes are interpreted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveFrame {
    /// Axes are relative to the character's own facing. Movement never
    /// turns the facing in this frame; look input (or nothing) does.
    Character,
    /// Axes are relative to the look camera's yaw, projected onto the
    /// ground plane. Requires a [`CameraConfig`].
    Camera,
}

/// Look camera behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Scale applied to look deltas (radians of rotation per radian of
    /// input).
    pub sensitivity: f32,

    /// Lowest allowed pitch in radians (looking down).
    pub bottom_clamp: f32,

    /// Highest allowed pitch in radians (looking up).
    pub top_clamp: f32,

    /// Look yaw directly sets the character's facing (first-person). When
    /// false the camera orbits freely and, under camera-relative movement,
    /// the character turns to face where it moves (third-person).
    pub drive_character_yaw: bool,
}

/// Configuration for character locomotion.
///
/// All values use metric units (meters, seconds) and radians unless noted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocomotionConfig {
    // ========================================================================
    // Speed Tiers
    // ========================================================================
    /// Walking speed (meters/second).
    pub walk_speed: f32,

    /// Running speed (meters/second).
    pub run_speed: f32,

    /// Sprinting speed (meters/second).
    pub sprint_speed: f32,

    /// Tier used when sprint is not held.
    pub base_tier: SpeedTier,

    /// Scale the target speed by the input magnitude (analog sticks).
    /// Digital ±1 input is unaffected either way.
    pub analog_movement: bool,

    /// Input magnitude below which movement input is treated as zero
    /// (fraction of full deflection).
    pub input_deadzone: f32,

    // ========================================================================
    // Vertical Physics
    // ========================================================================
    /// Gravity acceleration (meters/second²). Negative: downward.
    pub gravity: f32,

    /// Apex height of a jump (meters). The take-off velocity is derived
    /// from this and gravity, so it holds at any tick rate.
    pub jump_height: f32,

    /// Vertical velocity held while grounded (meters/second). Slightly
    /// negative so the body keeps pressing into the surface; never zero.
    pub grounded_stick_velocity: f32,

    // ========================================================================
    // Facing & Look
    // ========================================================================
    /// How movement axes are interpreted.
    pub move_frame: MoveFrame,

    /// Maximum facing turn rate (radians/second) when camera-relative
    /// movement turns the character toward its heading.
    pub rotation_speed: f32,

    /// Look camera, if the character has one. `None` for headless movers.
    pub camera: Option<CameraConfig>,

    // ========================================================================
    // Animation
    // ========================================================================
    /// Time constant for smoothing float animation parameters (seconds).
    pub animation_damp_time: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            // Speed tiers
            walk_speed: 2.0,   // ~7 km/h stroll
            run_speed: 4.0,    // ~14 km/h jog
            sprint_speed: 6.0, // ~22 km/h sprint
            base_tier: SpeedTier::Run,
            analog_movement: true,
            input_deadzone: 0.1,

            // Vertical physics
            gravity: -9.81,
            jump_height: 1.5,
            grounded_stick_velocity: -2.0,

            // Facing
            move_frame: MoveFrame::Character,
            rotation_speed: 2.0 * std::f32::consts::TAU, // 720°/s, quarter turn in 0.125s
            camera: None,

            // Animation
            animation_damp_time: 0.1,
        }
    }
}

impl LocomotionConfig {
    /// Third-person scheme: camera-relative movement, orbiting look camera,
    /// character turns to face where it moves.
    pub fn third_person() -> Self {
        Self {
            move_frame: MoveFrame::Camera,
            camera: Some(CameraConfig {
                sensitivity: 1.0,
                bottom_clamp: -30.0_f32.to_radians(),
                top_clamp: 70.0_f32.to_radians(),
                drive_character_yaw: false,
            }),
            ..Default::default()
        }
    }

    /// First-person scheme: character-relative movement, look yaw steers
    /// the character directly, near-vertical pitch range.
    pub fn first_person() -> Self {
        Self {
            move_frame: MoveFrame::Character,
            camera: Some(CameraConfig {
                sensitivity: 1.0,
                bottom_clamp: -89.0_f32.to_radians(),
                top_clamp: 89.0_f32.to_radians(),
                drive_character_yaw: true,
            }),
            ..Default::default()
        }
    }

    /// Speed for a tier (meters/second).
    pub fn speed_for(&self, tier: SpeedTier) -> f32 {
        match tier {
            SpeedTier::Walk => self.walk_speed,
            SpeedTier::Run => self.run_speed,
            SpeedTier::Sprint => self.sprint_speed,
        }
    }

    /// Take-off velocity that reaches `jump_height` under `gravity`
    /// (meters/second): `sqrt(2 * h * |g|)`.
    pub fn initial_jump_velocity(&self) -> f32 {
        (2.0 * self.jump_height * self.gravity.abs()).sqrt()
    }

    /// Check the configuration for contradictions.
    ///
    /// Called by the controller at construction; an invalid configuration
    /// never runs a tick.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.walk_speed > 0.0
            && self.run_speed >= self.walk_speed
            && self.sprint_speed >= self.run_speed)
        {
            return Err(ConfigError::SpeedTierOrder {
                walk: self.walk_speed,
                run: self.run_speed,
                sprint: self.sprint_speed,
            });
        }
        if self.gravity >= 0.0 {
            return Err(ConfigError::GravityNotDownward(self.gravity));
        }
        if self.jump_height <= 0.0 {
            return Err(ConfigError::JumpHeightNotPositive(self.jump_height));
        }
        if !(0.0..1.0).contains(&self.input_deadzone) {
            return Err(ConfigError::DeadzoneOutOfRange(self.input_deadzone));
        }
        if self.rotation_speed < 0.0 {
            return Err(ConfigError::RotationSpeedNegative(self.rotation_speed));
        }
        if self.animation_damp_time < 0.0 {
            return Err(ConfigError::DampTimeNegative(self.animation_damp_time));
        }
        if let Some(camera) = &self.camera {
            if camera.bottom_clamp >= camera.top_clamp {
                return Err(ConfigError::PitchClampInverted {
                    bottom: camera.bottom_clamp,
                    top: camera.top_clamp,
                });
            }
        } else if self.move_frame == MoveFrame::Camera {
            return Err(ConfigError::CameraRelativeWithoutCamera);
        }
        Ok(())
    }
}

/// A contradiction in a [`LocomotionConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("speed tiers must satisfy 0 < walk <= run <= sprint, got {walk}/{run}/{sprint}")]
    SpeedTierOrder { walk: f32, run: f32, sprint: f32 },

    #[error("gravity must be negative (downward), got {0}")]
    GravityNotDownward(f32),

    #[error("jump height must be positive, got {0}")]
    JumpHeightNotPositive(f32),

    #[error("input deadzone must lie in [0, 1), got {0}")]
    DeadzoneOutOfRange(f32),

    #[error("rotation speed must be non-negative, got {0}")]
    RotationSpeedNegative(f32),

    #[error("animation damp time must be non-negative, got {0}")]
    DampTimeNegative(f32),

    #[error("pitch clamp range is inverted: bottom {bottom} >= top {top}")]
    PitchClampInverted { bottom: f32, top: f32 },

    #[error("camera-relative movement requires a look camera")]
    CameraRelativeWithoutCamera,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LocomotionConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.walk_speed > 0.0);
        assert!(config.gravity < 0.0);
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(LocomotionConfig::third_person().validate().is_ok());
        assert!(LocomotionConfig::first_person().validate().is_ok());
    }

    #[test]
    fn test_speed_for_tiers() {
        let config = LocomotionConfig::default();
        assert_eq!(config.speed_for(SpeedTier::Walk), config.walk_speed);
        assert_eq!(config.speed_for(SpeedTier::Run), config.run_speed);
        assert_eq!(config.speed_for(SpeedTier::Sprint), config.sprint_speed);
    }

    #[test]
    fn test_initial_jump_velocity_reference_values() {
        // sqrt(2 * 1.5 * 9.81) = 5.4249...
        let config = LocomotionConfig::default();
        assert!((config.initial_jump_velocity() - 5.4249).abs() < 0.001);

        let low_jump = LocomotionConfig {
            jump_height: 0.5,
            ..Default::default()
        };
        assert!((low_jump.initial_jump_velocity() - (2.0_f32 * 0.5 * 9.81).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_validate_rejects_tier_disorder() {
        let config = LocomotionConfig {
            walk_speed: 5.0,
            run_speed: 3.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpeedTierOrder { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_upward_gravity() {
        let config = LocomotionConfig {
            gravity: 9.81,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GravityNotDownward(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_deadzone() {
        let config = LocomotionConfig {
            input_deadzone: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DeadzoneOutOfRange(_))
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_pitch_clamps() {
        let mut config = LocomotionConfig::third_person();
        if let Some(camera) = &mut config.camera {
            camera.bottom_clamp = 1.0;
            camera.top_clamp = -1.0;
        }
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PitchClampInverted { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_camera_frame_without_camera() {
        let config = LocomotionConfig {
            move_frame: MoveFrame::Camera,
            camera: None,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::CameraRelativeWithoutCamera)
        );
    }
}
