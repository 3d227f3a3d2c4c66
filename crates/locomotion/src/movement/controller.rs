//! The locomotion controller.
//!
//! This is the main entry point for character movement. It reads an input
//! sample once per tick and advances the locomotion state through the
//! character body.

use glam::Vec3;

use crate::body::CharacterBody;
use crate::camera::LookAngles;
use crate::input::InputSample;

use super::config::{ConfigError, LocomotionConfig, MoveFrame, SpeedTier};
use super::state::{LocomotionState, VerticalPhase};

/// Character locomotion controller.
///
/// Runs the per-tick movement rules, in order:
///
/// 1. Pin the vertical velocity to the grounded stick value while grounded
/// 2. Consume the jump edge; take off only if grounded this tick
/// 3. Integrate gravity
/// 4. Sweep vertically and re-derive grounding from the contact
/// 5. Select the speed tier, rotate the movement intent into world space,
///    sweep horizontally; against a camera frame the facing also turns
///    toward the heading at a bounded rate
/// 6. Apply look yaw/pitch (after movement, so the renderer samples the
///    final pose)
///
/// Vertical and horizontal displacement are two separate sweeps per tick,
/// never summed into one, so the body's contact handling sees each axis on
/// its own.
///
/// # Example
///
/// ```
/// use emberfall_locomotion::{
///     GroundPlaneBody, InputSample, LocomotionController, LocomotionState, LookAngles,
/// };
/// use glam::{Vec2, Vec3};
///
/// let controller = LocomotionController::third_person();
/// let mut state = LocomotionState::new();
/// let mut body = GroundPlaneBody::new(Vec3::ZERO);
/// let mut look = LookAngles::default();
///
/// let mut sample = InputSample::default();
/// sample.move_axes = Vec2::new(0.0, 1.0);
///
/// // Each tick:
/// controller.update(&mut state, &mut sample, &mut body, Some(&mut look), 1.0 / 60.0);
/// ```
#[derive(Debug, Clone)]
pub struct LocomotionController {
    config: LocomotionConfig,
}

impl LocomotionController {
    /// Create a controller, refusing contradictory configurations.
    pub fn new(config: LocomotionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Controller with the third-person preset.
    pub fn third_person() -> Self {
        Self {
            config: LocomotionConfig::third_person(),
        }
    }

    /// Controller with the first-person preset.
    pub fn first_person() -> Self {
        Self {
            config: LocomotionConfig::first_person(),
        }
    }

    /// The validated configuration.
    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Advance locomotion by one tick.
    ///
    /// # Arguments
    ///
    /// * `state` - The locomotion state (will be modified)
    /// * `sample` - This tick's input; a pending jump edge is consumed
    /// * `body` - The character transform to move
    /// * `look` - Look angles, for configurations with a camera. With a
    ///   camera-relative configuration but no look angles, movement falls
    ///   back to the character frame, facing included.
    /// * `delta_time` - Time step in seconds, used exactly as given
    pub fn update<B: CharacterBody + ?Sized>(
        &self,
        state: &mut LocomotionState,
        sample: &mut InputSample,
        body: &mut B,
        look: Option<&mut LookAngles>,
        delta_time: f32,
    ) {
        // The camera frame for this tick is the look yaw before the look
        // update runs; look is applied after movement.
        let look_yaw = look.as_ref().map(|l| l.yaw);

        self.vertical_move(state, sample, body, delta_time);
        self.horizontal_move(state, sample, body, look_yaw, delta_time);

        state.phase = if state.grounded {
            VerticalPhase::Grounded
        } else if state.vertical_velocity > 0.0 {
            VerticalPhase::Ascending
        } else {
            VerticalPhase::Descending
        };

        if let Some(look) = look {
            self.apply_look(sample, body, look);
        }
    }

    // ========================================================================
    // Vertical Movement
    // ========================================================================

    fn vertical_move<B: CharacterBody + ?Sized>(
        &self,
        state: &mut LocomotionState,
        sample: &mut InputSample,
        body: &mut B,
        delta_time: f32,
    ) {
        // While grounded, keep a small downward velocity so the body presses
        // into the surface instead of accumulating fall speed.
        if state.grounded && state.vertical_velocity < 0.0 {
            state.vertical_velocity = self.config.grounded_stick_velocity;
        }

        // The edge is consumed even when airborne: a press in the air is
        // dropped, not queued for the landing.
        if sample.take_jump_edge() && state.grounded {
            state.vertical_velocity = self.config.initial_jump_velocity();
            log::debug!(
                "jump: take-off velocity {:.2} m/s",
                state.vertical_velocity
            );
        }

        // Gravity applies every tick, grounded or not.
        state.vertical_velocity += self.config.gravity * delta_time;

        let was_grounded = state.grounded;
        let contact = body.translate(Vec3::new(0.0, state.vertical_velocity * delta_time, 0.0));
        state.grounded = contact.resting_on_surface;

        if state.grounded && !was_grounded {
            log::debug!("grounded at {:?}", body.position());
        }
    }

    // ========================================================================
    // Horizontal Movement
    // ========================================================================

    fn horizontal_move<B: CharacterBody + ?Sized>(
        &self,
        state: &mut LocomotionState,
        sample: &InputSample,
        body: &mut B,
        look_yaw: Option<f32>,
        delta_time: f32,
    ) {
        let tier = if sample.sprint_held {
            SpeedTier::Sprint
        } else {
            self.config.base_tier
        };

        let axes = sample.move_axes;
        let magnitude = axes.length();
        // Inclusive: an exactly-zero sample must never reach the
        // normalization below.
        if magnitude <= self.config.input_deadzone {
            state.current_horizontal_speed = 0.0;
            return;
        }

        let mut target_speed = self.config.speed_for(tier);
        if self.config.analog_movement {
            target_speed *= magnitude.min(1.0);
        }
        state.current_horizontal_speed = target_speed;

        // Rotate the intent into world space. Diagonals are normalized so
        // they move no faster than a cardinal direction.
        let camera_yaw = match self.config.move_frame {
            MoveFrame::Character => None,
            MoveFrame::Camera => look_yaw,
        };
        let frame_yaw = camera_yaw.unwrap_or_else(|| body.yaw());
        let (sin_yaw, cos_yaw) = frame_yaw.sin_cos();
        let forward = Vec3::new(sin_yaw, 0.0, cos_yaw);
        let right = Vec3::new(cos_yaw, 0.0, -sin_yaw);
        let local = axes / magnitude;
        let direction = forward * local.y + right * local.x;

        // Only a camera frame gives the turn a fixed world-space target; a
        // character-frame intent turns with the body itself, so there the
        // look update owns the facing. The displacement uses the intent
        // direction directly; facing lags behind it, it does not gate it.
        if camera_yaw.is_some() && !self.look_drives_yaw() {
            let desired_yaw = direction.x.atan2(direction.z);
            let max_turn = self.config.rotation_speed * delta_time;
            body.set_yaw(rotate_towards(body.yaw(), desired_yaw, max_turn));
        }

        body.translate(direction * target_speed * delta_time);
    }

    // ========================================================================
    // Look
    // ========================================================================

    fn apply_look<B: CharacterBody + ?Sized>(
        &self,
        sample: &InputSample,
        body: &mut B,
        look: &mut LookAngles,
    ) {
        let camera = match &self.config.camera {
            Some(camera) => camera,
            None => return,
        };

        look.yaw = wrap_angle(look.yaw + sample.look_delta.x * camera.sensitivity);
        look.pitch = (look.pitch - sample.look_delta.y * camera.sensitivity)
            .clamp(camera.bottom_clamp, camera.top_clamp);

        if camera.drive_character_yaw {
            body.set_yaw(look.yaw);
        }
    }

    fn look_drives_yaw(&self) -> bool {
        self.config
            .camera
            .as_ref()
            .map_or(false, |camera| camera.drive_character_yaw)
    }
}

/// Wrap an angle into the -PI..PI range.
fn wrap_angle(angle: f32) -> f32 {
    let mut wrapped = angle;
    while wrapped > std::f32::consts::PI {
        wrapped -= std::f32::consts::TAU;
    }
    while wrapped < -std::f32::consts::PI {
        wrapped += std::f32::consts::TAU;
    }
    wrapped
}

/// Rotate `current` toward `target` by at most `max_delta` radians, taking
/// the shorter way around.
fn rotate_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let diff = wrap_angle(target - current);
    if diff.abs() <= max_delta {
        wrap_angle(target)
    } else {
        wrap_angle(current + max_delta * diff.signum())
    }
}

// ============================================================================
// Tests
// ============================================================================
