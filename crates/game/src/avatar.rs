//! The playable character.
//!
//! An [`Avatar`] bundles a character body, the locomotion controller and
//! state, look angles when a camera is configured, and an optional animation
//! sink, and runs them in order every tick.

use emberfall_locomotion::{
    AnimationSink, CharacterBody, ConfigError, InputSample, LocomotionConfig,
    LocomotionController, LocomotionState, LookAngles, ParameterProjector,
};
use glam::Vec3;
use thiserror::Error;

/// Failure to assemble an [`Avatar`].
#[derive(Debug, Error)]
pub enum AvatarError {
    /// The body carries the transform and the move primitive; without one
    /// there is nothing to control.
    #[error("an avatar cannot be built without a character body")]
    MissingBody,

    /// The locomotion configuration contradicts itself.
    #[error("invalid locomotion configuration: {0}")]
    Config(#[from] ConfigError),
}

/// A playable character: body, locomotion, look and animation output.
///
/// Built with [`Avatar::builder`]. The animation sink is optional; without
/// one the parameter projection is skipped each tick. The body is not: a
/// builder with no body refuses to produce an avatar.
pub struct Avatar<B: CharacterBody> {
    body: B,
    state: LocomotionState,
    look: Option<LookAngles>,
    controller: LocomotionController,
    projector: ParameterProjector,
    sink: Option<Box<dyn AnimationSink>>,
}

impl<B: CharacterBody> Avatar<B> {
    /// Start building an avatar.
    pub fn builder() -> AvatarBuilder<B> {
        AvatarBuilder::new()
    }

    /// Run one tick: locomotion, then look, then animation projection.
    pub fn tick(&mut self, sample: &mut InputSample, delta_time: f32) {
        self.controller.update(
            &mut self.state,
            sample,
            &mut self.body,
            self.look.as_mut(),
            delta_time,
        );

        if let Some(sink) = self.sink.as_deref_mut() {
            self.projector
                .project(&self.state, self.controller.config(), delta_time, sink);
        }
    }

    /// Character position in world space (feet).
    pub fn position(&self) -> Vec3 {
        self.body.position()
    }

    /// Resting on a walkable surface as of the last tick.
    pub fn grounded(&self) -> bool {
        self.state.grounded
    }

    /// The locomotion state.
    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    /// Current look angles, when a camera is configured.
    pub fn look(&self) -> Option<&LookAngles> {
        self.look.as_ref()
    }

    /// The smoothed speed ratio fed to the animation parameters.
    pub fn speed_ratio(&self) -> f32 {
        self.projector.speed_ratio()
    }

    /// The character body.
    pub fn body(&self) -> &B {
        &self.body
    }

    /// Mutable access to the character body, e.g. to move the ground under
    /// a flat-world body.
    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    /// The controller's validated configuration.
    pub fn config(&self) -> &LocomotionConfig {
        self.controller.config()
    }
}

/// Builder for [`Avatar`].
pub struct AvatarBuilder<B> {
    body: Option<B>,
    config: LocomotionConfig,
    sink: Option<Box<dyn AnimationSink>>,
}

impl<B: CharacterBody> AvatarBuilder<B> {
    /// Builder with the default configuration, no body and no sink.
    pub fn new() -> Self {
        Self {
            body: None,
            config: LocomotionConfig::default(),
            sink: None,
        }
    }

    /// Use this locomotion configuration.
    pub fn config(mut self, config: LocomotionConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this character body.
    pub fn body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach an animation sink.
    pub fn animation_sink(mut self, sink: impl AnimationSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Assemble the avatar.
    ///
    /// Fails if no body was provided or the configuration is invalid.
    pub fn build(self) -> Result<Avatar<B>, AvatarError> {
        let body = self.body.ok_or(AvatarError::MissingBody)?;
        let projector = ParameterProjector::from_config(&self.config);
        let controller = LocomotionController::new(self.config)?;
        let look = controller
            .config()
            .camera
            .as_ref()
            .map(|_| LookAngles::default());

        Ok(Avatar {
            body,
            state: LocomotionState::new(),
            look,
            controller,
            projector,
            sink: self.sink,
        })
    }
}

impl<B: CharacterBody> Default for AvatarBuilder<B> {
    fn default() -> Self {
        Self::new()
    }
}
