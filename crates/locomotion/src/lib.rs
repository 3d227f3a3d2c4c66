//! Emberfall Locomotion Core
//!
//! A deterministic character locomotion library: raw directional/look/jump/
//! sprint input is converted each simulation tick into character displacement,
//! a grounded/airborne classification, and animation-driving parameters. No
//! rendering, no input-device plumbing, no full physics engine.
//!
//! # Architecture
//!
//! Three subsystems run every tick, in dependency order:
//!
//! - **Input**: latest movement/look axes plus one-shot jump edge
//! - **Movement**: gravity, jumping, speed tiers, facing, grounding
//! - **Animation**: projects movement state onto named blend-tree parameters
//!
//! The character's actual transform lives behind the [`CharacterBody`] trait,
//! which exposes a sweep-style `translate` returning surface contact. A flat
//! test/demo implementation is provided; a real game plugs in its collision
//! engine there.
//!
//! # Design Principles
//!
//! 1. **Determinism**: same inputs and tick rate always produce the same state
//! 2. **One controller**: first- and third-person behavior is configuration,
//!    not separate code paths
//! 3. **No hidden collaborators**: animation output is optional, movement is not

pub mod animation;
pub mod body;
pub mod camera;
pub mod input;
pub mod movement;

// Re-export commonly used types
pub use animation::{AnimationParam, AnimationSink, ParameterProjector};
pub use body::{CharacterBody, GroundPlaneBody, MoveContact};
pub use camera::{CameraPose, CameraRig, LookAngles};
pub use input::{EdgeTrigger, InputSample};
pub use movement::{
    CameraConfig, ConfigError, LocomotionConfig, LocomotionController, LocomotionState, MoveFrame,
    SpeedTier, VerticalPhase,
};
