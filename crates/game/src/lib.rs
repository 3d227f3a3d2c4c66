//! Emberfall Game Layer
//!
//! This crate wires the locomotion core into a playable character and puts a
//! director in front of it that decides, per tick, whether player control
//! runs at all.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      GameDirector                        │
//! │   cutscene gate ──► gate open?                           │
//! │                        │ yes                             │
//! │   ┌────────┐    ┌──────▼──────┐    ┌──────────────────┐  │
//! │   │ Input  │───►│   Avatar    │───►│ Animation sink   │  │
//! │   │ sample │    │ (locomotion)│    │ (optional)       │  │
//! │   └────────┘    └─────────────┘    └──────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! While a cutscene plays, the locomotion tick is not invoked: position and
//! grounding freeze, and input gathered during the scene is dropped.

pub mod avatar;
pub mod director;

pub use avatar::{Avatar, AvatarBuilder, AvatarError};
pub use director::{ControlGate, ControlSuspension, GameDirector};

// Re-export core types for convenience
pub use emberfall_locomotion::{
    AnimationParam, AnimationSink, CharacterBody, EdgeTrigger, GroundPlaneBody, InputSample,
    LocomotionConfig, LocomotionState, LookAngles, VerticalPhase,
};
