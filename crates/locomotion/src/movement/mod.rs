//! Character movement system.
//!
//! This module implements tick-based third/first-person locomotion with:
//!
//! - Gravity and jumping against a sweep-move body
//! - Walk/run/sprint speed tiers with an input deadzone
//! - Character-relative or camera-relative movement intent
//! - Bounded-rate facing rotation (no snapping)
//! - Look yaw/pitch with absolute pitch clamping
//!
//! # Design
//!
//! Movement is driven by the [`LocomotionController`], which reads an input
//! sample and advances a [`LocomotionState`] through a
//! [`CharacterBody`](crate::body::CharacterBody) each tick.
//!
//! All movement is deterministic: the same inputs at the same tick rate
//! always produce the same state.

mod config;
mod controller;
mod state;

pub use config::{CameraConfig, ConfigError, LocomotionConfig, MoveFrame, SpeedTier};
pub use controller::LocomotionController;
pub use state::{LocomotionState, VerticalPhase};
