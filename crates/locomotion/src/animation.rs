//! Animation parameter projection.
//!
//! The locomotion core does not blend animations. It projects its state onto
//! a fixed table of named parameters each tick and hands them to whatever
//! implements [`AnimationSink`]. The sink is optional: a character without
//! one simply skips the projection.

use serde::{Deserialize, Serialize};

use crate::movement::{LocomotionConfig, LocomotionState, VerticalPhase};

/// The animation parameters this crate drives.
///
/// The set is closed and resolved at compile time; there is no string lookup
/// at the call site. [`name`](Self::name) gives the canonical blend-tree
/// identifier for sinks that need one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationParam {
    /// Normalized horizontal speed, 0 at rest to 1 at sprint speed.
    Speed,
    /// Resting on a walkable surface.
    Grounded,
    /// Airborne and rising.
    Jump,
    /// Airborne and falling.
    FreeFall,
    /// Mirrors `Speed`; kept for blend trees that scale playback rate
    /// separately from the locomotion blend.
    MotionSpeed,
}

impl AnimationParam {
    /// Every parameter, in write order.
    pub const ALL: [AnimationParam; 5] = [
        AnimationParam::Speed,
        AnimationParam::Grounded,
        AnimationParam::Jump,
        AnimationParam::FreeFall,
        AnimationParam::MotionSpeed,
    ];

    /// Canonical parameter name.
    pub fn name(self) -> &'static str {
        match self {
            AnimationParam::Speed => "Speed",
            AnimationParam::Grounded => "Grounded",
            AnimationParam::Jump => "Jump",
            AnimationParam::FreeFall => "FreeFall",
            AnimationParam::MotionSpeed => "MotionSpeed",
        }
    }
}

/// Receives animation parameter writes, fire-and-forget.
pub trait AnimationSink {
    /// Write a float parameter.
    fn set_float(&mut self, param: AnimationParam, value: f32);

    /// Write a boolean parameter.
    fn set_bool(&mut self, param: AnimationParam, value: bool);
}

/// Snap-to-target threshold for smoothed floats.
const SNAP_EPSILON: f32 = 1e-3;

/// Projects locomotion state onto animation parameters.
///
/// Float parameters approach their target exponentially over
/// `damp_time` so blend trees do not pop when a tier changes; booleans are
/// written directly.
///
/// The speed ratio is derived from the speed tier the controller selected,
/// not from measured displacement, so it is deterministic and unaffected by
/// the facing still turning toward the movement direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterProjector {
    damp_time: f32,
    speed_ratio: f32,
}

impl ParameterProjector {
    /// Create a projector with the given float damping time (seconds).
    pub fn new(damp_time: f32) -> Self {
        Self {
            damp_time,
            speed_ratio: 0.0,
        }
    }

    /// Create a projector using the configuration's damping time.
    pub fn from_config(config: &LocomotionConfig) -> Self {
        Self::new(config.animation_damp_time)
    }

    /// The current smoothed speed ratio in [0, 1].
    pub fn speed_ratio(&self) -> f32 {
        self.speed_ratio
    }

    /// Project this tick's state into the sink.
    ///
    /// Exactly one of `Grounded`, `Jump` and `FreeFall` is written true each
    /// tick, mirroring the vertical phase.
    pub fn project(
        &mut self,
        state: &LocomotionState,
        config: &LocomotionConfig,
        delta_time: f32,
        sink: &mut dyn AnimationSink,
    ) {
        let target = (state.current_horizontal_speed / config.sprint_speed).clamp(0.0, 1.0);

        if self.damp_time > 0.0 {
            let blend = 1.0 - (-delta_time / self.damp_time).exp();
            self.speed_ratio += (target - self.speed_ratio) * blend;
        } else {
            self.speed_ratio = target;
        }
        if (self.speed_ratio - target).abs() < SNAP_EPSILON {
            self.speed_ratio = target;
        }

        sink.set_float(AnimationParam::Speed, self.speed_ratio);
        sink.set_float(AnimationParam::MotionSpeed, self.speed_ratio);
        sink.set_bool(AnimationParam::Grounded, state.grounded);
        sink.set_bool(AnimationParam::Jump, state.phase == VerticalPhase::Ascending);
        sink.set_bool(AnimationParam::FreeFall, state.phase == VerticalPhase::Descending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        floats: Vec<(AnimationParam, f32)>,
        bools: Vec<(AnimationParam, bool)>,
    }

    impl AnimationSink for RecordingSink {
        fn set_float(&mut self, param: AnimationParam, value: f32) {
            self.floats.push((param, value));
        }

        fn set_bool(&mut self, param: AnimationParam, value: bool) {
            self.bools.push((param, value));
        }
    }

    fn state_with_phase(phase: VerticalPhase) -> LocomotionState {
        LocomotionState {
            vertical_velocity: match phase {
                VerticalPhase::Grounded => -2.0,
                VerticalPhase::Ascending => 3.0,
                VerticalPhase::Descending => -3.0,
            },
            grounded: phase == VerticalPhase::Grounded,
            current_horizontal_speed: 0.0,
            phase,
        }
    }

    fn flags_for(phase: VerticalPhase) -> Vec<(AnimationParam, bool)> {
        let mut projector = ParameterProjector::new(0.0);
        let mut sink = RecordingSink::default();
        let config = LocomotionConfig::default();
        projector.project(&state_with_phase(phase), &config, 1.0 / 60.0, &mut sink);
        sink.bools
    }

    #[test]
    fn test_param_names() {
        let names: Vec<_> = AnimationParam::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec!["Speed", "Grounded", "Jump", "FreeFall", "MotionSpeed"]
        );
    }

    #[test]
    fn test_exactly_one_vertical_flag_per_phase() {
        for phase in [
            VerticalPhase::Grounded,
            VerticalPhase::Ascending,
            VerticalPhase::Descending,
        ] {
            let bools = flags_for(phase);
            let set_count = bools.iter().filter(|(_, value)| *value).count();
            assert_eq!(set_count, 1, "phase {:?} must set exactly one flag", phase);
        }

        assert!(flags_for(VerticalPhase::Grounded)
            .contains(&(AnimationParam::Grounded, true)));
        assert!(flags_for(VerticalPhase::Ascending).contains(&(AnimationParam::Jump, true)));
        assert!(flags_for(VerticalPhase::Descending)
            .contains(&(AnimationParam::FreeFall, true)));
    }

    #[test]
    fn test_speed_ratio_damps_toward_target() {
        let config = LocomotionConfig::default();
        let mut projector = ParameterProjector::from_config(&config);
        let mut sink = RecordingSink::default();

        let mut state = state_with_phase(VerticalPhase::Grounded);
        state.current_horizontal_speed = config.sprint_speed;

        let dt = 1.0 / 60.0;
        projector.project(&state, &config, dt, &mut sink);

        // First step of 1 - exp(-dt/damp) toward 1.0.
        let expected = 1.0 - (-dt / config.animation_damp_time).exp();
        assert!((projector.speed_ratio() - expected).abs() < 1e-4);
        assert!(projector.speed_ratio() < 1.0);

        let mut previous = projector.speed_ratio();
        for _ in 0..300 {
            projector.project(&state, &config, dt, &mut sink);
            assert!(projector.speed_ratio() >= previous);
            previous = projector.speed_ratio();
        }
        assert_eq!(projector.speed_ratio(), 1.0, "should settle exactly");
    }

    #[test]
    fn test_zero_damp_time_is_instant() {
        let config = LocomotionConfig {
            animation_damp_time: 0.0,
            ..Default::default()
        };
        let mut projector = ParameterProjector::from_config(&config);
        let mut sink = RecordingSink::default();

        let mut state = state_with_phase(VerticalPhase::Grounded);
        state.current_horizontal_speed = config.run_speed;
        projector.project(&state, &config, 1.0 / 60.0, &mut sink);

        let expected = config.run_speed / config.sprint_speed;
        assert!((projector.speed_ratio() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_speed_ratio_is_clamped_to_unit() {
        let config = LocomotionConfig {
            animation_damp_time: 0.0,
            ..Default::default()
        };
        let mut projector = ParameterProjector::from_config(&config);
        let mut sink = RecordingSink::default();

        let mut state = state_with_phase(VerticalPhase::Grounded);
        state.current_horizontal_speed = config.sprint_speed * 10.0;
        projector.project(&state, &config, 1.0 / 60.0, &mut sink);

        assert_eq!(projector.speed_ratio(), 1.0);
    }

    #[test]
    fn test_both_float_params_mirror_each_other() {
        let config = LocomotionConfig::default();
        let mut projector = ParameterProjector::from_config(&config);
        let mut sink = RecordingSink::default();

        let mut state = state_with_phase(VerticalPhase::Grounded);
        state.current_horizontal_speed = config.walk_speed;
        projector.project(&state, &config, 1.0 / 60.0, &mut sink);

        assert_eq!(sink.floats.len(), 2);
        let speed = sink.floats[0];
        let motion = sink.floats[1];
        assert_eq!(speed.0, AnimationParam::Speed);
        assert_eq!(motion.0, AnimationParam::MotionSpeed);
        assert_eq!(speed.1, motion.1);
    }
}
