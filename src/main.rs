//! Emberfall - Headless Demo Session
//!
//! Runs the character controller through a scripted session over a flat
//! world: walk, sprint, jump, sit through a cutscene, then veer off. State
//! is reported through the log; raise verbosity to watch the animation
//! parameters move.

use std::collections::HashMap;

use clap::{Parser, ValueEnum};
use emberfall_game::{
    AnimationParam, AnimationSink, Avatar, EdgeTrigger, GameDirector, GroundPlaneBody, InputSample,
};
use emberfall_locomotion::{CameraRig, LocomotionConfig};
use env_logger::{Builder, Env};
use glam::{Vec2, Vec3};
use log::LevelFilter;

/// A scripted headless run of the character controller
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Simulation ticks per second
    #[arg(long, default_value_t = 60)]
    tick_rate: u32,

    /// Number of ticks to run
    #[arg(long, default_value_t = 720)]
    ticks: u64,

    /// Control scheme preset
    #[arg(long, value_enum, default_value = "third-person")]
    preset: Preset,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    ThirdPerson,
    FirstPerson,
}

impl Preset {
    fn config(self) -> LocomotionConfig {
        match self {
            Preset::ThirdPerson => LocomotionConfig::third_person(),
            Preset::FirstPerson => LocomotionConfig::first_person(),
        }
    }
}

/// Animation sink that narrates parameter writes into the log.
///
/// Floats change almost every tick and go to trace. Booleans are logged only
/// on change, which reads as a timeline of take-offs and landings.
#[derive(Default)]
struct LogSink {
    last: HashMap<AnimationParam, bool>,
}

impl AnimationSink for LogSink {
    fn set_float(&mut self, param: AnimationParam, value: f32) {
        log::trace!("anim {} = {:.3}", param.name(), value);
    }

    fn set_bool(&mut self, param: AnimationParam, value: bool) {
        if self.last.insert(param, value) != Some(value) {
            log::debug!("anim {} = {}", param.name(), value);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let env = Env::default().default_filter_or(level.to_string());
    Builder::from_env(env).format_timestamp(None).init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.tick_rate == 0 {
        log::error!("tick rate must be at least 1");
        std::process::exit(2);
    }
    let dt = 1.0 / args.tick_rate as f32;

    let avatar = Avatar::builder()
        .config(args.preset.config())
        .body(GroundPlaneBody::new(Vec3::ZERO))
        .animation_sink(LogSink::default())
        .build()
        .expect("preset configurations are valid");
    let mut director = GameDirector::new(avatar);

    log::info!("running {} ticks at {} Hz", args.ticks, args.tick_rate);

    let status_every = (args.tick_rate as u64 / 2).max(1);
    let rig = CameraRig::default();
    let mut jump_key = EdgeTrigger::default();
    for tick in 0..args.ticks {
        let seconds = tick as f32 * dt;

        // Scripted session, keyed on the clock so any tick rate plays the
        // same scene.
        let mut sample = InputSample::default();
        sample.move_axes = if seconds < 8.0 {
            Vec2::new(0.0, 1.0)
        } else {
            Vec2::new(1.0, 1.0)
        };
        sample.sprint_held = (2.0..4.0).contains(&seconds);
        if jump_key.update((4.0..4.5).contains(&seconds)) {
            sample.press_jump();
        }
        if seconds >= 9.0 {
            // Slow camera pan over the final stretch.
            sample.look_delta = Vec2::new(0.35 * dt, 0.0);
        }

        if (6.0..7.0).contains(&seconds) {
            if !director.cutscene_active() {
                director.begin_cutscene();
            }
        } else if director.cutscene_active() {
            director.cutscene_finished();
        }

        director.tick(&mut sample, dt);

        if tick % status_every == 0 {
            let avatar = director.avatar();
            let position = avatar.position();
            log::info!(
                "t={:5.2}s pos=({:6.2}, {:5.2}, {:6.2}) grounded={} speed_ratio={:.2}",
                seconds,
                position.x,
                position.y,
                position.z,
                avatar.grounded(),
                avatar.speed_ratio(),
            );
            if let Some(look) = avatar.look() {
                let pose = rig.pose(position, *look);
                log::debug!(
                    "camera eye ({:.2}, {:.2}, {:.2})",
                    pose.eye.x,
                    pose.eye.y,
                    pose.eye.z
                );
            }
        }
    }

    let end = director.avatar().position();
    log::info!(
        "session over after {} frames at ({:.2}, {:.2}, {:.2})",
        director.frame(),
        end.x,
        end.y,
        end.z
    );
}
