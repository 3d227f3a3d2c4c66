//! Cutscene direction and the control gate.
//!
//! The original problem this solves: while a timeline/cutscene plays, the
//! player must not move, and when it ends control must always come back.
//! Rather than paired enable/disable calls that can be forgotten on one
//! path, suspension is a guard value; dropping it releases control, whatever
//! path drops it.

use std::cell::Cell;
use std::rc::Rc;

use emberfall_locomotion::{CharacterBody, InputSample};

use crate::avatar::Avatar;

/// Counts outstanding control suspensions.
///
/// Player control is live only while the count is zero. Clones share the
/// count, so a gate handle can be given to anything that may need to pause
/// control (cutscenes, menus, dialogue).
#[derive(Debug, Clone, Default)]
pub struct ControlGate {
    suspensions: Rc<Cell<u32>>,
}

impl ControlGate {
    /// A gate with no outstanding suspensions.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no suspension is outstanding.
    pub fn is_open(&self) -> bool {
        self.suspensions.get() == 0
    }

    /// Number of outstanding suspensions.
    pub fn depth(&self) -> u32 {
        self.suspensions.get()
    }

    /// Suspend control until the returned guard is dropped.
    pub fn suspend(&self) -> ControlSuspension {
        let depth = self.suspensions.get() + 1;
        self.suspensions.set(depth);
        log::debug!("control suspended (depth {})", depth);
        ControlSuspension {
            suspensions: Rc::clone(&self.suspensions),
        }
    }
}

/// One outstanding control suspension; releases on drop.
#[must_use = "control resumes as soon as the suspension is dropped"]
#[derive(Debug)]
pub struct ControlSuspension {
    suspensions: Rc<Cell<u32>>,
}

impl Drop for ControlSuspension {
    fn drop(&mut self) {
        let depth = self.suspensions.get() - 1;
        self.suspensions.set(depth);
        log::debug!("control suspension released (depth {})", depth);
    }
}

/// Owns the avatar and decides per tick whether player control runs.
///
/// While the gate is closed the locomotion tick is not invoked at all, so
/// position, grounding and animation state freeze exactly where they were.
/// Input gathered during that time is dropped, not queued: a jump pressed
/// mid-cutscene does not fire when control returns.
///
/// Cutscene playback itself is external; whatever plays the timeline calls
/// [`begin_cutscene`](Self::begin_cutscene) and
/// [`cutscene_finished`](Self::cutscene_finished).
pub struct GameDirector<B: CharacterBody> {
    avatar: Avatar<B>,
    gate: ControlGate,
    cutscene: Option<ActiveCutscene>,
    frame: u64,
}

struct ActiveCutscene {
    _suspension: ControlSuspension,
    started_frame: u64,
}

impl<B: CharacterBody> GameDirector<B> {
    /// Put the director in charge of an avatar.
    pub fn new(avatar: Avatar<B>) -> Self {
        Self {
            avatar,
            gate: ControlGate::new(),
            cutscene: None,
            frame: 0,
        }
    }

    /// Advance one frame.
    pub fn tick(&mut self, sample: &mut InputSample, delta_time: f32) {
        if self.gate.is_open() {
            self.avatar.tick(sample, delta_time);
        } else {
            // Presses made while control is suspended go nowhere.
            sample.clear();
        }
        self.frame += 1;
    }

    /// A cutscene started; suspend player control.
    pub fn begin_cutscene(&mut self) {
        if self.cutscene.is_some() {
            log::warn!("cutscene already playing, ignoring start");
            return;
        }
        log::info!("cutscene started at frame {}", self.frame);
        self.cutscene = Some(ActiveCutscene {
            _suspension: self.gate.suspend(),
            started_frame: self.frame,
        });
    }

    /// The cutscene ended; drop its suspension so control can return.
    pub fn cutscene_finished(&mut self) {
        match self.cutscene.take() {
            Some(scene) => {
                log::info!(
                    "cutscene finished after {} frames",
                    self.frame - scene.started_frame
                );
            }
            None => log::warn!("cutscene finish signalled with none playing"),
        }
    }

    /// A cutscene is currently playing.
    pub fn cutscene_active(&self) -> bool {
        self.cutscene.is_some()
    }

    /// Player control will run on the next tick.
    pub fn controls_enabled(&self) -> bool {
        self.gate.is_open()
    }

    /// The control gate, for systems other than cutscenes that need to
    /// pause the player.
    pub fn gate(&self) -> &ControlGate {
        &self.gate
    }

    /// Frames elapsed, counting suspended ones.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// The directed avatar.
    pub fn avatar(&self) -> &Avatar<B> {
        &self.avatar
    }

    /// Mutable access to the directed avatar.
    pub fn avatar_mut(&mut self) -> &mut Avatar<B> {
        &mut self.avatar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_counts_suspensions() {
        let gate = ControlGate::new();
        assert!(gate.is_open());

        let outer = gate.suspend();
        assert!(!gate.is_open());
        assert_eq!(gate.depth(), 1);

        let inner = gate.suspend();
        assert_eq!(gate.depth(), 2);

        drop(outer);
        assert!(!gate.is_open(), "one suspension still outstanding");

        drop(inner);
        assert!(gate.is_open());
    }

    #[test]
    fn test_clones_share_the_count() {
        let gate = ControlGate::new();
        let handle = gate.clone();

        let guard = handle.suspend();
        assert!(!gate.is_open());
        drop(guard);
        assert!(gate.is_open());
    }

    #[test]
    fn test_guard_releases_on_early_exit() {
        let gate = ControlGate::new();

        // A scope that bails early still releases its suspension.
        let bail = |gate: &ControlGate, fail: bool| -> Result<(), &'static str> {
            let _suspension = gate.suspend();
            if fail {
                return Err("interrupted");
            }
            Ok(())
        };

        assert!(bail(&gate, true).is_err());
        assert!(gate.is_open(), "suspension must not outlive the scope");
    }
}
