/// Per-frame animation: the simulation clock, orbit following, sphere spin
/// and the bounded retrograde sequence.

use glam::Vec3;
use orrery_engine::{EngineContext, SimulationClock};

use crate::bodies::BodyTable;
use crate::controller::{DisplayMode, OrbitBinding, SceneContents};
use crate::orbit;

/// A fixed number of frames during which the focused body is drawn at its
/// offset from Earth instead of on its own orbit.
///
/// While the clock runs the sequence samples it. While the clock is frozen
/// the sequence advances its own time by the clock step, and on its last
/// frame puts the body back at `rest`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetrogradeSequence {
    target: OrbitBinding,
    remaining: u32,
    /// Scene generation the sequence was started under.
    generation: u64,
    time: f64,
    rest: Option<Vec3>,
}

impl RetrogradeSequence {
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

/// What one `tick` did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Simulation time advanced and orbits were re-queried.
    pub advanced: bool,
    /// A retrograde frame was applied.
    pub retrograde_frame: bool,
}

pub struct AnimationDriver {
    clock: SimulationClock,
    spin_step: f32,
    retrograde_frames: u32,
    retrograde: Option<RetrogradeSequence>,
}

impl AnimationDriver {
    pub fn new(sim_step: f64, spin_step: f32, retrograde_frames: u32) -> Self {
        Self {
            clock: SimulationClock::new(sim_step),
            spin_step,
            retrograde_frames,
            retrograde: None,
        }
    }

    pub fn sim_time(&self) -> f64 {
        self.clock.time()
    }

    pub fn retrograde(&self) -> Option<&RetrogradeSequence> {
        self.retrograde.as_ref()
    }

    pub fn retrograde_remaining(&self) -> u32 {
        self.retrograde.map_or(0, |s| s.remaining)
    }

    /// Begin a sequence for `target`, replacing any sequence already running.
    /// `rest` is where the body goes when the sequence ends, for scenes
    /// where the clock does not move it back. Returns false for an empty budget.
    pub fn start_retrograde(&mut self, target: OrbitBinding, generation: u64, rest: Option<Vec3>) -> bool {
        if self.retrograde_frames == 0 {
            log::debug!("retrograde ignored: frame budget is zero");
            return false;
        }
        if self.retrograde.is_some() {
            log::debug!("retrograde restarted");
        }
        self.retrograde = Some(RetrogradeSequence {
            target,
            remaining: self.retrograde_frames,
            generation,
            time: self.clock.time(),
            rest,
        });
        true
    }

    pub fn cancel_retrograde(&mut self) {
        self.retrograde = None;
    }

    /// One display refresh worth of animation.
    pub fn tick(
        &mut self,
        ctx: &mut EngineContext,
        mode: &DisplayMode,
        contents: &SceneContents,
        table: &BodyTable,
    ) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if mode.animates() {
            let t = self.clock.advance();
            for binding in &contents.orbiting {
                let Some(body) = table.get_index(binding.body) else {
                    continue;
                };
                if let Some(entity) = ctx.scene.get_mut(binding.entity) {
                    entity.pos = orbit::position(body, t);
                    entity.rotation_y += self.spin_step;
                }
            }
            outcome.advanced = true;
        }

        outcome.retrograde_frame = self.step_retrograde(ctx, table, outcome.advanced);
        outcome
    }

    fn step_retrograde(&mut self, ctx: &mut EngineContext, table: &BodyTable, clock_running: bool) -> bool {
        let Some(seq) = self.retrograde.as_mut() else {
            return false;
        };
        if seq.generation != ctx.scene_generation() {
            log::debug!("retrograde dropped: scene replaced");
            self.retrograde = None;
            return false;
        }

        if clock_running {
            seq.time = self.clock.time();
        } else {
            seq.time += self.clock.step();
        }
        seq.remaining = seq.remaining.saturating_sub(1);
        let last = seq.remaining == 0;

        let t = seq.time;
        let pos = match seq.rest {
            Some(rest) if last => Some(rest),
            _ => table
                .get_index(seq.target.body)
                .map(|body| orbit::retrograde_offset(body, table.earth(), t)),
        };
        match (pos, ctx.scene.get_mut(seq.target.entity)) {
            (Some(pos), Some(entity)) => entity.pos = pos,
            _ => {
                self.retrograde = None;
                return false;
            }
        }

        if last {
            log::debug!("retrograde sequence complete");
            self.retrograde = None;
        }
        true
    }
}
