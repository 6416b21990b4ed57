use super::audio::AudioCommand;
use super::constants::{TERMINAL_STAGE, WARMUP_STAGE_MS};
use super::spots::SpotId;

/// Observable state of the staged activation machine. At most one spot is
/// non-`Inactive` system-wide; the machine tracks that single spot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationState {
    Inactive,
    WarmingUp(u8),
    Active,
}

/// A scheduled stage advance on the simulation clock. Deadlines carry the
/// generation they were scheduled under; a deadline whose generation no
/// longer matches is a no-op when it comes due.
#[derive(Clone, Copy, Debug)]
struct StageDeadline {
    stage: u8,
    due_ms: f64,
    generation: u64,
}

/// Proximity-driven warmup machine for the currently tracked meditation spot.
///
/// Residency advances the stage every `WARMUP_STAGE_MS` until the terminal
/// stage; vacating the circle (or crossing into another spot's circle) resets
/// everything and bumps the generation so superseded deadlines cannot fire.
/// The audio start is latched: reaching the terminal stage emits exactly one
/// `StartFadeIn` until the spot is vacated again.
pub struct SpotActivation {
    tracked: Option<SpotId>,
    stage: u8,
    deadline: Option<StageDeadline>,
    generation: u64,
    audio_started: bool,
}

impl SpotActivation {
    pub fn new() -> Self {
        Self {
            tracked: None,
            stage: 0,
            deadline: None,
            generation: 0,
            audio_started: false,
        }
    }

    /// Advance the machine for one tick. `in_range` is this tick's proximity
    /// verdict; any fade commands are pushed onto `out` for the audio
    /// controller.
    pub fn tick(&mut self, now_ms: f64, in_range: Option<SpotId>, out: &mut Vec<AudioCommand>) {
        if in_range != self.tracked {
            self.retarget(now_ms, in_range, out);
        }
        self.advance_due_stages(now_ms, out);
    }

    fn retarget(&mut self, now_ms: f64, in_range: Option<SpotId>, out: &mut Vec<AudioCommand>) {
        if let Some(prev) = self.tracked {
            if self.audio_started {
                out.push(AudioCommand::StopFadeOut);
            }
            log::info!("[spots] left spot {prev} at stage {}", self.stage);
        }
        // Everything scheduled before this point is stale.
        self.generation = self.generation.wrapping_add(1);
        self.deadline = None;
        self.stage = 0;
        self.audio_started = false;
        self.tracked = in_range;
        if let Some(id) = in_range {
            self.deadline = Some(StageDeadline {
                stage: 1,
                due_ms: now_ms + WARMUP_STAGE_MS,
                generation: self.generation,
            });
            log::info!("[spots] entered spot {id}");
        }
    }

    fn advance_due_stages(&mut self, now_ms: f64, out: &mut Vec<AudioCommand>) {
        while let Some(deadline) = self.deadline {
            if deadline.generation != self.generation {
                self.deadline = None;
                break;
            }
            if now_ms < deadline.due_ms {
                break;
            }
            self.deadline = None;
            self.stage = deadline.stage;
            log::info!("[spots] warmup stage {}", deadline.stage);
            if deadline.stage >= TERMINAL_STAGE {
                if !self.audio_started {
                    self.audio_started = true;
                    out.push(AudioCommand::StartFadeIn);
                }
            } else {
                // Chain from the previous due time so the cadence stays exact
                // under uneven frame deltas.
                self.deadline = Some(StageDeadline {
                    stage: deadline.stage + 1,
                    due_ms: deadline.due_ms + WARMUP_STAGE_MS,
                    generation: self.generation,
                });
            }
        }
    }

    pub fn state(&self) -> ActivationState {
        match self.tracked {
            None => ActivationState::Inactive,
            Some(_) if self.stage >= TERMINAL_STAGE => ActivationState::Active,
            Some(_) => ActivationState::WarmingUp(self.stage),
        }
    }

    pub fn tracked_spot(&self) -> Option<SpotId> {
        self.tracked
    }

    pub fn stage(&self) -> u8 {
        self.stage
    }

    pub fn is_terminal(&self) -> bool {
        self.tracked.is_some() && self.stage >= TERMINAL_STAGE
    }
}

impl Default for SpotActivation {
    fn default() -> Self {
        Self::new()
    }
}
