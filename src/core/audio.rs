use thiserror::Error;

use super::constants::{AUDIO_FADE_IN_SEC, AUDIO_FADE_OUT_SEC, AUDIO_TARGET_GAIN};

/// Fade commands emitted by the activation machine and the guided session.
/// Only these reach the controller; the proximity detector never drives audio
/// directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCommand {
    StartFadeIn,
    StopFadeOut,
}

#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Decode or playback acquisition failed; feedback stays visual-only.
    #[error("playback resource unavailable")]
    ResourceUnavailable,
}

/// One live looping playback with a schedulable gain envelope. Times are in
/// the playback clock's seconds (the `AudioContext` clock on the web).
pub trait PlaybackSession {
    fn set_gain(&self, value: f32, at_sec: f64);
    fn ramp_gain(&self, value: f32, to_sec: f64);
    fn start(&self, looped: bool);
    fn stop(&self);
}

/// Factory over the singleton playback resource (the decoded ambient track).
pub trait PlaybackResource {
    type Session: PlaybackSession;
    fn create_session(&mut self) -> Result<Self::Session, PlaybackError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioSessionState {
    Stopped,
    FadingIn,
    Playing,
    FadingOut,
}

/// Owns the ambient track lifecycle: at most one session exists at any time,
/// fades are scheduled on the playback clock, and the deferred release at the
/// end of a fade-out is superseded by any new fade-in.
pub struct AudioSessionController<R: PlaybackResource> {
    resource: R,
    session: Option<R::Session>,
    state: AudioSessionState,
    fade_started_sec: f64,
    fade_ends_sec: f64,
    fade_from_gain: f32,
    fade_to_gain: f32,
}

impl<R: PlaybackResource> AudioSessionController<R> {
    pub fn new(resource: R) -> Self {
        Self {
            resource,
            session: None,
            state: AudioSessionState::Stopped,
            fade_started_sec: 0.0,
            fade_ends_sec: 0.0,
            fade_from_gain: 0.0,
            fade_to_gain: 0.0,
        }
    }

    pub fn apply(&mut self, command: AudioCommand, now_sec: f64) {
        match command {
            AudioCommand::StartFadeIn => self.start_fade_in(now_sec),
            AudioCommand::StopFadeOut => self.stop_fade_out(now_sec),
        }
    }

    /// Begin a fresh looping session ramping from silence to the target
    /// level. Any existing session (playing, fading in, or waiting on a
    /// fade-out release) is stopped first; there is never an overlap.
    pub fn start_fade_in(&mut self, now_sec: f64) {
        if let Some(old) = self.session.take() {
            old.stop();
        }
        match self.resource.create_session() {
            Ok(session) => {
                session.set_gain(0.0, now_sec);
                session.ramp_gain(AUDIO_TARGET_GAIN, now_sec + AUDIO_FADE_IN_SEC);
                session.start(true);
                self.session = Some(session);
                self.state = AudioSessionState::FadingIn;
                self.fade_started_sec = now_sec;
                self.fade_ends_sec = now_sec + AUDIO_FADE_IN_SEC;
                self.fade_from_gain = 0.0;
                self.fade_to_gain = AUDIO_TARGET_GAIN;
                log::info!("[audio] fade in started");
            }
            Err(e) => {
                log::warn!("[audio] {e}; continuing without sound");
                self.state = AudioSessionState::Stopped;
            }
        }
    }

    /// Ramp the current gain to silence over the fade-out window; the
    /// underlying session is released when the window elapses (in `tick`).
    pub fn stop_fade_out(&mut self, now_sec: f64) {
        let gain = self.current_gain(now_sec);
        let Some(session) = self.session.as_ref() else {
            return;
        };
        session.set_gain(gain, now_sec);
        session.ramp_gain(0.0, now_sec + AUDIO_FADE_OUT_SEC);
        self.state = AudioSessionState::FadingOut;
        self.fade_started_sec = now_sec;
        self.fade_ends_sec = now_sec + AUDIO_FADE_OUT_SEC;
        self.fade_from_gain = gain;
        self.fade_to_gain = 0.0;
        log::info!("[audio] fade out started from gain {gain:.2}");
    }

    /// Settle fade boundaries: a completed fade-in becomes `Playing`, a
    /// completed fade-out releases the session.
    pub fn tick(&mut self, now_sec: f64) {
        match self.state {
            AudioSessionState::FadingIn if now_sec >= self.fade_ends_sec => {
                self.state = AudioSessionState::Playing;
            }
            AudioSessionState::FadingOut if now_sec >= self.fade_ends_sec => {
                if let Some(session) = self.session.take() {
                    session.stop();
                }
                self.state = AudioSessionState::Stopped;
            }
            _ => {}
        }
    }

    /// Nominal gain at `now_sec`, tracking the scheduled ramps. Used to
    /// anchor a fade-out that interrupts a fade-in at the reached level.
    pub fn current_gain(&self, now_sec: f64) -> f32 {
        match self.state {
            AudioSessionState::Stopped => 0.0,
            AudioSessionState::Playing => AUDIO_TARGET_GAIN,
            AudioSessionState::FadingIn | AudioSessionState::FadingOut => {
                let span = self.fade_ends_sec - self.fade_started_sec;
                let t = if span <= 0.0 {
                    1.0_f32
                } else {
                    (((now_sec - self.fade_started_sec) / span).clamp(0.0, 1.0)) as f32
                };
                self.fade_from_gain + (self.fade_to_gain - self.fade_from_gain) * t
            }
        }
    }

    pub fn state(&self) -> AudioSessionState {
        self.state
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }
}
