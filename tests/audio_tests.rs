// Host-side tests for the audio session controller, against a recording
// fake of the playback boundary.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod audio {
    include!("../src/core/audio.rs");
}

use audio::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
enum Call {
    SetGain(f32, f64),
    RampGain(f32, f64),
    Start(bool),
    Stop,
}

#[derive(Default)]
struct Recorder {
    calls: Vec<(usize, Call)>,
    sessions_created: usize,
}

impl Recorder {
    fn calls_for(&self, session: usize) -> Vec<Call> {
        self.calls
            .iter()
            .filter(|(id, _)| *id == session)
            .map(|(_, c)| c.clone())
            .collect()
    }

    fn count(&self, wanted: &Call) -> usize {
        self.calls.iter().filter(|(_, c)| c == wanted).count()
    }
}

struct FakeSession {
    id: usize,
    log: Rc<RefCell<Recorder>>,
}

impl PlaybackSession for FakeSession {
    fn set_gain(&self, value: f32, at_sec: f64) {
        self.log
            .borrow_mut()
            .calls
            .push((self.id, Call::SetGain(value, at_sec)));
    }
    fn ramp_gain(&self, value: f32, to_sec: f64) {
        self.log
            .borrow_mut()
            .calls
            .push((self.id, Call::RampGain(value, to_sec)));
    }
    fn start(&self, looped: bool) {
        self.log
            .borrow_mut()
            .calls
            .push((self.id, Call::Start(looped)));
    }
    fn stop(&self) {
        self.log.borrow_mut().calls.push((self.id, Call::Stop));
    }
}

struct FakeResource {
    log: Rc<RefCell<Recorder>>,
    available: bool,
}

impl PlaybackResource for FakeResource {
    type Session = FakeSession;

    fn create_session(&mut self) -> Result<FakeSession, PlaybackError> {
        if !self.available {
            return Err(PlaybackError::ResourceUnavailable);
        }
        let id = {
            let mut log = self.log.borrow_mut();
            log.sessions_created += 1;
            log.sessions_created
        };
        Ok(FakeSession {
            id,
            log: self.log.clone(),
        })
    }
}

fn make_controller(available: bool) -> (AudioSessionController<FakeResource>, Rc<RefCell<Recorder>>) {
    let log = Rc::new(RefCell::new(Recorder::default()));
    let controller = AudioSessionController::new(FakeResource {
        log: log.clone(),
        available,
    });
    (controller, log)
}

#[test]
fn fade_in_schedules_the_ramp_and_loops() {
    let (mut controller, log) = make_controller(true);
    controller.start_fade_in(10.0);
    assert_eq!(controller.state(), AudioSessionState::FadingIn);
    assert_eq!(
        log.borrow().calls_for(1),
        vec![
            Call::SetGain(0.0, 10.0),
            Call::RampGain(0.5, 12.0),
            Call::Start(true),
        ]
    );

    controller.tick(11.0);
    assert_eq!(controller.state(), AudioSessionState::FadingIn);
    controller.tick(12.0);
    assert_eq!(controller.state(), AudioSessionState::Playing);
    assert_eq!(controller.current_gain(12.0), 0.5);
}

#[test]
fn fade_out_releases_only_after_the_window() {
    let (mut controller, log) = make_controller(true);
    controller.start_fade_in(0.0);
    controller.tick(2.0);

    controller.stop_fade_out(5.0);
    assert_eq!(controller.state(), AudioSessionState::FadingOut);
    assert_eq!(
        log.borrow().calls_for(1)[3..],
        [Call::SetGain(0.5, 5.0), Call::RampGain(0.0, 6.0)]
    );

    controller.tick(5.5);
    assert_eq!(log.borrow().count(&Call::Stop), 0, "release waits for the fade");
    controller.tick(6.0);
    assert_eq!(log.borrow().count(&Call::Stop), 1);
    assert_eq!(controller.state(), AudioSessionState::Stopped);
    assert!(!controller.has_session());
}

#[test]
fn fade_out_mid_fade_in_anchors_at_the_reached_gain() {
    let (mut controller, log) = make_controller(true);
    controller.start_fade_in(0.0);
    // Half way through the 2 s fade-in the nominal gain is 0.25.
    controller.stop_fade_out(1.0);
    assert_eq!(
        log.borrow().calls_for(1)[3..],
        [Call::SetGain(0.25, 1.0), Call::RampGain(0.0, 2.0)]
    );
}

#[test]
fn restart_during_fade_out_supersedes_the_release() {
    let (mut controller, log) = make_controller(true);
    controller.start_fade_in(0.0);
    controller.tick(2.0);
    controller.stop_fade_out(3.0);

    // New session before the release deadline: the old one stops now, and
    // the stale deadline must not touch the replacement.
    controller.start_fade_in(3.5);
    assert_eq!(log.borrow().count(&Call::Stop), 1);
    controller.tick(4.0);
    assert_eq!(controller.state(), AudioSessionState::FadingIn);
    assert_eq!(
        log.borrow()
            .calls_for(2)
            .iter()
            .filter(|c| **c == Call::Stop)
            .count(),
        0,
        "the replacement session survives the old release deadline"
    );
    controller.tick(5.5);
    assert_eq!(controller.state(), AudioSessionState::Playing);
}

#[test]
fn overlapping_starts_keep_a_single_session() {
    let (mut controller, log) = make_controller(true);
    controller.start_fade_in(0.0);
    controller.start_fade_in(0.5);
    let log = log.borrow();
    assert_eq!(log.sessions_created, 2);
    assert_eq!(log.calls_for(1).last(), Some(&Call::Stop));
    assert_eq!(log.calls_for(2).last(), Some(&Call::Start(true)));
}

#[test]
fn unavailable_resource_degrades_to_silence() {
    let (mut controller, log) = make_controller(false);
    controller.start_fade_in(0.0);
    assert_eq!(controller.state(), AudioSessionState::Stopped);
    assert!(!controller.has_session());
    assert!(log.borrow().calls.is_empty());

    // Stopping with nothing live stays a no-op.
    controller.stop_fade_out(1.0);
    controller.tick(2.0);
    assert_eq!(controller.state(), AudioSessionState::Stopped);
    assert!(log.borrow().calls.is_empty());
}

#[test]
fn nominal_gain_tracks_the_fade_ramps() {
    let (mut controller, _log) = make_controller(true);
    assert_eq!(controller.current_gain(0.0), 0.0);
    controller.start_fade_in(0.0);
    assert_eq!(controller.current_gain(0.0), 0.0);
    assert_eq!(controller.current_gain(1.0), 0.25);
    assert_eq!(controller.current_gain(2.0), 0.5);
    assert_eq!(controller.current_gain(99.0), 0.5, "clamped past the ramp");

    controller.tick(2.0);
    controller.stop_fade_out(4.0);
    assert_eq!(controller.current_gain(4.5), 0.25);
    controller.tick(5.0);
    assert_eq!(controller.current_gain(5.0), 0.0);
}
