use glam::{Vec2, Vec3};
use std::time::Duration;

use super::activation::{ActivationState, SpotActivation};
use super::audio::{AudioCommand, AudioSessionController, AudioSessionState, PlaybackResource};
use super::constants::CAMERA_FOLLOW_HEIGHT;
use super::recovery::{RecoveryConfig, RecoveryController};
use super::session::GuidedSession;
use super::spots::{default_spots, spot_in_range, MeditationSpot, SpotId, SpotTable};
use super::visuals::{SpotRenderState, SpotVisuals};
use super::world::{Avatar, CameraPose, DirectionInput, WorldContext};

/// Everything the renderer/UI boundary reads for one frame.
pub struct RenderSnapshot {
    pub spots: Vec<SpotRenderState>,
    pub avatar_position: Option<Vec2>,
    pub camera: Option<CameraPose>,
    pub recovery_available: bool,
}

/// Simulation root: owns the world context and every controller, and runs
/// the per-tick pipeline in a fixed order so the renderer always reads this
/// tick's activation state.
///
/// Order per tick: input movement, proximity, activation, guided session,
/// audio, recovery, camera follow, visuals.
pub struct Simulation<R: PlaybackResource> {
    clock_ms: f64,
    world: WorldContext,
    spots: SpotTable,
    activation: SpotActivation,
    audio: AudioSessionController<R>,
    recovery: RecoveryController,
    session: GuidedSession,
    visuals: SpotVisuals,
    commands: Vec<AudioCommand>,
}

impl<R: PlaybackResource> Simulation<R> {
    pub fn new(resource: R) -> Self {
        Self::with_recovery_config(resource, RecoveryConfig::default())
    }

    pub fn with_recovery_config(resource: R, recovery: RecoveryConfig) -> Self {
        let spots = default_spots();
        let visuals = SpotVisuals::new(&spots);
        Self {
            clock_ms: 0.0,
            world: WorldContext::default(),
            spots,
            activation: SpotActivation::new(),
            audio: AudioSessionController::new(resource),
            recovery: RecoveryController::new(recovery),
            session: GuidedSession::default(),
            visuals,
            commands: Vec::new(),
        }
    }

    pub fn attach_avatar(&mut self, position: Vec2) {
        self.world.avatar = Some(Avatar::new(position));
    }

    pub fn attach_camera(&mut self, pose: CameraPose) {
        self.world.camera = Some(pose);
    }

    pub fn set_avatar_position(&mut self, position: Vec2) {
        if let Some(avatar) = self.world.avatar.as_mut() {
            avatar.position = position;
        }
    }

    pub fn avatar_position(&self) -> Option<Vec2> {
        self.world.avatar_position()
    }

    pub fn camera(&self) -> Option<CameraPose> {
        self.world.camera
    }

    /// One simulation step. `audio_now_sec` is the playback clock (the
    /// `AudioContext` time on the web), used only for fade scheduling.
    pub fn tick(&mut self, dt: Duration, input: &DirectionInput, audio_now_sec: f64) {
        let dt_ms = dt.as_secs_f64() * 1000.0;
        let dt_sec = dt.as_secs_f32();
        self.clock_ms += dt_ms;

        // Input moves the avatar unless a recovery flight owns the position.
        if !self.recovery.in_flight() {
            if let Some(avatar) = self.world.avatar.as_mut() {
                avatar.apply_input(input);
            }
        }

        // Proximity feeds the activation machine before anything reads stage
        // state this tick.
        let in_range = spot_in_range(self.world.avatar_position(), &self.spots);
        self.commands.clear();
        self.activation.tick(self.clock_ms, in_range, &mut self.commands);
        self.session.tick(dt_ms, &mut self.commands);
        for command in self.commands.drain(..) {
            self.audio.apply(command, audio_now_sec);
        }
        self.audio.tick(audio_now_sec);

        self.recovery.tick(dt_ms, &mut self.world);
        if !self.recovery.in_flight() {
            self.follow_avatar();
        }

        self.visuals.tick(dt_sec, &self.spots, &self.activation);
    }

    /// Keep the camera look target on the avatar at head height.
    fn follow_avatar(&mut self) {
        let Some(position) = self.world.avatar_position() else {
            return;
        };
        if let Some(camera) = self.world.camera.as_mut() {
            camera.target = Vec3::new(position.x, CAMERA_FOLLOW_HEIGHT, position.y);
        }
    }

    pub fn trigger_recovery(&mut self) {
        self.recovery.trigger(&self.world);
    }

    pub fn recovery_available(&self) -> bool {
        self.recovery.available()
    }

    pub fn recovery_in_flight(&self) -> bool {
        self.recovery.in_flight()
    }

    pub fn begin_session(&mut self, minutes: u32, audio_now_sec: f64) {
        self.commands.clear();
        self.session.begin(minutes, &mut self.commands);
        for command in self.commands.drain(..) {
            self.audio.apply(command, audio_now_sec);
        }
    }

    pub fn end_session(&mut self, audio_now_sec: f64) {
        self.commands.clear();
        self.session.end(&mut self.commands);
        for command in self.commands.drain(..) {
            self.audio.apply(command, audio_now_sec);
        }
    }

    pub fn session_running(&self) -> bool {
        self.session.is_running()
    }

    pub fn activation_state(&self) -> ActivationState {
        self.activation.state()
    }

    pub fn tracked_spot(&self) -> Option<SpotId> {
        self.activation.tracked_spot()
    }

    pub fn audio_state(&self) -> AudioSessionState {
        self.audio.state()
    }

    pub fn spots(&self) -> &[MeditationSpot] {
        &self.spots
    }

    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    pub fn render_state(&self) -> RenderSnapshot {
        RenderSnapshot {
            spots: self.visuals.render_state(&self.spots, &self.activation),
            avatar_position: self.world.avatar_position(),
            camera: self.world.camera,
            recovery_available: self.recovery.available(),
        }
    }
}
