use glam::Vec2;

use super::constants::*;
use super::world::{CameraPose, WorldContext};

/// Cubic ease-out, the recovery flight's easing curve.
pub fn ease_out_cubic(progress: f32) -> f32 {
    1.0 - (1.0 - progress).powi(3)
}

/// Tunable recovery behavior; the defaults are the canonical values.
#[derive(Clone, Debug)]
pub struct RecoveryConfig {
    pub check_interval_ms: f64,
    pub distance_threshold: f32,
    pub world_boundary: f32,
    pub duration_ms: f64,
    pub rest_position: Vec2,
    pub rest_camera: CameraPose,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            check_interval_ms: RECOVERY_CHECK_INTERVAL_MS,
            distance_threshold: RECOVERY_DISTANCE_THRESHOLD,
            world_boundary: WORLD_BOUNDARY,
            duration_ms: RECOVERY_DURATION_MS,
            rest_position: Vec2::ZERO,
            rest_camera: CameraPose::rest(),
        }
    }
}

/// One in-progress flight home. Captures the values at trigger time so a
/// retrigger mid-flight restarts from wherever the animation currently is.
struct Flight {
    progress: f32,
    from_position: Vec2,
    from_camera: CameraPose,
}

/// Watches for the avatar wandering out of the garden and, on request, flies
/// avatar and camera back to the resting pose over a fixed duration.
///
/// While a flight is active this controller is the sole writer of the avatar
/// position; the simulation root suppresses directional input for those
/// ticks.
pub struct RecoveryController {
    config: RecoveryConfig,
    available: bool,
    since_check_ms: f64,
    flight: Option<Flight>,
}

impl RecoveryController {
    pub fn new(config: RecoveryConfig) -> Self {
        Self {
            config,
            available: false,
            since_check_ms: 0.0,
            flight: None,
        }
    }

    pub fn available(&self) -> bool {
        self.available
    }

    pub fn in_flight(&self) -> bool {
        self.flight.is_some()
    }

    pub fn config(&self) -> &RecoveryConfig {
        &self.config
    }

    /// Begin (or restart) the flight home from the current avatar position
    /// and camera framing. A missing avatar means there is nothing to
    /// recover; the request is dropped.
    pub fn trigger(&mut self, world: &WorldContext) {
        let Some(avatar) = world.avatar.as_ref() else {
            return;
        };
        let from_camera = world.camera.unwrap_or_else(CameraPose::rest);
        log::info!(
            "[recovery] returning home from ({:.1}, {:.1})",
            avatar.position.x,
            avatar.position.y
        );
        self.flight = Some(Flight {
            progress: 0.0,
            from_position: avatar.position,
            from_camera,
        });
    }

    pub fn tick(&mut self, dt_ms: f64, world: &mut WorldContext) {
        if self.flight.is_some() {
            self.step_flight(dt_ms, world);
        } else {
            self.boundary_check(dt_ms, world);
        }
    }

    fn step_flight(&mut self, dt_ms: f64, world: &mut WorldContext) {
        let Some(flight) = self.flight.as_mut() else {
            return;
        };
        flight.progress = (flight.progress + (dt_ms / self.config.duration_ms) as f32).min(1.0);
        let eased = ease_out_cubic(flight.progress);
        if let Some(avatar) = world.avatar.as_mut() {
            avatar.position = flight
                .from_position
                .lerp(self.config.rest_position, eased);
        }
        if let Some(camera) = world.camera.as_mut() {
            *camera = flight.from_camera.lerp(&self.config.rest_camera, eased);
        }
        if flight.progress >= 1.0 {
            // Land on the exact targets, not the last sampled lerp.
            if let Some(avatar) = world.avatar.as_mut() {
                avatar.position = self.config.rest_position;
            }
            if let Some(camera) = world.camera.as_mut() {
                *camera = self.config.rest_camera;
            }
            self.flight = None;
            self.available = false;
            log::info!("[recovery] back at rest");
        }
    }

    fn boundary_check(&mut self, dt_ms: f64, world: &WorldContext) {
        self.since_check_ms += dt_ms;
        if self.since_check_ms < self.config.check_interval_ms {
            return;
        }
        self.since_check_ms = 0.0;
        let Some(avatar) = world.avatar.as_ref() else {
            return;
        };
        let origin_distance = avatar.position.length();
        let out_of_bounds = avatar.position.x.abs() > self.config.world_boundary
            || avatar.position.y.abs() > self.config.world_boundary;
        let wandered = origin_distance > self.config.distance_threshold || out_of_bounds;
        if wandered != self.available {
            self.available = wandered;
            log::info!(
                "[recovery] available={wandered} (origin distance {origin_distance:.1})"
            );
        }
    }
}
