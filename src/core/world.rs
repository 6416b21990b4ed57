use glam::{Vec2, Vec3};

use super::constants::*;

/// Directional input flags sampled once per tick from the input boundary.
///
/// On keyboard hosts these come from WASD/arrow key state; touch hosts feed
/// the same flags from their joystick layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectionInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionInput {
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// Player-controlled entity. Sole owner of the authoritative ground position
/// `(x, z)`; every other component only reads it (the recovery controller
/// takes over writing for the duration of a flight).
#[derive(Clone, Copy, Debug)]
pub struct Avatar {
    pub position: Vec2,
}

impl Avatar {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }

    /// Apply one tick of directional input as a fixed step per held flag.
    /// Forward is -z, backward +z, left -x, right +x.
    pub fn apply_input(&mut self, input: &DirectionInput) {
        if input.forward {
            self.position.y -= AVATAR_STEP_PER_TICK;
        }
        if input.backward {
            self.position.y += AVATAR_STEP_PER_TICK;
        }
        if input.left {
            self.position.x -= AVATAR_STEP_PER_TICK;
        }
        if input.right {
            self.position.x += AVATAR_STEP_PER_TICK;
        }
    }
}

/// Orbit-style camera framing mirrored from the external rig: azimuth and
/// polar angles around the look target, plus the dolly distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub azimuth: f32,
    pub polar: f32,
    pub distance: f32,
    pub target: Vec3,
}

impl CameraPose {
    /// Canonical resting framing the recovery flight returns to.
    pub fn rest() -> Self {
        Self {
            azimuth: REST_CAMERA_AZIMUTH,
            polar: REST_CAMERA_POLAR,
            distance: REST_CAMERA_DISTANCE,
            target: Vec3::new(0.0, REST_TARGET_HEIGHT, 0.0),
        }
    }

    pub fn lerp(&self, other: &CameraPose, t: f32) -> CameraPose {
        CameraPose {
            azimuth: self.azimuth + (other.azimuth - self.azimuth) * t,
            polar: self.polar + (other.polar - self.polar) * t,
            distance: self.distance + (other.distance - self.distance) * t,
            target: self.target.lerp(other.target, t),
        }
    }
}

/// Shared world state owned by the simulation root and passed by reference.
///
/// `None` fields mean the boundary has not attached that piece yet; every
/// reader treats that as "no value this tick" rather than an error.
#[derive(Default)]
pub struct WorldContext {
    pub avatar: Option<Avatar>,
    pub camera: Option<CameraPose>,
}

impl WorldContext {
    pub fn avatar_position(&self) -> Option<Vec2> {
        self.avatar.as_ref().map(|a| a.position)
    }
}
