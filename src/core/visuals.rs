use glam::Vec3;

use super::activation::SpotActivation;
use super::constants::*;
use super::spots::MeditationSpot;

/// Per-spot state handed to the external renderer each frame. The renderer
/// draws from this; it never computes activation feedback itself.
#[derive(Clone, Copy, Debug)]
pub struct SpotRenderState {
    pub position: Vec3,
    pub display_color: [f32; 3],
    pub emissive_intensity: f32,
    pub show_beacon_particles: bool,
    pub show_beam_and_text: bool,
}

/// Frame-smoothed display colors plus the terminal-stage pulse.
pub struct SpotVisuals {
    colors: Vec<[f32; 3]>,
    pulse_sec: f32,
}

impl SpotVisuals {
    pub fn new(spots: &[MeditationSpot]) -> Self {
        Self {
            colors: spots.iter().map(|s| s.base_color).collect(),
            pulse_sec: 0.0,
        }
    }

    /// Ease every display color toward its target for this frame: the stage
    /// color while the spot is tracked, its base color otherwise.
    pub fn tick(&mut self, dt_sec: f32, spots: &[MeditationSpot], activation: &SpotActivation) {
        let alpha = (dt_sec * COLOR_EASE_PER_SEC).min(1.0);
        for (i, spot) in spots.iter().enumerate() {
            let target = if activation.tracked_spot() == Some(spot.id) {
                stage_color(activation.stage(), spot)
            } else {
                spot.base_color
            };
            let color = &mut self.colors[i];
            for ch in 0..3 {
                color[ch] += (target[ch] - color[ch]) * alpha;
            }
        }
        if activation.is_terminal() {
            self.pulse_sec += dt_sec;
        } else {
            self.pulse_sec = 0.0;
        }
    }

    pub fn render_state(
        &self,
        spots: &[MeditationSpot],
        activation: &SpotActivation,
    ) -> Vec<SpotRenderState> {
        spots
            .iter()
            .enumerate()
            .map(|(i, spot)| {
                let tracked = activation.tracked_spot() == Some(spot.id);
                let mut emissive = if tracked { EMISSIVE_ACTIVE } else { EMISSIVE_IDLE };
                if tracked && activation.is_terminal() {
                    emissive *= self.pulse();
                }
                SpotRenderState {
                    position: Vec3::new(spot.position.x, 0.0, spot.position.y),
                    display_color: self.colors[i],
                    emissive_intensity: emissive,
                    show_beacon_particles: !tracked,
                    show_beam_and_text: tracked,
                }
            })
            .collect()
    }

    /// Oscillates in [1 - PULSE_DEPTH, 1 + PULSE_DEPTH] while terminal.
    pub fn pulse(&self) -> f32 {
        self.pulse_sec.sin() * PULSE_DEPTH + 1.0
    }
}

fn stage_color(stage: u8, spot: &MeditationSpot) -> [f32; 3] {
    match stage {
        0 => spot.active_color,
        1 => STAGE_GOLD,
        2 => STAGE_WARM_RED,
        _ => STAGE_SIGNATURE_BLUE,
    }
}
