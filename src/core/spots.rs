use glam::Vec2;
use smallvec::SmallVec;

use super::constants::ACTIVATION_RADIUS;

pub type SpotId = usize;

/// Static meditation spot configuration. Immutable after registration; the
/// table is fixed at startup and never grows or shrinks.
#[derive(Clone, Debug)]
pub struct MeditationSpot {
    pub id: SpotId,
    pub position: Vec2,
    pub base_color: [f32; 3],
    pub active_color: [f32; 3],
    pub activation_radius: f32,
}

pub type SpotTable = SmallVec<[MeditationSpot; 3]>;

/// The fixed garden layout: light blue, green and purple circles.
pub fn default_spots() -> SpotTable {
    smallvec::smallvec![
        MeditationSpot {
            id: 0,
            position: Vec2::new(5.0, 5.0),
            base_color: [0.29, 0.565, 0.886],   // #4A90E2
            active_color: [0.31, 0.765, 0.969], // #4FC3F7
            activation_radius: ACTIVATION_RADIUS,
        },
        MeditationSpot {
            id: 1,
            position: Vec2::new(-5.0, -5.0),
            base_color: [0.506, 0.78, 0.518],  // #81C784
            active_color: [0.4, 0.733, 0.416], // #66BB6A
            activation_radius: ACTIVATION_RADIUS,
        },
        MeditationSpot {
            id: 2,
            position: Vec2::new(10.0, -10.0),
            base_color: [0.729, 0.408, 0.784],   // #BA68C8
            active_color: [0.671, 0.278, 0.737], // #AB47BC
            activation_radius: ACTIVATION_RADIUS,
        },
    ]
}

/// Per-tick proximity scan: the id of the spot whose activation circle the
/// avatar is strictly inside, or `None`.
///
/// The table is scanned in id order, so overlapping circles resolve to the
/// lowest id deterministically. A missing avatar reads as "no proximity".
pub fn spot_in_range(avatar: Option<Vec2>, spots: &[MeditationSpot]) -> Option<SpotId> {
    let position = avatar?;
    spots
        .iter()
        .find(|spot| spot.position.distance(position) < spot.activation_radius)
        .map(|spot| spot.id)
}
