// Host-side tests for the spot table and proximity detector.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod spots {
    include!("../src/core/spots.rs");
}

use glam::Vec2;
use spots::*;

#[test]
fn default_table_matches_garden_layout() {
    let spots = default_spots();
    assert_eq!(spots.len(), 3);
    for (i, spot) in spots.iter().enumerate() {
        assert_eq!(spot.id, i);
        assert_eq!(spot.activation_radius, 1.5);
    }
    assert_eq!(spots[0].position, Vec2::new(5.0, 5.0));
    assert_eq!(spots[1].position, Vec2::new(-5.0, -5.0));
    assert_eq!(spots[2].position, Vec2::new(10.0, -10.0));
}

#[test]
fn outside_every_radius_is_none() {
    let spots = default_spots();
    for position in [
        Vec2::ZERO,
        Vec2::new(3.0, 3.0),
        Vec2::new(-20.0, 7.0),
        Vec2::new(8.0, -8.0),
    ] {
        assert_eq!(spot_in_range(Some(position), &spots), None, "at {position}");
    }
}

#[test]
fn strictly_inside_a_circle_reports_that_spot() {
    let spots = default_spots();
    assert_eq!(spot_in_range(Some(Vec2::new(5.0, 5.0)), &spots), Some(0));
    assert_eq!(spot_in_range(Some(Vec2::new(5.2, 5.2)), &spots), Some(0));
    assert_eq!(spot_in_range(Some(Vec2::new(-5.4, -4.8)), &spots), Some(1));
    assert_eq!(spot_in_range(Some(Vec2::new(10.0, -9.1)), &spots), Some(2));
}

#[test]
fn exactly_on_the_radius_is_outside() {
    // The check is strict: distance < radius, never <=.
    let spots = default_spots();
    assert_eq!(spot_in_range(Some(Vec2::new(6.5, 5.0)), &spots), None);
    assert_eq!(
        spot_in_range(Some(Vec2::new(6.4999, 5.0)), &spots),
        Some(0)
    );
}

#[test]
fn missing_avatar_reads_as_no_proximity() {
    let spots = default_spots();
    assert_eq!(spot_in_range(None, &spots), None);
}

#[test]
fn overlapping_circles_resolve_to_lowest_id() {
    // Should not occur with the garden spacing, but the scan must stay
    // deterministic if it ever does.
    let overlapping: SpotTable = smallvec::smallvec![
        MeditationSpot {
            id: 0,
            position: Vec2::new(0.0, 0.0),
            base_color: [1.0, 0.0, 0.0],
            active_color: [1.0, 0.5, 0.5],
            activation_radius: 1.5,
        },
        MeditationSpot {
            id: 1,
            position: Vec2::new(1.0, 0.0),
            base_color: [0.0, 1.0, 0.0],
            active_color: [0.5, 1.0, 0.5],
            activation_radius: 1.5,
        },
    ];
    // (0.9, 0) is inside both circles and nearer to spot 1.
    assert_eq!(
        spot_in_range(Some(Vec2::new(0.9, 0.0)), &overlapping),
        Some(0)
    );
}
