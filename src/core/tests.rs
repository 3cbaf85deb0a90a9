//! Core domain: tests for world geometry, camera math and the restart timer.

use bevy::prelude::Vec2;
use std::time::Duration;

use super::{SceneRestart, WorldGeometry, clamp_to_bounds, smooth_follow};
use crate::content::{TileMapData, parse_tile_map};

fn geometry_800x600() -> WorldGeometry {
    WorldGeometry {
        width: 800.0,
        height: 600.0,
        tile_size: Vec2::splat(40.0),
    }
}

// -----------------------------------------------------------------------------
// WorldGeometry tests
// -----------------------------------------------------------------------------

#[test]
fn test_geometry_from_map_applies_scale() {
    let map = parse_tile_map(
        r#"{ "width": 20, "height": 15, "tilewidth": 16, "tileheight": 16 }"#,
        "inline",
    )
    .unwrap();
    let geometry = WorldGeometry::from_map(&map, 2.5);

    assert_eq!(geometry.width, 800.0);
    assert_eq!(geometry.height, 600.0);
    assert_eq!(geometry.tile_size, Vec2::splat(40.0));
}

#[test]
fn test_geometry_of_empty_map_is_zero_sized() {
    let geometry = WorldGeometry::from_map(&TileMapData::default(), 2.5);
    assert_eq!(geometry.size(), Vec2::ZERO);
}

#[test]
fn test_to_world_flips_y() {
    let geometry = geometry_800x600();
    assert_eq!(geometry.to_world(32.0, 500.0), Vec2::new(32.0, 100.0));
    assert_eq!(geometry.to_world(0.0, 0.0), Vec2::new(0.0, 600.0));
}

#[test]
fn test_tile_center_top_row_is_near_top() {
    let geometry = geometry_800x600();
    assert_eq!(geometry.tile_center(0, 0), Vec2::new(20.0, 580.0));
    assert_eq!(geometry.tile_center(2, 14), Vec2::new(100.0, 20.0));
}

#[test]
fn test_has_fallen_out_only_below_bottom_edge() {
    let geometry = geometry_800x600();
    assert!(!geometry.has_fallen_out(0.0));
    assert!(!geometry.has_fallen_out(300.0));
    assert!(geometry.has_fallen_out(-0.1));
}

// -----------------------------------------------------------------------------
// Camera tests
// -----------------------------------------------------------------------------

#[test]
fn test_smooth_follow_zero_factor_snaps() {
    let target = Vec2::new(120.0, 80.0);
    assert_eq!(smooth_follow(Vec2::ZERO, target, 0.0), target);
}

#[test]
fn test_smooth_follow_blends_towards_target() {
    let next = smooth_follow(Vec2::ZERO, Vec2::new(100.0, -50.0), 0.9);
    assert!((next.x - 10.0).abs() < 1e-4);
    assert!((next.y + 5.0).abs() < 1e-4);
}

#[test]
fn test_clamp_keeps_viewport_inside_world() {
    let half_view = Vec2::new(400.0, 300.0);
    let bounds = Vec2::new(2000.0, 1000.0);

    assert_eq!(
        clamp_to_bounds(Vec2::new(0.0, 0.0), half_view, bounds),
        Vec2::new(400.0, 300.0)
    );
    assert_eq!(
        clamp_to_bounds(Vec2::new(5000.0, 5000.0), half_view, bounds),
        Vec2::new(1600.0, 700.0)
    );
    assert_eq!(
        clamp_to_bounds(Vec2::new(900.0, 500.0), half_view, bounds),
        Vec2::new(900.0, 500.0)
    );
}

#[test]
fn test_clamp_centres_axis_smaller_than_viewport() {
    let clamped = clamp_to_bounds(
        Vec2::new(10.0, 10.0),
        Vec2::new(400.0, 300.0),
        Vec2::new(2000.0, 400.0),
    );
    assert_eq!(clamped, Vec2::new(400.0, 200.0));
}

// -----------------------------------------------------------------------------
// SceneRestart tests
// -----------------------------------------------------------------------------

#[test]
fn test_restart_fires_once_after_delay() {
    let mut restart = SceneRestart::after_ms(500.0);

    assert!(!restart.tick(Duration::from_millis(300)));
    assert!(restart.tick(Duration::from_millis(250)));
    // One-shot: later ticks never fire again
    assert!(!restart.tick(Duration::from_millis(500)));
}
