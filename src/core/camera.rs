//! Core domain: camera follow math and systems.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::content::SceneConfig;
use crate::core::WorldGeometry;
use crate::movement::Player;

/// Blend the camera centre towards a target.
/// `factor` is the weight kept from the current position; 0 snaps.
pub fn smooth_follow(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    current * factor + target * (1.0 - factor)
}

/// Keep a viewport of `half_view` half-extents inside `bounds` (origin at 0).
/// Axes where the viewport is larger than the world are centred instead.
pub fn clamp_to_bounds(center: Vec2, half_view: Vec2, bounds: Vec2) -> Vec2 {
    let clamp_axis = |c: f32, half: f32, size: f32| {
        if size <= half * 2.0 {
            size * 0.5
        } else {
            c.clamp(half, size - half)
        }
    };

    Vec2::new(
        clamp_axis(center.x, half_view.x, bounds.x),
        clamp_axis(center.y, half_view.y, bounds.y),
    )
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Follow the player, snapping on the frame it spawns.
pub(crate) fn follow_player(
    config: Res<SceneConfig>,
    geometry: Res<WorldGeometry>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    player_query: Query<(&Transform, Ref<Player>), Without<Camera2d>>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok((player_transform, player)) = player_query.single() else {
        return;
    };
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let factor = if player.is_added() {
        0.0
    } else {
        config.camera_smoothing
    };

    let half_view = window_query
        .single()
        .map(|window| Vec2::new(window.width(), window.height()) * 0.5)
        .unwrap_or(Vec2::new(400.0, 300.0));

    let target = player_transform.translation.truncate();
    let followed = smooth_follow(camera_transform.translation.truncate(), target, factor);
    let clamped = clamp_to_bounds(followed, half_view, geometry.size());

    camera_transform.translation.x = clamped.x;
    camera_transform.translation.y = clamped.y;
}
