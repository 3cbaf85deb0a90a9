//! UI domain: full-screen fade to black used by the scene restart.

use bevy::prelude::*;
use std::time::Duration;

use crate::core::SceneEntity;

/// Overlay that fades from transparent to black
#[derive(Component, Debug)]
pub struct CameraFade {
    pub timer: Timer,
}

impl CameraFade {
    pub fn new(duration_ms: f32) -> Self {
        Self {
            timer: Timer::new(
                Duration::from_secs_f32(duration_ms.max(0.0) / 1000.0),
                TimerMode::Once,
            ),
        }
    }

    pub fn alpha(&self) -> f32 {
        self.timer.fraction()
    }
}

/// Spawn a fade overlay. It belongs to the session, so the restart clears it.
pub fn spawn_camera_fade(commands: &mut Commands, duration_ms: f32) {
    commands.spawn((
        CameraFade::new(duration_ms),
        SceneEntity,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            top: Val::Px(0.0),
            bottom: Val::Px(0.0),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.0)),
        // Above the help text
        ZIndex(100),
    ));
}

pub(crate) fn update_camera_fade(
    time: Res<Time>,
    mut query: Query<(&mut CameraFade, &mut BackgroundColor)>,
) {
    for (mut fade, mut background) in &mut query {
        fade.timer.tick(time.delta());
        background.0 = Color::srgba(0.0, 0.0, 0.0, fade.alpha());
    }
}
