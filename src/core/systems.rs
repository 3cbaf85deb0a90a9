//! Core domain: scene restart flow.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::SceneConfig;
use crate::core::events::PlayerFellEvent;
use crate::core::resources::SceneRestart;
use crate::core::state::{GameState, SceneEntity};
use crate::ui::spawn_camera_fade;

/// Schedule a restart when the player falls out of the world.
pub(crate) fn schedule_restart(
    mut commands: Commands,
    mut fell_events: MessageReader<PlayerFellEvent>,
    pending: Option<Res<SceneRestart>>,
    config: Res<SceneConfig>,
) {
    let mut fell_at = None;
    for event in fell_events.read() {
        fell_at = Some(event.position);
    }

    let Some(position) = fell_at else {
        return;
    };

    if pending.is_some() {
        debug!("Restart already pending, ignoring fall at {:?}", position);
        return;
    }

    info!(
        "Player fell out of the world at ({:.0}, {:.0}); restarting in {}ms",
        position.x, position.y, config.restart_delay_ms
    );
    spawn_camera_fade(&mut commands, config.camera_fade_ms);
    commands.insert_resource(SceneRestart::after_ms(config.restart_delay_ms));
}

pub(crate) fn tick_scene_restart(
    time: Res<Time>,
    restart: Option<ResMut<SceneRestart>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(mut restart) = restart else {
        return;
    };

    if restart.tick(time.delta()) {
        next_state.set(GameState::Restarting);
    }
}

/// Tear down the play session.
pub(crate) fn cleanup_scene(mut commands: Commands, query: Query<Entity, With<SceneEntity>>) {
    let mut count = 0;
    for entity in &query {
        commands.entity(entity).despawn();
        count += 1;
    }
    commands.remove_resource::<SceneRestart>();
    debug!("Despawned {} scene entities", count);
}

pub(crate) fn resume_playing(mut next_state: ResMut<NextState<GameState>>) {
    info!("Restarting scene");
    next_state.set(GameState::Playing);
}
