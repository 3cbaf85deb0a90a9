//! Movement domain: per-frame player update.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{PlayerFellEvent, WorldGeometry};
use crate::movement::{
    MovementInput, Player, PlayerController, SmoothedHorizontalControl, update_movement,
};
use crate::sprites::AnimationController;

/// Out-of-bounds check first, then horizontal movement, animation and jump.
pub(crate) fn update_player(
    mut commands: Commands,
    time: Res<Time>,
    input: Res<MovementInput>,
    geometry: Res<WorldGeometry>,
    mut fell_events: MessageWriter<PlayerFellEvent>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &mut PlayerController,
            &mut SmoothedHorizontalControl,
            &mut LinearVelocity,
            &mut AnimationController,
        ),
        With<Player>,
    >,
) {
    let now_ms = time.elapsed_secs_f64() * 1000.0;
    let delta_ms = time.delta_secs() * 1000.0;

    for (entity, transform, mut controller, mut control, mut velocity, mut animation) in
        &mut query
    {
        let position = transform.translation.truncate();
        if geometry.has_fallen_out(position.y) {
            commands.entity(entity).despawn();
            fell_events.write(PlayerFellEvent { position });
            continue;
        }

        let jumped_at = controller.last_jumped_at;
        let next_animation = update_movement(
            &mut controller,
            &mut control,
            &input,
            &mut velocity.0,
            now_ms,
            delta_ms,
        );

        if controller.last_jumped_at != jumped_at {
            debug!("Jump at {:.0}ms, vy={}", now_ms, velocity.y);
        }

        if animation.play(next_animation) {
            debug!("Player animation -> {}", next_animation.key());
        }
    }
}
