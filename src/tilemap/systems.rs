//! Tilemap domain: fall-on-contact protocol.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::SceneConfig;
use crate::movement::Player;
use crate::tilemap::{
    FallingPlatform, GroundTiles, TileCoord, TileFade, TileLifecycle, TileProperties,
};

/// Start fading a falling platform the first time the player's main
/// collider touches it. Later contacts with the same tile are ignored.
pub(crate) fn start_falling_platforms(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    config: Res<SceneConfig>,
    player_query: Query<(), With<Player>>,
    mut tile_query: Query<
        (&mut TileProperties, &mut TileLifecycle, &TileCoord),
        With<FallingPlatform>,
    >,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_collider, tile_entity) in pairs {
            if !player_query.contains(player_collider) {
                continue;
            }

            let Ok((mut properties, mut lifecycle, coord)) = tile_query.get_mut(tile_entity)
            else {
                continue;
            };

            if !lifecycle.on_player_contact(&mut properties) {
                continue;
            }

            info!("Platform tile ({}, {}) starts falling", coord.x, coord.y);
            commands
                .entity(tile_entity)
                .insert(TileFade::new(config.tile_fade_ms));
        }
    }
}

/// Fade tiles out, then drop them from the map together with their bodies.
pub(crate) fn fade_falling_tiles(
    mut commands: Commands,
    time: Res<Time>,
    mut ground_tiles: ResMut<GroundTiles>,
    mut query: Query<(
        Entity,
        &mut TileFade,
        &mut TileLifecycle,
        &TileCoord,
        &mut Sprite,
    )>,
) {
    for (entity, mut fade, mut lifecycle, coord, mut sprite) in &mut query {
        fade.timer.tick(time.delta());
        sprite.color = sprite.color.with_alpha(fade.alpha());

        if fade.is_finished() && lifecycle.on_fade_complete() {
            ground_tiles.remove_tile_at(coord.x, coord.y);
            commands.entity(entity).despawn();
            debug!("Removed tile ({}, {})", coord.x, coord.y);
        }
    }
}

pub(crate) fn clear_ground_tiles(mut ground_tiles: ResMut<GroundTiles>) {
    ground_tiles.clear();
}
