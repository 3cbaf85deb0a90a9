//! Tilemap domain: tile layers, world bounds and falling platforms.

mod components;
mod registry;
mod spawn;
mod systems;


pub use components::{
    FallingPlatform, MapLayer, TileCoord, TileFade, TileLifecycle, TileProperties, WorldWall,
};
pub use registry::GroundTiles;

use bevy::prelude::*;

use crate::core::GameState;
use crate::tilemap::spawn::spawn_map;
use crate::tilemap::systems::{clear_ground_tiles, fade_falling_tiles, start_falling_platforms};

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TilemapSystems {
    /// Map spawn on entering play; the player spawns after it.
    Spawn,
}

pub struct TilemapPlugin;

impl Plugin for TilemapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GroundTiles>()
            .add_systems(
                OnEnter(GameState::Playing),
                spawn_map.in_set(TilemapSystems::Spawn),
            )
            .add_systems(OnExit(GameState::Playing), clear_ground_tiles)
            .add_systems(
                Update,
                (start_falling_platforms, fade_falling_tiles)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
