//! Content domain: scene tuning and tile map loading.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{
    BACKGROUND_LAYER, FOREGROUND_LAYER, GROUND_LAYER, MAX_MAP_CELLS, PlacedTile, SceneConfig,
    TileFlags, TileMapData, TilesetData,
};
pub use loader::{
    ContentLoadError, asset_relative_path, load_scene_config, load_tile_map, parse_scene_config,
    parse_tile_map,
};
pub use validation::{MapValidationError, validate_map};

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

use crate::core::GameState;

pub const SCENE_CONFIG_PATH: &str = "assets/data/scene.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneConfig>()
            .init_resource::<TileMapData>()
            .add_systems(OnEnter(GameState::Loading), load_scene_content);
    }
}

/// Load tuning and map once, then hand over to the playing state.
fn load_scene_content(mut commands: Commands, mut next_state: ResMut<NextState<GameState>>) {
    let config = match load_scene_config(Path::new(SCENE_CONFIG_PATH)) {
        Ok(config) => {
            info!("Loaded scene tuning from {}", SCENE_CONFIG_PATH);
            config
        }
        Err(e) => {
            warn!("{}; using default scene tuning", e);
            SceneConfig::default()
        }
    };

    let map = match load_tile_map(Path::new(&config.map_path)) {
        Ok(map) => {
            let errors = validate_map(&map);
            if errors.is_empty() {
                info!(
                    "Loaded map {}: {}x{} tiles of {}x{}px, {} layers",
                    config.map_path,
                    map.width,
                    map.height,
                    map.tile_width,
                    map.tile_height,
                    map.layers.len()
                );
                map
            } else {
                for e in &errors {
                    error!("Map validation failed: {}", e);
                }
                TileMapData::default()
            }
        }
        Err(e) => {
            error!("{}", e);
            TileMapData::default()
        }
    };

    commands.insert_resource(Gravity(Vec2::NEG_Y * config.gravity));
    commands.insert_resource(map);
    commands.insert_resource(config);
    next_state.set(GameState::Playing);
}
