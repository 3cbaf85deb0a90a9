//! Data definitions for scene tuning (RON) and the resolved Tiled map.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Upper bound on cells per layer; larger maps are rejected before their tiles are read.
pub const MAX_MAP_CELLS: u64 = 1 << 20;

pub const BACKGROUND_LAYER: &str = "Background Layer";
pub const GROUND_LAYER: &str = "Ground Layer";
pub const FOREGROUND_LAYER: &str = "Foreground Layer";

// ============================================================================
// Scene tuning
// ============================================================================

/// Tuning for the whole scene, loaded from `assets/data/scene.ron`.
///
/// Distances are world pixels, speeds are pixels per second, and every
/// duration is in milliseconds so the controller math reads like the timing
/// rules it implements.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Path of the Tiled TMX map, relative to the working directory.
    pub map_path: String,
    /// Uniform scale applied to every tile layer.
    pub map_scale: f32,
    /// Downward gravity acceleration.
    pub gravity: f32,
    pub run_speed: f32,
    pub jump_speed: f32,
    /// Growth of the smoothed horizontal control per millisecond held.
    pub control_ramp_per_ms: f32,
    /// Minimum time between two jumps.
    pub jump_cooldown_ms: f64,
    pub tile_fade_ms: f32,
    pub camera_fade_ms: f32,
    pub restart_delay_ms: f32,
    /// Weight of the previous camera position when following (0 = snap).
    pub camera_smoothing: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_corner_radius: f32,
    pub player_restitution: f32,
    /// Spawn point in world pixels (after `map_scale`), measured from the
    /// top-left like Tiled.
    pub player_spawn: (f32, f32),
    pub sensor_thickness: f32,
    /// Seed for the tile tint jitter.
    pub tint_seed: u64,
    /// 9-frame player sprite sheet, relative to `assets/`. Without one the
    /// player is drawn as a plain quad.
    pub player_sheet: Option<String>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            map_path: "assets/tilemaps/maps/falling-platforms.tmx".to_string(),
            map_scale: 2.5,
            gravity: 1000.0,
            run_speed: 300.0,
            jump_speed: 720.0,
            control_ramp_per_ms: 0.001,
            jump_cooldown_ms: 250.0,
            tile_fade_ms: 500.0,
            camera_fade_ms: 500.0,
            restart_delay_ms: 500.0,
            camera_smoothing: 0.9,
            player_width: 32.0,
            player_height: 42.0,
            player_corner_radius: 10.0,
            player_restitution: 0.05,
            player_spawn: (32.0, 500.0),
            sensor_thickness: 5.0,
            tint_seed: 7,
            player_sheet: Some("sprites/dude-cropped.png".to_string()),
        }
    }
}

// ============================================================================
// Resolved map
// ============================================================================

/// Custom properties the scene reads from tileset entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileFlags {
    /// Ground tiles with this flag get a static collider.
    pub collides: bool,
    /// Colliding tiles with this flag fade out and vanish when the player touches them.
    pub fall_on_contact: bool,
}

/// One non-empty cell of a tile layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedTile {
    /// Column, from the left.
    pub x: u32,
    /// Row, from the top.
    pub y: u32,
    /// Index into [`TileMapData::tilesets`].
    pub tileset: usize,
    /// Local tile id within the tileset.
    pub id: u32,
    pub flip_x: bool,
    pub flip_y: bool,
}

#[derive(Debug, Clone)]
pub struct TileLayerData {
    pub name: String,
    pub visible: bool,
    pub tiles: Vec<PlacedTile>,
}

/// Grid layout of a tileset image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilesetImage {
    /// Path relative to `assets/`, ready for the asset server.
    pub asset_path: String,
    pub tile_size: UVec2,
    pub columns: u32,
    pub rows: u32,
    pub spacing: u32,
    pub margin: u32,
}

#[derive(Debug, Clone)]
pub struct TilesetData {
    pub name: String,
    pub tile_count: u32,
    pub image: Option<TilesetImage>,
    /// Flags keyed by local tile id.
    pub flags: HashMap<u32, TileFlags>,
}

/// Tiled map resolved into the shape the spawners need.
#[derive(Resource, Debug, Clone, Default)]
pub struct TileMapData {
    pub width: u32,
    pub height: u32,
    pub tile_width: f32,
    pub tile_height: f32,
    pub layers: Vec<TileLayerData>,
    pub tilesets: Vec<TilesetData>,
}

impl TileMapData {
    pub fn layer(&self, name: &str) -> Option<&TileLayerData> {
        self.layers.iter().find(|layer| layer.name == name)
    }

    pub fn flags_for(&self, tile: &PlacedTile) -> TileFlags {
        self.tilesets
            .get(tile.tileset)
            .and_then(|set| set.flags.get(&tile.id))
            .copied()
            .unwrap_or_default()
    }

    /// True when the tile points at an existing entry of an existing tileset.
    pub fn resolves(&self, tile: &PlacedTile) -> bool {
        self.tilesets
            .get(tile.tileset)
            .is_some_and(|set| tile.id < set.tile_count)
    }

    /// Unscaled map width in pixels.
    pub fn pixel_width(&self) -> f32 {
        self.width as f32 * self.tile_width
    }

    /// Unscaled map height in pixels.
    pub fn pixel_height(&self) -> f32 {
        self.height as f32 * self.tile_height
    }
}
