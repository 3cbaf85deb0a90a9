//! Loaders for the scene tuning (RON) and the Tiled map (TMX).

use ron::Options;
use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::{Component, Path, PathBuf};
use tiled::{DefaultResourceCache, LayerType, Loader, PropertyValue, Tileset};

use bevy::prelude::UVec2;

use super::data::{
    MAX_MAP_CELLS, PlacedTile, SceneConfig, TileFlags, TileLayerData, TileMapData, TilesetData,
    TilesetImage,
};

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl ContentLoadError {
    fn new(file: &str, message: impl Into<String>) -> Self {
        Self {
            file: file.to_string(),
            message: message.into(),
        }
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| {
        ContentLoadError::new(&path.display().to_string(), format!("IO error: {}", e))
    })
}

/// Parse scene tuning from RON source. Missing fields keep their defaults.
pub fn parse_scene_config(source: &str, file: &str) -> Result<SceneConfig, ContentLoadError> {
    ron_options()
        .from_str(source)
        .map_err(|e| ContentLoadError::new(file, format!("Parse error: {}", e)))
}

pub fn load_scene_config(path: &Path) -> Result<SceneConfig, ContentLoadError> {
    let contents = read_file(path)?;
    parse_scene_config(&contents, &path.display().to_string())
}

// ============================================================================
// Tiled maps
// ============================================================================

/// Parse TMX source as if it had been read from `file`. Relative paths in the
/// map (tileset images) resolve against `file`'s directory.
pub fn parse_tile_map(source: &str, file: &str) -> Result<TileMapData, ContentLoadError> {
    let bytes = source.as_bytes().to_vec();
    let requested = PathBuf::from(file);
    let reader = move |path: &Path| -> std::io::Result<Cursor<Vec<u8>>> {
        if path == requested {
            Ok(Cursor::new(bytes.clone()))
        } else {
            Err(std::io::ErrorKind::NotFound.into())
        }
    };

    let mut loader = Loader::with_cache_and_reader(DefaultResourceCache::new(), reader);
    let map = loader
        .load_tmx_map(file)
        .map_err(|e| ContentLoadError::new(file, format!("Parse error: {}", e)))?;
    resolve_map(&map, file)
}

pub fn load_tile_map(path: &Path) -> Result<TileMapData, ContentLoadError> {
    let file = path.display().to_string();
    let map = Loader::new()
        .load_tmx_map(path)
        .map_err(|e| ContentLoadError::new(&file, format!("Parse error: {}", e)))?;
    resolve_map(&map, &file)
}

fn check_cells(file: &str, what: &str, width: u32, height: u32) -> Result<(), ContentLoadError> {
    let cells = u64::from(width) * u64::from(height);
    let longest = u64::from(width.max(height));
    if cells > MAX_MAP_CELLS || longest > MAX_MAP_CELLS {
        return Err(ContentLoadError::new(
            file,
            format!(
                "{} is {}x{} tiles, more than the {} cell limit",
                what, width, height, MAX_MAP_CELLS
            ),
        ));
    }
    Ok(())
}

fn resolve_map(map: &tiled::Map, file: &str) -> Result<TileMapData, ContentLoadError> {
    if map.tile_width == 0 || map.tile_height == 0 {
        return Err(ContentLoadError::new(file, "tile size must be non-zero"));
    }
    if map.infinite() {
        return Err(ContentLoadError::new(file, "infinite maps are not supported"));
    }
    check_cells(file, "map", map.width, map.height)?;

    let mut layers = Vec::new();
    for layer in map.layers() {
        let LayerType::Tiles(tile_layer) = layer.layer_type() else {
            continue;
        };

        let width = tile_layer.width().unwrap_or(map.width);
        let height = tile_layer.height().unwrap_or(map.height);
        check_cells(file, &format!("layer '{}'", layer.name), width, height)?;

        let mut tiles = Vec::new();
        for y in 0..height {
            for x in 0..width {
                // The cell check keeps both sides far below i32::MAX
                let Some(tile) = tile_layer.get_tile(x as i32, y as i32) else {
                    continue;
                };
                tiles.push(PlacedTile {
                    x,
                    y,
                    tileset: tile.tileset_index(),
                    id: tile.id(),
                    flip_x: tile.flip_h,
                    flip_y: tile.flip_v,
                });
            }
        }

        layers.push(TileLayerData {
            name: layer.name.clone(),
            visible: layer.visible,
            tiles,
        });
    }

    let tilesets = map
        .tilesets()
        .iter()
        .map(|set| resolve_tileset(set.as_ref()))
        .collect();

    Ok(TileMapData {
        width: map.width,
        height: map.height,
        tile_width: map.tile_width as f32,
        tile_height: map.tile_height as f32,
        layers,
        tilesets,
    })
}

fn resolve_tileset(set: &Tileset) -> TilesetData {
    let mut flags = HashMap::new();
    for (id, tile) in set.tiles() {
        let tile_flags = TileFlags {
            collides: property_is_true(&tile.properties, "collides"),
            fall_on_contact: property_is_true(&tile.properties, "fallOnContact"),
        };
        if tile_flags != TileFlags::default() {
            flags.insert(id, tile_flags);
        }
    }

    let image = set.image.as_ref().map(|image| {
        let columns = set.columns.max(1);
        TilesetImage {
            asset_path: asset_relative_path(&image.source),
            tile_size: UVec2::new(set.tile_width, set.tile_height),
            columns,
            rows: set.tilecount.div_ceil(columns).max(1),
            spacing: set.spacing,
            margin: set.margin,
        }
    });

    TilesetData {
        name: set.name.clone(),
        tile_count: set.tilecount,
        image,
        flags,
    }
}

fn property_is_true(properties: &tiled::Properties, name: &str) -> bool {
    matches!(properties.get(name), Some(PropertyValue::BoolValue(true)))
}

/// Turn a filesystem path from the map into an asset server path:
/// `..` is folded and everything up to the `assets` directory is dropped.
pub fn asset_relative_path(source: &Path) -> String {
    let mut parts: Vec<String> = Vec::new();
    for component in source.components() {
        match component {
            Component::ParentDir => {
                parts.pop();
            }
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            _ => {}
        }
    }

    if let Some(index) = parts.iter().rposition(|part| part == "assets") {
        parts.drain(..=index);
    }
    parts.join("/")
}
