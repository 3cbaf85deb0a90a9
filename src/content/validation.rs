//! Structural checks for a loaded tile map.

use super::data::{GROUND_LAYER, TileMapData};

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapValidationError {
    MissingLayer(&'static str),
    UnknownTile {
        layer: String,
        x: u32,
        y: u32,
        tileset: usize,
        id: u32,
    },
}

impl std::fmt::Display for MapValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingLayer(name) => write!(f, "map has no layer named '{}'", name),
            Self::UnknownTile {
                layer,
                x,
                y,
                tileset,
                id,
            } => write!(
                f,
                "layer '{}' cell ({}, {}) references tile {} of tileset {}, which does not exist",
                layer, x, y, id, tileset
            ),
        }
    }
}

/// Validate the map. Returns a list of errors, empty if the map is usable.
pub fn validate_map(map: &TileMapData) -> Vec<MapValidationError> {
    let mut errors = Vec::new();

    if map.layer(GROUND_LAYER).is_none() {
        errors.push(MapValidationError::MissingLayer(GROUND_LAYER));
    }

    for layer in &map.layers {
        for tile in layer.tiles.iter().filter(|tile| !map.resolves(tile)) {
            errors.push(MapValidationError::UnknownTile {
                layer: layer.name.clone(),
                x: tile.x,
                y: tile.y,
                tileset: tile.tileset,
                id: tile.id,
            });
        }
    }

    errors
}
