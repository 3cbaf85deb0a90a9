//! Tilemap domain: ground layer lookup by grid coordinate.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::tilemap::TileCoord;

/// Tile entities of the ground layer, keyed by grid position.
#[derive(Resource, Debug, Default)]
pub struct GroundTiles {
    tiles: HashMap<TileCoord, Entity>,
}

impl GroundTiles {
    pub fn insert(&mut self, coord: TileCoord, entity: Entity) {
        self.tiles.insert(coord, entity);
    }

    /// Forget the tile at `(x, y)`, returning the entity that held it.
    pub fn remove_tile_at(&mut self, x: u32, y: u32) -> Option<Entity> {
        self.tiles.remove(&TileCoord { x, y })
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }
}
