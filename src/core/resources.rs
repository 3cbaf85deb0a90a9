//! Core domain: world geometry and the pending restart.

use bevy::prelude::*;
use std::time::Duration;

use crate::content::TileMapData;

/// Size of the scaled map in world space.
///
/// World space has its origin at the bottom-left corner of the map with y
/// pointing up. Tiled and the scene tuning measure y down from the top, so
/// positions coming from them go through [`WorldGeometry::to_world`].
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct WorldGeometry {
    pub width: f32,
    pub height: f32,
    /// Scaled size of one tile.
    pub tile_size: Vec2,
}

impl Default for WorldGeometry {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            tile_size: Vec2::ONE,
        }
    }
}

impl WorldGeometry {
    pub fn from_map(map: &TileMapData, scale: f32) -> Self {
        Self {
            width: map.pixel_width() * scale,
            height: map.pixel_height() * scale,
            tile_size: Vec2::new(map.tile_width, map.tile_height) * scale,
        }
    }

    /// Convert a top-left-origin, y-down position into world space.
    pub fn to_world(&self, x: f32, y_from_top: f32) -> Vec2 {
        Vec2::new(x, self.height - y_from_top)
    }

    /// World-space centre of the tile at column `x`, row `y` (row 0 is the top row).
    pub fn tile_center(&self, x: u32, y: u32) -> Vec2 {
        self.to_world(
            (x as f32 + 0.5) * self.tile_size.x,
            (y as f32 + 0.5) * self.tile_size.y,
        )
    }

    /// True once a body centre has dropped below the bottom edge of the map.
    pub fn has_fallen_out(&self, y: f32) -> bool {
        y < 0.0
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Present while a restart is scheduled. One-shot: no cancellation.
#[derive(Resource, Debug)]
pub struct SceneRestart {
    pub timer: Timer,
}

impl SceneRestart {
    pub fn after_ms(delay_ms: f32) -> Self {
        Self {
            timer: Timer::new(
                Duration::from_secs_f32(delay_ms.max(0.0) / 1000.0),
                TimerMode::Once,
            ),
        }
    }

    /// Advance the delay, returning true on the tick it elapses.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.timer.tick(delta);
        self.timer.just_finished()
    }
}
