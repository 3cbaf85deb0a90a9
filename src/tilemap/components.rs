//! Tilemap domain: tile components and the falling-tile state machine.

use bevy::prelude::*;
use std::time::Duration;

/// Which Tiled layer a tile entity was spawned from.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapLayer {
    Background,
    Ground,
    Foreground,
}

/// Grid position of a tile, row 0 at the top like Tiled.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
}

/// Marker for colliding ground tiles that give way under the player
#[derive(Component, Debug)]
pub struct FallingPlatform;

/// Marker for the static walls around the map
#[derive(Component, Debug)]
pub struct WorldWall;

/// Per-tile custom properties.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileProperties {
    /// Set at load time from the tileset.
    pub fall_on_contact: bool,
    /// Set once, on the first qualifying contact.
    pub is_being_destroyed: bool,
}

impl TileProperties {
    /// Flag the tile for destruction. Only the first call on a
    /// fall-on-contact tile succeeds; every other call returns false.
    pub fn begin_destroy(&mut self) -> bool {
        if !self.fall_on_contact || self.is_being_destroyed {
            return false;
        }
        self.is_being_destroyed = true;
        true
    }
}

/// `Solid → FadingOut → Removed`, no way back.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TileLifecycle {
    #[default]
    Solid,
    FadingOut,
    Removed,
}

impl TileLifecycle {
    /// The player started touching the tile. Returns true if this contact
    /// started the fade.
    pub fn on_player_contact(&mut self, properties: &mut TileProperties) -> bool {
        if *self != Self::Solid || !properties.begin_destroy() {
            return false;
        }
        *self = Self::FadingOut;
        true
    }

    /// The fade finished. Returns true if the tile should be removed now.
    pub fn on_fade_complete(&mut self) -> bool {
        if *self != Self::FadingOut {
            return false;
        }
        *self = Self::Removed;
        true
    }
}

/// Alpha fade applied to a tile that is about to be removed
#[derive(Component, Debug)]
pub struct TileFade {
    pub timer: Timer,
}

impl TileFade {
    pub fn new(duration_ms: f32) -> Self {
        Self {
            timer: Timer::new(
                Duration::from_secs_f32(duration_ms.max(0.0) / 1000.0),
                TimerMode::Once,
            ),
        }
    }

    /// Quadratic ease-out from 1 to 0.
    pub fn alpha(&self) -> f32 {
        let remaining = 1.0 - self.timer.fraction();
        remaining * remaining
    }

    pub fn is_finished(&self) -> bool {
        self.timer.remaining_secs() == 0.0
    }
}
