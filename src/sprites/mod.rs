//! Sprites module: player animation clips and playback.

pub mod animation;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;

use crate::core::GameState;
use crate::movement::MovementSystems;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            update_animation_frames
                .after(MovementSystems)
                .run_if(in_state(GameState::Playing)),
        );
    }
}
