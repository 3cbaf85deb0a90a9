//! UI domain: help text and the restart fade.

mod fade;
mod hud_help;

#[cfg(test)]
mod tests;

pub use fade::{CameraFade, spawn_camera_fade};

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::fade::update_camera_fade;
use crate::ui::hud_help::spawn_help_text;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_help_text)
            .add_systems(
                Update,
                update_camera_fade.run_if(in_state(GameState::Playing)),
            );
    }
}
