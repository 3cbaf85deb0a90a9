//! Core domain: scene lifecycle, restart flow and camera follow.

mod camera;
mod events;
mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use camera::{clamp_to_bounds, smooth_follow};
pub use events::PlayerFellEvent;
pub use resources::{SceneRestart, WorldGeometry};
pub use state::{GameState, SceneEntity};

use bevy::prelude::*;

use crate::core::camera::{follow_player, setup_camera};
use crate::core::systems::{cleanup_scene, resume_playing, schedule_restart, tick_scene_restart};
use crate::movement::MovementSystems;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<WorldGeometry>()
            .add_message::<PlayerFellEvent>()
            .add_systems(Startup, setup_camera)
            .add_systems(OnExit(GameState::Playing), cleanup_scene)
            .add_systems(OnEnter(GameState::Restarting), resume_playing)
            .add_systems(
                Update,
                (
                    follow_player.after(MovementSystems),
                    (schedule_restart, tick_scene_restart)
                        .chain()
                        .after(MovementSystems),
                )
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
