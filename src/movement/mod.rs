//! Movement domain: player body, contact sensors and locomotion.

mod bootstrap;
mod components;
mod controller;
mod resources;
mod systems;


pub use bootstrap::PLAYER_Z;
pub use components::{Player, PlayerSensor, SensorSide};
pub use controller::{
    Blocked, ContactSurface, PlayerController, PlayerSpeeds, SensorContact,
    SmoothedHorizontalControl, Touching, lerp, update_movement,
};
pub use resources::MovementInput;

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{read_input, track_sensor_contacts, update_player};
use crate::tilemap::TilemapSystems;

/// Input, contact accounting and the player update, in that order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovementSystems;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_systems(
                OnEnter(GameState::Playing),
                spawn_player.after(TilemapSystems::Spawn),
            )
            .add_systems(
                Update,
                (read_input, track_sensor_contacts, update_player)
                    .chain()
                    .in_set(MovementSystems)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
