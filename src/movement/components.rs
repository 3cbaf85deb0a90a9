//! Movement domain: player markers and sensor tags.

use bevy::prelude::*;

/// Marker for the player's compound body (and its main collider).
#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorSide {
    Left,
    Right,
    Bottom,
}

/// Non-solid detector collider attached to the player's compound body.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerSensor(pub SensorSide);
