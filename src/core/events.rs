//! Core domain: events for the scene lifecycle.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Event fired when the player drops below the bottom of the world
#[derive(Debug)]
pub struct PlayerFellEvent {
    pub position: Vec2,
}

impl Message for PlayerFellEvent {}
