//! Core domain: scene lifecycle states.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Tuning and map are read from disk.
    #[default]
    Loading,
    Playing,
    /// One-frame pass-through so `OnExit(Playing)` / `OnEnter(Playing)` rebuild the session.
    Restarting,
}

/// Marker for everything that belongs to one play session.
/// Despawned when leaving `GameState::Playing`.
#[derive(Component, Debug, Default)]
pub struct SceneEntity;
