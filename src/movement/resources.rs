//! Movement domain: input resource.

use bevy::prelude::*;

/// Held state of the directional controls, sampled once per frame.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}
