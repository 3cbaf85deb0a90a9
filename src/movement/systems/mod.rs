//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::track_sensor_contacts;
pub(crate) use input::read_input;
pub(crate) use movement::update_player;
