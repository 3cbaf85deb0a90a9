//! Movement domain: sensor contact accounting.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ContactSurface, Player, PlayerController, PlayerSensor, SensorContact};

/// Recount what each sensor touches after the physics step and commit the
/// blocked flags. Reset, accumulation and commit happen in one pass so the
/// movement update always sees a complete count.
pub(crate) fn track_sensor_contacts(
    sensor_query: Query<(&PlayerSensor, &ChildOf, &CollidingEntities)>,
    collider_query: Query<&ColliderOf>,
    body_query: Query<&RigidBody>,
    mut player_query: Query<&mut PlayerController, With<Player>>,
) {
    for mut controller in &mut player_query {
        controller.begin_step();
    }

    for (sensor, child_of, colliding) in &sensor_query {
        let owner = child_of.parent();
        let Ok(mut controller) = player_query.get_mut(owner) else {
            continue;
        };

        for &other in colliding.iter() {
            let other_body = collider_query
                .get(other)
                .map(|collider_of| collider_of.body)
                .unwrap_or(other);

            // A collider without a rigid body never moves, so it counts as static
            let surface = if other_body == owner {
                ContactSurface::OwnBody
            } else {
                match body_query.get(other_body) {
                    Ok(body) if !body.is_static() => ContactSurface::Movable,
                    _ => ContactSurface::Static,
                }
            };

            controller.record_contact(SensorContact::new(sensor.0, surface));
        }
    }

    for mut controller in &mut player_query {
        let was_grounded = controller.blocked.bottom;
        controller.end_step();

        if controller.blocked.bottom != was_grounded {
            debug!(
                "Grounded: {} (touching bottom={}, left={}, right={})",
                controller.blocked.bottom,
                controller.num_touching.bottom,
                controller.num_touching.left,
                controller.num_touching.right
            );
        }
    }
}
