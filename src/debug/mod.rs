//! Debug tooling: physics collider rendering, toggled with a mouse click.

use avian2d::prelude::*;
use bevy::prelude::*;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PhysicsDebugPlugin)
            .add_systems(Startup, hide_physics_gizmos)
            .add_systems(Update, toggle_physics_gizmos);
    }
}

/// Colliders start hidden.
fn hide_physics_gizmos(mut store: ResMut<GizmoConfigStore>) {
    let (config, _) = store.config_mut::<PhysicsGizmos>();
    config.enabled = false;
}

fn toggle_physics_gizmos(
    mouse: Res<ButtonInput<MouseButton>>,
    mut store: ResMut<GizmoConfigStore>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    let (config, _) = store.config_mut::<PhysicsGizmos>();
    config.enabled = !config.enabled;
    info!("Physics debug rendering: {}", config.enabled);
}
