//! Movement domain: player compound body spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::SceneConfig;
use crate::core::{SceneEntity, WorldGeometry};
use crate::movement::{
    Player, PlayerController, PlayerSensor, PlayerSpeeds, SensorSide, SmoothedHorizontalControl,
};
use crate::sprites::{AnimationController, PLAYER_SHEET_COLUMNS, PlayerAnimation};

/// Player draws between the ground and foreground layers.
pub const PLAYER_Z: f32 = 5.0;

/// Spawn the player: one dynamic body whose main collider is a rounded box,
/// plus three sensor colliders on the left, right and bottom edges.
pub(crate) fn spawn_player(
    mut commands: Commands,
    config: Res<SceneConfig>,
    geometry: Res<WorldGeometry>,
    asset_server: Res<AssetServer>,
    mut atlas_layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let w = config.player_width;
    let h = config.player_height;
    let radius = config.player_corner_radius;
    let thickness = config.sensor_thickness;
    let spawn = geometry.to_world(config.player_spawn.0, config.player_spawn.1);

    let sprite = match &config.player_sheet {
        Some(path) => {
            let layout = TextureAtlasLayout::from_grid(
                UVec2::new(w as u32, h as u32),
                PLAYER_SHEET_COLUMNS,
                1,
                None,
                None,
            );
            let mut sprite = Sprite::from_atlas_image(
                asset_server.load(path.clone()),
                TextureAtlas {
                    layout: atlas_layouts.add(layout),
                    index: PlayerAnimation::Idle.clip().first,
                },
            );
            sprite.custom_size = Some(Vec2::new(w, h));
            sprite
        }
        None => Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(w, h)),
            ..default()
        },
    };

    // Rounded shapes grow by their radius, so shrink the core to keep the outer size
    let core_w = (w * 0.75 - radius * 2.0).max(1.0);
    let core_h = (h - radius * 2.0).max(1.0);

    let sensors = [
        (SensorSide::Bottom, Vec2::new(0.0, -h * 0.5), Vec2::new(w * 0.5, thickness)),
        (SensorSide::Left, Vec2::new(-w * 0.45, 0.0), Vec2::new(thickness, h * 0.25)),
        (SensorSide::Right, Vec2::new(w * 0.45, 0.0), Vec2::new(thickness, h * 0.25)),
    ];

    let player = commands
        .spawn((
            // Identity & control
            (
                Player,
                SceneEntity,
                PlayerController::new(
                    PlayerSpeeds {
                        run: config.run_speed,
                        jump: config.jump_speed,
                    },
                    config.jump_cooldown_ms,
                ),
                SmoothedHorizontalControl::new(config.control_ramp_per_ms),
                AnimationController::default(),
            ),
            // Rendering
            sprite,
            Transform::from_translation(spawn.extend(PLAYER_Z)),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::round_rectangle(core_w, core_h, radius),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Restitution::new(config.player_restitution),
                Friction::new(0.1),
                CollisionEventsEnabled,
            ),
        ))
        .with_children(|parent| {
            for (side, offset, size) in sensors {
                parent.spawn((
                    PlayerSensor(side),
                    Sensor,
                    Collider::rectangle(size.x, size.y),
                    CollidingEntities::default(),
                    Transform::from_translation(offset.extend(0.0)),
                ));
            }
        })
        .id();

    info!(
        "Spawned player {:?} at ({:.0}, {:.0}), run={}, jump={}",
        player, spawn.x, spawn.y, config.run_speed, config.jump_speed
    );
}
