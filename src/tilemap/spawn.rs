//! Tilemap domain: spawning tile layers and world bounds.

use avian2d::prelude::*;
use bevy::color::Srgba;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::{
    BACKGROUND_LAYER, FOREGROUND_LAYER, GROUND_LAYER, PlacedTile, SceneConfig, TileFlags,
    TileMapData, TilesetData,
};
use crate::core::{SceneEntity, WorldGeometry};
use crate::movement::PLAYER_Z;
use crate::tilemap::{
    FallingPlatform, GroundTiles, MapLayer, TileCoord, TileLifecycle, TileProperties, WorldWall,
};

/// Thickness of the invisible walls around the map.
const WALL_THICKNESS: f32 = 64.0;

impl MapLayer {
    fn z(&self) -> f32 {
        match self {
            Self::Background => 0.0,
            Self::Ground => 1.0,
            // Foreground draws over the player
            Self::Foreground => PLAYER_Z + 1.0,
        }
    }

    fn base_color(&self, flags: TileFlags) -> Srgba {
        match self {
            Self::Background => Srgba::rgb(0.16, 0.18, 0.26),
            Self::Ground if flags.fall_on_contact => Srgba::rgb(0.78, 0.52, 0.26),
            Self::Ground => Srgba::rgb(0.36, 0.46, 0.30),
            Self::Foreground => Srgba::new(0.22, 0.34, 0.20, 0.9),
        }
    }
}

/// Tilesets without an image draw every tile as a flat quad; a small seeded
/// jitter keeps neighbouring tiles apart.
fn tile_color(layer: MapLayer, flags: TileFlags, rng: &mut ChaCha8Rng) -> Color {
    let base = layer.base_color(flags);
    let jitter = rng.random_range(-0.04..0.04);
    Color::srgba(
        (base.red + jitter).clamp(0.0, 1.0),
        (base.green + jitter).clamp(0.0, 1.0),
        (base.blue + jitter).clamp(0.0, 1.0),
        base.alpha,
    )
}

/// Image and atlas layout for one tileset, `None` when it has no image.
type TilesetAtlas = Option<(Handle<Image>, Handle<TextureAtlasLayout>)>;

fn load_tileset_atlas(
    tileset: &TilesetData,
    asset_server: &AssetServer,
    atlas_layouts: &mut Assets<TextureAtlasLayout>,
) -> TilesetAtlas {
    let Some(image) = &tileset.image else {
        debug!("Tileset '{}' has no image, drawing flat tiles", tileset.name);
        return None;
    };

    let layout = TextureAtlasLayout::from_grid(
        image.tile_size,
        image.columns,
        image.rows,
        (image.spacing > 0).then(|| UVec2::splat(image.spacing)),
        (image.margin > 0).then(|| UVec2::splat(image.margin)),
    );
    debug!(
        "Tileset '{}' uses {} ({}x{} tiles)",
        tileset.name, image.asset_path, image.columns, image.rows
    );
    Some((
        asset_server.load(image.asset_path.clone()),
        atlas_layouts.add(layout),
    ))
}

fn tile_sprite(
    tile: &PlacedTile,
    atlases: &[TilesetAtlas],
    layer: MapLayer,
    flags: TileFlags,
    size: Vec2,
    rng: &mut ChaCha8Rng,
) -> Sprite {
    let mut sprite = match atlases.get(tile.tileset) {
        Some(Some((image, layout))) => Sprite::from_atlas_image(
            image.clone(),
            TextureAtlas {
                layout: layout.clone(),
                index: tile.id as usize,
            },
        ),
        _ => Sprite::from_color(tile_color(layer, flags, rng), Vec2::ONE),
    };
    sprite.custom_size = Some(size);
    sprite.flip_x = tile.flip_x;
    sprite.flip_y = tile.flip_y;
    sprite
}

/// Spawn every tile layer, give colliding ground tiles static bodies and
/// fence the map in on the left, right and top.
pub(crate) fn spawn_map(
    mut commands: Commands,
    map: Res<TileMapData>,
    config: Res<SceneConfig>,
    asset_server: Res<AssetServer>,
    mut atlas_layouts: ResMut<Assets<TextureAtlasLayout>>,
    mut geometry: ResMut<WorldGeometry>,
    mut ground_tiles: ResMut<GroundTiles>,
) {
    *geometry = WorldGeometry::from_map(&map, config.map_scale);
    ground_tiles.clear();

    let atlases: Vec<TilesetAtlas> = map
        .tilesets
        .iter()
        .map(|tileset| load_tileset_atlas(tileset, &asset_server, &mut atlas_layouts))
        .collect();

    let mut rng = ChaCha8Rng::seed_from_u64(config.tint_seed);
    let tile_size = geometry.tile_size;
    let mut solid = 0;
    let mut falling = 0;

    for (name, layer_kind) in [
        (BACKGROUND_LAYER, MapLayer::Background),
        (GROUND_LAYER, MapLayer::Ground),
        (FOREGROUND_LAYER, MapLayer::Foreground),
    ] {
        let Some(layer) = map.layer(name) else {
            debug!("Map has no '{}', skipping", name);
            continue;
        };

        let visibility = if layer.visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };

        for placed in &layer.tiles {
            let flags = map.flags_for(placed);
            let coord = TileCoord {
                x: placed.x,
                y: placed.y,
            };
            let center = geometry.tile_center(placed.x, placed.y);

            let mut tile = commands.spawn((
                SceneEntity,
                layer_kind,
                coord,
                tile_sprite(placed, &atlases, layer_kind, flags, tile_size, &mut rng),
                Transform::from_translation(center.extend(layer_kind.z())),
                visibility,
            ));

            if layer_kind != MapLayer::Ground {
                continue;
            }

            tile.insert((
                TileProperties {
                    fall_on_contact: flags.fall_on_contact,
                    is_being_destroyed: false,
                },
                TileLifecycle::default(),
            ));

            if flags.collides {
                tile.insert((RigidBody::Static, Collider::rectangle(tile_size.x, tile_size.y)));
                solid += 1;

                if flags.fall_on_contact {
                    tile.insert(FallingPlatform);
                    falling += 1;
                }
            }

            ground_tiles.insert(coord, tile.id());
        }
    }

    spawn_world_walls(&mut commands, &geometry);

    info!(
        "Spawned map: {} ground tiles, {} solid, {} falling platforms",
        ground_tiles.len(),
        solid,
        falling
    );
}

/// The bottom edge stays open so the player can fall out of the world.
fn spawn_world_walls(commands: &mut Commands, geometry: &WorldGeometry) {
    let t = WALL_THICKNESS;
    let w = geometry.width;
    let h = geometry.height;

    let walls = [
        // Left
        (Vec2::new(-t * 0.5, h * 0.5), Vec2::new(t, h + t * 2.0)),
        // Right
        (Vec2::new(w + t * 0.5, h * 0.5), Vec2::new(t, h + t * 2.0)),
        // Top
        (Vec2::new(w * 0.5, h + t * 0.5), Vec2::new(w + t * 2.0, t)),
    ];

    for (center, size) in walls {
        commands.spawn((
            SceneEntity,
            WorldWall,
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
        ));
    }
}
