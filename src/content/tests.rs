//! Content domain: tests for scene tuning and map parsing.

use std::path::Path;

use super::{
    GROUND_LAYER, MapValidationError, PlacedTile, SceneConfig, asset_relative_path,
    parse_scene_config, parse_tile_map, validate_map,
};

const MAP_FILE: &str = "assets/tilemaps/maps/small.tmx";

const SMALL_MAP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<map version="1.10" orientation="orthogonal" renderorder="right-down" width="3" height="2" tilewidth="16" tileheight="16" infinite="0" nextlayerid="4" nextobjectid="1">
 <tileset firstgid="1" name="platformer_tiles" tilewidth="16" tileheight="16" tilecount="4" columns="2">
  <image source="../tilesets/platformer_tiles.png" width="32" height="32"/>
  <tile id="1"><properties><property name="collides" type="bool" value="true"/></properties></tile>
  <tile id="2"><properties><property name="collides" type="bool" value="true"/><property name="fallOnContact" type="bool" value="true"/></properties></tile>
  <tile id="3"><properties><property name="collides" type="bool" value="false"/></properties></tile>
 </tileset>
 <layer id="1" name="Background Layer" width="3" height="2">
  <data encoding="csv">
1,1,1,
1,1,1
</data>
 </layer>
 <layer id="2" name="Ground Layer" width="3" height="2">
  <data encoding="csv">
0,3,0,
2,2,2147483650
</data>
 </layer>
 <objectgroup id="3" name="Spawns"/>
</map>
"#;

fn small_map_with(width: &str, height: &str, firstgid: &str) -> String {
    SMALL_MAP
        .replacen(r#"width="3" height="2" tilewidth"#, &format!(r#"width="{}" height="{}" tilewidth"#, width, height), 1)
        .replace(r#"firstgid="1""#, &format!(r#"firstgid="{}""#, firstgid))
}

fn tile(x: u32, y: u32, id: u32) -> PlacedTile {
    PlacedTile {
        x,
        y,
        tileset: 0,
        id,
        flip_x: false,
        flip_y: false,
    }
}

// -----------------------------------------------------------------------------
// Scene tuning
// -----------------------------------------------------------------------------

#[test]
fn test_scene_config_defaults_match_demo_tuning() {
    let config = SceneConfig::default();
    assert_eq!(config.map_scale, 2.5);
    assert_eq!(config.control_ramp_per_ms, 0.001);
    assert_eq!(config.jump_cooldown_ms, 250.0);
    assert_eq!(config.tile_fade_ms, 500.0);
    assert_eq!(config.camera_smoothing, 0.9);
    assert!(config.map_path.ends_with(".tmx"));
    assert_eq!(
        config.player_sheet.as_deref(),
        Some("sprites/dude-cropped.png")
    );
}

#[test]
fn test_scene_config_partial_ron_keeps_defaults() {
    let config = parse_scene_config(
        "(run_speed: 420.0, player_sheet: \"sprites/dude.png\")",
        "inline",
    )
    .expect("partial config should parse");

    assert_eq!(config.run_speed, 420.0);
    assert_eq!(config.player_sheet.as_deref(), Some("sprites/dude.png"));
    assert_eq!(config.jump_speed, SceneConfig::default().jump_speed);
}

#[test]
fn test_shipped_scene_config_parses() {
    let source = include_str!("../../assets/data/scene.ron");
    let config = parse_scene_config(source, "scene.ron").expect("shipped config should parse");
    assert_eq!(config.run_speed, 300.0);
    assert!(config.player_sheet.is_some());
}

#[test]
fn test_scene_config_parse_error_names_file() {
    let err = parse_scene_config("(run_speed: \"fast\")", "scene.ron").unwrap_err();
    assert_eq!(err.file, "scene.ron");
    assert!(err.to_string().starts_with("Failed to load scene.ron"));
}

// -----------------------------------------------------------------------------
// Tiled map parsing
// -----------------------------------------------------------------------------

#[test]
fn test_parse_map_keeps_only_tile_layers() {
    let map = parse_tile_map(SMALL_MAP, MAP_FILE).unwrap();
    assert_eq!(map.layers.len(), 2);
    assert!(map.layer(GROUND_LAYER).is_some());
    assert!(map.layer("Spawns").is_none());
    assert_eq!(map.pixel_width(), 48.0);
    assert_eq!(map.pixel_height(), 32.0);
}

#[test]
fn test_parse_map_resolves_tile_flags() {
    let map = parse_tile_map(SMALL_MAP, MAP_FILE).unwrap();

    let plain = map.flags_for(&tile(0, 0, 0));
    assert!(!plain.collides && !plain.fall_on_contact);

    let ground = map.flags_for(&tile(0, 0, 1));
    assert!(ground.collides);
    assert!(!ground.fall_on_contact);

    let platform = map.flags_for(&tile(0, 0, 2));
    assert!(platform.collides);
    assert!(platform.fall_on_contact);

    // Explicit false is the same as absent
    assert!(!map.flags_for(&tile(0, 0, 3)).collides);
}

#[test]
fn test_layer_tiles_skip_empty_cells_and_decode_flips() {
    let map = parse_tile_map(SMALL_MAP, MAP_FILE).unwrap();
    let ground = map.layer(GROUND_LAYER).unwrap();

    let cells: Vec<_> = ground.tiles.iter().map(|t| (t.x, t.y, t.id)).collect();
    assert_eq!(cells, vec![(1, 0, 2), (0, 1, 1), (1, 1, 1), (2, 1, 1)]);

    // 2147483650 is gid 2 with the horizontal flip bit set
    let flipped = ground.tiles.last().unwrap();
    assert!(flipped.flip_x);
    assert!(!flipped.flip_y);
    assert!(!ground.tiles[0].flip_x);
}

#[test]
fn test_parse_map_reads_tileset_image_grid() {
    let map = parse_tile_map(SMALL_MAP, MAP_FILE).unwrap();
    let tileset = &map.tilesets[0];
    assert_eq!(tileset.name, "platformer_tiles");
    assert_eq!(tileset.tile_count, 4);

    let image = tileset.image.as_ref().expect("tileset has an image");
    assert_eq!(image.columns, 2);
    assert_eq!(image.rows, 2);
    assert_eq!(image.tile_size.x, 16);
    assert!(image.asset_path.ends_with("tilesets/platformer_tiles.png"));
}

#[test]
fn test_shipped_map_parses_and_validates() {
    let source = include_str!("../../assets/tilemaps/maps/falling-platforms.tmx");
    let map = parse_tile_map(source, "assets/tilemaps/maps/falling-platforms.tmx").unwrap();

    assert!(validate_map(&map).is_empty());
    let ground = map.layer(GROUND_LAYER).unwrap();
    assert!(ground.tiles.iter().any(|t| map.flags_for(t).fall_on_contact));
}

#[test]
fn test_asset_relative_path_folds_parent_dirs() {
    assert_eq!(
        asset_relative_path(Path::new(
            "assets/tilemaps/maps/../tilesets/platformer_tiles.png"
        )),
        "tilemaps/tilesets/platformer_tiles.png"
    );
    assert_eq!(
        asset_relative_path(Path::new("/game/assets/sprites/a.png")),
        "sprites/a.png"
    );
    assert_eq!(asset_relative_path(Path::new("sprites/a.png")), "sprites/a.png");
}

#[test]
fn test_parse_map_rejects_zero_tile_size() {
    let source = SMALL_MAP.replacen(r#"tilewidth="16""#, r#"tilewidth="0""#, 1);
    assert!(parse_tile_map(&source, MAP_FILE).is_err());
}

#[test]
fn test_parse_map_rejects_malformed_xml() {
    let err = parse_tile_map("<map width=", "broken.tmx").unwrap_err();
    assert_eq!(err.file, "broken.tmx");
}

#[test]
fn test_parse_map_rejects_oversized_map_without_panicking() {
    let source = small_map_with("70000", "70000", "1");
    let err = parse_tile_map(&source, MAP_FILE).unwrap_err();
    assert!(err.message.contains("70000x70000"));

    let source = small_map_with("4294967295", "1", "1");
    assert!(parse_tile_map(&source, MAP_FILE).is_err());
}

#[test]
fn test_parse_map_survives_maximum_firstgid() {
    let source = small_map_with("3", "2", "4294967295");

    // Either rejected or loaded with nothing resolvable; never a panic
    if let Ok(map) = parse_tile_map(&source, MAP_FILE) {
        let ground = map.layer(GROUND_LAYER).unwrap();
        assert!(ground.tiles.iter().all(|t| !map.flags_for(t).collides));
    }
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_valid_map_has_no_errors() {
    let map = parse_tile_map(SMALL_MAP, MAP_FILE).unwrap();
    assert!(validate_map(&map).is_empty());
}

#[test]
fn test_validation_reports_missing_ground_layer() {
    let mut map = parse_tile_map(SMALL_MAP, MAP_FILE).unwrap();
    map.layers.retain(|layer| layer.name != GROUND_LAYER);

    let errors = validate_map(&map);
    assert_eq!(errors, vec![MapValidationError::MissingLayer(GROUND_LAYER)]);
}

#[test]
fn test_validation_reports_unknown_tile() {
    let mut map = parse_tile_map(SMALL_MAP, MAP_FILE).unwrap();
    map.layers[1].tiles[0].id = 9;
    map.layers[1].tiles[1].tileset = 4;

    let errors = validate_map(&map);
    assert_eq!(errors.len(), 2);
    assert!(matches!(
        &errors[0],
        MapValidationError::UnknownTile { x: 1, y: 0, id: 9, .. }
    ));
    assert!(matches!(
        &errors[1],
        MapValidationError::UnknownTile { tileset: 4, .. }
    ));
}
