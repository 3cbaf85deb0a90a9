//! Sprites: tests for player animation clips and playback.

use super::{AnimationController, PLAYER_SHEET_COLUMNS, PlayerAnimation};

#[test]
fn test_clips_cover_the_sheet() {
    let left = PlayerAnimation::MoveLeft.clip();
    let idle = PlayerAnimation::Idle.clip();
    let right = PlayerAnimation::MoveRight.clip();

    assert_eq!((left.first, left.last), (0, 3));
    assert_eq!((idle.first, idle.last), (4, 4));
    assert_eq!((right.first, right.last), (5, 8));
    assert_eq!(right.last + 1, PLAYER_SHEET_COLUMNS as usize);
}

#[test]
fn test_clip_keys() {
    assert_eq!(PlayerAnimation::Idle.key(), "idle");
    assert_eq!(PlayerAnimation::MoveLeft.key(), "left");
    assert_eq!(PlayerAnimation::MoveRight.key(), "right");
}

#[test]
fn test_play_same_clip_does_not_restart() {
    let mut controller = AnimationController::default();
    assert!(controller.play(PlayerAnimation::MoveRight));

    controller.tick(0.25);
    let frame = controller.current_frame;
    assert!(frame > 0);

    assert!(!controller.play(PlayerAnimation::MoveRight));
    assert_eq!(controller.current_frame, frame);
}

#[test]
fn test_switching_clip_restarts_frames() {
    let mut controller = AnimationController::default();
    controller.play(PlayerAnimation::MoveLeft);
    controller.tick(0.25);

    assert!(controller.play(PlayerAnimation::MoveRight));
    assert_eq!(controller.current_frame, 0);
    assert_eq!(controller.atlas_index(), 5);
}

#[test]
fn test_walk_cycle_loops_at_ten_fps() {
    let mut controller = AnimationController::default();
    controller.play(PlayerAnimation::MoveLeft);

    for expected in [1, 2, 3, 0, 1] {
        controller.tick(0.1001);
        assert_eq!(controller.atlas_index(), expected);
    }
}

#[test]
fn test_idle_stays_on_standing_frame() {
    let mut controller = AnimationController::default();
    controller.tick(3.0);
    assert_eq!(controller.atlas_index(), 4);
}
