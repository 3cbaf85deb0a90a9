//! UI domain: tests for the restart fade and help text.

use std::time::Duration;

use super::CameraFade;
use super::hud_help::HELP_LINES;

#[test]
fn test_camera_fade_darkens_to_black() {
    let mut fade = CameraFade::new(500.0);
    assert_eq!(fade.alpha(), 0.0);

    fade.timer.tick(Duration::from_millis(250));
    assert!((fade.alpha() - 0.5).abs() < 1e-4);

    fade.timer.tick(Duration::from_millis(400));
    assert_eq!(fade.alpha(), 1.0);
}

#[test]
fn test_help_text_mentions_controls() {
    assert!(HELP_LINES.iter().any(|line| line.contains("move")));
    assert!(HELP_LINES.iter().any(|line| line.contains("jump")));
}
