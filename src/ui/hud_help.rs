//! UI domain: on-screen control instructions.

use bevy::prelude::*;

use crate::core::SceneEntity;

pub(crate) const HELP_PADDING: f32 = 16.0;

pub(crate) const HELP_LINES: [&str; 4] = [
    "Arrow keys to move.",
    "Space to jump.",
    "Don't look back :)",
    "Click to toggle rendering physics debug.",
];

/// Marker for the instructions panel
#[derive(Component)]
pub struct HelpTextUI;

pub(crate) fn spawn_help_text(mut commands: Commands) {
    commands.spawn((
        HelpTextUI,
        SceneEntity,
        Text::new(HELP_LINES.join("\n")),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HELP_PADDING),
            top: Val::Px(HELP_PADDING),
            padding: UiRect::axes(Val::Px(20.0), Val::Px(10.0)),
            ..default()
        },
        BackgroundColor(Color::BLACK),
    ));
}
