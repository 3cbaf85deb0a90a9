//! Animation state machine and playback.
//!
//! The player sheet is a single row of nine frames: four walking left,
//! one standing, four walking right.

use bevy::prelude::*;

/// Frames in the player sprite sheet row.
pub const PLAYER_SHEET_COLUMNS: u32 = 9;

/// Named animation states for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerAnimation {
    #[default]
    Idle,
    MoveLeft,
    MoveRight,
}

/// Inclusive frame range within the sheet. Every clip loops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClip {
    pub first: usize,
    pub last: usize,
    pub frame_rate: f32,
}

impl AnimationClip {
    pub fn frame_count(&self) -> usize {
        self.last - self.first + 1
    }
}

impl PlayerAnimation {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::MoveLeft => "left",
            Self::MoveRight => "right",
        }
    }

    pub fn clip(&self) -> AnimationClip {
        let (first, last) = match self {
            Self::MoveLeft => (0, 3),
            Self::Idle => (4, 4),
            Self::MoveRight => (5, 8),
        };
        AnimationClip {
            first,
            last,
            frame_rate: 10.0,
        }
    }
}

/// Component for animation playback on the player sprite.
#[derive(Component, Debug)]
pub struct AnimationController {
    pub state: PlayerAnimation,
    /// Frame offset within the current clip.
    pub current_frame: usize,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: PlayerAnimation::Idle,
            current_frame: 0,
            frame_timer: 0.0,
        }
    }
}

impl AnimationController {
    /// Switch clip. Playing the clip that is already running is a no-op,
    /// so calling this every frame does not restart the animation.
    /// Returns true when the clip changed.
    pub fn play(&mut self, state: PlayerAnimation) -> bool {
        if self.state == state {
            return false;
        }
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        true
    }

    /// Advance playback by `delta_secs`.
    pub fn tick(&mut self, delta_secs: f32) {
        let clip = self.state.clip();
        if clip.frame_rate <= 0.0 {
            return;
        }

        let frame_duration = 1.0 / clip.frame_rate;
        self.frame_timer += delta_secs;
        while self.frame_timer >= frame_duration {
            self.frame_timer -= frame_duration;
            self.current_frame = (self.current_frame + 1) % clip.frame_count();
        }
    }

    /// Index into the sprite sheet for the current frame.
    pub fn atlas_index(&self) -> usize {
        self.state.clip().first + self.current_frame
    }
}

/// System to advance animation frames and push them to the sprite atlas.
pub fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<(&mut AnimationController, &mut Sprite)>,
) {
    for (mut controller, mut sprite) in &mut query {
        controller.tick(time.delta_secs());

        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = controller.atlas_index();
        }
    }
}
