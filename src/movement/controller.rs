//! Player contact accounting and per-frame movement rules.
//!
//! Everything here is plain data plus update functions. The ECS systems feed
//! it the frame's sensor contacts, input, clock and velocity, so the rules can
//! be exercised without a running physics world.

use bevy::prelude::*;

use crate::movement::components::SensorSide;
use crate::movement::resources::MovementInput;
use crate::sprites::PlayerAnimation;

/// Linear interpolation, `t = 0` keeps `from`, `t = 1` reaches `to`.
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

// ============================================================================
// Smoothed horizontal control
// ============================================================================

/// Ramped horizontal input in `[-1, 1]`.
///
/// Holding a direction grows the magnitude linearly with time; switching
/// direction starts again from zero.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct SmoothedHorizontalControl {
    /// Growth per millisecond held.
    pub ms_speed: f32,
    pub value: f32,
}

impl SmoothedHorizontalControl {
    pub fn new(ms_speed: f32) -> Self {
        Self {
            ms_speed,
            value: 0.0,
        }
    }

    pub fn move_left(&mut self, delta_ms: f32) {
        if self.value > 0.0 {
            self.reset();
        }
        self.value = (self.value - self.ms_speed * delta_ms).max(-1.0);
    }

    pub fn move_right(&mut self, delta_ms: f32) {
        if self.value < 0.0 {
            self.reset();
        }
        self.value = (self.value + self.ms_speed * delta_ms).min(1.0);
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}

// ============================================================================
// Contact accounting
// ============================================================================

/// Per-direction flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blocked {
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
}

/// Per-direction contact counters for one accounting pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Touching {
    pub left: u32,
    pub right: u32,
    pub bottom: u32,
}

/// What a sensor is touching, reduced to what the blocked flags care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSurface {
    /// Another collider of the player's own compound body.
    OwnBody,
    Static,
    /// Anything that can move: dynamic or kinematic bodies.
    Movable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorContact {
    pub side: SensorSide,
    pub surface: ContactSurface,
}

impl SensorContact {
    pub fn new(side: SensorSide, surface: ContactSurface) -> Self {
        Self { side, surface }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSpeeds {
    pub run: f32,
    pub jump: f32,
}

/// Runtime state of the player character.
#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    pub blocked: Blocked,
    pub num_touching: Touching,
    /// Milliseconds since startup of the last jump.
    pub last_jumped_at: f64,
    pub jump_cooldown_ms: f64,
    pub speed: PlayerSpeeds,
}

impl PlayerController {
    pub fn new(speed: PlayerSpeeds, jump_cooldown_ms: f64) -> Self {
        Self {
            blocked: Blocked::default(),
            num_touching: Touching::default(),
            last_jumped_at: 0.0,
            jump_cooldown_ms,
            speed,
        }
    }

    pub fn begin_step(&mut self) {
        self.num_touching = Touching::default();
    }

    /// Count one active sensor contact.
    ///
    /// The bottom sensor counts any body so standing on a crate is grounded.
    /// Side sensors only count static bodies: something the player can push
    /// must not stop it from walking into it.
    pub fn record_contact(&mut self, contact: SensorContact) {
        match (contact.side, contact.surface) {
            (_, ContactSurface::OwnBody) => {}
            (SensorSide::Bottom, _) => self.num_touching.bottom += 1,
            (SensorSide::Left, ContactSurface::Static) => self.num_touching.left += 1,
            (SensorSide::Right, ContactSurface::Static) => self.num_touching.right += 1,
            (SensorSide::Left | SensorSide::Right, ContactSurface::Movable) => {}
        }
    }

    pub fn end_step(&mut self) {
        self.blocked = Blocked {
            left: self.num_touching.left > 0,
            right: self.num_touching.right > 0,
            bottom: self.num_touching.bottom > 0,
        };
    }

    /// Run a whole accounting pass over one step's contacts.
    pub fn resolve_contacts(&mut self, contacts: impl IntoIterator<Item = SensorContact>) {
        self.begin_step();
        for contact in contacts {
            self.record_contact(contact);
        }
        self.end_step();
    }

    /// Sensors keep touching the ground for a few frames after take-off,
    /// so jumps are rate limited on top of the grounded check.
    pub fn can_jump(&self, now_ms: f64) -> bool {
        self.blocked.bottom && now_ms - self.last_jumped_at >= self.jump_cooldown_ms
    }
}

// ============================================================================
// Movement update
// ============================================================================

/// Apply one frame of input to the player's velocity.
///
/// `velocity` is world space with y up, so a jump sets a positive `y`.
/// Returns the animation the player should be showing.
pub fn update_movement(
    controller: &mut PlayerController,
    control: &mut SmoothedHorizontalControl,
    input: &MovementInput,
    velocity: &mut Vec2,
    now_ms: f64,
    delta_ms: f32,
) -> PlayerAnimation {
    let animation = if input.left && !controller.blocked.left {
        control.move_left(delta_ms);
        velocity.x = lerp(velocity.x, -controller.speed.run, -control.value);
        PlayerAnimation::MoveLeft
    } else if input.right && !controller.blocked.right {
        control.move_right(delta_ms);
        velocity.x = lerp(velocity.x, controller.speed.run, control.value);
        PlayerAnimation::MoveRight
    } else {
        control.reset();
        PlayerAnimation::Idle
    };

    if input.jump && controller.can_jump(now_ms) {
        velocity.y = controller.speed.jump;
        controller.last_jumped_at = now_ms;
    }

    animation
}
