use serde::{Deserialize, Serialize};

use pinky_core::config::{GameConfig, PhysicsConfig};
use pinky_core::events::GameEvent;
use pinky_core::geometry::{Rect, WorldBounds};
use pinky_core::input::InputSnapshot;

/// Which way the sprite faces, for the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Motion state derived from ground contact each tick. Never stored, so it
/// cannot drift out of sync with `on_ground`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    Grounded,
    Airborne,
}

/// The player's kinematic state.
///
/// Two rectangles: `rect` is the sprite-sized rect used for rendering and
/// generous pickups; `collision` is a narrower hitbox used exclusively for
/// wall collision, so sprite padding cannot cause false wall hits.
/// Invariant: `collision.midbottom() == rect.midbottom()` is re-established
/// after every position mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub collision: Rect,
    pub vx: f32,
    pub vy: f32,
    /// Gravity constant integrated into `vy` every tick.
    pub ay: f32,
    pub on_ground: bool,
    pub jumping: bool,
    pub facing: Facing,
    /// Clamped to 0..=max_health.
    pub health: i32,
    pub max_health: i32,
}

impl Player {
    pub fn new(cfg: &GameConfig) -> Self {
        let size = cfg.physics.player_size;
        let rect = Rect::new(0.0, 0.0, size, size);
        let mut collision = Rect::new(0.0, 0.0, size - cfg.physics.collision_inset, size);
        collision.set_midbottom(rect.midbottom());
        Self {
            rect,
            collision,
            vx: 0.0,
            vy: 0.0,
            ay: cfg.physics.gravity,
            on_ground: false,
            jumping: false,
            facing: Facing::Right,
            health: cfg.max_health,
            max_health: cfg.max_health,
        }
    }

    /// Place the sprite rect's top-left corner, e.g. at a spawn cell.
    pub fn set_topleft(&mut self, x: f32, y: f32) {
        self.rect.x = x;
        self.rect.y = y;
        self.anchor_collision();
    }

    /// Re-establish the midbottom anchor after `rect` moved.
    pub fn anchor_collision(&mut self) {
        self.collision.set_midbottom(self.rect.midbottom());
    }

    /// Pull `rect` horizontally onto the corrected collision rect.
    pub fn sync_center_x_from_collision(&mut self) {
        let cx = self.collision.center_x();
        self.rect.set_center_x(cx);
    }

    /// Pull `rect` vertically onto the corrected collision rect.
    pub fn sync_bottom_from_collision(&mut self) {
        let bottom = self.collision.bottom();
        self.rect.set_bottom(bottom);
    }

    /// Apply one tick's input: horizontal intent, facing, and jump.
    /// Jumping is only accepted while grounded; a successful jump emits
    /// the event the audio collaborator listens for.
    pub fn apply_input(
        &mut self,
        input: &InputSnapshot,
        physics: &PhysicsConfig,
    ) -> Option<GameEvent> {
        self.vx = 0.0;
        if input.left {
            self.vx = -physics.player_speed;
            self.facing = Facing::Left;
        }
        if input.right {
            self.vx = physics.player_speed;
            self.facing = Facing::Right;
        }
        if input.jump && self.on_ground {
            self.vy = -physics.jump_strength;
            self.on_ground = false;
            self.jumping = true;
            return Some(GameEvent::Jumped);
        }
        None
    }

    /// Keep the sprite rect inside the horizontal playfield extent.
    pub fn clamp_to_bounds(&mut self, bounds: &WorldBounds) {
        if self.rect.left() < 0.0 {
            self.rect.set_left(0.0);
            self.anchor_collision();
        }
        if self.rect.right() > bounds.width {
            self.rect.set_right(bounds.width);
            self.anchor_collision();
        }
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    pub fn apply_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    pub fn motion_state(&self) -> MotionState {
        if self.on_ground {
            MotionState::Grounded
        } else {
            MotionState::Airborne
        }
    }
}
