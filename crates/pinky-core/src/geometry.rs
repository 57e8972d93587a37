use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world space.
///
/// Screen coordinates: the origin is the top-left corner of the world and
/// y grows downward, so "bottom" is the larger y value and a positive
/// vertical velocity means falling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rect of the given size centered on a point.
    pub fn from_center(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self {
            x: cx - w / 2.0,
            y: cy - h / 2.0,
            w,
            h,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// Midpoint of the bottom edge.
    pub fn midbottom(&self) -> (f32, f32) {
        (self.center_x(), self.bottom())
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.w;
    }

    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    pub fn set_center_x(&mut self, cx: f32) {
        self.x = cx - self.w / 2.0;
    }

    pub fn set_midbottom(&mut self, point: (f32, f32)) {
        self.x = point.0 - self.w / 2.0;
        self.y = point.1 - self.h;
    }

    /// Strict overlap test: rects sharing only an edge do not intersect.
    /// A rect clamped flush against a wall therefore stops registering
    /// collisions, which keeps resolution idempotent.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Extent of the playfield, passed explicitly into the kinematics update
/// instead of being read from a display surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}
