//! Axis-separated collision resolution between the player and wall tiles.
//!
//! The horizontal pass runs fully before the vertical pass, which avoids
//! diagonal tunneling through tile corners. Corrections are applied
//! incrementally against the live collision rect, so resolution is
//! idempotent: after a pass the rect overlaps no wall. No broad phase is
//! needed at this grid scale; the sweep is O(walls) per pass.

use crate::grid::Tile;
use crate::player::Player;

/// Resolve horizontal movement: advance the collision rect by `vx`, clamp
/// against every intersecting wall (right edge to the wall's left when
/// moving right, left edge to the wall's right when moving left), zero
/// `vx`, then sync the sprite rect's center x.
pub fn resolve_horizontal(player: &mut Player, walls: &[Tile]) {
    player.collision.x += player.vx;
    // Direction is captured up front: vx is zeroed on the first contact,
    // but later walls in the pass must still clamp the same way.
    let moving_right = player.vx > 0.0;
    let moving_left = player.vx < 0.0;
    for wall in walls {
        if !player.collision.intersects(&wall.rect) {
            continue;
        }
        if moving_right {
            player.collision.set_right(wall.rect.left());
            player.vx = 0.0;
        } else if moving_left {
            player.collision.set_left(wall.rect.right());
            player.vx = 0.0;
        }
    }
    player.sync_center_x_from_collision();
}

/// Resolve vertical movement: integrate gravity into `vy` (capped at
/// terminal falling speed so a single tick can never step past a
/// tile-thick wall), advance the collision rect, then clamp against every
/// intersecting wall. A downward contact grounds the player and ends the
/// jump; an upward contact bumps the head. Ends by syncing the sprite
/// rect's bottom.
pub fn resolve_vertical(player: &mut Player, walls: &[Tile], terminal_velocity: f32) {
    player.vy = (player.vy + player.ay).min(terminal_velocity);
    player.collision.y += player.vy;
    let falling = player.vy > 0.0;
    let rising = player.vy < 0.0;
    player.on_ground = false;
    for wall in walls {
        if !player.collision.intersects(&wall.rect) {
            continue;
        }
        if falling {
            player.collision.set_bottom(wall.rect.top());
            player.vy = 0.0;
            player.on_ground = true;
            player.jumping = false;
        } else if rising {
            player.collision.set_top(wall.rect.bottom());
            player.vy = 0.0;
        }
    }
    player.sync_bottom_from_collision();
}
