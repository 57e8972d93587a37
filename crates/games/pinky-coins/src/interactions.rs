//! Overlap checks between the player and non-wall entities, run after both
//! collision passes each tick.

use pinky_core::config::GameConfig;
use pinky_core::events::GameEvent;

use crate::entities::{HazardKind, Registry};
use crate::player::Player;

/// What one interaction pass did to the world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionOutcome {
    /// Total score value of coins picked up this tick.
    pub coin_value: u32,
    /// Number of coins picked up this tick.
    pub coins_collected: u32,
    /// Damage dealt by hazards this tick.
    pub damage: i32,
    /// Whether a finish marker was touched.
    pub finished: bool,
}

/// Apply every entity effect the player currently overlaps.
///
/// Coins, powerups, and finish markers test against the sprite rect
/// (generous pickup radius); hazards and trampolines test against the
/// collision rect (physical contact). Collected coins and powerups are
/// removed from the registry after the pass.
pub fn dispatch(
    player: &mut Player,
    registry: &mut Registry,
    cfg: &GameConfig,
    tick: u64,
    events: &mut Vec<GameEvent>,
) -> InteractionOutcome {
    let mut outcome = InteractionOutcome::default();

    for coin in &mut registry.coins {
        if !coin.collected && coin.rect.intersects(&player.rect) {
            coin.collected = true;
            outcome.coin_value += coin.value;
            outcome.coins_collected += 1;
            events.push(GameEvent::CoinCollected { value: coin.value });
        }
    }
    registry.coins.retain(|c| !c.collected);

    for hazard in &registry.hazards {
        if !hazard.rect.intersects(&player.collision) {
            continue;
        }
        match hazard.kind {
            // Applied every tick of contact, compounding while submerged.
            HazardKind::Water => player.vx *= cfg.effects.water_damping,
            HazardKind::Lava => {
                player.apply_damage(cfg.effects.lava_damage);
                outcome.damage += cfg.effects.lava_damage;
            },
        }
    }

    for powerup in &mut registry.powerups {
        if !powerup.collected && powerup.rect.intersects(&player.rect) {
            powerup.collected = true;
            player.heal(powerup.heal);
        }
    }
    registry.powerups.retain(|p| !p.collected);

    // Trampolines only fire on downward contact, so a launched player
    // passing back through does not re-trigger them.
    for trampoline in &mut registry.trampolines {
        if player.vy > 0.0 && trampoline.rect.intersects(&player.collision) {
            player.vy = -cfg.effects.trampoline_launch;
            trampoline.active = true;
            trampoline.activated_at = Some(tick);
        }
    }

    for marker in &registry.finish_markers {
        if marker.rect.intersects(&player.rect) {
            outcome.finished = true;
        }
    }

    outcome
}
