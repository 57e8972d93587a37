use serde::{Deserialize, Serialize};

use pinky_core::config::{CoinConfig, GameConfig};
use pinky_core::geometry::Rect;

/// Coin tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoinKind {
    Bronze,
    Silver,
    Gold,
}

impl CoinKind {
    pub fn value(&self, coins: &CoinConfig) -> u32 {
        match self {
            CoinKind::Bronze => coins.bronze,
            CoinKind::Silver => coins.silver,
            CoinKind::Gold => coins.gold,
        }
    }
}

/// Hazard flavors with distinct contact effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    Water,
    Lava,
}

/// Closed set of non-wall entities a level grid can spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Coin(CoinKind),
    HealthPowerup,
    Hazard(HazardKind),
    Trampoline,
    Finish,
    EnemySpawn,
}

impl EntityKind {
    /// Factory keyed by level-grid character, case-insensitive.
    /// Returns None for characters that mean "empty cell" (including any
    /// character with no mapping — unknown characters are tolerated).
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'c' | 'b' => Some(Self::Coin(CoinKind::Bronze)),
            's' => Some(Self::Coin(CoinKind::Silver)),
            'g' => Some(Self::Coin(CoinKind::Gold)),
            'h' => Some(Self::HealthPowerup),
            'w' => Some(Self::Hazard(HazardKind::Water)),
            'l' => Some(Self::Hazard(HazardKind::Lava)),
            't' => Some(Self::Trampoline),
            'f' => Some(Self::Finish),
            'e' => Some(Self::EnemySpawn),
            _ => None,
        }
    }
}

/// A collectible coin. `collected` is kept alongside removal from the
/// registry so a coin can never be counted twice within one tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub rect: Rect,
    pub kind: CoinKind,
    pub value: u32,
    pub collected: bool,
}

/// Restores a fixed amount of health, once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthPowerup {
    pub rect: Rect,
    pub heal: i32,
    pub collected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub rect: Rect,
    pub kind: HazardKind,
}

/// Launches the player upward on downward contact. `active` and
/// `activated_at` only drive the cosmetic sprite swap; they have no
/// physics effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trampoline {
    pub rect: Rect,
    pub active: bool,
    pub activated_at: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishMarker {
    pub rect: Rect,
}

/// Enemy spawn marker. Enemies are outside the simulation core; the
/// marker exists so a collaborator can place them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub rect: Rect,
}

/// Per-level mutable collections of interactive entities, keyed by type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    pub coins: Vec<Coin>,
    pub powerups: Vec<HealthPowerup>,
    pub hazards: Vec<Hazard>,
    pub trampolines: Vec<Trampoline>,
    pub finish_markers: Vec<FinishMarker>,
    pub enemy_spawns: Vec<EnemySpawn>,
}

impl Registry {
    /// Spawn an entity into the grid cell at (column, row).
    ///
    /// Coins and powerups get a smaller pickup rect centered in the cell;
    /// everything else occupies the full tile.
    pub fn spawn(&mut self, kind: EntityKind, column: u32, row: u32, cfg: &GameConfig) {
        let t = cfg.physics.tile_size;
        let cell = Rect::new(column as f32 * t, row as f32 * t, t, t);
        let center = (cell.center_x(), cell.center_y());
        match kind {
            EntityKind::Coin(coin_kind) => {
                let size = cfg.coins.size;
                self.coins.push(Coin {
                    rect: Rect::from_center(center.0, center.1, size, size),
                    kind: coin_kind,
                    value: coin_kind.value(&cfg.coins),
                    collected: false,
                });
            },
            EntityKind::HealthPowerup => {
                let size = cfg.coins.size;
                self.powerups.push(HealthPowerup {
                    rect: Rect::from_center(center.0, center.1, size, size),
                    heal: cfg.effects.heal_amount,
                    collected: false,
                });
            },
            EntityKind::Hazard(hazard_kind) => {
                self.hazards.push(Hazard {
                    rect: cell,
                    kind: hazard_kind,
                });
            },
            EntityKind::Trampoline => {
                self.trampolines.push(Trampoline {
                    rect: cell,
                    active: false,
                    activated_at: None,
                });
            },
            EntityKind::Finish => {
                self.finish_markers.push(FinishMarker { rect: cell });
            },
            EntityKind::EnemySpawn => {
                self.enemy_spawns.push(EnemySpawn { rect: cell });
            },
        }
    }

    /// Flip trampolines back to their resting sprite once their activation
    /// window has elapsed. Cosmetic only, independent of physics.
    pub fn deactivate_expired_trampolines(&mut self, tick: u64, active_ticks: u64) {
        for tr in &mut self.trampolines {
            if tr.active
                && let Some(at) = tr.activated_at
                && tick.saturating_sub(at) >= active_ticks
            {
                tr.active = false;
                tr.activated_at = None;
            }
        }
    }
}
