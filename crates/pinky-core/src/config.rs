use serde::{Deserialize, Serialize};

/// Default tile edge length in world units.
pub const TILE_SIZE: f32 = 32.0;
/// Horizontal move speed in units per tick.
pub const PLAYER_SPEED: f32 = 5.0;
/// Initial upward speed of a jump.
pub const JUMP_STRENGTH: f32 = 10.0;
/// Gravity acceleration in units per tick squared (downward).
pub const GRAVITY: f32 = 0.5;
/// Maximum falling speed per tick.
pub const TERMINAL_VELOCITY: f32 = 15.0;
/// Player sprite rectangle edge length.
pub const PLAYER_SIZE: f32 = 50.0;
/// Total width trimmed off the sprite rect to form the collision rect.
pub const COLLISION_INSET: f32 = 20.0;

/// Physics parameters, all expressed per simulation tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub tile_size: f32,
    pub player_speed: f32,
    pub jump_strength: f32,
    pub gravity: f32,
    pub terminal_velocity: f32,
    pub player_size: f32,
    pub collision_inset: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            player_speed: PLAYER_SPEED,
            jump_strength: JUMP_STRENGTH,
            gravity: GRAVITY,
            terminal_velocity: TERMINAL_VELOCITY,
            player_size: PLAYER_SIZE,
            collision_inset: COLLISION_INSET,
        }
    }
}

/// Coin values and pickup geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinConfig {
    pub bronze: u32,
    pub silver: u32,
    pub gold: u32,
    /// Edge length of a coin's pickup rect, centered in its cell.
    pub size: f32,
}

impl Default for CoinConfig {
    fn default() -> Self {
        Self {
            bronze: 1,
            silver: 3,
            gold: 5,
            size: 24.0,
        }
    }
}

/// Special-tile effect parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Health restored by a health powerup.
    pub heal_amount: i32,
    /// Damage applied per tick of lava contact.
    pub lava_damage: i32,
    /// Horizontal velocity multiplier applied per tick of water contact.
    pub water_damping: f32,
    /// Upward launch speed when a trampoline fires.
    pub trampoline_launch: f32,
    /// Ticks a trampoline stays visually active after firing.
    pub trampoline_active_ticks: u64,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            heal_amount: 25,
            lava_damage: 1,
            water_damping: 0.9,
            trampoline_launch: 20.0,
            trampoline_active_ticks: 30,
        }
    }
}

/// Top-level game configuration, loadable from TOML.
///
/// A single immutable value passed explicitly into level and player
/// constructors; there are no process-wide mutable settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub physics: PhysicsConfig,
    pub coins: CoinConfig,
    pub effects: EffectConfig,
    pub max_health: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            coins: CoinConfig::default(),
            effects: EffectConfig::default(),
            max_health: 100,
        }
    }
}

impl GameConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("PINKY_COINS_CONFIG")
            .unwrap_or_else(|_| "config/pinky_coins.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<GameConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    GameConfig::default()
                },
            },
            Err(_) => GameConfig::default(),
        }
    }
}
