pub mod entities;
pub mod grid;
pub mod interactions;
pub mod physics;
pub mod player;

use std::path::Path;

use pinky_core::config::GameConfig;
use pinky_core::error::ConfigError;
use pinky_core::events::GameEvent;
use pinky_core::geometry::WorldBounds;
use pinky_core::input::InputSnapshot;

use entities::Registry;
use grid::TileGrid;
use player::Player;

/// What one simulation tick produced, for the surrounding game loop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    /// Total score value of coins collected this tick (0 if none).
    pub coin_value: u32,
    /// Discrete event tags for the audio/UI collaborators.
    pub events: Vec<GameEvent>,
}

/// One loaded level: static wall grid, interactive entities, and progress
/// counters.
///
/// The level borrows the player rather than owning it: `new` applies the
/// spawn cell to the player passed in, and each `update` call takes the
/// player again. Advancing to the next level means discarding this value
/// and constructing a fresh one — levels are never reused in place.
#[derive(Debug)]
pub struct Level {
    grid: TileGrid,
    registry: Registry,
    config: GameConfig,
    bounds: WorldBounds,
    collected_coins: u32,
    total_coins: u32,
    level_complete: bool,
    paused: bool,
    tick: u64,
}

impl Level {
    /// Build a level from a textual grid. Fails only on an empty grid;
    /// a `p` cell positions the player and zeroes its vertical velocity.
    pub fn new(text: &str, config: &GameConfig, player: &mut Player) -> Result<Self, ConfigError> {
        let parsed = grid::parse_level(text, config)?;
        if let Some((x, y)) = parsed.spawn {
            player.set_topleft(x, y);
            player.vy = 0.0;
        }
        let total_coins = parsed.registry.coins.len() as u32;
        let bounds = parsed.grid.bounds();
        tracing::debug!(
            total_coins,
            width = bounds.width,
            height = bounds.height,
            "level ready"
        );
        Ok(Self {
            grid: parsed.grid,
            registry: parsed.registry,
            config: config.clone(),
            bounds,
            collected_coins: 0,
            total_coins,
            level_complete: false,
            paused: false,
            tick: 0,
        })
    }

    /// Load a level grid from a file.
    pub fn from_file(
        path: impl AsRef<Path>,
        config: &GameConfig,
        player: &mut Player,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        Self::new(&text, config, player)
    }

    /// Advance the simulation by one tick: input application, horizontal
    /// resolution, vertical resolution, interaction dispatch, in that
    /// fixed order. The tick is atomic; collaborators only read state
    /// between calls.
    pub fn update(&mut self, player: &mut Player, input: &InputSnapshot) -> TickOutcome {
        if input.pause {
            self.paused = !self.paused;
        }
        if self.paused {
            return TickOutcome::default();
        }
        self.tick += 1;

        let mut events = Vec::new();
        if let Some(event) = player.apply_input(input, &self.config.physics) {
            events.push(event);
        }

        physics::resolve_horizontal(player, self.grid.tiles());
        player.clamp_to_bounds(&self.bounds);
        physics::resolve_vertical(
            player,
            self.grid.tiles(),
            self.config.physics.terminal_velocity,
        );

        let outcome =
            interactions::dispatch(player, &mut self.registry, &self.config, self.tick, &mut events);
        self.collected_coins += outcome.coins_collected;

        if outcome.finished && !self.level_complete {
            self.level_complete = true;
            tracing::info!(
                collected = self.collected_coins,
                total = self.total_coins,
                "level completed"
            );
            events.push(GameEvent::LevelCompleted);
        }

        self.registry
            .deactivate_expired_trampolines(self.tick, self.config.effects.trampoline_active_ticks);

        TickOutcome {
            coin_value: outcome.coin_value,
            events,
        }
    }

    /// Polled by the game shell each tick to trigger level advance.
    pub fn is_complete(&self) -> bool {
        self.level_complete
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn collected_coins(&self) -> u32 {
        self.collected_coins
    }

    /// Count of coin cells at load time; fixed for the level's lifetime.
    pub fn total_coins(&self) -> u32 {
        self.total_coins
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Static wall geometry, read-only for the rendering collaborator.
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Interactive entities, read-only for the rendering collaborator.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Config with a player small enough for single-tile corridors.
    fn test_config() -> GameConfig {
        let mut cfg = GameConfig::default();
        cfg.physics.player_size = 24.0;
        cfg.physics.collision_inset = 8.0;
        cfg
    }

    fn load(text: &str) -> (Level, Player, GameConfig) {
        let cfg = test_config();
        let mut player = Player::new(&cfg);
        let level = Level::new(text, &cfg, &mut player).expect("level must load");
        (level, player, cfg)
    }

    const RIGHT: InputSnapshot = InputSnapshot {
        left: false,
        right: true,
        jump: false,
        pause: false,
    };

    #[test]
    fn spawn_positions_the_player() {
        let (_, player, _) = load("#####\n#p  #\n#####");
        assert_eq!(player.rect.left(), 32.0);
        assert_eq!(player.rect.top(), 32.0);
        assert_eq!(player.vy, 0.0);
    }

    #[test]
    fn walking_right_collects_the_coin() {
        let (mut level, mut player, _) = load("#####\n#p c#\n#####");
        assert_eq!(level.total_coins(), 1);

        let mut total_value = 0;
        for _ in 0..60 {
            let outcome = level.update(&mut player, &RIGHT);
            total_value += outcome.coin_value;
            // Coin conservation holds on every tick.
            assert_eq!(
                level.collected_coins() + level.registry().coins.len() as u32,
                level.total_coins()
            );
        }

        assert_eq!(level.collected_coins(), 1);
        assert_eq!(total_value, 1);
        assert!(level.registry().coins.is_empty());
    }

    #[test]
    fn completion_is_monotonic_and_announced_once() {
        let (mut level, mut player, _) = load("#####\n#p f#\n#####");

        let mut completion_events = 0;
        for _ in 0..80 {
            let outcome = level.update(&mut player, &RIGHT);
            completion_events += outcome
                .events
                .iter()
                .filter(|e| **e == GameEvent::LevelCompleted)
                .count();
            if level.is_complete() {
                break;
            }
        }
        assert!(level.is_complete());

        // Keep standing on the marker: the flag never resets and the
        // event never repeats.
        for _ in 0..20 {
            let outcome = level.update(&mut player, &InputSnapshot::idle());
            completion_events += outcome
                .events
                .iter()
                .filter(|e| **e == GameEvent::LevelCompleted)
                .count();
            assert!(level.is_complete());
        }
        assert_eq!(completion_events, 1);
    }

    #[test]
    fn jump_emits_event_and_lands_back() {
        let (mut level, mut player, _) = load("#####\n#   #\n#p  #\n#####");

        // Settle onto the floor first.
        for _ in 0..10 {
            level.update(&mut player, &InputSnapshot::idle());
        }
        assert!(player.on_ground);

        let jump = InputSnapshot {
            jump: true,
            ..InputSnapshot::idle()
        };
        let outcome = level.update(&mut player, &jump);
        assert!(outcome.events.contains(&GameEvent::Jumped));
        assert!(!player.on_ground);

        for _ in 0..100 {
            level.update(&mut player, &InputSnapshot::idle());
            if player.on_ground {
                break;
            }
        }
        assert!(player.on_ground, "player must land again");
        assert_eq!(player.vy, 0.0);
    }

    #[test]
    fn pause_freezes_the_simulation() {
        let (mut level, mut player, _) = load("#####\n#p  #\n#####");
        for _ in 0..10 {
            level.update(&mut player, &InputSnapshot::idle());
        }
        let rect_before = player.rect;
        let tick_before = level.tick();

        let pause = InputSnapshot {
            pause: true,
            ..InputSnapshot::idle()
        };
        assert_eq!(level.update(&mut player, &pause), TickOutcome::default());
        assert!(level.is_paused());

        level.update(&mut player, &RIGHT);
        assert_eq!(player.rect, rect_before, "no movement while paused");
        assert_eq!(level.tick(), tick_before, "tick counter frozen");

        level.update(&mut player, &pause);
        assert!(!level.is_paused());
        level.update(&mut player, &RIGHT);
        assert!(player.rect.left() > rect_before.left());
    }

    #[test]
    fn falling_onto_a_trampoline_launches_harder_than_a_jump() {
        // The player drops straight down through the trampoline's cell.
        let (mut level, mut player, cfg) = load("#######\n#  p  #\n#     #\n#  t  #\n#######");

        let mut launched = false;
        for _ in 0..200 {
            level.update(&mut player, &InputSnapshot::idle());
            if player.vy < -cfg.physics.jump_strength {
                launched = true;
                break;
            }
        }
        assert!(launched, "downward contact must launch the player");
        assert!(level.registry().trampolines[0].active);
        assert!(level.registry().trampolines[0].activated_at.is_some());
    }

    #[test]
    fn from_file_round_trips_and_reports_missing_files() {
        let cfg = test_config();
        let mut player = Player::new(&cfg);

        let path = std::env::temp_dir().join(format!("pinky_level_{}.txt", std::process::id()));
        std::fs::write(&path, "#####\n#p c#\n#####").expect("write temp level");
        let level = Level::from_file(&path, &cfg, &mut player).expect("file level must load");
        assert_eq!(level.total_coins(), 1);
        std::fs::remove_file(&path).ok();

        let missing = Level::from_file("no/such/level.txt", &cfg, &mut player);
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arbitrary_input() -> impl Strategy<Value = InputSnapshot> {
            (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(left, right, jump)| {
                InputSnapshot {
                    left,
                    right,
                    jump,
                    pause: false,
                }
            })
        }

        proptest! {
            // Coin conservation and completion monotonicity hold under any
            // input sequence.
            #[test]
            fn invariants_hold_under_arbitrary_input(
                inputs in proptest::collection::vec(arbitrary_input(), 1..120),
            ) {
                let cfg = test_config();
                let mut player = Player::new(&cfg);
                let mut level = Level::new(
                    "########\n#p c  g#\n# s  f #\n########",
                    &cfg,
                    &mut player,
                )
                .expect("level must load");

                let mut was_complete = false;
                for input in inputs {
                    level.update(&mut player, &input);
                    prop_assert_eq!(
                        level.collected_coins() + level.registry().coins.len() as u32,
                        level.total_coins()
                    );
                    prop_assert!(level.collected_coins() <= level.total_coins());
                    if was_complete {
                        prop_assert!(level.is_complete());
                    }
                    was_complete = level.is_complete();
                    // The player never comes to rest inside a wall.
                    let overlapping = level
                        .grid()
                        .tiles()
                        .iter()
                        .any(|t| player.collision.intersects(&t.rect));
                    prop_assert!(!overlapping);
                }
            }
        }
    }
}
