use serde::{Deserialize, Serialize};

use pinky_core::config::GameConfig;
use pinky_core::error::ConfigError;
use pinky_core::geometry::{Rect, WorldBounds};

use crate::entities::{EntityKind, Registry};

/// A solid wall tile: a fixed-size static cell of the level grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub column: u32,
    pub row: u32,
    pub rect: Rect,
}

/// The static collision geometry of a level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileGrid {
    tiles: Vec<Tile>,
    columns: u32,
    rows: u32,
    tile_size: f32,
}

impl TileGrid {
    /// Wall tiles, in row-major parse order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Playfield extent in world units.
    pub fn bounds(&self) -> WorldBounds {
        WorldBounds {
            width: self.columns as f32 * self.tile_size,
            height: self.rows as f32 * self.tile_size,
        }
    }
}

/// Everything a level grid describes: walls, interactive entities, and the
/// player spawn cell (top-left corner, if a `p` was present).
#[derive(Debug)]
pub struct ParsedLevel {
    pub grid: TileGrid,
    pub registry: Registry,
    pub spawn: Option<(f32, f32)>,
}

/// Parse a textual level description.
///
/// One character is one tile; the cell at (column, row) lands at world
/// position (column * T, row * T). Rows may vary in length — short rows
/// simply end early, and trailing spaces are ordinary empty cells.
/// Unknown characters are silently ignored.
pub fn parse_level(text: &str, cfg: &GameConfig) -> Result<ParsedLevel, ConfigError> {
    let rows: Vec<&str> = text.lines().collect();
    if rows.is_empty() || rows.iter().all(|r| r.is_empty()) {
        return Err(ConfigError::EmptyGrid);
    }

    let t = cfg.physics.tile_size;
    let mut tiles = Vec::new();
    let mut registry = Registry::default();
    let mut spawn = None;
    let mut columns = 0u32;

    for (row, line) in rows.iter().enumerate() {
        columns = columns.max(line.chars().count() as u32);
        for (column, ch) in line.chars().enumerate() {
            let (column, row) = (column as u32, row as u32);
            match ch.to_ascii_lowercase() {
                '#' => tiles.push(Tile {
                    column,
                    row,
                    rect: Rect::new(column as f32 * t, row as f32 * t, t, t),
                }),
                'p' => spawn = Some((column as f32 * t, row as f32 * t)),
                other => {
                    if let Some(kind) = EntityKind::from_char(other) {
                        registry.spawn(kind, column, row, cfg);
                    }
                },
            }
        }
    }

    tracing::debug!(
        columns,
        rows = rows.len(),
        walls = tiles.len(),
        coins = registry.coins.len(),
        "parsed level grid"
    );

    Ok(ParsedLevel {
        grid: TileGrid {
            tiles,
            columns,
            rows: rows.len() as u32,
            tile_size: t,
        },
        registry,
        spawn,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CoinKind, HazardKind};

    fn parse(text: &str) -> ParsedLevel {
        parse_level(text, &GameConfig::default()).expect("grid must parse")
    }

    #[test]
    fn empty_text_is_rejected() {
        let err = parse_level("", &GameConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyGrid));
    }

    #[test]
    fn blank_rows_only_is_rejected() {
        let err = parse_level("\n\n", &GameConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyGrid));
    }

    #[test]
    fn walls_land_at_tile_positions() {
        let parsed = parse("##\n #");
        assert_eq!(parsed.grid.tiles().len(), 3);
        let bottom_right = parsed.grid.tiles()[2];
        assert_eq!((bottom_right.column, bottom_right.row), (1, 1));
        assert_eq!(bottom_right.rect, Rect::new(32.0, 32.0, 32.0, 32.0));
    }

    #[test]
    fn entities_are_registered_by_type() {
        let parsed = parse("csg\nhwl\ntfe");
        assert_eq!(parsed.registry.coins.len(), 3);
        assert_eq!(parsed.registry.coins[0].kind, CoinKind::Bronze);
        assert_eq!(parsed.registry.coins[1].kind, CoinKind::Silver);
        assert_eq!(parsed.registry.coins[2].kind, CoinKind::Gold);
        assert_eq!(parsed.registry.powerups.len(), 1);
        assert_eq!(parsed.registry.hazards.len(), 2);
        assert_eq!(parsed.registry.hazards[0].kind, HazardKind::Water);
        assert_eq!(parsed.registry.hazards[1].kind, HazardKind::Lava);
        assert_eq!(parsed.registry.trampolines.len(), 1);
        assert_eq!(parsed.registry.finish_markers.len(), 1);
        assert_eq!(parsed.registry.enemy_spawns.len(), 1);
    }

    #[test]
    fn spawn_cell_is_reported_in_world_units() {
        let parsed = parse("   \n p ");
        assert_eq!(parsed.spawn, Some((32.0, 32.0)));
    }

    #[test]
    fn unknown_characters_are_ignored() {
        let parsed = parse("?!9\n# #");
        assert_eq!(parsed.grid.tiles().len(), 2);
        assert!(parsed.registry.coins.is_empty());
        assert!(parsed.spawn.is_none());
    }

    #[test]
    fn parsing_is_case_insensitive() {
        let lower = parse("#c s g#");
        let upper = parse("#C S G#");
        assert_eq!(lower.registry.coins.len(), upper.registry.coins.len());
        assert_eq!(lower.grid.tiles().len(), upper.grid.tiles().len());
    }

    #[test]
    fn ragged_rows_are_allowed() {
        let parsed = parse("#\n###\n##");
        assert_eq!(parsed.grid.tiles().len(), 6);
        assert_eq!(parsed.grid.columns(), 3);
        assert_eq!(parsed.grid.rows(), 3);
    }

    #[test]
    fn bounds_cover_the_whole_grid() {
        let parsed = parse("####\n####");
        let bounds = parsed.grid.bounds();
        assert_eq!(bounds.width, 4.0 * 32.0);
        assert_eq!(bounds.height, 2.0 * 32.0);
    }
}
