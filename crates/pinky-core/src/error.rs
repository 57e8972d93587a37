/// Errors raised while constructing a level.
///
/// Unknown characters in a level grid are deliberately tolerated (treated
/// as empty cells) and never produce an error; only a grid with no rows,
/// or an unreadable level file, is fatal. No partial level is ever
/// produced on failure.
#[derive(Debug)]
pub enum ConfigError {
    EmptyGrid,
    Io(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "level grid is empty"),
            Self::Io(m) => write!(f, "failed to read level: {m}"),
        }
    }
}

impl std::error::Error for ConfigError {}
