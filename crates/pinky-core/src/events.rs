use serde::{Deserialize, Serialize};

/// Discrete event tags emitted by the simulation during a tick.
///
/// The core performs no side effects beyond in-memory state change; a
/// collaborator maps these tags to sound playback and score display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A coin was picked up this tick; `value` is its score contribution.
    CoinCollected { value: u32 },
    /// The player left the ground via a jump (not a trampoline).
    Jumped,
    /// A finish marker was reached for the first time.
    LevelCompleted,
}
