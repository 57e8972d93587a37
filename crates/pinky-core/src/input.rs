use serde::{Deserialize, Serialize};

/// Per-tick boolean key-state snapshot supplied by the input collaborator.
///
/// Consumed exactly once at the start of a tick; the core never polls
/// input devices itself.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub pause: bool,
}

impl InputSnapshot {
    /// Snapshot with no keys held.
    pub fn idle() -> Self {
        Self::default()
    }
}
