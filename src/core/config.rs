//! Game session configuration.

use serde::{Deserialize, Serialize};

/// Default number of snapshots kept by the undo history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// Configuration for a game session.
///
/// The history capacity bounds undo depth for the whole session; it is fixed
/// once the session is built. Zero is accepted here and rejected when the
/// history is constructed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of board snapshots in the circular history buffer.
    pub history_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl GameConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the history capacity.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }
}
