//! Playout configuration parameters.

use serde::{Deserialize, Serialize};

/// Configuration for random playouts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutConfig {
    /// Random seed. Same seed, same playout.
    pub seed: u64,

    /// Moves after which a playout is abandoned (0 = unlimited).
    /// Sowing can circulate marbles for a long time on big boards.
    pub max_moves: u32,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_moves: 10_000,
        }
    }
}

impl PlayoutConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom move cap.
    #[must_use]
    pub fn with_max_moves(mut self, max_moves: u32) -> Self {
        self.max_moves = max_moves;
        self
    }
}
