//! Board configuration.
//!
//! A `BoardConfig` fixes the geometry of a game (pits per side) and the
//! starting layout (marbles per pit, who moves first). It is chosen once
//! per game and never changes afterwards.

use serde::{Deserialize, Serialize};

use super::error::{CongkakError, Result};
use super::player::PlayerNumber;

/// Pits per side on a standard congkak board.
pub const STANDARD_PITS_PER_SIDE: usize = 7;

/// Marbles per pit at the start of a standard game.
pub const STANDARD_MARBLES_PER_PIT: u32 = 7;

/// Board geometry and starting layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Pits in each player's row (`P`).
    pub pits_per_side: usize,

    /// Marbles placed in every pit at the start.
    pub marbles_per_pit: u32,

    /// Player who makes the first move.
    pub first_player: PlayerNumber,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            pits_per_side: STANDARD_PITS_PER_SIDE,
            marbles_per_pit: STANDARD_MARBLES_PER_PIT,
            first_player: PlayerNumber::One,
        }
    }
}

impl BoardConfig {
    /// Set the number of pits per side.
    #[must_use]
    pub fn with_pits_per_side(mut self, pits: usize) -> Self {
        self.pits_per_side = pits;
        self
    }

    /// Set the starting marbles per pit.
    #[must_use]
    pub fn with_marbles_per_pit(mut self, marbles: u32) -> Self {
        self.marbles_per_pit = marbles;
        self
    }

    /// Set the player who moves first.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerNumber) -> Self {
        self.first_player = player;
        self
    }

    /// Total marbles in play for this layout.
    #[must_use]
    pub fn total_marbles(&self) -> u64 {
        2 * self.pits_per_side as u64 * u64::from(self.marbles_per_pit)
    }

    /// Reject layouts that cannot produce a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.pits_per_side == 0 {
            return Err(CongkakError::InvalidConfig(
                "pits_per_side must be at least 1".to_string(),
            ));
        }
        if self.marbles_per_pit == 0 {
            return Err(CongkakError::InvalidConfig(
                "marbles_per_pit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
