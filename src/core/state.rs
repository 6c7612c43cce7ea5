//! Board state: the complete snapshot of a game between two moves.
//!
//! ## BoardState
//!
//! - Whether the game is in progress
//! - Whose turn it is and how many consecutive moves they may make
//! - Both players' rows and scores
//!
//! States are values. The rules engine borrows a state, builds a new one
//! and hands it back; a state a caller still holds never changes. Rows are
//! `im` persistent vectors so the copy is O(1).

use serde::{Deserialize, Serialize};

use super::config::BoardConfig;
use super::error::{CongkakError, Result};
use super::player::{Player, PlayerNumber};

/// Snapshot of a congkak game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    /// Game in progress.
    pub active: bool,

    /// Player to move. `None` once the game has ended.
    pub turn: Option<PlayerNumber>,

    /// Consecutive moves the player to move is entitled to, counting the
    /// upcoming one. 1 for an ordinary turn.
    pub n_turns: u32,

    pub player_one: Player,

    pub player_two: Player,
}

impl BoardState {
    /// Create the opening position for a configuration.
    pub fn new_game(config: &BoardConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            active: true,
            turn: Some(config.first_player),
            n_turns: 1,
            player_one: Player::filled(PlayerNumber::One, config.pits_per_side, config.marbles_per_pit),
            player_two: Player::filled(PlayerNumber::Two, config.pits_per_side, config.marbles_per_pit),
        })
    }

    /// Create an in-progress state from explicit players.
    ///
    /// Both rows must have the same, non-zero length.
    pub fn from_players(turn: PlayerNumber, player_one: Player, player_two: Player) -> Result<Self> {
        let state = Self {
            active: true,
            turn: Some(turn),
            n_turns: 1,
            player_one,
            player_two,
        };
        state.check_geometry()?;
        Ok(state)
    }

    /// Set the consecutive-move allowance.
    #[must_use]
    pub fn with_n_turns(mut self, n_turns: u32) -> Self {
        self.n_turns = n_turns;
        self
    }

    /// Pits per side (`P`), taken from player one's row.
    #[must_use]
    pub fn pits_per_side(&self) -> usize {
        self.player_one.pit_count()
    }

    /// Confirm both rows share one non-empty length.
    pub fn check_geometry(&self) -> Result<()> {
        let one = self.player_one.pit_count();
        let two = self.player_two.pit_count();
        if one != two {
            return Err(CongkakError::MismatchedSides {
                player_one: one,
                player_two: two,
            });
        }
        if one == 0 {
            return Err(CongkakError::InvalidConfig(
                "rows must have at least one pit".to_string(),
            ));
        }
        Ok(())
    }

    /// Look up a player by seat.
    #[must_use]
    pub fn player(&self, number: PlayerNumber) -> &Player {
        match number {
            PlayerNumber::One => &self.player_one,
            PlayerNumber::Two => &self.player_two,
        }
    }

    /// Marbles sitting in pits on both rows.
    #[must_use]
    pub fn marbles_on_board(&self) -> u64 {
        u64::from(self.player_one.marbles_in_pits()) + u64::from(self.player_two.marbles_in_pits())
    }

    /// Marbles in pits plus both stores. Constant for a game.
    #[must_use]
    pub fn total_marbles(&self) -> u64 {
        self.marbles_on_board() + u64::from(self.player_one.score) + u64::from(self.player_two.score)
    }
}
