//! Player identification and per-player board data.
//!
//! ## PlayerNumber
//!
//! Closed identity tag for the two seats at the board.
//!
//! ## Player
//!
//! A player's row of pits plus their banked score. Rows are persistent
//! vectors, so cloning a `Player` is O(1) and never shares mutation with
//! another holder.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::{CongkakError, Result};

/// Identity of one of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerNumber {
    One,
    Two,
}

impl PlayerNumber {
    /// Both player numbers in seating order.
    pub const ALL: [PlayerNumber; 2] = [PlayerNumber::One, PlayerNumber::Two];

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerNumber::One => PlayerNumber::Two,
            PlayerNumber::Two => PlayerNumber::One,
        }
    }

    /// 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerNumber::One => 0,
            PlayerNumber::Two => 1,
        }
    }
}

impl std::fmt::Display for PlayerNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerNumber::One => write!(f, "Player One"),
            PlayerNumber::Two => write!(f, "Player Two"),
        }
    }
}

/// One player's side of the board.
///
/// `side[0]` is the leftmost pit from the player's own seat. Sowing runs
/// left to right along the row, then into the player's store.
///
/// ## Example
///
/// ```
/// use congkak_engine::core::{Player, PlayerNumber};
///
/// let player = Player::new(PlayerNumber::One, 0, [7, 7, 7]);
/// let richer = player.with_score_added(3).unwrap();
///
/// assert_eq!(player.score, 0);
/// assert_eq!(richer.score, 3);
/// assert_eq!(richer.side, player.side);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Seat identity. Never changes during a game.
    pub number: PlayerNumber,

    /// Marbles banked in this player's store.
    pub score: u32,

    /// Marbles in each pit of this player's row.
    pub side: Vector<u32>,
}

impl Player {
    /// Create a player from a score and any sequence of pit counts.
    pub fn new(number: PlayerNumber, score: u32, side: impl IntoIterator<Item = u32>) -> Self {
        Self {
            number,
            score,
            side: side.into_iter().collect(),
        }
    }

    /// Create a player with `pits` pits of `marbles` each and no score.
    #[must_use]
    pub fn filled(number: PlayerNumber, pits: usize, marbles: u32) -> Self {
        Self {
            number,
            score: 0,
            side: Vector::from(vec![marbles; pits]),
        }
    }

    /// Copy of this player with `amount` more marbles banked.
    ///
    /// Fails with [`CongkakError::ScoreOverflow`] if the score would not fit
    /// in a `u32`.
    pub fn with_score_added(&self, amount: u32) -> Result<Self> {
        let score = self
            .score
            .checked_add(amount)
            .ok_or(CongkakError::ScoreOverflow {
                player: self.number,
                score: self.score,
                amount,
            })?;

        Ok(Self {
            number: self.number,
            score,
            side: self.side.clone(),
        })
    }

    /// Copy of this player with a replacement row.
    #[must_use]
    pub fn with_side(&self, side: Vector<u32>) -> Self {
        Self {
            number: self.number,
            score: self.score,
            side,
        }
    }

    /// Number of pits in the row.
    #[must_use]
    pub fn pit_count(&self) -> usize {
        self.side.len()
    }

    /// Marbles currently sitting in the row.
    #[must_use]
    pub fn marbles_in_pits(&self) -> u32 {
        self.side.iter().sum()
    }

    /// True if every pit in the row is empty.
    #[must_use]
    pub fn is_row_empty(&self) -> bool {
        self.side.iter().all(|&m| m == 0)
    }
}
