//! Error types for the rules engine.
//!
//! Every error is a contract violation by the caller (or a corrupted
//! state). None are transient; a failed call never changes the state
//! it was given.

use super::player::PlayerNumber;

/// Errors raised by lifecycle and move operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CongkakError {
    #[error("invalid move: pit {pit} is out of range or empty (board has {pits_per_side} pits per side)")]
    InvalidMove { pit: usize, pits_per_side: usize },

    #[error("invalid turn: {turn:?} does not match either player")]
    InvalidTurn { turn: Option<PlayerNumber> },

    #[error("unknown scenario: '{0}'")]
    UnknownScenario(String),

    #[error("invalid board configuration: {0}")]
    InvalidConfig(String),

    #[error("mismatched sides: player one has {player_one} pits, player two has {player_two}")]
    MismatchedSides { player_one: usize, player_two: usize },

    #[error("score overflow: {player} cannot bank {amount} more on top of {score}")]
    ScoreOverflow {
        player: PlayerNumber,
        score: u32,
        amount: u32,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CongkakError>;
