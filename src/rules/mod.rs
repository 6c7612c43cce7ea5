//! The rules of congkak.
//!
//! - `lifecycle`: start and end a game, detect victory, pick the winner
//! - `validity`: which pits may be sown
//! - `sowing`: the marble walk around the ring
//! - `moves`: classification, captures, and turn allocation
//!
//! Every operation borrows a `BoardState` and returns a new one; nothing
//! here mutates a state the caller still holds.

pub mod lifecycle;
pub mod moves;
pub mod sowing;
pub mod validity;

pub use lifecycle::{
    active_player, check_victory, check_winner, end_game, opponent_player, start, GameResult,
};
pub use moves::{
    allocate_turn, apply_move, apply_move_detailed, classify, MoveCase, MoveOutcome,
    TurnAllocation, MISS_FORCED_TURNS,
};
pub use sowing::{sow, Landing, Row, Sowing};
pub use validity::{check_move_validity, legal_moves, MoveValidity};
