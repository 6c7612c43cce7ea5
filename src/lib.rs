//! # congkak-engine
//!
//! Rules engine for congkak, the two-player Malay mancala game.
//!
//! ## Design Principles
//!
//! 1. **States Are Values**: every operation borrows a `BoardState` and
//!    returns a new one. A state a caller holds never changes underneath it.
//!
//! 2. **Two Players, Two Rows**: the board is fixed to two symmetric rows of
//!    `P` pits, `P` chosen per game via `BoardConfig`.
//!
//! 3. **Deterministic**: the rules have no randomness. Only simulation draws
//!    random numbers, from a seeded `GameRng`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: rows are `im::Vector`s, so the fresh
//!   state built for every move shares structure with its parent.
//!
//! - **Explicit Turn Allowance**: `n_turns` counts consecutive moves for the
//!   player to move; free laps refund a move, misses hand the opponent two.
//!
//! ## Modules
//!
//! - `core`: players, board state, configuration, errors, RNG
//! - `rules`: lifecycle, legality, sowing, and move application
//! - `scenarios`: named starting positions
//! - `simulation`: random playouts and perft counts
//!
//! ## Example
//!
//! ```
//! use congkak_engine::{apply_move, check_victory, check_winner, end_game, start};
//!
//! let mut state = start(None).unwrap();
//! while !check_victory(&state) {
//!     let pit = congkak_engine::legal_moves(&state).unwrap()[0];
//!     state = apply_move(&state, pit).unwrap();
//! }
//! let result = check_winner(&end_game(&state));
//! assert_eq!(
//!     result.player_one.score + result.player_two.score
//!         + result.player_one.marbles_in_pits() + result.player_two.marbles_in_pits(),
//!     98
//! );
//! ```

pub mod core;
pub mod rules;
pub mod scenarios;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, BoardState, CongkakError, GameRng, GameRngState, Player, PlayerNumber, Result,
};

pub use crate::rules::{
    active_player, apply_move, apply_move_detailed, check_move_validity, check_victory,
    check_winner, end_game, legal_moves, opponent_player, start, GameResult, Landing, MoveCase,
    MoveOutcome, MoveValidity,
};

pub use crate::scenarios::{ScenarioSource, ScenarioTable};

pub use crate::simulation::{
    batch_random_playouts, perft, random_playout, PlayoutConfig, PlayoutResult, PlayoutStats,
};
