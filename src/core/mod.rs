//! Core engine types: players, board state, configuration, errors, RNG.
//!
//! Everything here is a plain value. The rules live in `rules`; this module
//! only describes what a position looks like.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{BoardConfig, STANDARD_MARBLES_PER_PIT, STANDARD_PITS_PER_SIDE};
pub use error::{CongkakError, Result};
pub use player::{Player, PlayerNumber};
pub use rng::{GameRng, GameRngState};
pub use state::BoardState;
