//! Simulation on top of the rules: random playouts and perft counts.
//!
//! Nothing here adds rules. Everything goes through `rules::apply_move`, so
//! these functions double as whole-game checks of the engine.

pub mod config;
pub mod perft;
pub mod playout;

pub use config::PlayoutConfig;
pub use perft::perft;
pub use playout::{batch_random_playouts, random_playout, PlayoutResult, PlayoutStats};
