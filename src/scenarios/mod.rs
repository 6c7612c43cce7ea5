//! Named starting positions.
//!
//! `ScenarioSource` is the seam: anything that can map a key to an opening
//! `BoardState` can start a game. `ScenarioTable` is the in-memory table the
//! crate ships with.

mod table;

pub use table::{ScenarioSource, ScenarioTable, NORMAL_SCENARIO, SMALL_SCENARIO};
