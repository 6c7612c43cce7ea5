//! Move-tree counting.
//!
//! `perft` counts the move sequences of a given length from a position. A
//! finished game is a leaf at whatever depth it is reached. The numbers pin
//! the move generator and move engine down: any change to sowing, turn
//! allocation or legality shows up as a different count.

use crate::core::{BoardState, Result};
use crate::rules::{apply_move, check_victory, legal_moves};

/// Count positions reachable in exactly `depth` moves, treating finished
/// games as leaves.
pub fn perft(state: &BoardState, depth: u32) -> Result<u64> {
    if depth == 0 || check_victory(state) {
        return Ok(1);
    }

    let mut nodes = 0;
    for pit in legal_moves(state)? {
        let next = apply_move(state, pit)?;
        nodes += perft(&next, depth - 1)?;
    }
    Ok(nodes)
}
