//! Move legality.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BoardState, Result};
use crate::rules::lifecycle::active_player;

/// Whether a pit may be sown by the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveValidity {
    Valid,
    /// Pit out of range or empty.
    Pit,
}

/// Check a pit choice for the player to move.
///
/// The range check comes first, so an oversized index never touches the
/// row. Fails only if the state's `turn` cannot be resolved.
pub fn check_move_validity(state: &BoardState, pit: usize) -> Result<MoveValidity> {
    let player = active_player(state)?;

    let validity = match player.side.get(pit) {
        Some(&marbles) if marbles > 0 => MoveValidity::Valid,
        _ => MoveValidity::Pit,
    };
    Ok(validity)
}

/// Pits the player to move may sow, in ascending order.
///
/// Inline storage covers the standard seven-pit board.
pub fn legal_moves(state: &BoardState) -> Result<SmallVec<[usize; 8]>> {
    let player = active_player(state)?;
    Ok(player
        .side
        .iter()
        .enumerate()
        .filter(|(_, marbles)| **marbles > 0)
        .map(|(pit, _)| pit)
        .collect())
}
