//! The sowing walk.
//!
//! The board is a ring of two segments: the mover's row, then the
//! opponent's row, then the mover's row again. The mover's store sits on
//! the seam after the mover's row; the opponent's store is skipped.
//!
//! Sowing lifts every marble from the chosen pit and drops one into each
//! position after it. Whenever the walk runs off the end of the mover's row
//! one marble is banked, so a large hand can bank several times.
//!
//! ```text
//!            store(mover) <- seam
//!   mover:    [0][1][2][3][4][5][6]  -->
//!   opponent: [0][1][2][3][4][5][6]  -->  back to mover[0]
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{CongkakError, Result};

/// Which row a segment of the walk covers, relative to the mover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Row {
    Mover,
    Opponent,
}

impl Row {
    /// The segment that follows this one around the ring.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Row::Mover => Row::Opponent,
            Row::Opponent => Row::Mover,
        }
    }
}

/// Where the last marble of a hand came to rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Landing {
    /// Banked in the mover's store, right before the opponent's row.
    Store,

    /// Dropped into a pit.
    Pit {
        row: Row,
        index: usize,
        /// Marbles in the pit before the last marble arrived.
        prior: u32,
    },
}

/// Result of sowing one pit. Rows are fresh copies; the inputs are untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sowing {
    /// Marbles lifted from the chosen pit.
    pub hand: u32,

    pub mover_side: Vector<u32>,

    pub opponent_side: Vector<u32>,

    /// Marbles banked into the mover's store on the way round.
    pub lap_score: u32,

    pub landing: Landing,
}

/// Sow `pit` from the mover's row.
///
/// Fails with [`CongkakError::InvalidMove`] if the pit is out of range or
/// empty. Both rows must have the same length.
pub fn sow(mover_side: &Vector<u32>, opponent_side: &Vector<u32>, pit: usize) -> Result<Sowing> {
    let pits = mover_side.len();
    debug_assert_eq!(pits, opponent_side.len(), "rows must be the same length");

    let hand = match mover_side.get(pit) {
        Some(&marbles) if marbles > 0 => marbles,
        _ => {
            return Err(CongkakError::InvalidMove {
                pit,
                pits_per_side: pits,
            })
        }
    };

    let mut mover = mover_side.clone();
    let mut opponent = opponent_side.clone();
    mover.set(pit, 0);

    let mut remaining = hand as usize;
    let mut row = Row::Mover;
    let mut start = pit + 1;
    let mut lap_score = 0u32;

    // `remaining` is at least 1 at the top of every iteration.
    let landing = loop {
        let side = match row {
            Row::Mover => &mut mover,
            Row::Opponent => &mut opponent,
        };
        let room = pits - start;

        if remaining <= room {
            let end = start + remaining - 1;
            let prior = side[end];
            drop_one_each(side, start, end + 1);
            break Landing::Pit {
                row,
                index: end,
                prior,
            };
        }

        drop_one_each(side, start, pits);
        remaining -= room;

        if row == Row::Mover {
            lap_score += 1;
            remaining -= 1;
            if remaining == 0 {
                break Landing::Store;
            }
        }

        row = row.next();
        start = 0;
    };

    Ok(Sowing {
        hand,
        mover_side: mover,
        opponent_side: opponent,
        lap_score,
        landing,
    })
}

/// Add one marble to each pit in `from..to`.
fn drop_one_each(side: &mut Vector<u32>, from: usize, to: usize) {
    for idx in from..to {
        if let Some(pit) = side.get_mut(idx) {
            *pit += 1;
        }
    }
}
