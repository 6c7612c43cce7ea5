//! Move application: sow, classify, capture, hand over the turn.
//!
//! ## Turn allowance
//!
//! `n_turns` counts the moves the player to move may still make, the
//! upcoming one included. Every move spends one:
//!
//! | Case     | Next player                        | Next `n_turns`      |
//! |----------|------------------------------------|---------------------|
//! | `Normal` | opponent if allowance is spent     | 1                   |
//! | `Free`   | mover                              | what's left + 1     |
//! | `Steal`  | as `Normal`, after the capture     | as `Normal`         |
//! | `Miss`   | opponent                           | 1 + forced extra    |
//!
//! Last of all, if the opponent's row is empty the mover keeps the turn.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::core::{BoardState, CongkakError, Player, PlayerNumber, Result};
use crate::rules::lifecycle::resolve_turn;
use crate::rules::sowing::{sow, Landing, Row};
use crate::rules::validity::{check_move_validity, MoveValidity};

/// Extra consecutive moves handed to the opponent after a miss.
pub const MISS_FORCED_TURNS: u32 = 1;

/// How a move ended, which decides its side effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCase {
    Normal,
    /// Last marble banked at the seam: the mover goes again.
    Free,
    /// Last marble in an empty pit on the mover's row: capture across.
    Steal,
    /// Last marble in an empty pit on the opponent's row.
    Miss,
}

/// Classify a landing. A store landing wins over everything else.
#[must_use]
pub fn classify(landing: &Landing) -> MoveCase {
    match *landing {
        Landing::Store => MoveCase::Free,
        Landing::Pit {
            row: Row::Mover,
            prior: 0,
            ..
        } => MoveCase::Steal,
        Landing::Pit {
            row: Row::Opponent,
            prior: 0,
            ..
        } => MoveCase::Miss,
        Landing::Pit { .. } => MoveCase::Normal,
    }
}

/// Who moves next, and how many times in a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnAllocation {
    pub turn: PlayerNumber,
    pub n_turns: u32,
}

/// Allocate the next turn for a move case, before the endgame override.
#[must_use]
pub fn allocate_turn(
    case: MoveCase,
    mover: PlayerNumber,
    opponent: PlayerNumber,
    n_turns: u32,
) -> TurnAllocation {
    let left = n_turns.saturating_sub(1);

    let (turn, n_turns) = match case {
        MoveCase::Normal | MoveCase::Steal if left == 0 => (opponent, 1),
        MoveCase::Normal | MoveCase::Steal => (mover, 1),
        MoveCase::Free => (mover, left + 1),
        MoveCase::Miss => (opponent, 1 + MISS_FORCED_TURNS),
    };

    TurnAllocation { turn, n_turns }
}

/// Everything a single move did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Position after the move.
    pub state: BoardState,

    pub case: MoveCase,

    pub landing: Landing,

    /// Marbles banked while sowing.
    pub lap_score: u32,

    /// Marbles taken from the opponent by a steal.
    pub captured: u32,
}

/// Play `pit` for the player to move and return the new position.
///
/// The input state is never modified. Fails with
/// [`CongkakError::InvalidMove`] for an empty or out-of-range pit, with
/// [`CongkakError::InvalidTurn`] if `turn` names neither player, and with
/// [`CongkakError::ScoreOverflow`] if banking would overflow the score.
///
/// ```
/// use congkak_engine::core::PlayerNumber;
/// use congkak_engine::rules::{apply_move, start};
///
/// let state = start(None).unwrap();
/// let next = apply_move(&state, 0).unwrap();
///
/// // Seven marbles from pit 0: six pits, then the store. Go again.
/// assert_eq!(next.player_one.score, 1);
/// assert_eq!(next.turn, Some(PlayerNumber::One));
/// assert_eq!(state.player_one.side[0], 7);
/// ```
pub fn apply_move(state: &BoardState, pit: usize) -> Result<BoardState> {
    apply_move_detailed(state, pit).map(|outcome| outcome.state)
}

/// Like [`apply_move`], also reporting how the move played out.
#[instrument(skip(state), fields(turn = ?state.turn, n_turns = state.n_turns))]
pub fn apply_move_detailed(state: &BoardState, pit: usize) -> Result<MoveOutcome> {
    state.check_geometry()?;
    let pits = state.pits_per_side();

    if check_move_validity(state, pit)? != MoveValidity::Valid {
        warn!(pit, pits, "rejected move");
        return Err(CongkakError::InvalidMove {
            pit,
            pits_per_side: pits,
        });
    }

    let (mover, opponent) = resolve_turn(state)?;
    let sowing = sow(&mover.side, &opponent.side, pit)?;
    let case = classify(&sowing.landing);

    let mut mover_after = mover
        .with_side(sowing.mover_side)
        .with_score_added(sowing.lap_score)?;
    let mut opponent_after = opponent.with_side(sowing.opponent_side);

    let mut captured = 0;
    if let (MoveCase::Steal, Landing::Pit { index, .. }) = (case, sowing.landing) {
        let (mover_next, opponent_next, taken) = capture(&mover_after, &opponent_after, index)?;
        mover_after = mover_next;
        opponent_after = opponent_next;
        captured = taken;
    }

    let mut next = allocate_turn(case, mover.number, opponent.number, state.n_turns);
    if opponent_after.is_row_empty() && next.turn != mover.number {
        debug!(mover = %mover.number, "opponent row empty, mover keeps the turn");
        next.turn = mover.number;
    }

    debug!(
        ?case,
        lap_score = sowing.lap_score,
        captured,
        next_turn = %next.turn,
        next_n_turns = next.n_turns,
        "move applied"
    );

    let (player_one, player_two) = if mover.number == state.player_one.number {
        (mover_after, opponent_after)
    } else {
        (opponent_after, mover_after)
    };

    Ok(MoveOutcome {
        state: BoardState {
            active: true,
            turn: Some(next.turn),
            n_turns: next.n_turns,
            player_one,
            player_two,
        },
        case,
        landing: sowing.landing,
        lap_score: sowing.lap_score,
        captured,
    })
}

/// Take the opponent pit mirroring `landing_index` into the mover's score.
///
/// The mover's own landing pit keeps its marble.
fn capture(
    mover: &Player,
    opponent: &Player,
    landing_index: usize,
) -> Result<(Player, Player, u32)> {
    let mirror = opponent.pit_count() - 1 - landing_index;
    let taken = opponent.side.get(mirror).copied().unwrap_or(0);

    let mut side = opponent.side.clone();
    side.set(mirror, 0);

    debug!(landing_index, mirror, taken, "steal");
    Ok((mover.with_score_added(taken)?, opponent.with_side(side), taken))
}
