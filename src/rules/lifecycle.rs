//! Game lifecycle: starting, ending, and judging a game.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{BoardState, CongkakError, Player, Result};
use crate::scenarios::{ScenarioSource, ScenarioTable};

/// Outcome summary for a finished (or any) position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Player with the strictly higher score. `None` on a tie.
    pub winner: Option<Player>,

    pub player_one: Player,

    pub player_two: Player,

    /// Absolute score difference.
    pub margin: u32,
}

impl GameResult {
    /// True if neither player is ahead.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.winner.is_none()
    }
}

/// Start a game from the standard scenario table.
///
/// `None` selects the `"normal"` scenario.
///
/// ```
/// use congkak_engine::rules::start;
///
/// let state = start(None).unwrap();
/// assert!(state.active);
/// assert_eq!(state.pits_per_side(), 7);
/// ```
pub fn start(scenario: Option<&str>) -> Result<BoardState> {
    ScenarioTable::standard().start(scenario)
}

/// Freeze a state: inactive, nobody to move, players unchanged.
#[must_use]
pub fn end_game(state: &BoardState) -> BoardState {
    debug!(
        player_one = state.player_one.score,
        player_two = state.player_two.score,
        "game ended"
    );
    BoardState {
        active: false,
        turn: None,
        n_turns: state.n_turns,
        player_one: state.player_one.clone(),
        player_two: state.player_two.clone(),
    }
}

/// True once either row has been emptied.
#[must_use]
pub fn check_victory(state: &BoardState) -> bool {
    state.player_one.is_row_empty() || state.player_two.is_row_empty()
}

/// Compare scores. Ignores `active`; meant to be called once victory holds.
#[must_use]
pub fn check_winner(state: &BoardState) -> GameResult {
    let one = state.player_one.score;
    let two = state.player_two.score;

    let winner = match one.cmp(&two) {
        std::cmp::Ordering::Greater => Some(state.player_one.clone()),
        std::cmp::Ordering::Less => Some(state.player_two.clone()),
        std::cmp::Ordering::Equal => None,
    };

    GameResult {
        winner,
        player_one: state.player_one.clone(),
        player_two: state.player_two.clone(),
        margin: one.abs_diff(two),
    }
}

/// The player whose turn it is.
///
/// Fails with [`CongkakError::InvalidTurn`] if `turn` is empty or names
/// neither player.
pub fn active_player(state: &BoardState) -> Result<&Player> {
    let (active, _) = resolve_turn(state)?;
    Ok(active)
}

/// The player waiting for their turn.
pub fn opponent_player(state: &BoardState) -> Result<&Player> {
    let (_, opponent) = resolve_turn(state)?;
    Ok(opponent)
}

/// Resolve `turn` into (mover, opponent).
///
/// A forged state where both players carry the same number resolves to
/// neither, since the opponent would be ambiguous.
pub(crate) fn resolve_turn(state: &BoardState) -> Result<(&Player, &Player)> {
    let one = &state.player_one;
    let two = &state.player_two;

    match state.turn {
        Some(turn) if one.number != two.number && turn == one.number => Ok((one, two)),
        Some(turn) if one.number != two.number && turn == two.number => Ok((two, one)),
        turn => {
            warn!(?turn, "turn does not resolve to a player");
            Err(CongkakError::InvalidTurn { turn })
        }
    }
}
