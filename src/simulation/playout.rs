//! Random playouts.
//!
//! A playout picks uniformly among legal pits until one row empties, then
//! freezes the game and scores it. Useful for smoke-testing the rules over
//! many games and as a baseline opponent.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{BoardState, GameRng, PlayerNumber, Result};
use crate::rules::{
    apply_move, check_victory, check_winner, end_game, legal_moves, GameResult,
};

use super::config::PlayoutConfig;

/// How a single playout ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutResult {
    /// Last position reached. Inactive if the game finished.
    pub final_state: BoardState,

    /// Scores at the last position.
    pub result: GameResult,

    /// Moves applied.
    pub moves_played: u32,

    /// False if the move cap was hit first.
    pub finished: bool,
}

/// Aggregate over a batch of playouts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutStats {
    pub games: u32,

    /// Wins indexed by seat (`PlayerNumber::index`).
    pub wins: [u32; 2],

    pub ties: u32,

    /// Games abandoned at the move cap.
    pub unfinished: u32,

    pub total_moves: u64,
}

impl PlayoutStats {
    /// Fold one playout into the totals.
    pub fn record(&mut self, playout: &PlayoutResult) {
        self.games += 1;
        self.total_moves += u64::from(playout.moves_played);

        if !playout.finished {
            self.unfinished += 1;
            return;
        }
        match &playout.result.winner {
            Some(winner) => self.wins[winner.number.index()] += 1,
            None => self.ties += 1,
        }
    }

    /// Wins for one seat.
    #[must_use]
    pub fn wins_for(&self, player: PlayerNumber) -> u32 {
        self.wins[player.index()]
    }

    /// Average game length in moves.
    #[must_use]
    pub fn avg_moves(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_moves as f64 / f64::from(self.games)
        }
    }
}

/// Play random legal moves from `state` until victory or the move cap.
pub fn random_playout(state: &BoardState, config: &PlayoutConfig) -> Result<PlayoutResult> {
    let mut rng = GameRng::new(config.seed);
    playout_with_rng(state, config.max_moves, &mut rng)
}

/// Run `games` playouts from the same position, each on its own fork of
/// the seeded stream.
#[instrument(skip(state, config), fields(seed = config.seed))]
pub fn batch_random_playouts(
    state: &BoardState,
    config: &PlayoutConfig,
    games: u32,
) -> Result<PlayoutStats> {
    let mut root = GameRng::new(config.seed);
    let mut stats = PlayoutStats::default();

    for _ in 0..games {
        let mut rng = root.fork();
        let playout = playout_with_rng(state, config.max_moves, &mut rng)?;
        stats.record(&playout);
    }

    debug!(
        games = stats.games,
        ties = stats.ties,
        unfinished = stats.unfinished,
        "batch complete"
    );
    Ok(stats)
}

fn playout_with_rng(state: &BoardState, max_moves: u32, rng: &mut GameRng) -> Result<PlayoutResult> {
    let mut current = state.clone();
    let mut moves_played = 0u32;

    loop {
        if check_victory(&current) {
            let final_state = end_game(&current);
            return Ok(PlayoutResult {
                result: check_winner(&final_state),
                final_state,
                moves_played,
                finished: true,
            });
        }

        if max_moves > 0 && moves_played >= max_moves {
            debug!(moves_played, "playout hit move cap");
            return Ok(PlayoutResult {
                result: check_winner(&current),
                final_state: current,
                moves_played,
                finished: false,
            });
        }

        let moves = legal_moves(&current)?;
        // A live game with a non-empty mover row always has a legal pit.
        let Some(&pit) = rng.choose(&moves) else {
            let final_state = end_game(&current);
            return Ok(PlayoutResult {
                result: check_winner(&final_state),
                final_state,
                moves_played,
                finished: true,
            });
        };

        current = apply_move(&current, pit)?;
        moves_played += 1;
    }
}
