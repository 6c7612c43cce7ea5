//! Move engine integration tests: sowing, move cases, captures, turn flow.

use congkak_engine::core::{BoardState, CongkakError, Player, PlayerNumber};
use congkak_engine::rules::{
    apply_move, apply_move_detailed, check_victory, Landing, MoveCase, Row,
};
use congkak_engine::simulation::perft;
use congkak_engine::start;

fn board(turn: PlayerNumber, one: (u32, &[u32]), two: (u32, &[u32])) -> BoardState {
    BoardState::from_players(
        turn,
        Player::new(PlayerNumber::One, one.0, one.1.iter().copied()),
        Player::new(PlayerNumber::Two, two.0, two.1.iter().copied()),
    )
    .unwrap()
}

fn side(player: &Player) -> Vec<u32> {
    player.side.iter().copied().collect()
}

// =============================================================================
// Opening Position
// =============================================================================

#[test]
fn test_opening_pit_zero_banks_and_replays() {
    let state = start(None).unwrap();
    let outcome = apply_move_detailed(&state, 0).unwrap();
    let next = &outcome.state;

    assert_eq!(side(&next.player_one), vec![0, 8, 8, 8, 8, 8, 8]);
    assert_eq!(side(&next.player_two), vec![7; 7]);
    assert_eq!(next.player_one.score, 1);
    assert_eq!(next.player_two.score, 0);

    assert_eq!(outcome.case, MoveCase::Free);
    assert_eq!(outcome.landing, Landing::Store);
    assert_eq!(next.turn, Some(PlayerNumber::One));
    assert_eq!(next.n_turns, 1);
    assert!(next.active);
}

#[test]
fn test_opening_other_pits_cross_into_opponent_row() {
    let state = start(None).unwrap();

    for pit in 1..7 {
        let outcome = apply_move_detailed(&state, pit).unwrap();
        let next = &outcome.state;

        // Pits after `pit` gain one, one marble banked, the rest spill over.
        let mut expected_own = vec![7; 7];
        expected_own[pit] = 0;
        for count in expected_own.iter_mut().skip(pit + 1) {
            *count += 1;
        }
        let mut expected_opp = vec![7; 7];
        for count in expected_opp.iter_mut().take(pit) {
            *count += 1;
        }

        assert_eq!(side(&next.player_one), expected_own, "pit {pit}");
        assert_eq!(side(&next.player_two), expected_opp, "pit {pit}");
        assert_eq!(next.player_one.score, 1);
        assert_eq!(outcome.case, MoveCase::Normal);
        assert_eq!(next.turn, Some(PlayerNumber::Two));
        assert_eq!(next.n_turns, 1);
    }
}

#[test]
fn test_free_move_then_opponent() {
    let state = start(None).unwrap();
    let after_free = apply_move(&state, 0).unwrap();
    let after_second = apply_move(&after_free, 1).unwrap();

    // Pit 1 now holds 8: pits 2..6, the store, then opponent pits 0 and 1.
    assert_eq!(side(&after_second.player_one), vec![0, 0, 9, 9, 9, 9, 9]);
    assert_eq!(side(&after_second.player_two), vec![8, 8, 7, 7, 7, 7, 7]);
    assert_eq!(after_second.player_one.score, 2);
    assert_eq!(after_second.turn, Some(PlayerNumber::Two));
}

// =============================================================================
// Move Cases
// =============================================================================

#[test]
fn test_free_keeps_extra_allowance() {
    let state = board(PlayerNumber::Two, (0, &[3, 3, 3]), (0, &[0, 0, 1])).with_n_turns(2);
    let outcome = apply_move_detailed(&state, 2).unwrap();

    assert_eq!(outcome.case, MoveCase::Free);
    assert_eq!(outcome.state.turn, Some(PlayerNumber::Two));
    // One move spent, one refunded.
    assert_eq!(outcome.state.n_turns, 2);
}

#[test]
fn test_normal_resets_allowance_to_one() {
    let state = board(PlayerNumber::One, (0, &[1, 1, 1, 1]), (0, &[1, 1, 1, 1])).with_n_turns(3);
    let outcome = apply_move_detailed(&state, 0).unwrap();

    assert_eq!(outcome.case, MoveCase::Normal);
    assert_eq!(outcome.state.turn, Some(PlayerNumber::One));
    assert_eq!(outcome.state.n_turns, 1);
}

#[test]
fn test_score_overflow_leaves_state_untouched() {
    let state = board(PlayerNumber::Two, (0, &[2, 2]), (u32::MAX, &[0, 2]));
    let snapshot = state.clone();

    // Pit 1 banks one marble, then drops one into player one's pit 0.
    assert_eq!(
        apply_move(&state, 1),
        Err(CongkakError::ScoreOverflow {
            player: PlayerNumber::Two,
            score: u32::MAX,
            amount: 1,
        })
    );
    assert_eq!(state, snapshot);
}

#[test]
fn test_steal_leaves_landing_marble_in_place() {
    // Player two sows pit 0 (2 marbles) into pits 1 and 2; pit 2 was empty.
    let state = board(PlayerNumber::Two, (1, &[9, 4, 6, 2]), (0, &[2, 3, 0, 5]));
    let outcome = apply_move_detailed(&state, 0).unwrap();

    assert_eq!(outcome.case, MoveCase::Steal);
    assert_eq!(
        outcome.landing,
        Landing::Pit {
            row: Row::Mover,
            index: 2,
            prior: 0
        }
    );
    // Mirror of index 2 on a 4-pit board is index 1.
    assert_eq!(outcome.captured, 4);

    let next = outcome.state;
    assert_eq!(side(&next.player_two), vec![0, 4, 1, 5]);
    assert_eq!(next.player_two.score, 4);
    assert_eq!(side(&next.player_one), vec![9, 0, 6, 2]);
    assert_eq!(next.player_one.score, 1);
    assert_eq!(next.turn, Some(PlayerNumber::One));
}

#[test]
fn test_steal_of_empty_mirror_captures_nothing() {
    let state = board(PlayerNumber::One, (0, &[1, 0, 3]), (0, &[2, 0, 2]));
    let outcome = apply_move_detailed(&state, 0).unwrap();

    assert_eq!(outcome.case, MoveCase::Steal);
    assert_eq!(outcome.captured, 0);
    assert_eq!(outcome.state.player_one.score, 0);
    assert_eq!(outcome.state.turn, Some(PlayerNumber::Two));
}

#[test]
fn test_miss_then_forced_double_turn() {
    // Player one sows pit 2 (3 marbles): store, then opponent pits 0 and 1.
    // Pit 1 was empty.
    let state = board(PlayerNumber::One, (0, &[1, 1, 3]), (0, &[2, 0, 2]));
    let outcome = apply_move_detailed(&state, 2).unwrap();

    assert_eq!(outcome.case, MoveCase::Miss);
    assert_eq!(outcome.state.turn, Some(PlayerNumber::Two));
    assert_eq!(outcome.state.n_turns, 2);
    assert_eq!(side(&outcome.state.player_two), vec![3, 1, 2]);
    assert_eq!(outcome.state.player_one.score, 1);

    // Player two's pit 2 banks one and lands in a loaded pit: one move used.
    let second = apply_move_detailed(&outcome.state, 2).unwrap();
    assert_eq!(second.case, MoveCase::Normal);
    assert_eq!(second.state.turn, Some(PlayerNumber::Two));
    assert_eq!(second.state.n_turns, 1);
    assert_eq!(second.state.player_two.score, 1);

    // The last forced move steals and hands the turn back.
    let third = apply_move_detailed(&second.state, 1).unwrap();
    assert_eq!(third.case, MoveCase::Steal);
    assert_eq!(third.captured, 2);
    assert_eq!(third.state.turn, Some(PlayerNumber::One));
    assert_eq!(third.state.n_turns, 1);
    assert_eq!(side(&third.state.player_one), vec![0, 1, 0]);
    assert_eq!(side(&third.state.player_two), vec![3, 0, 1]);
}

#[test]
fn test_multi_lap_hand_banks_each_lap() {
    // Two pits per side, 11 marbles: three passes over the store.
    let state = board(PlayerNumber::One, (0, &[0, 11]), (0, &[0, 0]));
    let outcome = apply_move_detailed(&state, 1).unwrap();

    assert_eq!(outcome.lap_score, 3);
    assert_eq!(outcome.case, MoveCase::Free);
    assert_eq!(side(&outcome.state.player_one), vec![2, 2]);
    assert_eq!(side(&outcome.state.player_two), vec![2, 2]);
    assert_eq!(outcome.state.player_one.score, 3);
}

#[test]
fn test_opponent_emptied_row_keeps_turn_with_mover() {
    let state = board(PlayerNumber::Two, (0, &[0, 3, 0]), (0, &[1, 0, 1]));
    let outcome = apply_move_detailed(&state, 0).unwrap();

    // Lands in player two's empty pit 1; mirror is player one's pit 1.
    assert_eq!(outcome.case, MoveCase::Steal);
    assert!(outcome.state.player_one.is_row_empty());
    assert_eq!(outcome.state.turn, Some(PlayerNumber::Two));
    assert!(check_victory(&outcome.state));
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_invalid_moves_leave_state_untouched() {
    let state = board(PlayerNumber::One, (0, &[0, 2, 2]), (0, &[2, 2, 2]));
    let snapshot = state.clone();

    for pit in [0, 3, 100] {
        let err = apply_move(&state, pit).unwrap_err();
        assert_eq!(
            err,
            CongkakError::InvalidMove {
                pit,
                pits_per_side: 3
            }
        );
    }
    assert_eq!(state, snapshot);
}

#[test]
fn test_move_after_end_game_is_rejected() {
    let ended = congkak_engine::end_game(&start(None).unwrap());
    assert_eq!(
        apply_move(&ended, 0),
        Err(CongkakError::InvalidTurn { turn: None })
    );
}

#[test]
fn test_applying_a_move_does_not_touch_the_input() {
    let state = start(None).unwrap();
    let snapshot = state.clone();

    let next = apply_move(&state, 3).unwrap();

    assert_eq!(state, snapshot);
    assert_ne!(next, state);
}

// =============================================================================
// Whole-tree Counts
// =============================================================================

#[test]
fn test_perft_standard_board() {
    let state = start(None).unwrap();
    let counts: Vec<u64> = (0..5).map(|d| perft(&state, d).unwrap()).collect();
    assert_eq!(counts, vec![1, 7, 48, 309, 2016]);
}

#[test]
fn test_perft_small_board() {
    let state = start(Some("small")).unwrap();
    let counts: Vec<u64> = (0..5).map(|d| perft(&state, d).unwrap()).collect();
    assert_eq!(counts, vec![1, 5, 24, 106, 480]);
}
