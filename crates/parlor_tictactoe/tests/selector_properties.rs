//! Property-based tests for the board and the move selector.

use parlor_tictactoe::{Board, Mark, MoveSelector, Position, Reason};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A board reached by alternating marks on distinct squares, stopping
/// early if a line is completed.
fn arb_board() -> impl Strategy<Value = Board> {
    (Just(Position::ALL.to_vec()).prop_shuffle(), 0usize..=9).prop_map(|(order, len)| {
        let mut board = Board::new();
        let mut mark = Mark::PlayerA;
        for pos in order.into_iter().take(len) {
            if board.has_winner() {
                break;
            }
            board.place(pos, mark);
            mark = mark.opponent();
        }
        board
    })
}

proptest! {
    #[test]
    fn prop_positions_account_for_every_square(board in arb_board()) {
        let marked = board.count(Mark::PlayerA) + board.count(Mark::PlayerB);
        prop_assert_eq!(board.empty_positions().len() + marked, 9);
        prop_assert_eq!(board.is_full(), board.empty_positions().is_empty());
    }

    #[test]
    fn prop_threat_target_is_empty(board in arb_board()) {
        for mark in [Mark::PlayerA, Mark::PlayerB] {
            if let Some(pos) = board.find_threat_for(mark) {
                prop_assert!(board.square(pos).is_empty());

                let mut after = board.clone();
                after.place(pos, mark);
                prop_assert!(after.has_winner());
            }
        }
    }

    #[test]
    fn prop_selector_picks_an_empty_square(board in arb_board(), seed in any::<u64>()) {
        if board.is_full() {
            return Ok(());
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let decision = MoveSelector.decide_with(&board, Mark::PlayerB, Mark::PlayerA, &mut rng);
        prop_assert!(board.square(decision.position).is_empty());
    }

    #[test]
    fn prop_selector_never_misses_a_win(board in arb_board(), seed in any::<u64>()) {
        if board.has_winner() || board.find_threat_for(Mark::PlayerB).is_none() {
            return Ok(());
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let decision = MoveSelector.decide_with(&board, Mark::PlayerB, Mark::PlayerA, &mut rng);
        prop_assert_eq!(decision.reason, Reason::Win);

        let mut after = board.clone();
        after.place(decision.position, Mark::PlayerB);
        prop_assert_eq!(after.winner(), Some(Mark::PlayerB));
    }
}
