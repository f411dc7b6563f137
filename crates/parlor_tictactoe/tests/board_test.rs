//! Board and selector scenarios.

use parlor_tictactoe::{Board, Mark, MoveSelector, Position, WINNING_LINES};

const A: Mark = Mark::PlayerA;
const B: Mark = Mark::PlayerB;

fn board_from(cells: &[(u8, Mark)]) -> Board {
    let mut board = Board::new();
    for &(number, mark) in cells {
        board.place(Position::from_number(number).unwrap(), mark);
    }
    board
}

#[test]
fn test_row_completion() {
    let board = board_from(&[(1, A), (2, A)]);
    assert_eq!(MoveSelector.choose(&board, A, B), Position::TopRight);
}

#[test]
fn test_diagonal_block() {
    let board = board_from(&[(1, B), (5, B)]);
    assert_eq!(MoveSelector.choose(&board, A, B), Position::BottomRight);
}

#[test]
fn test_center_preference() {
    let board = board_from(&[(1, A)]);
    assert_eq!(MoveSelector.choose(&board, A, B), Position::Center);
}

#[test]
fn test_draw_board() {
    // A B A / A B B / B A A
    let board = board_from(&[
        (1, A),
        (2, B),
        (3, A),
        (4, A),
        (5, B),
        (6, B),
        (7, B),
        (8, A),
        (9, A),
    ]);
    assert_eq!(board.winner(), None);
    assert!(!board.has_winner());
    assert!(board.is_full());
    assert!(board.empty_positions().is_empty());
}

#[test]
fn test_every_line_shape_is_completed() {
    for line in WINNING_LINES {
        for gap in 0..3 {
            let mut board = Board::new();
            for (i, &pos) in line.iter().enumerate() {
                if i != gap {
                    board.place(pos, B);
                }
            }
            assert_eq!(board.find_threat_for(B), Some(line[gap]), "line {:?}", line);
            assert_eq!(MoveSelector.choose(&board, B, A), line[gap], "line {:?}", line);
        }
    }
}

#[test]
fn test_every_line_shape_is_blocked() {
    for line in WINNING_LINES {
        for gap in 0..3 {
            let mut board = Board::new();
            for (i, &pos) in line.iter().enumerate() {
                if i != gap {
                    board.place(pos, A);
                }
            }
            assert_eq!(MoveSelector.choose(&board, B, A), line[gap], "line {:?}", line);
        }
    }
}

#[test]
fn test_every_full_line_is_a_win() {
    for line in WINNING_LINES {
        let mut board = Board::new();
        for pos in line {
            board.place(pos, A);
        }
        assert_eq!(board.winner(), Some(A));
    }
}

#[test]
fn test_no_threat_without_two_in_a_line() {
    let board = board_from(&[(1, A), (6, A), (8, A)]);
    assert_eq!(board.find_threat_for(A), None);
}
