//! Parlor tic-tac-toe - board engine and heuristic opponent.
//!
//! # Architecture
//!
//! - **Square / Mark**: occupancy of a single cell
//! - **Board**: nine squares plus line evaluation (win and threat scans)
//! - **MoveSelector**: stateless one-ply policy (win > block > center > random)
//! - **Match**: validated turn driver used by front ends
//!
//! # Example
//!
//! ```
//! use parlor_tictactoe::{Board, Mark, MoveSelector, Position};
//!
//! let mut board = Board::new();
//! board.place(Position::TopLeft, Mark::PlayerA);
//! board.place(Position::TopCenter, Mark::PlayerA);
//!
//! let choice = MoveSelector.choose(&board, Mark::PlayerA, Mark::PlayerB);
//! assert_eq!(choice, Position::TopRight);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod game;
mod position;
mod rules;
mod selector;
mod types;

pub use board::Board;
pub use game::{Match, MoveError, Status};
pub use position::{Position, PositionError};
pub use rules::{WINNING_LINES, find_threat, is_draw, is_full, winner};
pub use selector::{Decision, MoveSelector, Reason};
pub use types::{Mark, Square};
