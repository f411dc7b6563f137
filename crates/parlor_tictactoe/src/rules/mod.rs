//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Every scan walks
//! [`WINNING_LINES`] in the same fixed order (rows, columns, diagonals)
//! and reports the first line that qualifies.

mod draw;
mod lines;
mod threat;
mod win;

pub use draw::{is_draw, is_full};
pub use lines::WINNING_LINES;
pub use threat::find_threat;
pub use win::winner;
