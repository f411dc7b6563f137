//! Parlor rock-paper-scissors-lizard-spock.
//!
//! - **Gesture**: the five throws and who beats whom
//! - **History**: rounds played so far, and the human's recent bias
//! - **Personality**: the computer opponents and how each one throws

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod gesture;
mod history;
mod personality;

pub use gesture::{Gesture, GestureError, RoundOutcome};
pub use history::{History, Round};
pub use personality::Personality;
