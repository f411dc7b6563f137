//! Parlor - console front end for three games against the computer.
//!
//! # Architecture
//!
//! - **Console**: prompts and answers over any `BufRead`/`Write` pair
//! - **Config**: `parlor.toml` preferences and the command line
//! - **Logging**: tracing set-up, including while the config is read
//! - **Games**: one controller per game (`tictactoe`, `rps`, `blackjack`),
//!   each driving the rules from its own crate
//!
//! # Example
//!
//! ```no_run
//! use parlor::{Console, ParlorConfig};
//! use rand::SeedableRng;
//!
//! # fn example() -> anyhow::Result<()> {
//! let stdin = std::io::stdin();
//! let mut console = Console::new(stdin.lock(), std::io::stdout());
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! parlor::tictactoe::run(&mut console, &mut rng, &ParlorConfig::default())?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod scoreboard;

pub mod blackjack;
pub mod logging;
pub mod rps;
pub mod tictactoe;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, ParlorConfig};
pub use console::{Console, InputClosed, joinor};
pub use scoreboard::{Scoreboard, Side};
