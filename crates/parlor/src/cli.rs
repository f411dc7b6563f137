//! Command-line interface for parlor.

use clap::{Parser, Subcommand};
use parlor_rps::Personality;
use std::path::PathBuf;

/// Parlor - three console games against the computer
#[derive(Parser, Debug)]
#[command(name = "parlor")]
#[command(
    about = "Tic-tac-toe, rock-paper-scissors-lizard-spock and twenty-one",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./parlor.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for every random choice, for reproducible sessions
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Player name (skips the name prompt)
    #[arg(long, global = true)]
    pub name: Option<String>,

    /// Never clear the terminal
    #[arg(long, global = true)]
    pub no_clear: bool,

    /// Game to play
    #[command(subcommand)]
    pub command: Command,
}

/// Available games
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Tic-tac-toe, first to five matches
    #[command(alias = "ttt")]
    Tictactoe,

    /// Rock-paper-scissors-lizard-spock, first to five rounds
    Rps {
        /// Opponent (R2D2, Hal, Chappie, Furby or Bot); random when omitted
        #[arg(long)]
        opponent: Option<Personality>,
    },

    /// Twenty-one against the dealer
    #[command(alias = "twenty-one")]
    Blackjack,
}
