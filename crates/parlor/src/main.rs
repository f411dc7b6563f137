//! Parlor - console games.

use anyhow::Result;
use clap::Parser;
use parlor::{Cli, Command, Console, InputClosed, blackjack, logging, rps, tictactoe};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let startup = logging::startup_subscriber(
        logging::env_filter(logging::STARTUP_FILTER),
        io::stderr,
    );
    let mut config = logging::load_config(startup, cli.config.as_deref())?;
    if let Some(name) = cli.name.clone() {
        config = config.with_player_name(name);
    }
    if cli.no_clear {
        config = config.with_clear_screen(false);
    }

    logging::init(&config)?;

    let mut rng = match cli.seed {
        Some(seed) => {
            info!(seed, "Using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout())
        .with_clear_screen(*config.clear_screen())
        .with_pause(config.pause());

    let result = match cli.command {
        Command::Tictactoe => tictactoe::run(&mut console, &mut rng, &config),
        Command::Rps { opponent } => rps::run(&mut console, &mut rng, &config, opponent),
        Command::Blackjack => blackjack::run(&mut console, &mut rng, &config),
    };

    match result {
        Err(e) if e.is::<InputClosed>() => {
            info!("Input closed, leaving the table");
            Ok(())
        }
        other => other,
    }
}
