//! Console rock-paper-scissors-lizard-spock.

use crate::config::ParlorConfig;
use crate::console::{Console, joinor};
use crate::scoreboard::{Scoreboard, Side};
use anyhow::Result;
use parlor_rps::{Gesture, History, Personality, Round, RoundOutcome};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Rounds needed to win the game.
pub const WINNING_SCORE: u32 = 5;

fn title() -> String {
    Gesture::ALL
        .iter()
        .map(|g| {
            let name = g.to_string();
            let mut chars = name.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => name,
            }
        })
        .collect::<Vec<String>>()
        .join(", ")
}

/// Plays until the human declines a rematch. A random opponent is drawn
/// when `opponent` is `None`.
#[instrument(skip(console, rng, config))]
pub fn run<R, W, G>(
    console: &mut Console<R, W>,
    rng: &mut G,
    config: &ParlorConfig,
    opponent: Option<Personality>,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    console.say(format!("Welcome to {}!", title()))?;

    let human = match config.player_name() {
        Some(name) => name.clone(),
        None => console.ask("What's your name?", |answer| {
            let name = answer.trim();
            if name.is_empty() {
                Err("Sorry, must enter a value.")
            } else {
                Ok(name.to_string())
            }
        })?,
    };
    let computer = opponent.unwrap_or_else(|| Personality::random(rng));
    info!(%human, %computer, "Rock-paper-scissors session started");

    let mut history = History::new();
    let mut score = Scoreboard::new();
    let choices = joinor(&Gesture::ALL, "or");

    loop {
        let champion = loop {
            console.blank()?;
            let throw = console.ask(format!("{human}, please choose {choices}:"), |answer| {
                Gesture::parse(answer).map_err(|_| "Sorry, invalid choice.")
            })?;
            let round = Round {
                human: throw,
                computer: computer.throw(&history, rng),
            };
            history.record(round);

            console.clear()?;
            console.say(format!("{human} chose: {}", round.human))?;
            console.say(format!("{computer} chose: {}", round.computer))?;

            match round.outcome() {
                RoundOutcome::Win => {
                    console.say(format!("{human} won!"))?;
                    score.record(Side::Human);
                }
                RoundOutcome::Loss => {
                    console.say(format!("{computer} won!"))?;
                    score.record(Side::Computer);
                }
                RoundOutcome::Tie => console.say("It's a tie!")?,
            }
            display_score(console, &human, computer, &score)?;

            if let Some(side) = score.champion(WINNING_SCORE) {
                break side;
            }
        };

        let winner = match champion {
            Side::Human => human.clone(),
            Side::Computer => computer.to_string(),
        };
        console.blank()?;
        console.say(format!("{winner} wins the game!"))?;
        display_score(console, &human, computer, &score)?;

        if !console.confirm("Would you like to play again? (y/n)", "Sorry, must be 'y' or 'n'.")? {
            break;
        }
        score.reset();
    }

    console.say(format!("Thanks for playing {}. Goodbye!", title()))?;
    Ok(())
}

fn display_score<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    human: &str,
    computer: Personality,
    score: &Scoreboard,
) -> Result<()> {
    console.say(format!(
        "{human}: {} | {computer}: {}",
        score.human(),
        score.computer()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title() {
        assert_eq!(title(), "Rock, Paper, Scissors, Lizard, Spock");
    }
}
