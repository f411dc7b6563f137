//! Console tic-tac-toe: the human against the heuristic opponent.

use crate::config::ParlorConfig;
use crate::console::{Console, joinor};
use crate::scoreboard::{Scoreboard, Side};
use anyhow::Result;
use derive_new::new;
use parlor_tictactoe::{Board, Mark, Match, MoveSelector, Position, Status};
use rand::Rng;
use rand::seq::SliceRandom;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Matches needed to win the game.
pub const WINNING_SCORE: u32 = 5;

/// Names the computer is drawn from.
pub const COMPUTER_NAMES: [&str; 4] = ["Chappie", "R2D2", "Hal", "Bender"];

/// A participant and the character drawn for their mark.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Seat {
    /// Display name.
    pub name: String,
    /// Character drawn on the board.
    pub glyph: char,
}

/// The glyph the computer takes given the human's choice.
pub fn computer_glyph(human: char) -> char {
    if human == 'O' { 'X' } else { 'O' }
}

/// Draws the board with each side's glyph; empty squares stay blank.
pub fn render_board(board: &Board, human: char, computer: char) -> String {
    let glyph = |pos: Position| match board.square(pos).value() {
        Mark::PlayerA => human,
        Mark::PlayerB => computer,
        Mark::Empty => ' ',
    };

    let rows: Vec<String> = Position::ALL
        .chunks(3)
        .map(|row| {
            [
                "     |     |".to_string(),
                format!("  {}  |  {}  |  {}", glyph(row[0]), glyph(row[1]), glyph(row[2])),
                "     |     |".to_string(),
            ]
            .join("\n")
        })
        .collect();

    rows.join("\n-----+-----+-----\n")
}

/// Plays tic-tac-toe until the human declines a rematch.
#[instrument(skip_all)]
pub fn run<R, W, G>(console: &mut Console<R, W>, rng: &mut G, config: &ParlorConfig) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    console.clear()?;
    console.say("Welcome to Tic Tac Toe!")?;
    console.blank()?;

    let human_name = match config.player_name() {
        Some(name) => name.clone(),
        None => console.prompt("What is your name?")?,
    };
    let glyph = console.ask(
        "What character would you like to use as a marker?",
        |answer| {
            let mut chars = answer.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if !c.is_whitespace() => Ok(c),
                _ => Err("Please only type one character."),
            }
        },
    )?;

    let human = Seat::new(human_name, glyph);
    let computer_name = COMPUTER_NAMES.choose(rng).copied().unwrap_or("Computer");
    let computer = Seat::new(computer_name.to_string(), computer_glyph(glyph));
    info!(human = %human.name, computer = %computer.name, "Tic-tac-toe session started");

    let mut table = Table {
        human,
        computer,
        game: Match::new(Mark::PlayerA),
        score: Scoreboard::new(),
    };

    loop {
        table.play_until_champion(console, rng)?;

        if !console.confirm("Would you like to play again?", "Sorry, must be y or n")? {
            break;
        }
        table.score.reset();
        table.reset_match(console)?;
        console.say("Let's play again!")?;
    }

    console.say("Thanks for playing!")?;
    Ok(())
}

struct Table {
    human: Seat,
    computer: Seat,
    game: Match,
    score: Scoreboard,
}

impl Table {
    fn play_until_champion<R, W, G>(
        &mut self,
        console: &mut Console<R, W>,
        rng: &mut G,
    ) -> Result<()>
    where
        R: BufRead,
        W: Write,
        G: Rng + ?Sized,
    {
        loop {
            self.display_board(console)?;
            while !self.game.is_over() {
                self.current_player_moves(console, rng)?;
                if !self.game.is_over() && self.game.to_move() == Mark::PlayerA {
                    console.clear()?;
                    self.display_board(console)?;
                }
            }

            self.display_result(console)?;
            if let Some(side) = self.score.champion(WINNING_SCORE) {
                let name = match side {
                    Side::Human => &self.human.name,
                    Side::Computer => &self.computer.name,
                };
                console.say(format!("{name} wins the game!"))?;
                return Ok(());
            }

            console.wait_for_enter("Press enter to play the next match.")?;
            self.reset_match(console)?;
        }
    }

    /// The side that did not make the last move opens the next match.
    fn reset_match<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        let first = self.game.to_move();
        debug!(?first, "Resetting match");
        self.game.reset(first);
        console.clear()
    }

    fn current_player_moves<R, W, G>(
        &mut self,
        console: &mut Console<R, W>,
        rng: &mut G,
    ) -> Result<()>
    where
        R: BufRead,
        W: Write,
        G: Rng + ?Sized,
    {
        let position = match self.game.to_move() {
            Mark::PlayerA => self.human_chooses(console)?,
            _ => MoveSelector.choose_with(self.game.board(), Mark::PlayerB, Mark::PlayerA, rng),
        };
        self.game.play(position)?;
        Ok(())
    }

    fn human_chooses<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<Position> {
        if !self.score.is_blank() {
            self.display_score(console)?;
        }

        let open = self.game.board().empty_positions();
        console.ask(format!("Choose a square: {}", joinor(&open, "or")), |answer| {
            answer
                .parse::<Position>()
                .ok()
                .filter(|pos| open.contains(pos))
                .ok_or("Sorry, that's not a valid choice.")
        })
    }

    fn display_board<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.say(format!(
            "{}, you are {}. {} is {}.",
            self.human.name, self.human.glyph, self.computer.name, self.computer.glyph
        ))?;
        console.blank()?;
        console.say(render_board(self.game.board(), self.human.glyph, self.computer.glyph))?;
        console.blank()
    }

    fn display_score<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.say(format!(
            "Score: {} {} | {} {}",
            self.human.name,
            self.score.human(),
            self.computer.name,
            self.score.computer()
        ))
    }

    fn display_result<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        console.clear()?;
        self.display_board(console)?;

        match self.game.status() {
            Status::Won(Mark::PlayerA) => {
                console.say("You won!")?;
                self.score.record(Side::Human);
            }
            Status::Won(_) => {
                console.say(format!("{} won!", self.computer.name))?;
                self.score.record(Side::Computer);
            }
            Status::Draw | Status::InProgress => console.say("It's a tie.")?,
        }
        self.display_score(console)
    }
}
