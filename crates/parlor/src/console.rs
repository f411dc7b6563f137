//! Line-oriented terminal I/O shared by every game.

use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, instrument, trace};

/// Input ended before the game did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("input closed")]
pub struct InputClosed;

/// Prompts, answers and screen control over any reader/writer pair.
///
/// Generic so tests can drive a whole session from a `Cursor` and read
/// back what was printed.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
    pause: Duration,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console that never clears the screen or pauses.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
            pause: Duration::ZERO,
        }
    }

    /// Enables or disables screen clearing.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Sets the delay used by [`Console::pause`].
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Everything written so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Prints one line.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}").context("Failed to write to terminal")
    }

    /// Prints an empty line.
    pub fn blank(&mut self) -> Result<()> {
        self.say("")
    }

    /// Reads one line without its line ending.
    ///
    /// Fails with [`InputClosed`] at end of input.
    pub fn read_line(&mut self) -> Result<String> {
        self.output.flush().context("Failed to flush terminal")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from terminal")?;
        if read == 0 {
            debug!("Input closed");
            return Err(InputClosed.into());
        }

        let answer = line.trim_end_matches(['\r', '\n']).to_string();
        trace!(answer = %answer, "Read line");
        Ok(answer)
    }

    /// Prints `question` and reads the answer.
    pub fn prompt(&mut self, question: impl Display) -> Result<String> {
        self.say(question)?;
        self.read_line()
    }

    /// Prints `question`, then reads answers until `parse` accepts one.
    ///
    /// Each rejection prints the parser's error before reading again.
    #[instrument(skip_all)]
    pub fn ask<T, E, F>(&mut self, question: impl Display, mut parse: F) -> Result<T>
    where
        E: Display,
        F: FnMut(&str) -> Result<T, E>,
    {
        self.say(question)?;
        loop {
            let answer = self.read_line()?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(answer = %answer, error = %e, "Answer rejected");
                    self.say(e)?;
                }
            }
        }
    }

    /// Yes/no question. Only `y` or `n` is accepted, in either case.
    pub fn confirm(&mut self, question: impl Display, rejection: &str) -> Result<bool> {
        self.ask(question, |answer| match answer.trim().to_ascii_lowercase().as_str() {
            "y" => Ok(true),
            "n" => Ok(false),
            _ => Err(rejection.to_string()),
        })
    }

    /// Waits for the player to press enter.
    pub fn wait_for_enter(&mut self, message: impl Display) -> Result<()> {
        self.say(message)?;
        self.read_line().map(|_| ())
    }

    /// Sleeps for the configured pause.
    pub fn pause(&mut self) {
        if !self.pause.is_zero() {
            std::thread::sleep(self.pause);
        }
    }

    /// Clears the terminal when clearing is enabled.
    pub fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))
                .context("Failed to clear terminal")?;
        }
        Ok(())
    }
}

/// Joins items as `"1, 2 or 3"`.
pub fn joinor<T: Display>(items: &[T], last_word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let head = init
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{head} {last_word} {last}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(console.output()).into_owned()
    }

    #[test]
    fn test_ask_retries_until_valid() {
        let mut console = console("abc\n-1\n42\n");
        let value: u32 = console
            .ask("Pick a number", |s| s.trim().parse::<u32>().map_err(|_| "Not a number"))
            .unwrap();
        assert_eq!(value, 42);

        let out = printed(&console);
        assert_eq!(out.matches("Pick a number").count(), 1);
        assert_eq!(out.matches("Not a number").count(), 2);
    }

    #[test]
    fn test_confirm() {
        let mut console = console("maybe\nY\n n \n");
        assert!(console.confirm("Again?", "Sorry, must be y or n").unwrap());
        assert!(!console.confirm("Again?", "Sorry, must be y or n").unwrap());
        assert_eq!(printed(&console).matches("Sorry, must be y or n").count(), 1);
    }

    #[test]
    fn test_confirm_wants_a_single_letter() {
        let mut console = console("nah, yes\nyes\nno\ny\n");
        assert!(console.confirm("Again?", "Sorry, must be y or n").unwrap());
        assert_eq!(printed(&console).matches("Sorry, must be y or n").count(), 3);
    }

    #[test]
    fn test_end_of_input() {
        let mut console = console("");
        let err = console.read_line().unwrap_err();
        assert!(err.is::<InputClosed>());
    }

    #[test]
    fn test_crlf_is_stripped() {
        let mut console = console("Ada\r\n");
        assert_eq!(console.read_line().unwrap(), "Ada");
    }

    #[test]
    fn test_clear_disabled_writes_nothing() {
        let mut console = console("");
        console.clear().unwrap();
        assert!(console.output().is_empty());
    }

    #[test]
    fn test_joinor() {
        assert_eq!(joinor::<u8>(&[], "or"), "");
        assert_eq!(joinor(&[5], "or"), "5");
        assert_eq!(joinor(&[1, 2], "or"), "1 or 2");
        assert_eq!(joinor(&[1, 2, 3], "or"), "1, 2 or 3");
    }
}
