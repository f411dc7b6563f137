//! Whole sessions driven from scripted input.

use parlor::{Console, InputClosed, ParlorConfig, blackjack, rps, tictactoe};
use parlor_rps::Personality;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;

type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

fn scripted(input: &str) -> ScriptedConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn transcript(console: &ScriptedConsole) -> String {
    String::from_utf8_lossy(console.output()).into_owned()
}

fn config() -> ParlorConfig {
    ParlorConfig::default()
        .with_player_name("Ada")
        .with_clear_screen(false)
}

#[test]
fn test_rps_against_furby() {
    let input = format!("dynamite\n{}n\n", "paper\n".repeat(5));
    let mut console = scripted(&input);
    let mut rng = StdRng::seed_from_u64(1);

    rps::run(&mut console, &mut rng, &config(), Some(Personality::Furby)).unwrap();

    let out = transcript(&console);
    assert!(out.contains("Welcome to Rock, Paper, Scissors, Lizard, Spock!"));
    assert!(out.contains("Sorry, invalid choice."));
    assert_eq!(out.matches("Furby chose: rock").count(), 5);
    assert!(out.contains("Ada wins the game!"));
    assert!(out.contains("Ada: 5 | Furby: 0"));
    assert!(out.contains("Goodbye!"));
}

#[test]
fn test_tictactoe_heuristic_wins_five_matches() {
    // Ada opens 1 and 2 every match; the computer takes the center,
    // blocks at 3 and completes 3-5-7. The invalid "5" is re-asked.
    let mut input = String::from("X\n1\n2\n5\n9\n\n");
    input.push_str(&"1\n2\n9\n\n".repeat(3));
    input.push_str("1\n2\n9\nn\n");

    let mut console = scripted(&input);
    let mut rng = StdRng::seed_from_u64(2);

    tictactoe::run(&mut console, &mut rng, &config()).unwrap();

    let out = transcript(&console);
    assert!(out.contains("Ada, you are X."));
    assert!(out.contains("Choose a square: 1, 2, 3, 4, 5, 6, 7, 8 or 9"));
    assert!(out.contains("Choose a square: 2, 3, 4, 6, 7, 8 or 9"));
    assert!(out.contains("Sorry, that's not a valid choice."));
    assert!(!out.contains("You won!"));
    assert!(!out.contains("It's a tie."));
    assert!(out.contains("wins the game!"));

    let final_score = out
        .lines()
        .filter(|line| line.starts_with("Score: Ada "))
        .last()
        .unwrap();
    assert!(final_score.starts_with("Score: Ada 0 | "));
    assert!(final_score.ends_with(" 5"));
    assert!(out.ends_with("Thanks for playing!\n"));
}

#[test]
fn test_tictactoe_computer_opens_after_human_draws() {
    // Every computer move is forced until its fourth, which is a coin
    // flip between 8 and 9. "8" is either played or re-asked, and the
    // spare lines land on the next-match pause or get re-asked.
    let mut console = scripted("X\n1\n2\n7\n6\n8\n9\n\n");
    let mut rng = StdRng::seed_from_u64(5);

    let err = tictactoe::run(&mut console, &mut rng, &config()).unwrap_err();
    assert!(err.is::<InputClosed>());

    let out = transcript(&console);
    assert!(out.contains("It's a tie."));
    assert!(!out.contains("You won!"));
    assert!(out.contains("Press enter to play the next match."));

    let (first_match, second_match) = out
        .split_once("Press enter to play the next match.")
        .unwrap();
    assert!(first_match.contains("Choose a square: 1, 2, 3, 4, 5, 6, 7, 8 or 9"));
    // The computer took the center before Ada's first turn of the rematch.
    assert!(second_match.contains("Choose a square: 1, 2, 3, 4, 6, 7, 8 or 9"));
    assert!(!second_match.contains("Choose a square: 1, 2, 3, 4, 5, 6, 7, 8 or 9"));
}

#[test]
fn test_tictactoe_rejects_long_markers() {
    let mut console = scripted("XO\n");
    let mut rng = StdRng::seed_from_u64(3);

    let err = tictactoe::run(&mut console, &mut rng, &config()).unwrap_err();
    assert!(err.is::<InputClosed>());
    assert!(transcript(&console).contains("Please only type one character."));
}

#[test]
fn test_blackjack_single_hand() {
    let mut console = scripted("0\n100\n\n0\n500\n10\nstay\nn\n");
    let mut rng = StdRng::seed_from_u64(4);

    blackjack::run(&mut console, &mut rng, &config()).unwrap();

    let out = transcript(&console);
    assert!(out.contains("I know you have money."));
    assert!(out.contains("Welcome to Twenty-One, Ada!"));
    assert!(out.contains("[facedown card]"));
    assert!(out.contains("Please enter an amount greater than 0."));
    assert!(out.contains("Please enter an amount you can afford (you have $100)."));
    assert!(out.contains("Ada decided to stay!"));
    assert!(
        out.contains("You are leaving with $90.")
            || out.contains("Great job! You are leaving with $110.")
    );
    assert!(out.ends_with("Thank you for playing, Ada!\n"));
}

#[test]
fn test_blackjack_bust_skips_dealer() {
    // Hitting forever always busts; the spare "hit" lines are then
    // rejected by the continue prompt until the final "n".
    let input = format!("100\n\n10\n{}n\n", "hit\n".repeat(25));
    let mut console = scripted(&input);
    let mut rng = StdRng::seed_from_u64(6);

    blackjack::run(&mut console, &mut rng, &config()).unwrap();

    let out = transcript(&console);
    assert!(out.contains("Ada decided to hit!"));
    assert!(!out.contains("Ada decided to stay!"));
    assert!(out.contains("Ada busted!"));
    assert!(out.contains("Total: ") && out.contains(", Busted!"));
    assert!(!out.contains("is thinking..."));
    assert!(!out.contains("Determining winner..."));
    assert!(!out.contains("Ada wins!"));
    assert!(out.contains("Please type 'y' or 'n'."));
    assert!(out.contains("You are leaving with $90."));
    assert!(out.ends_with("Thank you for playing, Ada!\n"));
}
