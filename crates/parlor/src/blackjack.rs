//! Console twenty-one against a computer dealer.

use crate::config::ParlorConfig;
use crate::console::Console;
use anyhow::Result;
use parlor_blackjack::{DEALER_NAMES, Deck, Hand, Standing, Wallet, Winner, dealer_hits, settle};
use rand::Rng;
use rand::seq::SliceRandom;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Hit,
    Stay,
}

struct Table {
    player: String,
    dealer: String,
    deck: Deck,
    player_hand: Hand,
    dealer_hand: Hand,
    wallet: Wallet,
}

/// Plays hands until the player is broke or walks away.
#[instrument(skip_all)]
pub fn run<R, W, G>(console: &mut Console<R, W>, rng: &mut G, config: &ParlorConfig) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let player = match config.player_name() {
        Some(name) => name.clone(),
        None => capitalize(console.prompt("What is your name?")?.trim()),
    };
    let cash = console.ask(format!("{player}, how much cash do you have?"), |answer| {
        match answer.trim().parse::<u64>() {
            Ok(cash) if cash > 0 => Ok(cash),
            _ => Err("I know you have money. Really, how much do you have?"),
        }
    })?;
    let dealer = DEALER_NAMES.choose(rng).copied().unwrap_or("Dealer").to_string();

    let mut table = Table {
        player,
        dealer,
        deck: Deck::new(rng),
        player_hand: Hand::new(),
        dealer_hand: Hand::new(),
        wallet: Wallet::new(cash),
    };
    info!(player = %table.player, dealer = %table.dealer, cash, "Twenty-one session started");

    console.clear()?;
    console.say(format!("Welcome to Twenty-One, {}!", table.player))?;
    console.say(format!("{} will be your dealer.", table.dealer))?;
    console.blank()?;
    console.wait_for_enter("Press enter to start...")?;

    loop {
        table.deal(console, rng)?;
        table.display_hands(console)?;
        table.take_bet(console)?;
        table.player_turn(console, rng)?;
        if !table.player_hand.is_busted() {
            table.dealer_turn(console, rng)?;
        }
        table.reveal(console)?;
        table.resolve(console)?;

        if table.wallet.is_broke() {
            break;
        }
        let again = console.ask(
            format!("{}, would you like to continue playing?", table.player),
            yes_or_no,
        )?;
        if !again {
            break;
        }
    }

    table.goodbye(console)
}

/// Twenty-one reads only the first letter, so "yeah" and "nope" count.
fn yes_or_no(answer: &str) -> std::result::Result<bool, &'static str> {
    match answer.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('y') => Ok(true),
        Some('n') => Ok(false),
        _ => Err("Please type 'y' or 'n'."),
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn show_hand<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    name: &str,
    hand: &Hand,
) -> Result<()> {
    console.say(format!("=== {name}'s hand: ==="))?;
    for card in hand.cards() {
        console.say(card)?;
    }
    let mut total = format!("Total: {}", hand.value());
    if hand.is_busted() {
        total.push_str(", Busted!");
    }
    console.say(total)?;
    console.blank()
}

impl Table {
    fn draw<G: Rng + ?Sized, R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        rng: &mut G,
    ) -> Result<parlor_blackjack::Card> {
        if self.deck.remaining() == 0 {
            console.say("Shuffling cards...")?;
            console.pause();
        }
        Ok(self.deck.deal(rng))
    }

    fn deal<R: BufRead, W: Write, G: Rng + ?Sized>(
        &mut self,
        console: &mut Console<R, W>,
        rng: &mut G,
    ) -> Result<()> {
        self.player_hand.clear();
        self.dealer_hand.clear();
        console.clear()?;
        console.say("Dealing cards...")?;
        console.pause();

        for _ in 0..2 {
            let card = self.draw(console, rng)?;
            self.dealer_hand.push(card);
            let card = self.draw(console, rng)?;
            self.player_hand.push(card);
        }
        Ok(())
    }

    fn display_hands<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.clear()?;
        console.say(format!("=== {}'s hand: ===", self.dealer))?;
        if let Some((up, down)) = self.dealer_hand.cards().split_first() {
            console.say(up)?;
            for _ in down {
                console.say("[facedown card]")?;
            }
        }
        console.blank()?;
        show_hand(console, &self.player, &self.player_hand)
    }

    fn take_bet<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        let wallet = &self.wallet;
        let question = format!(
            "{}, you have ${}.\nHow much would you like to bet?",
            self.player,
            wallet.cash()
        );
        let amount = console.ask(question, |answer| {
            let amount = answer
                .trim()
                .parse::<u64>()
                .map_err(|_| "Please enter a whole dollar amount.".to_string())?;
            wallet.check_bet(amount).map_err(|e| e.to_string())?;
            Ok::<_, String>(amount)
        })?;
        self.wallet.place_bet(amount)?;
        Ok(())
    }

    fn player_turn<R: BufRead, W: Write, G: Rng + ?Sized>(
        &mut self,
        console: &mut Console<R, W>,
        rng: &mut G,
    ) -> Result<()> {
        loop {
            let action = console.ask(
                format!("{}, would you like to hit or stay?", self.player),
                |answer| match answer.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
                    Some('h') => Ok(Action::Hit),
                    Some('s') => Ok(Action::Stay),
                    _ => Err("Please enter 'hit' or 'stay'"),
                },
            )?;
            debug!(?action, "Player decision");

            if action == Action::Stay {
                console.say(format!("{} decided to stay!", self.player))?;
                return Ok(());
            }

            console.say(format!("{} decided to hit!", self.player))?;
            let card = self.draw(console, rng)?;
            self.player_hand.push(card);
            self.display_hands(console)?;

            if self.player_hand.is_busted() {
                console.say(format!("{} busted!", self.player))?;
                return Ok(());
            }
        }
    }

    fn dealer_turn<R: BufRead, W: Write, G: Rng + ?Sized>(
        &mut self,
        console: &mut Console<R, W>,
        rng: &mut G,
    ) -> Result<()> {
        loop {
            console.say(format!("{} is thinking...", self.dealer))?;
            console.pause();
            if !dealer_hits(&self.dealer_hand) {
                console.say(format!("{} decided to stay!", self.dealer))?;
                return Ok(());
            }
            let card = self.draw(console, rng)?;
            self.dealer_hand.push(card);
            self.display_hands(console)?;
            console.say(format!("{} decided to hit!", self.dealer))?;
        }
    }

    fn reveal<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        if !self.player_hand.is_busted() {
            console.say("Determining winner...")?;
        }
        console.pause();
        console.clear()?;
        show_hand(console, &self.dealer, &self.dealer_hand)?;
        show_hand(console, &self.player, &self.player_hand)
    }

    fn resolve<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        match settle(&self.player_hand, &self.dealer_hand) {
            Winner::Dealer => {
                console.say(format!("{} wins!", self.dealer))?;
                self.wallet.resolve_loss();
            }
            Winner::Player => {
                console.say(format!("{} wins!", self.player))?;
                self.wallet.resolve_win();
            }
        }
        Ok(())
    }

    fn goodbye<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        if !self.wallet.is_broke() {
            console.clear()?;
        }
        let cash = self.wallet.cash();
        let farewell = match self.wallet.standing() {
            Standing::Profit => format!("Great job! You are leaving with ${cash}."),
            Standing::BreakEven => format!("You broke even! You still have ${cash}."),
            Standing::PartialLoss => format!("You are leaving with ${cash}."),
            Standing::TotalLoss => "You ran out of cash.".to_string(),
        };
        console.say(farewell)?;
        console.blank()?;
        console.say(format!("Thank you for playing, {}!", self.player))
    }
}
