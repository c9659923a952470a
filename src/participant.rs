//! The player and the dealer.
//!
//! Both own exactly one [`Hand`] and share adding, scoring and display
//! through [`Participant`]. They differ only in how they decide to draw.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::str::FromStr;

use crate::card::Card;
use crate::error::{InputError, ParseChoiceError};
use crate::hand::Hand;
use crate::io::{Input, Output};

/// Dealer draws while its score is below this value.
pub const DEALER_STANDS_ON: u8 = 17;

/// Prompt written before each player choice.
pub const CHOICE_PROMPT: &str = "Hit or Stand? (h/s): ";

/// Message written when a choice line is rejected.
pub const INVALID_CHOICE: &str = "Invalid input. Please enter 'h' to hit or 's' to stand.";

/// Capabilities shared by everyone seated at the table.
pub trait Participant {
    /// Name used in display headers.
    const NAME: &'static str;

    /// Returns the participant's hand.
    fn hand(&self) -> &Hand;

    /// Returns the participant's hand mutably.
    fn hand_mut(&mut self) -> &mut Hand;

    /// Adds a card to the participant's hand.
    fn add_card(&mut self, card: Card) {
        self.hand_mut().add_card(card);
    }

    /// Returns the current hand value.
    fn score(&self) -> u8 {
        self.hand().score()
    }

    /// Renders the hand under a `<name>'s Hand:` header.
    fn display(&self, reveal_all: bool) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.hand().len() + 2);
        lines.push(format!("{}'s Hand:", Self::NAME));
        lines.extend(self.hand().display(reveal_all));
        lines
    }

    /// Writes the rendered hand line by line.
    fn show<O: Output + ?Sized>(&self, output: &mut O, reveal_all: bool) {
        for line in self.display(reveal_all) {
            output.write_line(&line);
        }
    }
}

/// A player's decision on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Take another card.
    Hit,
    /// End the turn.
    Stand,
}

impl FromStr for Choice {
    type Err = ParseChoiceError;

    /// Accepts `h` or `s`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("h") {
            Ok(Self::Hit)
        } else if s.eq_ignore_ascii_case("s") {
            Ok(Self::Stand)
        } else {
            Err(ParseChoiceError)
        }
    }
}

/// The human player, whose decisions come from an input collaborator.
#[derive(Debug, Clone, Default)]
pub struct Player {
    hand: Hand,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }

    /// Prompts until the input yields a valid choice.
    ///
    /// Invalid lines are answered with [`INVALID_CHOICE`] and the prompt is
    /// repeated; they never change the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the input runs out before a valid choice arrives.
    pub fn decide<I, O>(&self, input: &mut I, output: &mut O) -> Result<Choice, InputError>
    where
        I: Input + ?Sized,
        O: Output + ?Sized,
    {
        loop {
            output.write_line(CHOICE_PROMPT);
            let line = input.read_line()?;
            match line.parse::<Choice>() {
                Ok(choice) => return Ok(choice),
                Err(err) => {
                    log::debug!("rejected choice {line:?}: {err}");
                    output.write_line(INVALID_CHOICE);
                }
            }
        }
    }
}

impl Participant for Player {
    const NAME: &'static str = "Player";

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

/// The dealer, who draws by a fixed rule.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }

    /// Returns whether the dealer must draw another card.
    #[must_use]
    pub fn should_hit(&self) -> bool {
        self.score() < DEALER_STANDS_ON
    }
}

impl Participant for Dealer {
    const NAME: &'static str = "Dealer";

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}
