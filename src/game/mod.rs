//! Round controller and state management.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::io::{Input, Output};
use crate::participant::{Dealer, Participant, Player};
use crate::result::RoundResult;

mod actions;
mod dealer;
pub mod state;

pub use state::{GameState, TurnOutcome};

/// Notice written when the deck runs out mid-round.
pub const RESHUFFLE_NOTICE: &str = "Deck is empty. Reshuffling...";

/// A single blackjack round between one player and the dealer.
///
/// The game owns the deck and both participants for the lifetime of the
/// round. A new round needs a new `Game`.
pub struct Game {
    /// Cards to deal from.
    deck: Deck,
    /// The human player.
    player: Player,
    /// The dealer.
    dealer: Dealer,
    /// Current game state.
    state: GameState,
}

impl Game {
    /// Creates a new round with a deck shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bjterm::{Console, Game};
    ///
    /// let mut input = Console::new();
    /// let mut output = Console::new();
    /// let mut game = Game::new(42);
    /// let result = game.play(&mut input, &mut output);
    /// let _ = result;
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Deck::new(seed);
        deck.shuffle();
        Self::with_deck(deck)
    }

    /// Creates a new round that deals from `deck` as given, without
    /// shuffling it first.
    #[must_use]
    pub const fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            player: Player::new(),
            dealer: Dealer::new(),
            state: GameState::Dealing,
        }
    }

    fn ensure_state(&self, expected: GameState) -> Result<(), RoundError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(RoundError::InvalidState)
        }
    }

    /// Draws a card, announcing a reshuffle when the deck has run out.
    fn draw<O: Output + ?Sized>(&mut self, output: &mut O) -> Card {
        if self.deck.is_empty() {
            output.write_line(RESHUFFLE_NOTICE);
        }
        self.deck.deal()
    }

    /// Deals two cards each, alternating player and dealer.
    ///
    /// Shows the player's hand in full and the dealer's hand with its first
    /// card hidden.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards have already been dealt.
    pub fn deal<O: Output + ?Sized>(&mut self, output: &mut O) -> Result<(), RoundError> {
        self.ensure_state(GameState::Dealing)?;

        for _ in 0..2 {
            let card = self.draw(output);
            self.player.add_card(card);
            let card = self.draw(output);
            self.dealer.add_card(card);
        }

        self.player.show(output, true);
        self.dealer.show(output, false);

        self.state = GameState::PlayerTurn;
        Ok(())
    }

    /// Plays a full round: deal, player turn, dealer turn, showdown.
    ///
    /// The dealer does not play when the player busts.
    ///
    /// # Errors
    ///
    /// Returns an error if the round was already started or the input runs
    /// out while a player choice is required.
    pub fn play<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<RoundResult, RoundError>
    where
        I: Input + ?Sized,
        O: Output + ?Sized,
    {
        self.deal(output)?;
        if self.player_turn(input, output)? == TurnOutcome::Stand {
            self.dealer_play(output)?;
        }
        self.showdown(output)
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
