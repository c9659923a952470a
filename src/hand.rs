//! Hand representation and scoring shared by the player and the dealer.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::Card;

/// Highest score that is not a bust.
pub const BLACKJACK: u8 = 21;

/// Placeholder shown in place of a concealed card.
pub const HIDDEN_CARD: &str = "Card Hidden";

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// An ordered collection of dealt cards.
///
/// A hand only grows during a round; its score is always derived from the
/// cards it holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces count 11 each; while the total exceeds 21, Aces are lowered to 1
    /// one at a time.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Spades, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Hearts, Rank::King));
    /// assert_eq!(hand.score(), 21);
    /// ```
    #[must_use]
    pub fn score(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Renders the hand as display lines.
    ///
    /// With `reveal_all` every card label is listed followed by a
    /// `Hand Value: N` line. Without it the first card is shown as
    /// [`HIDDEN_CARD`] and no value is given away.
    #[must_use]
    pub fn display(&self, reveal_all: bool) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.cards.len() + 1);
        for (index, card) in self.cards.iter().enumerate() {
            if index == 0 && !reveal_all {
                lines.push(HIDDEN_CARD.to_string());
            } else {
                lines.push(card.to_string());
            }
        }
        if reveal_all {
            lines.push(alloc::format!("Hand Value: {}", self.score()));
        }
        lines
    }
}
