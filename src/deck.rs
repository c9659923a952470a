//! A single 52-card deck with shuffling and self-replenishing dealing.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered deck of cards.
///
/// Cards are stored so that the next card to be dealt is the last element,
/// which keeps dealing a cheap `pop`.
pub struct Deck {
    /// Remaining cards; the next card to deal is at the end.
    cards: Vec<Card>,
    /// Random number generator used for every shuffle of this deck.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full, unshuffled deck whose shuffles are driven by `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::Deck;
    ///
    /// let deck = Deck::new(7);
    /// assert_eq!(deck.len(), 52);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            cards: Self::full_set(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a deck that deals exactly `draws`, first element first.
    ///
    /// Once those cards are exhausted the deck replenishes itself like any
    /// other deck, shuffling with `seed`.
    #[must_use]
    pub fn stacked(draws: &[Card], seed: u64) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Builds one of each suit and rank combination in canonical order.
    fn full_set() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        cards
    }

    /// Randomly permutes the remaining cards.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the next card.
    ///
    /// An empty deck is first refilled with a fresh 52-card set and
    /// reshuffled. Cards already dealt are not excluded from the refill.
    pub fn deal(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                log::debug!("dealt {card}");
                return card;
            }
            self.replenish();
        }
    }

    fn replenish(&mut self) {
        log::info!("deck exhausted, refilling with {DECK_SIZE} cards and reshuffling");
        self.cards = Self::full_set();
        self.shuffle();
    }

    /// Returns the remaining cards, with the next card to be dealt last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
