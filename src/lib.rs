//! A single-player terminal blackjack round with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round against a dealer
//! who draws below 17: the deal, the interactive player turn, the dealer turn
//! and the showdown. All text goes through the [`Input`] and [`Output`]
//! collaborators, so a round can run against a terminal ([`Console`]) or a
//! script ([`ScriptedInput`], [`Transcript`]).
//!
//! # Example
//!
//! ```
//! use bjterm::{Game, ScriptedInput, Transcript};
//!
//! let mut game = Game::new(42);
//! let mut input = ScriptedInput::new(["s"]);
//! let mut output = Transcript::new();
//! let result = game.play(&mut input, &mut output).unwrap();
//! assert!(result.dealer_value >= 17);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod io;
pub mod participant;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{InputError, ParseChoiceError, RoundError};
pub use game::{Game, GameState, TurnOutcome};
pub use hand::Hand;
#[cfg(feature = "std")]
pub use io::{Console, read_line_from};
pub use io::{Input, Output, ScriptedInput, Transcript};
pub use participant::{Choice, Dealer, Participant, Player};
pub use result::{Outcome, RoundResult};
