//! Round result types for showdown.

use core::fmt;

use crate::hand::BLACKJACK;

/// Who took the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or player has higher value).
    PlayerWins,
    /// Dealer wins (player busts or dealer has higher value).
    DealerWins,
    /// Equal values.
    Tie,
}

impl Outcome {
    /// Decides the round from the final, ace-adjusted scores.
    ///
    /// The checks run in a fixed order: a player bust loses even when the
    /// dealer also busts.
    ///
    /// ```
    /// use bjterm::Outcome;
    ///
    /// assert_eq!(Outcome::resolve(22, 23), Outcome::DealerWins);
    /// assert_eq!(Outcome::resolve(18, 23), Outcome::PlayerWins);
    /// assert_eq!(Outcome::resolve(17, 17), Outcome::Tie);
    /// ```
    #[must_use]
    pub const fn resolve(player_score: u8, dealer_score: u8) -> Self {
        if player_score > BLACKJACK
            || (dealer_score <= BLACKJACK && dealer_score > player_score)
        {
            Self::DealerWins
        } else if dealer_score > BLACKJACK || player_score > dealer_score {
            Self::PlayerWins
        } else {
            Self::Tie
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerWins => "Player wins!",
            Self::DealerWins => "Dealer wins!",
            Self::Tie => "It's a tie!",
        })
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Who took the round.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
