//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the initial deal.
    Dealing,
    /// Waiting for player choices.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the result can be settled.
    RoundOver,
}

/// How the player's turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Player stood.
    Stand,
    /// Player went over 21.
    Bust,
}
