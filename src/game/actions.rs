use crate::card::Card;
use crate::error::RoundError;
use crate::io::{Input, Output};
use crate::participant::{Choice, Participant};

use super::{Game, GameState, TurnOutcome};

/// Message written when the player goes over 21.
pub(super) const BUST_NOTICE: &str = "Player busts. Dealer wins!";

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// Shows the player's hand afterwards. A bust ends the round at once;
    /// the dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn hit<O: Output + ?Sized>(&mut self, output: &mut O) -> Result<Card, RoundError> {
        self.ensure_state(GameState::PlayerTurn)?;

        let card = self.draw(output);
        self.player.add_card(card);
        self.player.show(output, true);

        if self.player.hand().is_bust() {
            output.write_line(BUST_NOTICE);
            self.state = GameState::RoundOver;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn stand(&mut self) -> Result<(), RoundError> {
        self.ensure_state(GameState::PlayerTurn)?;
        self.state = GameState::DealerTurn;
        Ok(())
    }

    /// Runs the interactive player turn until the player stands or busts.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the input
    /// runs out before the turn ends.
    pub fn player_turn<I, O>(
        &mut self,
        input: &mut I,
        output: &mut O,
    ) -> Result<TurnOutcome, RoundError>
    where
        I: Input + ?Sized,
        O: Output + ?Sized,
    {
        self.ensure_state(GameState::PlayerTurn)?;

        loop {
            match self.player.decide(input, output)? {
                Choice::Hit => {
                    self.hit(output)?;
                    if self.state == GameState::RoundOver {
                        return Ok(TurnOutcome::Bust);
                    }
                }
                Choice::Stand => {
                    self.stand()?;
                    return Ok(TurnOutcome::Stand);
                }
            }
        }
    }
}
