use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::RoundError;
use crate::io::Output;
use crate::participant::Participant;
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Dealer plays their hand according to the house rule.
    ///
    /// The dealer draws while below 17, then shows the full hand.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_play<O: Output + ?Sized>(
        &mut self,
        output: &mut O,
    ) -> Result<Vec<Card>, RoundError> {
        self.ensure_state(GameState::DealerTurn)?;

        let mut drawn_cards = Vec::new();
        while self.dealer.should_hit() {
            let card = self.draw(output);
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        self.dealer.show(output, true);
        self.state = GameState::RoundOver;

        Ok(drawn_cards)
    }

    /// Compares the final hands and announces the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state.
    pub fn showdown<O: Output + ?Sized>(&self, output: &mut O) -> Result<RoundResult, RoundError> {
        self.ensure_state(GameState::RoundOver)?;

        let player_value = self.player.score();
        let dealer_value = self.dealer.score();
        let outcome = Outcome::resolve(player_value, dealer_value);

        output.write_line(&format!("Player's hand value: {player_value}"));
        output.write_line(&format!("Dealer's hand value: {dealer_value}"));
        output.write_line(&outcome.to_string());

        log::info!("round over: player {player_value}, dealer {dealer_value}, {outcome:?}");

        Ok(RoundResult {
            outcome,
            player_value,
            dealer_value,
            player_bust: self.player.hand().is_bust(),
            dealer_bust: self.dealer.hand().is_bust(),
        })
    }
}
