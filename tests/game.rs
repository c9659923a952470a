//! Round integration tests.

use bjterm::game::RESHUFFLE_NOTICE;
use bjterm::participant::{CHOICE_PROMPT, INVALID_CHOICE};
use bjterm::{
    Card, Deck, Game, GameState, InputError, Outcome, Participant, Rank, RoundError,
    ScriptedInput, Suit, Transcript, TurnOutcome,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn stacked_game(draws: &[Card]) -> Game {
    Game::with_deck(Deck::stacked(draws, 1))
}

#[test]
fn basic_round_flow() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten), // player
        card(Suit::Clubs, Rank::Six), // dealer, shown hidden
        card(Suit::Diamonds, Rank::Nine), // player
        card(Suit::Spades, Rank::Ten), // dealer
        card(Suit::Hearts, Rank::Seven), // dealer draw
    ]);
    let mut input = ScriptedInput::new(["s"]);
    let mut output = Transcript::new();

    let result = game.play(&mut input, &mut output).unwrap();

    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(result.player_value, 19);
    assert_eq!(result.dealer_value, 23);
    assert!(result.dealer_bust);
    assert!(!result.player_bust);
    assert_eq!(game.state(), GameState::RoundOver);

    let expected = [
        "Player's Hand:",
        "10 of Hearts",
        "9 of Diamonds",
        "Hand Value: 19",
        "Dealer's Hand:",
        "Card Hidden",
        "10 of Spades",
        "Hit or Stand? (h/s): ",
        "Dealer's Hand:",
        "6 of Clubs",
        "10 of Spades",
        "7 of Hearts",
        "Hand Value: 23",
        "Player's hand value: 19",
        "Dealer's hand value: 23",
        "Player wins!",
    ];
    assert_eq!(output.lines(), expected);
}

#[test]
fn invalid_choices_reprompt_without_dealing() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Eight),
        card(Suit::Spades, Rank::Seven),
    ]);
    let mut input = ScriptedInput::new(["x", "hit", "", "  S  "]);
    let mut output = Transcript::new();

    game.deal(&mut output).unwrap();
    let turn = game.player_turn(&mut input, &mut output).unwrap();

    assert_eq!(turn, TurnOutcome::Stand);
    assert_eq!(output.count(CHOICE_PROMPT), 4);
    assert_eq!(output.count(INVALID_CHOICE), 3);
    assert_eq!(game.player().hand().len(), 2);
    assert_eq!(game.cards_remaining(), 0);
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(input.remaining(), 0);
}

#[test]
fn hit_then_stand_with_uppercase_choices() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Three),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Hearts, Rank::Four), // player hit
    ]);
    let mut input = ScriptedInput::new(["H", "S"]);
    let mut output = Transcript::new();

    let result = game.play(&mut input, &mut output).unwrap();

    assert_eq!(result.player_value, 9);
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(game.player().hand().len(), 3);
    assert_eq!(game.dealer().hand().len(), 2);
    assert!(output.contains("Hand Value: 9"));
    assert!(output.contains("Dealer wins!"));
}

#[test]
fn player_bust_skips_dealer_turn() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Two),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Spades, Rank::Three),
        card(Suit::Hearts, Rank::King), // player hit, bust
        card(Suit::Clubs, Rank::Ace), // never dealt
    ]);
    let mut input = ScriptedInput::new(["h"]);
    let mut output = Transcript::new();

    let result = game.play(&mut input, &mut output).unwrap();

    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(result.player_value, 26);
    assert_eq!(result.dealer_value, 5);
    assert!(result.player_bust);
    assert_eq!(game.dealer().hand().len(), 2);
    assert_eq!(game.cards_remaining(), 1);
    assert!(output.contains("Player busts. Dealer wins!"));
    assert!(output.contains("Dealer wins!"));
    assert!(!output.contains("Hand Value: 5"));
}

#[test]
fn tie_on_equal_values() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Queen),
        card(Suit::Diamonds, Rank::Seven),
        card(Suit::Spades, Rank::Seven),
    ]);
    let mut input = ScriptedInput::new(["s"]);
    let mut output = Transcript::new();

    let result = game.play(&mut input, &mut output).unwrap();

    assert_eq!(result.outcome, Outcome::Tie);
    assert_eq!(result.player_value, 17);
    assert_eq!(result.dealer_value, 17);
    assert!(output.contains("It's a tie!"));
}

#[test]
fn exhausted_input_fails_the_round() {
    let mut game = Game::new(3);
    let mut input = ScriptedInput::new(["x"]);
    let mut output = Transcript::new();

    let err = game.play(&mut input, &mut output).unwrap_err();

    assert_eq!(err, RoundError::Input(InputError::Closed));
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(output.count(INVALID_CHOICE), 1);
}

#[test]
fn steps_out_of_order_are_rejected() {
    let mut game = Game::new(5);
    let mut output = Transcript::new();

    assert_eq!(game.hit(&mut output).unwrap_err(), RoundError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), RoundError::InvalidState);
    assert_eq!(
        game.dealer_play(&mut output).unwrap_err(),
        RoundError::InvalidState
    );
    assert_eq!(
        game.showdown(&mut output).unwrap_err(),
        RoundError::InvalidState
    );
    assert!(output.lines().is_empty());

    game.deal(&mut output).unwrap();
    assert_eq!(game.deal(&mut output).unwrap_err(), RoundError::InvalidState);
    assert_eq!(
        game.dealer_play(&mut output).unwrap_err(),
        RoundError::InvalidState
    );

    game.stand().unwrap();
    assert_eq!(game.hit(&mut output).unwrap_err(), RoundError::InvalidState);
    game.dealer_play(&mut output).unwrap();
    assert!(game.showdown(&mut output).is_ok());
}

#[test]
fn empty_deck_reshuffles_mid_round() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Three),
        card(Suit::Spades, Rank::Seven),
    ]);
    let mut input = ScriptedInput::new(["h", "s"]);
    let mut output = Transcript::new();

    let result = game.play(&mut input, &mut output).unwrap();

    assert_eq!(output.count(RESHUFFLE_NOTICE), 1);
    assert_eq!(game.player().hand().len(), 3);
    assert_eq!(game.cards_remaining(), 51);
    assert_eq!(result.dealer_value, 17);
    assert!(result.player_value <= 16);
}

#[test]
fn initial_deal_alternates_player_and_dealer() {
    let draws = [
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::Two),
        card(Suit::Diamonds, Rank::King),
        card(Suit::Spades, Rank::Three),
    ];
    let mut game = stacked_game(&draws);
    let mut output = Transcript::new();

    game.deal(&mut output).unwrap();

    assert_eq!(game.player().hand().cards(), [draws[0], draws[2]]);
    assert_eq!(game.dealer().hand().cards(), [draws[1], draws[3]]);
    assert_eq!(game.player().score(), 21);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert!(output.contains("Card Hidden"));
    assert!(!output.contains("2 of Clubs"));
}

#[test]
fn seeded_round_deals_from_a_full_deck() {
    let mut game = Game::new(42);
    let mut input = ScriptedInput::new(["s"]);
    let mut output = Transcript::new();

    let result = game.play(&mut input, &mut output).unwrap();
    let dealt = game.player().hand().len() + game.dealer().hand().len();

    assert!(result.dealer_value >= 17);
    assert_eq!(game.cards_remaining(), 52 - dealt);
}
