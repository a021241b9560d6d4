use super::*;

/// Tests the dealer drawing from 16.
///
/// Dealer starts on 10-6 with a 5 next in the deck.
///
/// Expected: dealer draws exactly once and finishes on 21
#[test]
fn dealer_draws_once_from_sixteen() {
    let mut game = BlackjackGame::deal(rigged_deck(
        [Rank::Ten, Rank::Eight],
        [Rank::Ten, Rank::Six],
        &[Rank::Five, Rank::Nine],
    ))
    .unwrap();

    let state = game.stand().unwrap();

    assert_eq!(game.dealer().len(), 3);
    assert_eq!(game.dealer().score(), 21);
    assert_eq!(game.cards_remaining(), 1);
    assert_eq!(state, GameState::Finished(Outcome::DealerWins));
}

/// Tests that the dealer stands on a soft 17.
///
/// Expected: A-6 draws nothing
#[test]
fn dealer_stands_on_soft_seventeen() {
    let mut game = BlackjackGame::deal(rigged_deck(
        [Rank::Ten, Rank::Nine],
        [Rank::Ace, Rank::Six],
        &[Rank::Two],
    ))
    .unwrap();

    game.stand().unwrap();

    assert_eq!(game.dealer().len(), 2);
    assert_eq!(game.outcome(), Some(Outcome::PlayerWins));
}

/// Tests that the dealer keeps drawing until reaching 17, even into a bust.
///
/// Expected: 10-2 draws 3 (15) then K (25) and the player wins
#[test]
fn dealer_can_bust() {
    let mut game = BlackjackGame::deal(rigged_deck(
        [Rank::Ten, Rank::Seven],
        [Rank::Ten, Rank::Two],
        &[Rank::Three, Rank::King, Rank::Four],
    ))
    .unwrap();

    game.stand().unwrap();

    assert_eq!(game.dealer().score(), 25);
    assert_eq!(game.outcome(), Some(Outcome::PlayerWins));
}

#[test]
fn tie_on_equal_scores() {
    let mut game = BlackjackGame::deal(rigged_deck(
        [Rank::Ten, Rank::Nine],
        [Rank::King, Rank::Nine],
        &[],
    ))
    .unwrap();

    assert_eq!(game.stand().unwrap(), GameState::Finished(Outcome::Tie));
}

#[test]
fn cannot_act_after_finishing() {
    let mut game = BlackjackGame::deal(rigged_deck(
        [Rank::Ten, Rank::Nine],
        [Rank::King, Rank::Nine],
        &[Rank::Two],
    ))
    .unwrap();
    game.stand().unwrap();

    assert_eq!(game.stand().unwrap_err(), GameError::AlreadyFinished);
    assert_eq!(game.hit().unwrap_err(), GameError::AlreadyFinished);
    assert_eq!(game.outcome(), Some(Outcome::Tie));
}

#[test]
fn dealer_out_of_cards_is_an_error() {
    let mut game = BlackjackGame::deal(rigged_deck(
        [Rank::Ten, Rank::Nine],
        [Rank::Two, Rank::Three],
        &[],
    ))
    .unwrap();

    assert_eq!(game.stand().unwrap_err(), GameError::OutOfCards);
}
