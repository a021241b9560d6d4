use super::*;

/// Tests a hit that stays under 21.
///
/// Expected: card added, game still awaiting the player, dealer untouched
#[test]
fn hit_below_twenty_one_continues() {
    let mut game = BlackjackGame::deal(rigged_deck(
        [Rank::Two, Rank::Three],
        [Rank::Ten, Rank::Six],
        &[Rank::Four],
    ))
    .unwrap();

    let state = game.hit().unwrap();

    assert_eq!(state, GameState::AwaitingPlayerAction);
    assert_eq!(game.player().score(), 9);
    assert_eq!(game.dealer().len(), 2);
}

/// Tests that a hit landing on exactly 21 plays out like a stand.
///
/// Compares a game that hits 10-5 up to 21 with a game dealt a natural 21 that
/// stands explicitly, both facing the same dealer hand and the same next card.
///
/// Expected: both finish with identical dealer hands and outcome
#[test]
fn hit_to_twenty_one_stands_automatically() {
    let mut auto = BlackjackGame::deal(rigged_deck(
        [Rank::Ten, Rank::Five],
        [Rank::Ten, Rank::Six],
        &[Rank::Six, Rank::Four],
    ))
    .unwrap();
    let auto_state = auto.hit().unwrap();

    let mut manual = BlackjackGame::deal(rigged_deck(
        [Rank::Ace, Rank::King],
        [Rank::Ten, Rank::Six],
        &[Rank::Four],
    ))
    .unwrap();
    let manual_state = manual.stand().unwrap();

    assert_eq!(auto_state, GameState::Finished(Outcome::PlayerWins));
    assert_eq!(auto_state, manual_state);
    assert_eq!(auto.player().score(), 21);
    assert_eq!(auto.dealer(), manual.dealer());
    assert_eq!(auto.dealer().score(), 20);
}

/// Tests that busting on a hit ends the game.
///
/// The dealer still plays out its hand, but the player loses regardless.
///
/// Expected: finished with `Bust`
#[test]
fn hit_past_twenty_one_busts() {
    let mut game = BlackjackGame::deal(rigged_deck(
        [Rank::Ten, Rank::Eight],
        [Rank::Ten, Rank::Two],
        &[Rank::Queen, Rank::King],
    ))
    .unwrap();

    let state = game.hit().unwrap();

    assert_eq!(state, GameState::Finished(Outcome::Bust));
    assert_eq!(game.player().score(), 28);
    assert_eq!(game.dealer().score(), 22);
}

#[test]
fn apply_dispatches_actions() {
    let mut game = BlackjackGame::deal(rigged_deck(
        [Rank::Two, Rank::Three],
        [Rank::Ten, Rank::Seven],
        &[Rank::Four],
    ))
    .unwrap();

    assert_eq!(
        game.apply(Action::Hit).unwrap(),
        GameState::AwaitingPlayerAction
    );
    assert_eq!(
        game.apply(Action::Stand).unwrap(),
        GameState::Finished(Outcome::DealerWins)
    );
}
