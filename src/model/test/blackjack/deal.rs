use super::*;
use rand::{rngs::StdRng, SeedableRng};

/// Tests the initial deal from a full shuffled deck.
///
/// Expected: two cards each, 48 left in the deck, awaiting the player
#[test]
fn deals_two_cards_each() {
    let mut rng = StdRng::seed_from_u64(1);
    let game = BlackjackGame::deal(Deck::shuffled(&mut rng)).unwrap();

    assert_eq!(game.player().len(), 2);
    assert_eq!(game.dealer().len(), 2);
    assert_eq!(game.cards_remaining(), 48);
    assert_eq!(game.outcome(), None);
}

/// Tests that the player is dealt first from the end of the deck.
///
/// Expected: player holds the last two cards, dealer the two before them
#[test]
fn deals_player_before_dealer() {
    let game = BlackjackGame::deal(rigged_deck(
        [Rank::Ace, Rank::King],
        [Rank::Two, Rank::Three],
        &[],
    ))
    .unwrap();

    assert_eq!(game.player().cards(), cards(&[Rank::Ace, Rank::King]));
    assert_eq!(game.dealer().cards(), cards(&[Rank::Two, Rank::Three]));
}

#[test]
fn short_deck_cannot_deal() {
    let deck = Deck::from_cards(cards(&[Rank::Two, Rank::Three, Rank::Four]));
    assert_eq!(BlackjackGame::deal(deck).unwrap_err(), GameError::OutOfCards);
}

/// Tests the card count invariant through whole games.
///
/// Plays seeded games to completion, hitting below 15 and standing otherwise.
///
/// Expected: deck plus both hands always hold 52 cards
#[test]
fn card_count_is_conserved() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = BlackjackGame::deal(Deck::shuffled(&mut rng)).unwrap();
        assert_eq!(total_cards(&game), DECK_SIZE);

        while !game.is_finished() {
            let action = if game.player().score() < 15 {
                Action::Hit
            } else {
                Action::Stand
            };
            game.apply(action).unwrap();
            assert_eq!(total_cards(&game), DECK_SIZE, "seed {seed}");
        }
    }
}
