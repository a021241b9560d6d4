use crate::{
    error::game::GameError,
    model::{
        blackjack::{evaluate, Action, BlackjackGame, GameState, Outcome},
        card::{Card, Deck, Rank, Suit, DECK_SIZE},
    },
};

mod deal;
mod evaluate;
mod hit;
mod outcome;
mod stand;

fn card(rank: Rank) -> Card {
    Card::new(rank, Suit::Spades)
}

fn cards(ranks: &[Rank]) -> Vec<Card> {
    ranks.iter().copied().map(card).collect()
}

/// Builds a deck that deals the given hands, followed by `draws` in order.
///
/// Cards come off the end of a deck, so the deal order is reversed here.
fn rigged_deck(player: [Rank; 2], dealer: [Rank; 2], draws: &[Rank]) -> Deck {
    let mut order = vec![player[0], player[1], dealer[0], dealer[1]];
    order.extend_from_slice(draws);
    order.reverse();

    Deck::from_cards(cards(&order))
}

fn total_cards(game: &BlackjackGame) -> usize {
    game.cards_remaining() + game.player().len() + game.dealer().len()
}
