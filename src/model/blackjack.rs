//! Blackjack hand scoring and the single-player game state machine.
//!
//! A [`BlackjackGame`] owns its deck and both hands. The player acts with
//! [`BlackjackGame::hit`] and [`BlackjackGame::stand`]; standing (or reaching 21 or
//! more on a hit) runs the dealer's turn and fixes the [`Outcome`]. The dealer stands
//! on any total of 17 or more, soft or hard.

use crate::error::game::GameError;
use crate::model::card::{Card, Deck, Rank};

/// Highest total that is not a bust.
pub const BLACKJACK: u32 = 21;

/// The dealer keeps drawing while below this total.
pub const DEALER_STANDS_ON: u32 = 17;

/// Scores a sequence of cards.
///
/// Aces count as 11 and are demoted to 1, one at a time, while the total is over 21.
/// Busted totals are returned as-is.
pub fn evaluate(cards: &[Card]) -> u32 {
    let mut total = 0;
    let mut aces = 0;

    for card in cards {
        total += card.rank.base_value();
        if card.rank == Rank::Ace {
            aces += 1;
        }
    }

    while total > BLACKJACK && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    total
}

/// Cards held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn score(&self) -> u32 {
        evaluate(&self.cards)
    }
}

/// Result of a finished game from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player went over 21 and loses regardless of the dealer.
    Bust,
    PlayerWins,
    DealerWins,
    Tie,
}

impl Outcome {
    /// Decides the outcome from the final player and dealer scores.
    pub fn determine(player: u32, dealer: u32) -> Self {
        if player > BLACKJACK {
            Outcome::Bust
        } else if dealer > BLACKJACK || player > dealer {
            Outcome::PlayerWins
        } else if player < dealer {
            Outcome::DealerWins
        } else {
            Outcome::Tie
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Outcome::Bust => "❌ **Bust! You lose.**",
            Outcome::PlayerWins => "✅ **You win!**",
            Outcome::DealerWins => "❌ **Dealer wins.**",
            Outcome::Tie => "🤝 **Tie.**",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingPlayerAction,
    Finished(Outcome),
}

/// Player action on a game in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Hit,
    Stand,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Hit => "hit",
            Action::Stand => "stand",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hit" => Some(Action::Hit),
            "stand" => Some(Action::Stand),
            _ => None,
        }
    }
}

/// One game of blackjack from the deal to its outcome.
#[derive(Debug, Clone)]
pub struct BlackjackGame {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    state: GameState,
}

impl BlackjackGame {
    /// Deals two cards to the player, then two to the dealer.
    ///
    /// # Arguments
    /// - `deck` - Deck to play from, usually [`Deck::shuffled`]
    ///
    /// # Returns
    /// - `Ok(BlackjackGame)` - Game awaiting the player's first action
    /// - `Err(GameError::OutOfCards)` - Deck holds fewer than four cards
    pub fn deal(mut deck: Deck) -> Result<Self, GameError> {
        let mut player = Hand::new();
        let mut dealer = Hand::new();

        player.push(deck.draw()?);
        player.push(deck.draw()?);
        dealer.push(deck.draw()?);
        dealer.push(deck.draw()?);

        Ok(Self {
            deck,
            player,
            dealer,
            state: GameState::AwaitingPlayerAction,
        })
    }

    pub fn apply(&mut self, action: Action) -> Result<GameState, GameError> {
        match action {
            Action::Hit => self.hit(),
            Action::Stand => self.stand(),
        }
    }

    /// Deals one card to the player.
    ///
    /// Reaching 21 or more ends the player's turn exactly as if they had stood.
    pub fn hit(&mut self) -> Result<GameState, GameError> {
        self.ensure_in_progress()?;

        let card = self.deck.draw()?;
        self.player.push(card);

        if self.player.score() >= BLACKJACK {
            return self.stand();
        }

        Ok(self.state)
    }

    /// Ends the player's turn, plays the dealer's hand and settles the game.
    pub fn stand(&mut self) -> Result<GameState, GameError> {
        self.ensure_in_progress()?;

        while self.dealer.score() < DEALER_STANDS_ON {
            let card = self.deck.draw()?;
            self.dealer.push(card);
        }

        let outcome = Outcome::determine(self.player.score(), self.dealer.score());
        self.state = GameState::Finished(outcome);

        Ok(self.state)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::Finished(outcome) => Some(outcome),
            GameState::AwaitingPlayerAction => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.state {
            GameState::AwaitingPlayerAction => Ok(()),
            GameState::Finished(_) => Err(GameError::AlreadyFinished),
        }
    }
}

/// Read-only view of a game used for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub player: Vec<Card>,
    pub player_score: u32,
    pub dealer: Vec<Card>,
    pub dealer_score: u32,
    pub outcome: Option<Outcome>,
}

impl From<&BlackjackGame> for GameSnapshot {
    fn from(game: &BlackjackGame) -> Self {
        Self {
            player: game.player.cards().to_vec(),
            player_score: game.player.score(),
            dealer: game.dealer.cards().to_vec(),
            dealer_score: game.dealer.score(),
            outcome: game.outcome(),
        }
    }
}
