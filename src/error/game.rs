use thiserror::Error;

/// Errors raised by the blackjack state machine.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    /// A card was requested from an empty deck.
    ///
    /// Not reachable in standard play (at most a dozen cards leave a 52-card deck),
    /// but drawing never reads past the end of the deck.
    #[error("The deck has run out of cards")]
    OutOfCards,

    /// Hit or stand was requested after the game reached its outcome.
    #[error("The game has already finished")]
    AlreadyFinished,
}
