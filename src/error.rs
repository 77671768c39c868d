//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur while parsing a card name such as `"10 of Hearts"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The text has no `" of "` between rank and suit.
    #[error("expected a card in the form \"<rank> of <suit>\"")]
    MissingSeparator,
    /// The rank is not one of A, 2-10, J, Q, K.
    #[error("unknown rank")]
    UnknownRank,
    /// The suit is not one of Hearts, Diamonds, Clubs, Spades.
    #[error("unknown suit")]
    UnknownSuit,
}
