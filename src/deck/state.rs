//! Deck state types.

/// Where a deck is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckState {
    /// All 52 cards in the order they were built.
    Fresh,
    /// All 52 cards, shuffled.
    Shuffled,
    /// Between 1 and 51 cards remain.
    PartiallyDealt,
    /// Every card has been dealt.
    Empty,
}
