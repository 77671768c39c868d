//! A toy deal: build a deck, shuffle it, and hand out a few hands.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::options::TableOptions;
use crate::shuffle::IndexSource;

/// What happened during one demo deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDeal {
    /// Top card of the deck before it was shuffled.
    pub fresh_top: Card,
    /// One hand per player, in seating order.
    pub hands: Vec<Vec<Card>>,
    /// Cards left in the deck after dealing.
    pub remaining: usize,
}

/// Deals one hand per player from a freshly shuffled deck.
///
/// Each player receives all of their cards before the next player is dealt
/// to. The deck is created and dropped inside this call.
///
/// # Errors
///
/// Returns [`DealError::EmptyDeck`] if the options ask for more cards than a
/// deck holds.
pub fn deal_table<S: IndexSource + ?Sized>(
    options: &TableOptions,
    source: &mut S,
) -> Result<TableDeal, DealError> {
    let mut deck = Deck::new();
    let fresh_top = *deck.top().ok_or(DealError::EmptyDeck)?;

    if options.cards_needed() > deck.len() {
        return Err(DealError::EmptyDeck);
    }

    deck.shuffle(source);

    let hands = (0..options.players)
        .map(|_| deck.deal_hand(options.hand_size))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TableDeal {
        fresh_top,
        hands,
        remaining: deck.len(),
    })
}

/// Same as [`deal_table`], shuffling with a `ChaCha8Rng` seeded from `seed`.
///
/// # Errors
///
/// Returns [`DealError::EmptyDeck`] if the options ask for more cards than a
/// deck holds.
///
/// # Example
///
/// ```
/// use deckrs::{TableOptions, deal_table_seeded};
///
/// let deal = deal_table_seeded(&TableOptions::default(), 42).unwrap();
/// assert_eq!(deal.hands.len(), 2);
/// assert_eq!(deal.remaining, 48);
/// ```
pub fn deal_table_seeded(options: &TableOptions, seed: u64) -> Result<TableDeal, DealError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deal_table(options, &mut rng)
}
