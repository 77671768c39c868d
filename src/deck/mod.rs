//! The deck and its shuffle/deal operations.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::shuffle::{IndexSource, fisher_yates};

pub mod state;

pub use state::DeckState;

/// A standard 52-card deck.
///
/// The deck owns its cards. The top of the deck is the last element of
/// [`Deck::cards`]; [`Deck::deal`] removes from there.
///
/// # Example
///
/// ```
/// use deckrs::{DECK_SIZE, Deck};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut deck = Deck::new();
/// deck.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
///
/// let card = deck.deal().expect("a fresh deck is not empty");
/// assert!(!deck.contains(&card));
/// assert_eq!(deck.len(), DECK_SIZE - 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in the deck, top card last.
    cards: Vec<Card>,
    /// Current lifecycle state.
    state: DeckState,
}

impl Deck {
    /// Creates a deck holding every card in canonical order.
    ///
    /// Suits are laid out in [`Suit::ALL`] order, each running through
    /// [`Rank::ALL`], so the top card of a fresh deck is the King of Spades.
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            state: DeckState::Fresh,
        };
        deck.populate();
        deck
    }

    /// Fills an empty deck. Only called from [`Deck::new`].
    fn populate(&mut self) {
        debug_assert!(self.cards.is_empty());

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Shuffles the remaining cards in place.
    ///
    /// Uses the Fisher-Yates algorithm, drawing indices from `source`. Any
    /// [`rand::Rng`] works as a source. Shuffling an empty or single-card
    /// deck leaves it unchanged.
    pub fn shuffle<S: IndexSource + ?Sized>(&mut self, source: &mut S) {
        fisher_yates(&mut self.cards, source);

        if self.state == DeckState::Fresh {
            self.state = DeckState::Shuffled;
        }

        log::info!("The deck has been thoroughly shuffled.");
    }

    /// Deals the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards remain.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        let Some(card) = self.cards.pop() else {
            log::debug!("deal attempted on an empty deck");
            return Err(DealError::EmptyDeck);
        };

        self.update_state_after_deal();
        log::debug!("dealt {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Deals `count` cards from the top, in the order they come off the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if fewer than `count` cards remain.
    /// The deck is left untouched in that case.
    pub fn deal_hand(&mut self, count: usize) -> Result<Vec<Card>, DealError> {
        if count > self.cards.len() {
            log::debug!(
                "cannot deal {count} cards, only {} left",
                self.cards.len()
            );
            return Err(DealError::EmptyDeck);
        }

        let mut hand = Vec::with_capacity(count);
        for _ in 0..count {
            hand.push(self.deal()?);
        }
        Ok(hand)
    }

    fn update_state_after_deal(&mut self) {
        self.state = if self.cards.is_empty() {
            DeckState::Empty
        } else {
            DeckState::PartiallyDealt
        };
    }

    /// Returns the top card without dealing it.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the remaining cards, top card last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether `card` is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the current deck state.
    #[must_use]
    pub const fn state(&self) -> DeckState {
        self.state
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
