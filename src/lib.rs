//! A standard 52-card deck with Fisher-Yates shuffling, with optional `no_std`
//! support.
//!
//! The crate provides a [`Deck`] that builds itself in canonical order, shuffles
//! in place using an injectable [`IndexSource`], and deals cards off the top.
//!
//! # Example
//!
//! ```
//! use deckrs::{DealError, Deck};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut deck = Deck::new();
//! deck.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
//!
//! let hand = deck.deal_hand(52).unwrap();
//! assert_eq!(hand.len(), 52);
//! assert_eq!(deck.deal(), Err(DealError::EmptyDeck));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod shuffle;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, DeckState};
pub use error::{DealError, ParseCardError};
pub use options::TableOptions;
pub use shuffle::{IndexSource, fisher_yates};
pub use table::{TableDeal, deal_table, deal_table_seeded};
