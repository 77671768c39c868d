//! Property tests for shuffling and dealing.

use std::collections::HashSet;

use deckrs::{Card, DECK_SIZE, DealError, Deck};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn card_set(cards: &[Card]) -> HashSet<Card> {
    cards.iter().copied().collect()
}

proptest! {
    #[test]
    fn shuffles_only_permute(seeds in prop::collection::vec(any::<u64>(), 1..5)) {
        let full = card_set(Deck::new().cards());
        let mut deck = Deck::new();

        for seed in seeds {
            deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
            prop_assert_eq!(deck.len(), DECK_SIZE);
            prop_assert_eq!(card_set(deck.cards()), full.clone());
        }
    }

    #[test]
    fn each_deal_moves_one_card_out(seed in any::<u64>(), deals in 0..=DECK_SIZE) {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        let mut dealt = HashSet::new();
        for _ in 0..deals {
            let before = deck.len();
            let top = *deck.top().unwrap();
            let card = deck.deal().unwrap();

            prop_assert_eq!(card, top);
            prop_assert_eq!(deck.len(), before - 1);
            prop_assert!(!deck.contains(&card));
            prop_assert!(dealt.insert(card));
        }

        let remaining = card_set(deck.cards());
        prop_assert!(remaining.is_disjoint(&dealt));
        prop_assert_eq!(remaining.len() + dealt.len(), DECK_SIZE);
    }

    #[test]
    fn reshuffling_a_partial_deck_keeps_its_cards(seed in any::<u64>(), deals in 0..=DECK_SIZE) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        deck.deal_hand(deals).unwrap();

        let before = card_set(deck.cards());
        deck.shuffle(&mut rng);

        prop_assert_eq!(deck.len(), DECK_SIZE - deals);
        prop_assert_eq!(card_set(deck.cards()), before);
    }

    #[test]
    fn oversized_hands_fail_without_dealing(seed in any::<u64>(), extra in 1..10_usize) {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        let before = deck.clone();

        prop_assert_eq!(deck.deal_hand(DECK_SIZE + extra), Err(DealError::EmptyDeck));
        prop_assert_eq!(deck, before);
    }
}
