//! Deals two 2-card hands from a freshly shuffled deck.
//!
//! Pass a seed as the first argument to repeat a deal. Set `RUST_LOG=info` to
//! see the shuffle notification.

use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Card, TableOptions, deal_table_seeded};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });

    let deal = match deal_table_seeded(&TableOptions::default(), seed) {
        Ok(deal) => deal,
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    };

    println!(
        "The top card of the new, ordered deck is: {}",
        deal.fresh_top.describe()
    );

    println!();
    println!("--- Dealing a new hand (seed {seed}) ---");
    for (index, hand) in deal.hands.iter().enumerate() {
        println!("Player {}'s Hand: {}", index + 1, format_hand(hand));
    }
    println!("There are {} cards left in the deck.", deal.remaining);
}

fn format_hand(hand: &[Card]) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.iter()
        .map(Card::describe)
        .collect::<Vec<_>>()
        .join(", ")
}
