//! Shared helpers for integration tests.
#![allow(dead_code)]

use landlord_melds::{is_joker, Card, Suit};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Installs a test subscriber once. Level comes from `TEST_LOG`, then
/// `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Builds cards from ranks, cycling suits per rank so repeated ranks are
/// distinct cards.
pub fn cards(ranks: &[u8]) -> Vec<Card> {
    let mut seen = [0usize; 16];
    ranks
        .iter()
        .map(|&rank| {
            let suit = if is_joker(rank) {
                Suit::Joker
            } else {
                Suit::STANDARD[seen[rank as usize] % 4]
            };
            seen[rank as usize] += 1;
            Card::new(rank, suit).expect("valid test card")
        })
        .collect()
}

pub fn sorted_ranks(cards: &[Card]) -> Vec<u8> {
    let mut ranks: Vec<u8> = cards.iter().map(Card::rank).collect();
    ranks.sort_unstable();
    ranks
}
