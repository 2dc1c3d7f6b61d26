//! Rust meld engine for Landlord.
//!
//! Classifies card multisets into meld categories, scores them, and
//! enumerates the melds a player can build from their remaining cards,
//! optionally constrained to beat the previous play.

mod bitset;
mod candidates;
mod category;
mod chains;
mod classify;
mod config;
mod deck;
mod error;
mod freq;
mod meld;
#[cfg(feature = "python")]
mod python;
mod random;
mod score;
mod selection;

pub use candidates::{candidate_melds, solo_melds};
pub use category::HandCategory;
pub use chains::{find_chains, Chain, ChainBound, ChainRule, PAIR_CHAIN, SOLO_CHAIN, TRIO_CHAIN};
pub use classify::{classify, classify_counts};
pub use config::{Config, DEFAULT_LEAD_SOLO_PROBABILITY};
pub use deck::{
    group_by_rank, is_ace, is_joker, is_two, standard_deck, weight, Card, Suit, ACE, BLACK_JOKER,
    DECK_SIZE, JACK, KING, QUEEN, RED_JOKER, TWO,
};
pub use error::{MeldError, Result};
pub use freq::RankCounts;
pub use meld::{Meld, PreviousPlay};
pub use random::RandomSource;
pub use score::{checked_score, score};
pub use selection::{beating_melds, enumerate_candidates, enumerate_candidates_with};
