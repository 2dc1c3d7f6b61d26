//! Rank-frequency view of a card multiset.

use crate::bitset::{mask_of, CHAIN_BREAKERS, JOKER_MASK};
use crate::deck::{Card, NUM_RANKS};

/// `rank -> count` for a card multiset. Built fresh for every classification
/// or scoring call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankCounts {
    counts: [u8; NUM_RANKS + 1],
    total: usize,
}

impl RankCounts {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; NUM_RANKS + 1];
        for card in cards {
            counts[card.rank() as usize] = counts[card.rank() as usize].saturating_add(1);
        }
        RankCounts {
            counts,
            total: cards.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count(&self, rank: u8) -> u8 {
        self.counts.get(rank as usize).copied().unwrap_or(0)
    }

    pub fn contains(&self, rank: u8) -> bool {
        self.count(rank) > 0
    }

    /// Present ranks with their counts, in ascending rank order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(rank, &count)| (rank as u8, count))
    }

    pub fn distinct(&self) -> usize {
        self.iter().count()
    }

    pub fn ranks_with_count(&self, count: u8) -> Vec<u8> {
        self.iter()
            .filter(|&(_, c)| c == count)
            .map(|(rank, _)| rank)
            .collect()
    }

    pub fn rank_mask(&self) -> u16 {
        mask_of(self.iter().map(|(rank, _)| rank))
    }

    /// Two or either joker present; such ranks never join a chain.
    pub fn has_chain_breakers(&self) -> bool {
        self.rank_mask() & CHAIN_BREAKERS != 0
    }

    pub fn has_both_jokers(&self) -> bool {
        self.rank_mask() & JOKER_MASK == JOKER_MASK
    }
}
