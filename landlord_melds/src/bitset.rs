//! Bitset utilities for representing sets of ranks.

use crate::deck::{BLACK_JOKER, RED_JOKER, TWO};

pub const JOKER_MASK: u16 = (1 << BLACK_JOKER) | (1 << RED_JOKER);
pub const CHAIN_BREAKERS: u16 = JOKER_MASK | (1 << TWO);

pub fn rank_bit(rank: u8) -> u16 {
    1u16 << rank
}

pub fn mask_of(ranks: impl IntoIterator<Item = u8>) -> u16 {
    ranks.into_iter().fold(0, |mask, rank| mask | rank_bit(rank))
}

pub fn contains(mask: u16, rank: u8) -> bool {
    mask & rank_bit(rank) != 0
}
