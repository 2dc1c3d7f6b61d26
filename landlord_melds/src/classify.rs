//! Ordered cascade of meld predicates.
//!
//! The first predicate that matches decides the category. Order matters: a
//! trio chain would also pass the airplane attachment count if it were
//! checked later, and a lone pair of jokers is a rocket rather than a pair.

use tracing::trace;

use crate::category::HandCategory;
use crate::chains::{is_consecutive, is_exact_chain, PAIR_CHAIN, SOLO_CHAIN, TRIO_CHAIN};
use crate::deck::{is_joker, ranks_of, Card, BLACK_JOKER, RED_JOKER, THREE, TWO};
use crate::error::{MeldError, Result};
use crate::freq::RankCounts;

/// Category of `cards`. An empty slice is a caller error, distinct from a
/// non-empty multiset that forms no meld.
pub fn classify(cards: &[Card]) -> Result<HandCategory> {
    if cards.is_empty() {
        return Err(MeldError::EmptyMeld);
    }
    let counts = RankCounts::from_cards(cards);
    classify_counts(&counts).ok_or_else(|| {
        let ranks = ranks_of(cards);
        trace!(?ranks, "cards match no meld category");
        MeldError::UnrecognizedCategory { ranks }
    })
}

pub fn classify_counts(counts: &RankCounts) -> Option<HandCategory> {
    if is_solo(counts) {
        Some(HandCategory::Solo)
    } else if is_exact_chain(counts, SOLO_CHAIN) {
        Some(HandCategory::SoloChain)
    } else if is_rocket(counts) {
        Some(HandCategory::Rocket)
    } else if is_pair(counts) {
        Some(HandCategory::Pair)
    } else if is_exact_chain(counts, PAIR_CHAIN) {
        Some(HandCategory::PairChain)
    } else if is_single_rank(counts, 3) {
        Some(HandCategory::Trio)
    } else if is_exact_chain(counts, TRIO_CHAIN) {
        Some(HandCategory::TrioChain)
    } else if is_single_rank(counts, 4) {
        Some(HandCategory::Bomb)
    } else if is_trio_with_solo(counts) {
        Some(HandCategory::TrioWithSolo)
    } else if is_trio_with_pair(counts) {
        Some(HandCategory::TrioWithPair)
    } else if is_airplane_with_solo(counts) {
        Some(HandCategory::AirplaneWithSolo)
    } else if is_airplane_with_pair(counts) {
        Some(HandCategory::AirplaneWithPair)
    } else if is_bomb_with_solo(counts) {
        Some(HandCategory::BombWithSolo)
    } else if is_bomb_with_pair(counts) {
        Some(HandCategory::BombWithPair)
    } else {
        None
    }
}

fn is_solo(counts: &RankCounts) -> bool {
    counts.total() == 1
}

fn is_single_rank(counts: &RankCounts, size: usize) -> bool {
    counts.total() == size && counts.distinct() == 1
}

fn is_pair(counts: &RankCounts) -> bool {
    is_single_rank(counts, 2)
}

fn is_rocket(counts: &RankCounts) -> bool {
    counts.total() == 2 && counts.count(BLACK_JOKER) == 1 && counts.count(RED_JOKER) == 1
}

fn is_trio_with_solo(counts: &RankCounts) -> bool {
    counts.total() == 4 && counts.ranks_with_count(3).len() == 1
}

fn is_trio_with_pair(counts: &RankCounts) -> bool {
    counts.total() == 5
        && counts.ranks_with_count(3).len() == 1
        && counts.ranks_with_count(2).len() == 1
}

/// Number of trios in the core when every count-3 rank forms one chain of at
/// least two links, `None` otherwise.
fn airplane_core(counts: &RankCounts) -> Option<usize> {
    let trios = counts.ranks_with_count(3);
    if trios.len() < TRIO_CHAIN.min_links || trios.len() > TRIO_CHAIN.max_links {
        return None;
    }
    // A two-trio directly followed by a three-trio is never an airplane.
    if trios.contains(&TWO) && trios.contains(&THREE) {
        return None;
    }
    is_consecutive(&trios).then_some(trios.len())
}

/// Counts solo attachments among ranks outside `core_count`. Every other rank
/// must be a single card, and the two jokers cannot both be attached.
fn solo_attachments(counts: &RankCounts, core_count: u8) -> Option<usize> {
    let mut solos = 0;
    for (_, count) in counts.iter().filter(|&(_, count)| count != core_count) {
        if count != 1 {
            return None;
        }
        solos += 1;
    }
    if counts.has_both_jokers() {
        return None;
    }
    Some(solos)
}

/// Counts pair attachments among ranks outside `core_count`. The two jokers
/// together make one pair; a lone joker cannot.
fn pair_attachments(counts: &RankCounts, core_count: u8) -> Option<usize> {
    let mut pairs = 0;
    let mut joker_seen = false;
    for (rank, count) in counts.iter().filter(|&(_, count)| count != core_count) {
        match count {
            2 => pairs += 1,
            1 if is_joker(rank) => {
                if joker_seen {
                    joker_seen = false;
                    pairs += 1;
                } else {
                    joker_seen = true;
                }
            }
            _ => return None,
        }
    }
    (!joker_seen).then_some(pairs)
}

fn is_airplane_with_solo(counts: &RankCounts) -> bool {
    match airplane_core(counts) {
        Some(trios) => solo_attachments(counts, 3) == Some(trios),
        None => false,
    }
}

fn is_airplane_with_pair(counts: &RankCounts) -> bool {
    match airplane_core(counts) {
        Some(trios) => pair_attachments(counts, 3) == Some(trios),
        None => false,
    }
}

fn has_single_bomb(counts: &RankCounts) -> bool {
    counts.ranks_with_count(4).len() == 1
}

fn is_bomb_with_solo(counts: &RankCounts) -> bool {
    has_single_bomb(counts) && solo_attachments(counts, 4) == Some(2)
}

fn is_bomb_with_pair(counts: &RankCounts) -> bool {
    has_single_bomb(counts) && pair_attachments(counts, 4) == Some(2)
}
