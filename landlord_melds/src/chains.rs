//! Sliding-window search for chains of consecutive rank groups.
//!
//! A group is every card of one rank that takes part in a chain link: one
//! card for solo chains, two for pair chains, three for trio chains. Twos and
//! jokers never chain. The ace ranks above the king, so `10 J Q K A` is a
//! chain but `K A 3` is not.

use crate::deck::{is_ace, is_joker, is_two, Card, KING};
use crate::freq::RankCounts;

/// Limits on the number of links a chain family may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainRule {
    pub group_size: u8,
    pub min_links: usize,
    pub max_links: usize,
}

pub const SOLO_CHAIN: ChainRule = ChainRule {
    group_size: 1,
    min_links: 5,
    max_links: 12,
};

pub const PAIR_CHAIN: ChainRule = ChainRule {
    group_size: 2,
    min_links: 3,
    max_links: 10,
};

pub const TRIO_CHAIN: ChainRule = ChainRule {
    group_size: 3,
    min_links: 2,
    max_links: 6,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainBound {
    /// Every window from `min_links` up to `max_links`, including overlaps.
    Unbounded,
    /// Only windows of exactly this many links.
    Exact(usize),
}

/// One chain found by [`find_chains`]: its groups in ascending chain order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub groups: Vec<Vec<Card>>,
}

impl Chain {
    pub fn links(&self) -> usize {
        self.groups.len()
    }

    pub fn ranks(&self) -> Vec<u8> {
        self.groups
            .iter()
            .filter_map(|group| group.first().map(Card::rank))
            .collect()
    }

    pub fn flatten(&self) -> Vec<Card> {
        self.groups.iter().flatten().copied().collect()
    }
}

/// Position of a rank along a chain, or `None` for ranks that cannot chain.
pub fn chain_position(rank: u8) -> Option<u8> {
    if is_two(rank) || is_joker(rank) {
        None
    } else if is_ace(rank) {
        Some(KING + 1)
    } else {
        Some(rank)
    }
}

/// Finds chains among `groups`, each holding the cards of one rank.
pub fn find_chains(groups: &[Vec<Card>], rule: ChainRule, bound: ChainBound) -> Vec<Chain> {
    // Work on a relocated copy; the caller's groups are left untouched.
    let mut ordered: Vec<(u8, &Vec<Card>)> = groups
        .iter()
        .filter_map(|group| {
            let rank = group.first()?.rank();
            chain_position(rank).map(|position| (position, group))
        })
        .collect();
    ordered.sort_by_key(|&(position, _)| position);

    let mut chains = Vec::new();
    let mut left = 0;
    for right in 0..ordered.len() {
        if right > left && ordered[right].0 != ordered[right - 1].0 + 1 {
            left = right;
        }
        let run = right + 1 - left;
        match bound {
            ChainBound::Exact(width) => {
                if width >= rule.min_links && width <= rule.max_links && run >= width {
                    chains.push(window(&ordered[right + 1 - width..=right]));
                }
            }
            ChainBound::Unbounded => {
                for start in left..=right {
                    let links = right + 1 - start;
                    if links >= rule.min_links && links <= rule.max_links {
                        chains.push(window(&ordered[start..=right]));
                    }
                }
            }
        }
    }
    chains
}

fn window(slice: &[(u8, &Vec<Card>)]) -> Chain {
    Chain {
        groups: slice.iter().map(|(_, group)| (*group).clone()).collect(),
    }
}

/// Whether `ranks` form one unbroken run under chain ordering.
pub fn is_consecutive(ranks: &[u8]) -> bool {
    let mut positions = Vec::with_capacity(ranks.len());
    for &rank in ranks {
        match chain_position(rank) {
            Some(position) => positions.push(position),
            None => return false,
        }
    }
    positions.sort_unstable();
    positions.windows(2).all(|pair| pair[1] == pair[0] + 1)
}

/// Whether the whole multiset is exactly one chain of `rule`'s family.
pub fn is_exact_chain(counts: &RankCounts, rule: ChainRule) -> bool {
    if counts.has_chain_breakers() {
        return false;
    }
    let links = counts.distinct();
    if links < rule.min_links || links > rule.max_links {
        return false;
    }
    if counts.iter().any(|(_, count)| count != rule.group_size) {
        return false;
    }
    let ranks: Vec<u8> = counts.iter().map(|(rank, _)| rank).collect();
    is_consecutive(&ranks)
}
