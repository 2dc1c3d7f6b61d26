//! Enumeration of Landlord meld candidates from a card pool.

use tracing::{debug, error};

use crate::bitset::{contains, mask_of, rank_bit};
use crate::chains::{find_chains, Chain, ChainBound, PAIR_CHAIN, SOLO_CHAIN, TRIO_CHAIN};
use crate::deck::{group_by_rank, Card, BLACK_JOKER, RED_JOKER};
use crate::error::{MeldError, Result};
use crate::meld::{Meld, PreviousPlay};

#[derive(Default)]
struct Candidates {
    melds: Vec<Meld>,
}

impl Candidates {
    fn push(&mut self, cards: Vec<Card>) -> Result<()> {
        let meld = Meld::new(cards).map_err(|err| match err {
            MeldError::UnrecognizedCategory { ranks } => {
                error!(?ranks, "generated meld failed classification");
                MeldError::GeneratorDefect { ranks }
            }
            other => other,
        })?;
        self.melds.push(meld);
        Ok(())
    }
}

/// Every single card of the pool as a solo meld.
pub fn solo_melds(pool: &[Card]) -> Result<Vec<Meld>> {
    pool.iter().map(|card| Meld::new(vec![*card])).collect()
}

/// Builds every candidate meld extractable from `pool`, single cards aside.
///
/// With a previous play, chain searches only report chains of the previous
/// play's width, so a chain candidate can only match a chain of equal length.
pub fn candidate_melds(pool: &[Card], previous: Option<&PreviousPlay>) -> Result<Vec<Meld>> {
    if pool.is_empty() {
        return Err(MeldError::EmptyPool);
    }
    let bound = previous.map_or(ChainBound::Unbounded, |play| {
        ChainBound::Exact(play.chain_links())
    });

    let groups = group_by_rank(pool);
    let of_size = |size: usize| -> Vec<Vec<Card>> {
        groups.iter().filter(|group| group.len() == size).cloned().collect()
    };
    let mut pairs = of_size(2);
    let trios = of_size(3);
    let bombs = of_size(4);

    let mut candidates = Candidates::default();

    let jokers: Vec<Card> = pool
        .iter()
        .filter(|card| card.rank() == BLACK_JOKER || card.rank() == RED_JOKER)
        .copied()
        .collect();
    if jokers.len() == 2 {
        candidates.push(jokers)?;
    }
    for bomb in &bombs {
        candidates.push(bomb.clone())?;
    }
    for group in pairs.iter().chain(trios.iter()) {
        candidates.push(group.clone())?;
    }

    for trio in &trios {
        let trio_rank = trio[0].rank();
        for card in pool.iter().filter(|card| card.rank() != trio_rank) {
            let mut cards = trio.clone();
            cards.push(*card);
            candidates.push(cards)?;
        }
        for pair in &pairs {
            let mut cards = trio.clone();
            cards.extend_from_slice(pair);
            candidates.push(cards)?;
        }
    }

    let trio_chains = find_chains(&trios, TRIO_CHAIN, bound);
    let pair_chains = find_chains(&pairs, PAIR_CHAIN, bound);
    let singles: Vec<Vec<Card>> = groups.iter().map(|group| vec![group[0]]).collect();
    let solo_chains = find_chains(&singles, SOLO_CHAIN, bound);
    for chain in trio_chains.iter().chain(&pair_chains).chain(&solo_chains) {
        candidates.push(chain.flatten())?;
    }

    // Attachments prefer the weakest cards.
    pairs.sort_by_key(|pair| pair[0].weight());
    let mut by_weight = pool.to_vec();
    by_weight.sort_by_key(Card::weight);
    for chain in &trio_chains {
        if let Some(cards) = airplane_with_pairs(chain, &pairs) {
            candidates.push(cards)?;
        }
        if let Some(cards) = airplane_with_solos(chain, &by_weight) {
            candidates.push(cards)?;
        }
    }

    debug!(
        pool = pool.len(),
        candidates = candidates.melds.len(),
        ?bound,
        "enumerated meld candidates"
    );
    Ok(candidates.melds)
}

fn airplane_with_pairs(chain: &Chain, pairs: &[Vec<Card>]) -> Option<Vec<Card>> {
    let chain_mask = mask_of(chain.ranks());
    let attached: Vec<&Vec<Card>> = pairs
        .iter()
        .filter(|pair| !contains(chain_mask, pair[0].rank()))
        .take(chain.links())
        .collect();
    if attached.len() < chain.links() {
        return None;
    }
    let mut cards = chain.flatten();
    for pair in attached {
        cards.extend_from_slice(pair);
    }
    Some(cards)
}

fn airplane_with_solos(chain: &Chain, by_weight: &[Card]) -> Option<Vec<Card>> {
    let mut used = mask_of(chain.ranks());
    let mut cards = chain.flatten();
    let mut needed = chain.links();
    for card in by_weight {
        if needed == 0 {
            break;
        }
        if card.is_joker() || contains(used, card.rank()) {
            continue;
        }
        used |= rank_bit(card.rank());
        cards.push(*card);
        needed -= 1;
    }
    (needed == 0).then_some(cards)
}
