//! Choosing the meld to play from the generated candidates.

use tracing::debug;

use crate::candidates::{candidate_melds, solo_melds};
use crate::config::Config;
use crate::deck::Card;
use crate::error::{MeldError, Result};
use crate::meld::{Meld, PreviousPlay};
use crate::random::{choose, RandomSource};

/// Candidates (single cards included) that beat `previous`.
pub fn beating_melds(pool: &[Card], previous: &PreviousPlay) -> Result<Vec<Meld>> {
    let mut melds = candidate_melds(pool, Some(previous))?;
    melds.extend(solo_melds(pool)?);
    melds.retain(|meld| previous.is_beaten_by(meld));
    Ok(melds)
}

/// Picks the next play from `pool` with the default [`Config`].
///
/// Returns `Ok(None)` when nothing in the pool beats `previous` (a pass).
pub fn enumerate_candidates<R: RandomSource + ?Sized>(
    pool: &[Card],
    previous: Option<&PreviousPlay>,
    rng: &mut R,
) -> Result<Option<Meld>> {
    enumerate_candidates_with(&Config::default(), pool, previous, rng)
}

pub fn enumerate_candidates_with<R: RandomSource + ?Sized>(
    config: &Config,
    pool: &[Card],
    previous: Option<&PreviousPlay>,
    rng: &mut R,
) -> Result<Option<Meld>> {
    config.validate()?;
    if pool.is_empty() {
        return Err(MeldError::EmptyPool);
    }

    let Some(previous) = previous else {
        if pool.len() == 1 || rng.chance(config.lead_solo_probability) {
            debug!(pool = pool.len(), "leading with a single card");
            return random_solo(pool, rng).map(Some);
        }
        let melds = candidate_melds(pool, None)?;
        return match choose(rng, &melds) {
            Some(meld) => {
                debug!(%meld, choices = melds.len(), "leading with a random candidate");
                Ok(Some(meld.clone()))
            }
            None => random_solo(pool, rng).map(Some),
        };
    };

    let beating = beating_melds(pool, previous)?;
    let chosen = choose(rng, &beating).cloned();
    match &chosen {
        Some(meld) => debug!(%meld, choices = beating.len(), "beating previous play"),
        None => debug!(previous = %previous.category, "no candidate beats previous play, passing"),
    }
    Ok(chosen)
}

fn random_solo<R: RandomSource + ?Sized>(pool: &[Card], rng: &mut R) -> Result<Meld> {
    let card = choose(rng, pool).ok_or(MeldError::EmptyPool)?;
    Meld::new(vec![*card])
}
