//! Category-aware strength scoring.

use crate::category::HandCategory;
use crate::classify::classify;
use crate::deck::{ranks_of, Card};
use crate::error::{MeldError, Result};
use crate::freq::RankCounts;

/// Sums card weights and scales by the category multiplier. Trio families
/// only count the cards of their trios, never the attachments.
///
/// `category` must be the one [`classify`] reports for `cards`; the pair is
/// not re-checked here. Use [`checked_score`] for a category that comes from
/// outside the engine.
pub fn score(cards: &[Card], category: HandCategory) -> u32 {
    let points: u32 = if category.scores_trios_only() {
        let counts = RankCounts::from_cards(cards);
        cards
            .iter()
            .filter(|card| counts.count(card.rank()) == 3)
            .map(Card::weight)
            .sum()
    } else {
        cards.iter().map(Card::weight).sum()
    };
    points * category.multiplier()
}

/// [`score`] after confirming that `cards` really form `category`.
pub fn checked_score(cards: &[Card], category: HandCategory) -> Result<u32> {
    let actual = classify(cards)?;
    if actual != category {
        return Err(MeldError::CategoryMismatch {
            ranks: ranks_of(cards),
            claimed: category,
            actual,
        });
    }
    Ok(score(cards, category))
}
