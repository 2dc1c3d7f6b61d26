//! Classified melds and the previous-play constraint.

use std::fmt;

use crate::category::HandCategory;
use crate::classify::classify;
use crate::deck::Card;
use crate::error::Result;
use crate::score::score;

/// A playable set of cards with its category and score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meld {
    pub cards: Vec<Card>,
    pub category: HandCategory,
    pub score: u32,
}

impl Meld {
    /// Classifies and scores `cards`. Fails if they are not a legal meld.
    pub fn new(cards: Vec<Card>) -> Result<Meld> {
        let category = classify(&cards)?;
        let score = score(&cards, category);
        Ok(Meld {
            cards,
            category,
            score,
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn ranks(&self) -> Vec<u8> {
        self.cards.iter().map(Card::rank).collect()
    }
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.category)?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "] ({})", self.score)
    }
}

/// What the next player has to beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviousPlay {
    pub category: HandCategory,
    pub score: u32,
    pub length: usize,
}

impl PreviousPlay {
    pub fn from_cards(cards: &[Card]) -> Result<PreviousPlay> {
        let category = classify(cards)?;
        Ok(PreviousPlay {
            category,
            score: score(cards, category),
            length: cards.len(),
        })
    }

    /// Number of chain links a candidate chain must have to match this play,
    /// or 0 when the play is not a chain.
    pub fn chain_links(&self) -> usize {
        self.category
            .cards_per_link()
            .map_or(0, |per_link| self.length / per_link)
    }

    pub fn is_beaten_by(&self, meld: &Meld) -> bool {
        if meld.category.is_bomb_or_rocket() {
            return !self.category.is_bomb_or_rocket() || meld.score > self.score;
        }
        meld.category == self.category && meld.len() == self.length && meld.score > self.score
    }
}

impl From<&Meld> for PreviousPlay {
    fn from(meld: &Meld) -> Self {
        PreviousPlay {
            category: meld.category,
            score: meld.score,
            length: meld.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Suit;
    use crate::error::MeldError;

    fn meld(ranks: &[u8]) -> Meld {
        let cards = ranks
            .iter()
            .enumerate()
            .map(|(i, &rank)| {
                if rank >= 14 {
                    Card::new(rank, Suit::Joker).unwrap()
                } else {
                    Card::new(rank, Suit::STANDARD[i % 4]).unwrap()
                }
            })
            .collect();
        Meld::new(cards).unwrap()
    }

    #[test]
    fn empty_cards_are_not_a_meld() {
        assert_eq!(Meld::new(Vec::new()), Err(MeldError::EmptyMeld));
        assert_eq!(PreviousPlay::from_cards(&[]), Err(MeldError::EmptyMeld));
    }

    #[test]
    fn meld_new_rejects_illegal_cards() {
        let cards = vec![
            Card::new(3, Suit::Hearts).unwrap(),
            Card::new(4, Suit::Hearts).unwrap(),
        ];
        assert_eq!(
            Meld::new(cards),
            Err(MeldError::UnrecognizedCategory { ranks: vec![3, 4] })
        );
    }

    #[test]
    fn chain_links_per_category() {
        let links = |ranks: &[u8]| PreviousPlay::from(&meld(ranks)).chain_links();
        assert_eq!(links(&[3, 4, 5, 6, 7, 8]), 6);
        assert_eq!(links(&[3, 3, 4, 4, 5, 5]), 3);
        assert_eq!(links(&[3, 3, 3, 4, 4, 4]), 2);
        assert_eq!(links(&[3, 3, 3, 4, 4, 4, 9, 11]), 2);
        assert_eq!(links(&[3, 3, 3, 4, 4, 4, 9, 9, 11, 11]), 2);
        assert_eq!(links(&[9, 9, 9, 5]), 0);
    }

    #[test]
    fn same_category_needs_higher_score() {
        let previous = PreviousPlay::from(&meld(&[3, 3, 3]));
        assert_eq!(previous.score, 9);
        assert!(previous.is_beaten_by(&meld(&[5, 5, 5])));
        assert!(!previous.is_beaten_by(&meld(&[3, 3, 3])));
        assert!(!previous.is_beaten_by(&meld(&[5, 5])));
    }

    #[test]
    fn chains_must_match_length() {
        let previous = PreviousPlay::from(&meld(&[3, 4, 5, 6, 7]));
        assert!(previous.is_beaten_by(&meld(&[4, 5, 6, 7, 8])));
        assert!(!previous.is_beaten_by(&meld(&[4, 5, 6, 7, 8, 9])));
    }

    #[test]
    fn bombs_and_rockets_override() {
        let chain = PreviousPlay::from(&meld(&[10, 11, 12, 13, 1]));
        assert!(chain.is_beaten_by(&meld(&[3, 3, 3, 3])));
        assert!(chain.is_beaten_by(&meld(&[14, 15])));

        let bomb = PreviousPlay::from(&meld(&[9, 9, 9, 9]));
        assert!(bomb.is_beaten_by(&meld(&[10, 10, 10, 10])));
        assert!(!bomb.is_beaten_by(&meld(&[4, 4, 4, 4])));
        assert!(bomb.is_beaten_by(&meld(&[14, 15])));

        let rocket = PreviousPlay::from(&meld(&[14, 15]));
        assert!(!rocket.is_beaten_by(&meld(&[2, 2, 2, 2])));
    }
}
