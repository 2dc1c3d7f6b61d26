//! Card metadata and rank helpers for the Landlord meld engine.

use std::fmt;

use crate::error::{MeldError, Result};

pub const NUM_RANKS: usize = 15;
pub const DECK_SIZE: usize = 54;

pub const ACE: u8 = 1;
pub const TWO: u8 = 2;
pub const THREE: u8 = 3;
pub const JACK: u8 = 11;
pub const QUEEN: u8 = 12;
pub const KING: u8 = 13;
pub const BLACK_JOKER: u8 = 14;
pub const RED_JOKER: u8 = 15;

// Indexed by rank - 1. Strictly increasing in game order:
// 3 < 4 < ... < K < A < 2 < black joker < red joker.
const RANK_WEIGHTS: [u32; NUM_RANKS] = [
    233, 377, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 610, 987,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
    Joker,
}

impl Suit {
    pub const STANDARD: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
            Suit::Joker => "joker",
        }
    }

    pub fn from_name(name: &str) -> Option<Suit> {
        match name.to_ascii_lowercase().as_str() {
            "hearts" => Some(Suit::Hearts),
            "diamonds" => Some(Suit::Diamonds),
            "clubs" => Some(Suit::Clubs),
            "spades" => Some(Suit::Spades),
            "joker" => Some(Suit::Joker),
            _ => None,
        }
    }
}

/// A single card. Construction validates the rank/suit pairing, so every
/// `Card` has a defined weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    pub fn new(rank: u8, suit: Suit) -> Result<Card> {
        let valid = match rank {
            ACE..=KING => suit != Suit::Joker,
            BLACK_JOKER | RED_JOKER => suit == Suit::Joker,
            _ => false,
        };
        if !valid {
            return Err(MeldError::InvalidCard { rank, suit });
        }
        Ok(Card { rank, suit })
    }

    pub fn black_joker() -> Card {
        Card {
            rank: BLACK_JOKER,
            suit: Suit::Joker,
        }
    }

    pub fn red_joker() -> Card {
        Card {
            rank: RED_JOKER,
            suit: Suit::Joker,
        }
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn weight(&self) -> u32 {
        weight(self.rank)
    }

    pub fn is_joker(&self) -> bool {
        is_joker(self.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            ACE => write!(f, "A"),
            JACK => write!(f, "J"),
            QUEEN => write!(f, "Q"),
            KING => write!(f, "K"),
            BLACK_JOKER => write!(f, "BJ"),
            RED_JOKER => write!(f, "RJ"),
            rank => write!(f, "{rank}"),
        }
    }
}

/// Strength weight of a rank. Ranks outside 1..=15 are a programming error.
pub fn weight(rank: u8) -> u32 {
    RANK_WEIGHTS[rank as usize - 1]
}

pub fn is_joker(rank: u8) -> bool {
    rank == BLACK_JOKER || rank == RED_JOKER
}

pub fn is_two(rank: u8) -> bool {
    rank == TWO
}

pub fn is_ace(rank: u8) -> bool {
    rank == ACE
}

/// The full 54-card deck: four suits of A..K plus both jokers.
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for rank in ACE..=KING {
        for suit in Suit::STANDARD {
            deck.push(Card { rank, suit });
        }
    }
    deck.push(Card::black_joker());
    deck.push(Card::red_joker());
    deck
}

/// Groups cards by rank in ascending rank order, one group per distinct rank.
pub fn group_by_rank(cards: &[Card]) -> Vec<Vec<Card>> {
    let mut by_rank = vec![Vec::<Card>::new(); NUM_RANKS];
    for card in cards {
        by_rank[card.rank as usize - 1].push(*card);
    }
    by_rank.into_iter().filter(|group| !group.is_empty()).collect()
}

pub fn ranks_of(cards: &[Card]) -> Vec<u8> {
    let mut ranks: Vec<u8> = cards.iter().map(Card::rank).collect();
    ranks.sort_unstable_by_key(|&rank| weight(rank));
    ranks
}
