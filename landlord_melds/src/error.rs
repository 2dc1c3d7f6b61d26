//! Error type shared by every engine operation.

use thiserror::Error;

use crate::category::HandCategory;
use crate::deck::Suit;

pub type Result<T> = std::result::Result<T, MeldError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeldError {
    #[error("invalid card: rank {rank} cannot carry suit {suit:?}")]
    InvalidCard { rank: u8, suit: Suit },

    #[error("card pool is empty; a pool must contain at least one card")]
    EmptyPool,

    #[error("a meld needs at least one card")]
    EmptyMeld,

    /// The cards match none of the meld categories. Callers validating a play
    /// treat this as "cannot be played".
    #[error("cards {ranks:?} do not form a recognised meld")]
    UnrecognizedCategory { ranks: Vec<u8> },

    /// The candidate generator produced a meld that does not classify.
    #[error("generator produced an unplayable meld {ranks:?}")]
    GeneratorDefect { ranks: Vec<u8> },

    /// A caller-supplied category disagrees with what the cards form.
    #[error("cards {ranks:?} form {actual}, not {claimed}")]
    CategoryMismatch {
        ranks: Vec<u8>,
        claimed: HandCategory,
        actual: HandCategory,
    },

    #[error("unknown hand category '{0}'")]
    UnknownCategory(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for MeldError {
    fn from(err: serde_json::Error) -> Self {
        MeldError::InvalidConfig(err.to_string())
    }
}
