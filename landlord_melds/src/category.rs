//! Meld categories.

use std::fmt;
use std::str::FromStr;

use crate::error::MeldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandCategory {
    Solo,
    SoloChain,
    Pair,
    PairChain,
    Trio,
    TrioChain,
    TrioWithSolo,
    TrioWithPair,
    AirplaneWithSolo,
    AirplaneWithPair,
    Bomb,
    BombWithSolo,
    BombWithPair,
    Rocket,
}

impl HandCategory {
    pub const ALL: [HandCategory; 14] = [
        HandCategory::Solo,
        HandCategory::SoloChain,
        HandCategory::Pair,
        HandCategory::PairChain,
        HandCategory::Trio,
        HandCategory::TrioChain,
        HandCategory::TrioWithSolo,
        HandCategory::TrioWithPair,
        HandCategory::AirplaneWithSolo,
        HandCategory::AirplaneWithPair,
        HandCategory::Bomb,
        HandCategory::BombWithSolo,
        HandCategory::BombWithPair,
        HandCategory::Rocket,
    ];

    /// Score multiplier applied to the summed card weights.
    pub fn multiplier(self) -> u32 {
        match self {
            HandCategory::Solo | HandCategory::SoloChain => 1,
            HandCategory::Pair | HandCategory::PairChain => 2,
            HandCategory::Trio
            | HandCategory::TrioChain
            | HandCategory::TrioWithSolo
            | HandCategory::TrioWithPair
            | HandCategory::AirplaneWithSolo
            | HandCategory::AirplaneWithPair => 3,
            HandCategory::Bomb | HandCategory::BombWithSolo | HandCategory::BombWithPair => 5,
            HandCategory::Rocket => 10,
        }
    }

    /// Only the cards of the trio (or trio chain) count towards the score.
    pub fn scores_trios_only(self) -> bool {
        matches!(
            self,
            HandCategory::TrioChain
                | HandCategory::TrioWithSolo
                | HandCategory::TrioWithPair
                | HandCategory::AirplaneWithSolo
                | HandCategory::AirplaneWithPair
        )
    }

    /// Bomb and Rocket beat any meld of another category.
    pub fn is_bomb_or_rocket(self) -> bool {
        matches!(self, HandCategory::Bomb | HandCategory::Rocket)
    }

    /// Number of cards contributed by each chain link, for chain categories.
    pub fn cards_per_link(self) -> Option<usize> {
        match self {
            HandCategory::SoloChain => Some(1),
            HandCategory::PairChain => Some(2),
            HandCategory::TrioChain => Some(3),
            HandCategory::AirplaneWithSolo => Some(4),
            HandCategory::AirplaneWithPair => Some(5),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::Solo => "solo",
            HandCategory::SoloChain => "solo_chain",
            HandCategory::Pair => "pair",
            HandCategory::PairChain => "pair_chain",
            HandCategory::Trio => "trio",
            HandCategory::TrioChain => "trio_chain",
            HandCategory::TrioWithSolo => "trio_with_solo",
            HandCategory::TrioWithPair => "trio_with_pair",
            HandCategory::AirplaneWithSolo => "airplane_with_solo",
            HandCategory::AirplaneWithPair => "airplane_with_pair",
            HandCategory::Bomb => "bomb",
            HandCategory::BombWithSolo => "bomb_with_solo",
            HandCategory::BombWithPair => "bomb_with_pair",
            HandCategory::Rocket => "rocket",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HandCategory {
    type Err = MeldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HandCategory::ALL
            .iter()
            .copied()
            .find(|category| category.name() == s)
            .ok_or_else(|| MeldError::UnknownCategory(s.to_string()))
    }
}
