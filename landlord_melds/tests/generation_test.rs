//! End-to-end candidate generation and selection scenarios.

mod common;

use common::{cards, init_logging, sorted_ranks};
use landlord_melds::{
    beating_melds, candidate_melds, enumerate_candidates, enumerate_candidates_with, Config,
    HandCategory, Meld, MeldError, PreviousPlay,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn of_category(melds: &[Meld], category: HandCategory) -> Vec<&Meld> {
    melds.iter().filter(|meld| meld.category == category).collect()
}

#[test]
fn airplane_pool_offers_trios_and_an_airplane_with_solos() {
    init_logging();
    let pool = cards(&[3, 3, 3, 4, 4, 4, 7, 8, 9, 10, 11]);
    let melds = candidate_melds(&pool, None).unwrap();

    let trios: Vec<Vec<u8>> = of_category(&melds, HandCategory::Trio)
        .into_iter()
        .map(|meld| sorted_ranks(&meld.cards))
        .collect();
    assert!(trios.contains(&vec![3, 3, 3]));
    assert!(trios.contains(&vec![4, 4, 4]));

    let airplanes = of_category(&melds, HandCategory::AirplaneWithSolo);
    assert!(!airplanes.is_empty());
    for airplane in airplanes {
        let ranks = sorted_ranks(&airplane.cards);
        assert_eq!(&ranks[..6], &[3, 3, 3, 4, 4, 4]);
        let solos = &ranks[6..];
        assert_eq!(solos.len(), 2);
        assert_ne!(solos[0], solos[1]);
        assert!(solos.iter().all(|&rank| rank != 3 && rank != 4));
    }

    let chains = of_category(&melds, HandCategory::SoloChain);
    assert!(chains
        .iter()
        .any(|meld| sorted_ranks(&meld.cards) == vec![7, 8, 9, 10, 11]));
}

#[test]
fn every_candidate_is_drawn_from_the_pool() {
    let pool = cards(&[3, 3, 3, 4, 4, 4, 5, 5, 6, 6, 7, 8, 9, 10, 13, 13, 13, 13, 14, 15]);
    for meld in candidate_melds(&pool, None).unwrap() {
        let mut remaining = pool.clone();
        for card in &meld.cards {
            let index = remaining
                .iter()
                .position(|other| other == card)
                .unwrap_or_else(|| panic!("{meld} uses a card outside the pool"));
            remaining.swap_remove(index);
        }
    }
}

#[test]
fn beating_set_respects_category_length_and_score() {
    init_logging();
    let previous = PreviousPlay::from_cards(&cards(&[5, 5, 6, 6, 7, 7])).unwrap();
    assert_eq!(previous.category, HandCategory::PairChain);

    let pool = cards(&[3, 3, 4, 4, 5, 5, 6, 6, 8, 8, 9, 9, 10, 10, 1]);
    let beating = beating_melds(&pool, &previous).unwrap();
    let chains: Vec<Vec<u8>> = beating.iter().map(|meld| sorted_ranks(&meld.cards)).collect();
    assert_eq!(
        chains,
        vec![vec![8, 8, 9, 9, 10, 10]],
        "only the higher three-pair chain beats"
    );
}

#[test]
fn bombs_and_rockets_beat_any_ordinary_play() {
    let previous = PreviousPlay::from_cards(&cards(&[
        11, 11, 11, 12, 12, 12, 13, 13, 13, 1, 1, 1, 6, 6, 7, 7, 8, 8, 9, 9,
    ]))
    .unwrap();
    assert_eq!(previous.category, HandCategory::AirplaneWithPair);

    let pool = cards(&[3, 3, 3, 3, 5, 14, 15]);
    let found: Vec<HandCategory> = beating_melds(&pool, &previous)
        .unwrap()
        .iter()
        .map(|meld| meld.category)
        .collect();
    assert!(found.contains(&HandCategory::Bomb));
    assert!(found.contains(&HandCategory::Rocket));
    assert!(!found.contains(&HandCategory::Solo));
}

#[test]
fn rocket_beats_the_highest_bomb() {
    let previous = PreviousPlay::from_cards(&cards(&[2, 2, 2, 2])).unwrap();
    let beating = beating_melds(&cards(&[1, 1, 1, 1, 14, 15]), &previous).unwrap();
    let found: Vec<HandCategory> = beating.iter().map(|meld| meld.category).collect();
    assert_eq!(found, vec![HandCategory::Rocket]);
}

#[test]
fn seeded_selection_is_reproducible() {
    let pool = cards(&[3, 3, 3, 4, 4, 4, 7, 8, 9, 10, 11, 12, 12, 2, 14]);
    let previous = PreviousPlay::from_cards(&cards(&[6])).unwrap();
    for seed in 0..16 {
        let first = enumerate_candidates(&pool, None, &mut StdRng::seed_from_u64(seed)).unwrap();
        let second = enumerate_candidates(&pool, None, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_eq!(first, second);
        assert!(first.is_some());

        let reply = enumerate_candidates(&pool, Some(&previous), &mut StdRng::seed_from_u64(seed))
            .unwrap()
            .expect("higher singles exist");
        assert!(previous.is_beaten_by(&reply));
    }
}

#[test]
fn lead_always_single_with_certain_probability() {
    let config = Config::from_json(r#"{"lead_solo_probability": 1.0}"#).unwrap();
    let pool = cards(&[5, 5, 5, 6, 6, 6, 9, 9]);
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let meld = enumerate_candidates_with(&config, &pool, None, &mut rng)
            .unwrap()
            .unwrap();
        assert_eq!(meld.category, HandCategory::Solo);
    }
}

#[test]
fn lead_never_single_with_zero_probability_when_melds_exist() {
    let config = Config {
        lead_solo_probability: 0.0,
    };
    let pool = cards(&[5, 5, 5, 6, 6, 6, 9, 9]);
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let meld = enumerate_candidates_with(&config, &pool, None, &mut rng)
            .unwrap()
            .unwrap();
        assert_ne!(meld.category, HandCategory::Solo);
    }
}

#[test]
fn empty_pool_is_rejected_everywhere() {
    let previous = PreviousPlay::from_cards(&cards(&[6])).unwrap();
    assert_eq!(candidate_melds(&[], None), Err(MeldError::EmptyPool));
    assert_eq!(
        enumerate_candidates(&[], Some(&previous), &mut StdRng::seed_from_u64(1)),
        Err(MeldError::EmptyPool)
    );
}
