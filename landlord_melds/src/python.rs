//! Python bindings for the Landlord game loop.
//!
//! Cards cross the boundary as `(rank, suit)` tuples, e.g. `(1, "spades")` or
//! `(15, "joker")`. Engine errors surface as `ValueError`; anything that is
//! not a card tuple is rejected by argument conversion with `TypeError`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyModule;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{Card, Config, HandCategory, MeldError, PreviousPlay, Suit};

type PyCard = (u8, String);
type PyPrevious = (String, u32, usize);

impl From<MeldError> for PyErr {
    fn from(err: MeldError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn to_cards(cards: Vec<PyCard>) -> PyResult<Vec<Card>> {
    cards
        .into_iter()
        .map(|(rank, suit)| -> PyResult<Card> {
            let suit = Suit::from_name(&suit)
                .ok_or_else(|| PyValueError::new_err(format!("unknown suit '{suit}'")))?;
            Ok(Card::new(rank, suit)?)
        })
        .collect()
}

fn to_py_cards(cards: &[Card]) -> Vec<PyCard> {
    cards
        .iter()
        .map(|card| (card.rank(), card.suit().name().to_string()))
        .collect()
}

#[pyfunction]
#[pyo3(name = "classify")]
fn py_classify(cards: Vec<PyCard>) -> PyResult<String> {
    let cards = to_cards(cards)?;
    Ok(crate::classify(&cards)?.to_string())
}

#[pyfunction]
#[pyo3(name = "score")]
fn py_score(cards: Vec<PyCard>, category: &str) -> PyResult<u32> {
    let cards = to_cards(cards)?;
    let category: HandCategory = category.parse()?;
    Ok(crate::checked_score(&cards, category)?)
}

#[pyfunction]
fn previous_play(cards: Vec<PyCard>) -> PyResult<PyPrevious> {
    let cards = to_cards(cards)?;
    let play = PreviousPlay::from_cards(&cards)?;
    Ok((play.category.to_string(), play.score, play.length))
}

#[pyfunction]
#[pyo3(name = "enumerate_candidates", signature = (pool, previous=None, seed=None, config_json=None))]
fn py_enumerate_candidates(
    pool: Vec<PyCard>,
    previous: Option<PyPrevious>,
    seed: Option<u64>,
    config_json: Option<&str>,
) -> PyResult<Option<Vec<PyCard>>> {
    let pool = to_cards(pool)?;
    let previous = previous
        .map(|(category, score, length)| -> PyResult<PreviousPlay> {
            Ok(PreviousPlay {
                category: category.parse()?,
                score,
                length,
            })
        })
        .transpose()?;
    let config = match config_json {
        Some(json) => Config::from_json(json)?,
        None => Config::default(),
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let chosen = crate::enumerate_candidates_with(&config, &pool, previous.as_ref(), &mut rng)?;
    Ok(chosen.map(|meld| to_py_cards(&meld.cards)))
}

#[pymodule]
fn landlord_melds(_py: Python<'_>, module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_function(wrap_pyfunction!(py_classify, module)?)?;
    module.add_function(wrap_pyfunction!(py_score, module)?)?;
    module.add_function(wrap_pyfunction!(previous_play, module)?)?;
    module.add_function(wrap_pyfunction!(py_enumerate_candidates, module)?)?;
    Ok(())
}
