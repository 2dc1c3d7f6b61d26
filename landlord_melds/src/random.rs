//! Injectable randomness for candidate selection.

use rand::Rng;

/// The two random decisions the selector makes.
pub trait RandomSource {
    /// Returns true with the given probability, which lies in [0, 1].
    fn chance(&mut self, probability: f64) -> bool;

    /// Uniformly picks an index below `len`; `None` when `len` is zero.
    fn choose_index(&mut self, len: usize) -> Option<usize>;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn chance(&mut self, probability: f64) -> bool {
        self.gen_bool(probability)
    }

    fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.gen_range(0..len))
        }
    }
}

pub fn choose<'a, T, R: RandomSource + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    rng.choose_index(items.len()).and_then(|index| items.get(index))
}
