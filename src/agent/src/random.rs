//! Injectable source of randomness for the opponent.
//!
//! Every `rand::Rng` is a `RandomSource`, so production code passes an
//! entropy-seeded RNG and tests pass a seeded one (or a scripted source).

use common::model::game::Move;
use rand::{seq::IndexedRandom, Rng};

pub trait RandomSource {
    /// Pick one of `candidates` uniformly. `None` only if `candidates` is empty.
    fn pick(&mut self, candidates: &[Move]) -> Option<Move>;
}

impl<R: Rng> RandomSource for R {
    fn pick(&mut self, candidates: &[Move]) -> Option<Move> {
        candidates.choose(self).copied()
    }
}
