use common::model::game::Move;
use thiserror::Error;

use crate::random::RandomSource;

#[derive(Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error("random source produced no move from {candidates:?}")]
    NoMove { candidates: Vec<Move> },
    #[error("random source produced {value} which is not one of {candidates:?}")]
    OutsideCandidates { value: Move, candidates: Vec<Move> },
    #[error("could not seed from OS entropy: {0}")]
    Entropy(String),
}

pub trait Strategy {
    fn make_move(&mut self, bomb_available: bool) -> Result<Move, SelectionError>;
}

/// Uniform over every move still legal for the bot.
pub struct RandomMove<R: RandomSource> {
    source: R,
}

impl<R: RandomSource> RandomMove<R> {
    pub fn new(source: R) -> Self {
        RandomMove { source }
    }
}

impl<R: RandomSource> Strategy for RandomMove<R> {
    fn make_move(&mut self, bomb_available: bool) -> Result<Move, SelectionError> {
        select_opponent_move(&mut self.source, !bomb_available)
    }
}

/// Pick the bot's move: rock, paper or scissors, plus bomb while it is unused.
/// Does not mark the bomb as used; that happens when the round is applied.
pub fn select_opponent_move<R>(source: &mut R, bomb_already_used: bool) -> Result<Move, SelectionError>
where
    R: RandomSource + ?Sized,
{
    let candidates: &[Move] = if bomb_already_used {
        &Move::CLASSIC
    } else {
        &Move::ALL
    };
    pick_from(source, candidates)
}

pub(crate) fn pick_from<R>(source: &mut R, candidates: &[Move]) -> Result<Move, SelectionError>
where
    R: RandomSource + ?Sized,
{
    let value = source.pick(candidates).ok_or_else(|| SelectionError::NoMove {
        candidates: candidates.to_vec(),
    })?;
    if !candidates.contains(&value) {
        return Err(SelectionError::OutsideCandidates {
            value,
            candidates: candidates.to_vec(),
        });
    }
    Ok(value)
}
