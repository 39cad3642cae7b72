pub mod opponent;
pub mod random;
pub mod strategy;

pub use opponent::Opponent;
pub use random::RandomSource;
pub use strategy::{select_opponent_move, RandomMove, SelectionError, Strategy};
