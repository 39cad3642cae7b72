pub mod config;
pub mod entrypoint;
pub mod model;
pub mod service;

pub use agent::select_opponent_move;
pub use common::validation::validate_move;
pub use model::internal::MatchState;
pub use service::{game_state::apply_round, resolver::resolve_round};
