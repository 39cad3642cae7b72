use common::model::game::{Move, Outcome};
use thiserror::Error;
use tracing::debug;

use crate::model::internal::{MatchState, ROUNDS_PER_MATCH};

#[derive(Debug, Error, PartialEq)]
pub enum StateError {
    #[error("match is already over after round {round}")]
    MatchOver { round: u8 },
}

/// Commit a resolved round. `user_move` is `None` for a wasted round.
///
/// Bomb flags are set for whoever played a bomb, whatever the outcome.
/// The round counter stops at the last round and flips `match_over` instead.
pub fn apply_round(
    state: &mut MatchState,
    outcome: Outcome,
    user_move: Option<Move>,
    opponent_move: Move,
) -> Result<(), StateError> {
    if state.match_over {
        return Err(StateError::MatchOver {
            round: state.round_number,
        });
    }

    if user_move == Some(Move::Bomb) {
        state.user_bomb_used = true;
    }
    if opponent_move == Move::Bomb {
        state.bot_bomb_used = true;
    }

    match outcome {
        Outcome::UserWins => state.user_score += 1,
        Outcome::BotWins => state.bot_score += 1,
        Outcome::Draw => {}
    }

    if state.round_number == ROUNDS_PER_MATCH {
        state.match_over = true;
    } else {
        state.round_number += 1;
    }
    debug!("Applied {:?}: {:?}", outcome, state);
    Ok(())
}
