use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::game::Move;

/// Why a submitted move was not accepted. Either way the round is wasted,
/// the match itself carries on.
#[derive(Error, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("Invalid move. Use rock, paper, scissors, or bomb.")]
    UnrecognizedMove,
    #[error("Bomb can be used only once.")]
    BombAlreadyUsed,
}

/// Map raw user input onto a legal move for a player whose bomb may already be spent.
pub fn validate_move(raw_input: &str, bomb_already_used: bool) -> Result<Move, RejectionReason> {
    let value: Move = raw_input.parse()?;
    if value == Move::Bomb && bomb_already_used {
        return Err(RejectionReason::BombAlreadyUsed);
    }
    Ok(value)
}
