use common::model::game::{Move, Outcome};

/// Decide a round. Bomb beats everything except another bomb,
/// otherwise rock > scissors > paper > rock.
pub fn resolve_round(user_move: Move, opponent_move: Move) -> Outcome {
    match user_move.beats(&opponent_move) {
        Some(true) => Outcome::UserWins,
        Some(false) => Outcome::BotWins,
        None => Outcome::Draw,
    }
}
