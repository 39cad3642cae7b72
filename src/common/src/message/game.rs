use crate::{
    model::game::{MatchResult, Move, Outcome},
    validation::RejectionReason,
};
use serde::{Deserialize, Serialize};

// Match -> player reports
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum MatchEvent {
    PendingMove {
        round: u8,
    },
    RoundResult {
        round: u8,
        user_move: Move,
        bot_move: Move,
        outcome: Outcome,
        user_score: u8,
        bot_score: u8,
    },
    /// The user's input was rejected; the round still counts.
    WastedRound {
        round: u8,
        reason: RejectionReason,
        bot_move: Move,
        user_score: u8,
        bot_score: u8,
    },
    MatchOver {
        result: MatchResult,
        user_score: u8,
        bot_score: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_are_tagged_by_type() {
        let event = MatchEvent::RoundResult {
            round: 1,
            user_move: Move::Rock,
            bot_move: Move::Scissors,
            outcome: Outcome::UserWins,
            user_score: 1,
            bot_score: 0,
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "type": "RoundResult",
                "round": 1,
                "user_move": "rock",
                "bot_move": "scissors",
                "outcome": "UserWins",
                "user_score": 1,
                "bot_score": 0,
            })
        );
    }

    #[test]
    fn wasted_round_carries_reason() {
        let text = r#"{"type":"WastedRound","round":2,"reason":"BombAlreadyUsed","bot_move":"bomb","user_score":0,"bot_score":1}"#;
        let event: MatchEvent = serde_json::from_str(text).unwrap();
        assert_eq!(
            event,
            MatchEvent::WastedRound {
                round: 2,
                reason: RejectionReason::BombAlreadyUsed,
                bot_move: Move::Bomb,
                user_score: 0,
                bot_score: 1,
            }
        );
    }
}
