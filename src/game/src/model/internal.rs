use common::model::game::MatchResult;
use serde::Serialize;

pub const ROUNDS_PER_MATCH: u8 = 3;

/// Authoritative state of one match. Only `apply_round` mutates it.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    pub round_number: u8,
    pub user_score: u8,
    pub bot_score: u8,
    pub user_bomb_used: bool,
    pub bot_bomb_used: bool,
    pub match_over: bool,
}

impl MatchState {
    pub fn new() -> Self {
        MatchState {
            round_number: 1,
            user_score: 0,
            bot_score: 0,
            user_bomb_used: false,
            bot_bomb_used: false,
            match_over: false,
        }
    }

    /// Final result, once all rounds have been played.
    pub fn result(&self) -> Option<MatchResult> {
        self.match_over
            .then(|| MatchResult::from_scores(self.user_score, self.bot_score))
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state() {
        let state = MatchState::default();
        assert_eq!(state.round_number, 1);
        assert_eq!((state.user_score, state.bot_score), (0, 0));
        assert!(!state.user_bomb_used && !state.bot_bomb_used);
        assert!(!state.match_over);
        assert_eq!(state.result(), None);
    }

    #[test]
    fn result_only_when_over() {
        let mut state = MatchState {
            round_number: 3,
            user_score: 2,
            bot_score: 1,
            ..MatchState::new()
        };
        assert_eq!(state.result(), None);
        state.match_over = true;
        assert_eq!(state.result(), Some(MatchResult::UserWinsMatch));
    }
}
