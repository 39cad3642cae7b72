use common::{
    message::game::MatchEvent,
    model::game::{MatchResult, Outcome},
};

pub const BANNER: &str = "Rock–Paper–Scissors–Plus\n\
                          Best of 3 rounds\n\
                          Moves: rock, paper, scissors, bomb\n\
                          Bomb beats all but can be used once\n";

/// Terminal text for a match report.
pub fn render(event: &MatchEvent) -> String {
    match event {
        MatchEvent::PendingMove { round } => format!("\nRound {}\nYour move: ", round),
        MatchEvent::RoundResult {
            user_move,
            bot_move,
            outcome,
            user_score,
            bot_score,
            ..
        } => {
            let result = match outcome {
                Outcome::Draw => "Draw",
                Outcome::UserWins => "You win this round",
                Outcome::BotWins => "Bot wins this round",
            };
            format!(
                "You played: {}\nBot played: {}\nResult: {}\n{}",
                user_move,
                bot_move,
                result,
                score_line(*user_score, *bot_score)
            )
        }
        MatchEvent::WastedRound {
            reason,
            bot_move,
            user_score,
            bot_score,
            ..
        } => format!(
            "{}\nRound wasted.\nBot played: {}\n{}",
            reason,
            bot_move,
            score_line(*user_score, *bot_score)
        ),
        MatchEvent::MatchOver {
            result,
            user_score,
            bot_score,
        } => {
            let result = match result {
                MatchResult::UserWinsMatch => "You win the game",
                MatchResult::BotWinsMatch => "Bot wins the game",
                MatchResult::DrawMatch => "Draw",
            };
            format!(
                "\nGame Over\nFinal Score → You: {}, Bot: {}\nFinal Result: {}\n",
                user_score, bot_score, result
            )
        }
    }
}

fn score_line(user_score: u8, bot_score: u8) -> String {
    format!("Score → You: {}, Bot: {}\n", user_score, bot_score)
}

#[cfg(test)]
mod tests {
    use common::{model::game::Move, validation::RejectionReason};

    use super::*;

    #[test]
    fn banner_lists_rules() {
        assert!(BANNER.starts_with("Rock–Paper–Scissors–Plus\nBest of 3 rounds\n"));
        assert!(BANNER.contains("Moves: rock, paper, scissors, bomb"));
        assert!(BANNER.contains("Bomb beats all but can be used once"));
    }

    #[test]
    fn prompt_shows_round() {
        assert_eq!(
            render(&MatchEvent::PendingMove { round: 2 }),
            "\nRound 2\nYour move: "
        );
    }

    #[test]
    fn round_report() {
        let text = render(&MatchEvent::RoundResult {
            round: 1,
            user_move: Move::Paper,
            bot_move: Move::Bomb,
            outcome: Outcome::BotWins,
            user_score: 0,
            bot_score: 1,
        });
        assert_eq!(
            text,
            "You played: paper\nBot played: bomb\nResult: Bot wins this round\nScore → You: 0, Bot: 1\n"
        );
    }

    #[test]
    fn wasted_round_is_distinct_from_a_draw() {
        let text = render(&MatchEvent::WastedRound {
            round: 3,
            reason: RejectionReason::UnrecognizedMove,
            bot_move: Move::Rock,
            user_score: 1,
            bot_score: 1,
        });
        assert!(text.starts_with("Invalid move. Use rock, paper, scissors, or bomb.\nRound wasted.\n"));
        assert!(!text.contains("Result: Draw"));
    }

    #[test]
    fn final_report() {
        let text = render(&MatchEvent::MatchOver {
            result: MatchResult::DrawMatch,
            user_score: 1,
            bot_score: 1,
        });
        assert!(text.contains("Game Over"));
        assert!(text.ends_with("Final Result: Draw\n"));
    }
}
