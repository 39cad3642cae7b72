use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::validation::RejectionReason;

/// Result of a single round, from the user's side of the table.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    UserWins,
    BotWins,
    Draw,
}

/// Result of a full match, decided on cumulative round wins.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    UserWinsMatch,
    BotWinsMatch,
    DrawMatch,
}

impl MatchResult {
    /// Strictly greater score wins; equal scores are a drawn match.
    pub fn from_scores(user_score: u8, bot_score: u8) -> Self {
        match user_score.cmp(&bot_score) {
            std::cmp::Ordering::Greater => MatchResult::UserWinsMatch,
            std::cmp::Ordering::Less => MatchResult::BotWinsMatch,
            std::cmp::Ordering::Equal => MatchResult::DrawMatch,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Bomb,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];
    /// Moves that can always be played; bomb is only available once.
    pub const CLASSIC: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// `None` when neither side wins, otherwise whether `self` wins.
    /// Bomb beats every other move and ties with itself.
    pub fn beats(&self, other: &Move) -> Option<bool> {
        if self == other {
            None
        } else {
            Some(matches!(
                (self, other),
                (Move::Bomb, _)
                    | (Move::Rock, Move::Scissors)
                    | (Move::Scissors, Move::Paper)
                    | (Move::Paper, Move::Rock)
            ))
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = RejectionReason;

    /// Case-insensitive, ignores surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Move::ALL
            .into_iter()
            .find(|m| m.name() == normalized)
            .ok_or(RejectionReason::UnrecognizedMove)
    }
}
