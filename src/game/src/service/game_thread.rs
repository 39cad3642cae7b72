use agent::{Opponent, SelectionError};
use common::{
    message::game::MatchEvent,
    model::game::{MatchResult, Outcome},
    validation::validate_move,
};
use thiserror::Error;
use tokio::sync::{
    broadcast,
    mpsc::{Receiver, Sender},
};
use tracing::{debug, info};

use crate::{
    model::internal::MatchState,
    service::{
        game_state::{apply_round, StateError},
        resolver::resolve_round,
    },
};

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("input closed before round {round} was played")]
    InputClosed { round: u8 },
    #[error("match interrupted during round {round}")]
    Interrupted { round: u8 },
    #[error("nobody is listening for match reports")]
    OutputClosed,
    #[error("match stopped in round {round} without a result")]
    NoResult { round: u8 },
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    State(#[from] StateError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary {
    pub state: MatchState,
    pub result: MatchResult,
}

/// Runs one match: owns the state and the opponent for its whole lifetime.
pub struct MatchDriver {
    state: MatchState,
    opponent: Opponent,
}

impl MatchDriver {
    pub fn new(opponent: Opponent) -> Self {
        MatchDriver {
            state: MatchState::new(),
            opponent,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub async fn run(
        mut self,
        shutdown_receiver: &mut broadcast::Receiver<()>,
        mut from_user: Receiver<String>,
        to_user: Sender<MatchEvent>,
    ) -> Result<MatchSummary, DriverError> {
        info!("Starting match");
        while !self.state.match_over {
            let round = self.state.round_number;
            Self::send(&to_user, MatchEvent::PendingMove { round }).await?;
            let raw_input = tokio::select! {
                line = from_user.recv() => {
                    line.ok_or(DriverError::InputClosed { round })?
                }
                Ok(()) = shutdown_receiver.recv() => {
                    return Err(DriverError::Interrupted { round });
                }
            };
            let event = self.play_round(&raw_input)?;
            Self::send(&to_user, event).await?;
        }

        let result = self.state.result().ok_or(DriverError::NoResult {
            round: self.state.round_number,
        })?;
        info!(
            "Match over: {:?} ({} - {})",
            result, self.state.user_score, self.state.bot_score
        );
        Self::send(
            &to_user,
            MatchEvent::MatchOver {
                result,
                user_score: self.state.user_score,
                bot_score: self.state.bot_score,
            },
        )
        .await?;
        Ok(MatchSummary {
            state: self.state,
            result,
        })
    }

    /// Validate, pick the bot's move, resolve and commit a single round.
    /// Invalid input wastes the round but the bot's move still counts.
    pub fn play_round(&mut self, raw_input: &str) -> Result<MatchEvent, DriverError> {
        let round = self.state.round_number;
        let validated = validate_move(raw_input, self.state.user_bomb_used);
        let bot_move = self.opponent.play(self.state.bot_bomb_used)?;

        let event = match validated {
            Ok(user_move) => {
                let outcome = resolve_round(user_move, bot_move);
                debug!("Round {}: {} vs {} -> {:?}", round, user_move, bot_move, outcome);
                apply_round(&mut self.state, outcome, Some(user_move), bot_move)?;
                MatchEvent::RoundResult {
                    round,
                    user_move,
                    bot_move,
                    outcome,
                    user_score: self.state.user_score,
                    bot_score: self.state.bot_score,
                }
            }
            Err(reason) => {
                info!("Round {} wasted on {:?}: {}", round, raw_input.trim(), reason);
                apply_round(&mut self.state, Outcome::Draw, None, bot_move)?;
                MatchEvent::WastedRound {
                    round,
                    reason,
                    bot_move,
                    user_score: self.state.user_score,
                    bot_score: self.state.bot_score,
                }
            }
        };
        Ok(event)
    }

    async fn send(to_user: &Sender<MatchEvent>, event: MatchEvent) -> Result<(), DriverError> {
        to_user
            .send(event)
            .await
            .map_err(|_| DriverError::OutputClosed)
    }
}
