use common::model::game::Move;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, warn};

use crate::{
    random::RandomSource,
    strategy::{pick_from, RandomMove, SelectionError, Strategy},
};

/// The computer player.
pub struct Opponent {
    strategy: Box<dyn Strategy + Send>,
    fallback: Box<dyn RandomSource + Send>,
    last_move: Option<Move>,
}

impl Opponent {
    pub fn new(strategy: Box<dyn Strategy + Send>, fallback: Box<dyn RandomSource + Send>) -> Self {
        Opponent {
            strategy,
            fallback,
            last_move: None,
        }
    }

    /// Uniform-random opponent. A fixed seed makes the whole match reproducible.
    pub fn random(seed: Option<u64>) -> Result<Self, SelectionError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::try_from_os_rng()
                .map_err(|e| SelectionError::Entropy(e.to_string()))?,
        };
        let fallback = StdRng::from_rng(&mut rng);
        Ok(Self::new(Box::new(RandomMove::new(rng)), Box::new(fallback)))
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Choose the bot's move against the committed `bot_bomb_used` flag.
    /// A bomb the bot can no longer play is swapped for a uniform classic move.
    pub fn play(&mut self, bot_bomb_used: bool) -> Result<Move, SelectionError> {
        let mut next_move = self.strategy.make_move(!bot_bomb_used)?;
        if next_move == Move::Bomb && bot_bomb_used {
            next_move = pick_from(self.fallback.as_mut(), &Move::CLASSIC)?;
            warn!("Bot bomb already spent, substituted {}", next_move);
        }
        debug!("Bot plays {}", next_move);
        self.last_move = Some(next_move);
        Ok(next_move)
    }
}
