use std::env;

use thiserror::Error;
use tracing::Level;

pub const SEED_VAR: &str = "RPS_SEED";
pub const LOG_VAR: &str = "RPS_LOG";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("RPS_SEED must be an unsigned integer, got {0:?}")]
    Seed(String),
    #[error("RPS_LOG must be one of error, warn, info, debug, trace; got {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Seed for the bot. `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub log_level: Level,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            seed: None,
            log_level: Level::WARN,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = GameConfig::default();
        if let Some(seed) = lookup(SEED_VAR) {
            config.seed = Some(seed.trim().parse().map_err(|_| ConfigError::Seed(seed))?);
        }
        if let Some(level) = lookup(LOG_VAR) {
            config.log_level = level
                .trim()
                .parse()
                .map_err(|_| ConfigError::LogLevel(level))?;
        }
        Ok(config)
    }
}
