use crate::Chips;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("table limit must be positive")]
    Limit,
    #[error("round budget must be positive")]
    Rounds,
    #[error("sample count must be positive")]
    Samples,
}

/// parameters for one batch of sessions. a zero stake is allowed, the
/// session just ends before its first bet; zero limit, rounds, or
/// samples are configuration mistakes and are rejected up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub stake: Chips,
    pub rounds: usize,
    pub limit: Chips,
    pub samples: usize,
}

impl Config {
    pub fn new(
        stake: Chips,
        rounds: usize,
        limit: Chips,
        samples: usize,
    ) -> Result<Self, ConfigError> {
        if limit == 0 {
            return Err(ConfigError::Limit);
        }
        if rounds == 0 {
            return Err(ConfigError::Rounds);
        }
        if samples == 0 {
            return Err(ConfigError::Samples);
        }
        Ok(Self {
            stake,
            rounds,
            limit,
            samples,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stake: crate::STAKE,
            rounds: crate::ROUNDS,
            limit: crate::LIMIT,
            samples: crate::SAMPLES,
        }
    }
}
