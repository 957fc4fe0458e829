use thiserror::Error;

use crate::api::types::BallId;

/// Why `PoolMatch::apply_shot` refused a shot. The match state is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShotRejected {
    #[error("balls are still moving")]
    NotAiming,
    #[error("the game is over")]
    GameOver,
    #[error("shot has no power")]
    NoPower,
    #[error("shot power or angle is not a finite number")]
    NonFinite,
    #[error("no cue ball on the table")]
    NoCueBall,
}

/// Failure to load or validate a `MatchConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// A custom ball layout that breaks the table invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RackError {
    #[error("expected exactly one cue ball, found {0}")]
    CueBallCount(usize),
    #[error("ball id {0:?} is used more than once")]
    DuplicateId(BallId),
}
