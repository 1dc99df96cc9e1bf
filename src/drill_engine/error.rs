use thiserror::Error;

use crate::drill_engine::models::EngineKind;

/// Precondition violations rejected by the engines.
///
/// Normal negative outcomes of play (a mismatch, a wrong mole, a miss) are
/// never errors; they come back as `Ok(outcome)`. An `Err` is fatal to the
/// call that produced it only: the engine state is left exactly as it was.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("index {index} is out of range for {len} slots")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("need {needed} distinct items but only {available} available")]
    NotEnoughItems { needed: usize, available: usize },

    #[error("card {index} is already part of a confirmed pair")]
    AlreadyMatched { index: usize },

    #[error("cannot spawn {count} moles into {holes} holes")]
    TooManyMoles { count: usize, holes: usize },

    #[error("all {max_rounds} rounds have been played")]
    RoundsExhausted { max_rounds: u32 },

    #[error("this drill runs the {actual:?} engine, not {expected:?}")]
    WrongEngine { expected: EngineKind, actual: EngineKind },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("could not parse configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
