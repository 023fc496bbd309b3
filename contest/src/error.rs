use eurovision_types::{JudgeId, StateId, TypesError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContestError {
    #[error("required argument `{0}` is missing")]
    NullArgument(&'static str),

    #[error("invalid id {0}: ids must be non-negative")]
    InvalidId(i64),

    #[error("state {0} already exists")]
    StateAlreadyExists(StateId),

    #[error("state {0} does not exist")]
    StateNotExist(i64),

    #[error("judge {0} already exists")]
    JudgeAlreadyExists(JudgeId),

    #[error("judge {0} does not exist")]
    JudgeNotExist(i64),

    #[error("invalid name {0:?}: only lowercase letters and spaces are allowed")]
    InvalidName(String),

    #[error("state {0} cannot vote for itself")]
    SameState(StateId),

    #[error("out of memory while building a point list")]
    OutOfMemory,

    #[error("invalid audience percent {0}: must be between 0 and 100")]
    InvalidAudiencePercent(i64),

    #[error("state {0} appears more than once in a judge ranking")]
    DuplicateRankedState(StateId),

    #[error("judge ranking must list {expected} states, got {got}")]
    RankingLength { expected: usize, got: usize },

    #[error("point lists do not cover the same states")]
    MismatchedPointLists,

    #[error("score arithmetic overflowed")]
    ScoreOverflow,
}

impl From<TypesError> for ContestError {
    fn from(e: TypesError) -> Self {
        match e {
            TypesError::InvalidId(raw) => Self::InvalidId(raw),
            TypesError::InvalidName(name) => Self::InvalidName(name),
            TypesError::InvalidAudiencePercent(raw) => Self::InvalidAudiencePercent(raw),
        }
    }
}

impl From<std::collections::TryReserveError> for ContestError {
    fn from(_: std::collections::TryReserveError) -> Self {
        Self::OutOfMemory
    }
}
