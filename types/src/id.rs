//! Identifier types for contest participants and scorers.
//!
//! Callers hand in raw signed integers (the public surface accepts whatever
//! a form or script produced); only non-negative values are valid ids.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a participating state. Always non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct StateId(u64);

impl StateId {
    /// Validate a raw id.
    pub fn new(raw: i64) -> Result<Self, TypesError> {
        u64::try_from(raw)
            .map(Self)
            .map_err(|_| TypesError::InvalidId(raw))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for StateId {
    type Error = TypesError;
    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<StateId> for i64 {
    fn from(id: StateId) -> Self {
        // Constructed from a non-negative i64, so this never saturates.
        i64::try_from(id.0).unwrap_or(i64::MAX)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a judge. Always non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct JudgeId(u64);

impl JudgeId {
    /// Validate a raw id.
    pub fn new(raw: i64) -> Result<Self, TypesError> {
        u64::try_from(raw)
            .map(Self)
            .map_err(|_| TypesError::InvalidId(raw))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for JudgeId {
    type Error = TypesError;
    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<JudgeId> for i64 {
    fn from(id: JudgeId) -> Self {
        i64::try_from(id.0).unwrap_or(i64::MAX)
    }
}

impl fmt::Display for JudgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
