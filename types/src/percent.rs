//! Audience weight in the final blend.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Share (0–100 inclusive) of the final score that comes from the audience.
/// The remainder comes from the judges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AudiencePercent(u8);

impl AudiencePercent {
    pub const MAX: u8 = 100;

    pub const AUDIENCE_ONLY: Self = Self(100);
    pub const JUDGES_ONLY: Self = Self(0);

    pub fn new(raw: i64) -> Result<Self, TypesError> {
        match u8::try_from(raw) {
            Ok(p) if p <= Self::MAX => Ok(Self(p)),
            _ => Err(TypesError::InvalidAudiencePercent(raw)),
        }
    }

    /// Audience weight.
    pub fn audience(&self) -> u64 {
        u64::from(self.0)
    }

    /// Judge weight, `100 - audience`.
    pub fn judges(&self) -> u64 {
        u64::from(Self::MAX - self.0)
    }
}

impl TryFrom<i64> for AudiencePercent {
    type Error = TypesError;
    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<AudiencePercent> for i64 {
    fn from(p: AudiencePercent) -> Self {
        i64::from(p.0)
    }
}

impl fmt::Display for AudiencePercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
