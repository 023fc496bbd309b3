//! Validation errors for the fundamental types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    #[error("invalid id {0}: ids must be non-negative")]
    InvalidId(i64),

    #[error("invalid name {0:?}: only lowercase letters and spaces are allowed")]
    InvalidName(String),

    #[error("invalid audience percent {0}: must be between 0 and 100")]
    InvalidAudiencePercent(i64),
}
