//! Fundamental types for contest scoring.
//!
//! This crate defines the types shared across the workspace: state and judge
//! ids, validated names, the exact `Score` rational, the audience weight and
//! the judge points table.

pub mod error;
pub mod id;
pub mod name;
pub mod params;
pub mod percent;
pub mod score;

pub use error::TypesError;
pub use id::{JudgeId, StateId};
pub use name::{is_valid_name, Name};
pub use params::{ContestParams, DEFAULT_JUDGE_POINTS, RANKING_SIZE};
pub use percent::AudiencePercent;
pub use score::Score;
