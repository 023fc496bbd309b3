//! Scripted operations, as read from scenario files.
//!
//! Fields are optional at the wire level so that an absent argument is
//! reported as `NullArgument` before any id or name validation runs.

use crate::engine::Contest;
use crate::error::ContestError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    AddState {
        id: Option<i64>,
        name: Option<String>,
        song: Option<String>,
    },
    RemoveState {
        id: Option<i64>,
    },
    AddJudge {
        id: Option<i64>,
        name: Option<String>,
        ranking: Option<Vec<i64>>,
    },
    RemoveJudge {
        id: Option<i64>,
    },
    AddVote {
        giver: Option<i64>,
        taker: Option<i64>,
    },
    RemoveVote {
        giver: Option<i64>,
        taker: Option<i64>,
    },
    ChangeVote {
        giver: Option<i64>,
        taker: Option<i64>,
        delta: Option<i64>,
    },
    RunContest {
        audience_percent: Option<i64>,
    },
    AudienceFavorite,
    FriendlyStates,
}

/// What applying an operation produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A mutation was applied.
    Applied,
    /// Ordered state names.
    Ranking(Vec<String>),
    /// Sorted `"a - b"` pair strings.
    Pairs(Vec<String>),
}

fn required<T>(value: &Option<T>, field: &'static str) -> Result<T, ContestError>
where
    T: Clone,
{
    value.clone().ok_or(ContestError::NullArgument(field))
}

impl Operation {
    /// Short name used in logs and error context.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddState { .. } => "add_state",
            Self::RemoveState { .. } => "remove_state",
            Self::AddJudge { .. } => "add_judge",
            Self::RemoveJudge { .. } => "remove_judge",
            Self::AddVote { .. } => "add_vote",
            Self::RemoveVote { .. } => "remove_vote",
            Self::ChangeVote { .. } => "change_vote",
            Self::RunContest { .. } => "run_contest",
            Self::AudienceFavorite => "audience_favorite",
            Self::FriendlyStates => "friendly_states",
        }
    }
}

impl Contest {
    /// Apply one scripted operation.
    pub fn apply(&mut self, op: &Operation) -> Result<Outcome, ContestError> {
        match op {
            Operation::AddState { id, name, song } => {
                let id = required(id, "id")?;
                let name = required(name, "name")?;
                let song = required(song, "song")?;
                self.add_state(id, &name, &song)?;
            }
            Operation::RemoveState { id } => {
                self.remove_state(required(id, "id")?)?;
            }
            Operation::AddJudge { id, name, ranking } => {
                let id = required(id, "id")?;
                let name = required(name, "name")?;
                let ranking = required(ranking, "ranking")?;
                self.add_judge(id, &name, &ranking)?;
            }
            Operation::RemoveJudge { id } => {
                self.remove_judge(required(id, "id")?)?;
            }
            Operation::AddVote { giver, taker } => {
                self.add_vote(required(giver, "giver")?, required(taker, "taker")?)?;
            }
            Operation::RemoveVote { giver, taker } => {
                self.remove_vote(required(giver, "giver")?, required(taker, "taker")?)?;
            }
            Operation::ChangeVote {
                giver,
                taker,
                delta,
            } => {
                let giver = required(giver, "giver")?;
                let taker = required(taker, "taker")?;
                let delta = required(delta, "delta")?;
                self.change_vote(giver, taker, delta)?;
            }
            Operation::RunContest { audience_percent } => {
                let percent = required(audience_percent, "audience_percent")?;
                return Ok(Outcome::Ranking(self.run_contest(percent)?));
            }
            Operation::AudienceFavorite => {
                return Ok(Outcome::Ranking(self.run_audience_favorite()?));
            }
            Operation::FriendlyStates => {
                return Ok(Outcome::Pairs(self.run_friendly_states()?));
            }
        }
        Ok(Outcome::Applied)
    }
}
