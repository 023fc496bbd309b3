//! Scenario files: the states, judges and votes of one contest.
//!
//! ```toml
//! [[states]]
//! id = 1
//! name = "france"
//! song = "allo"
//!
//! [[judges]]
//! id = 1
//! name = "simon"
//! ranking = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
//!
//! [[votes]]
//! giver = 1
//! taker = 2
//! count = 3
//!
//! [[operations]]
//! op = "remove_state"
//! id = 4
//! ```
//!
//! States are registered first, then judges, then votes, then any scripted
//! operations in file order.

use anyhow::Context;
use eurovision_contest::{Contest, Operation, Outcome};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct StateEntry {
    pub id: i64,
    pub name: String,
    pub song: String,
}

#[derive(Debug, Deserialize)]
pub struct JudgeEntry {
    pub id: i64,
    pub name: String,
    pub ranking: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct VoteEntry {
    pub giver: i64,
    pub taker: i64,
    #[serde(default = "default_vote_count")]
    pub count: i64,
}

fn default_vote_count() -> i64 {
    1
}

#[derive(Debug, Default, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub states: Vec<StateEntry>,
    #[serde(default)]
    pub judges: Vec<JudgeEntry>,
    #[serde(default)]
    pub votes: Vec<VoteEntry>,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

/// Result of a scripted query, tagged with its position in the file.
#[derive(Debug)]
pub struct ScriptResult {
    pub index: usize,
    pub op: &'static str,
    pub outcome: Outcome,
}

impl Scenario {
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse scenario {}", path.display()))
    }

    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Build the contest and run the scripted operations.
    ///
    /// Returns the contest plus the outcome of every scripted query.
    pub fn build(&self) -> anyhow::Result<(Contest, Vec<ScriptResult>)> {
        let mut contest = Contest::new();

        for state in &self.states {
            contest
                .add_state(state.id, &state.name, &state.song)
                .with_context(|| format!("adding state {} ({})", state.id, state.name))?;
        }
        for judge in &self.judges {
            contest
                .add_judge(judge.id, &judge.name, &judge.ranking)
                .with_context(|| format!("adding judge {} ({})", judge.id, judge.name))?;
        }
        for vote in &self.votes {
            contest
                .change_vote(vote.giver, vote.taker, vote.count)
                .with_context(|| format!("recording vote {} -> {}", vote.giver, vote.taker))?;
        }

        let mut results = Vec::new();
        for (index, op) in self.operations.iter().enumerate() {
            let outcome = contest
                .apply(op)
                .with_context(|| format!("operation #{} ({})", index + 1, op.name()))?;
            tracing::debug!(index, op = op.name(), "scripted operation applied");
            if outcome != Outcome::Applied {
                results.push(ScriptResult {
                    index,
                    op: op.name(),
                    outcome,
                });
            }
        }

        tracing::info!(
            states = contest.state_count(),
            judges = contest.judge_count(),
            "scenario loaded"
        );
        Ok((contest, results))
    }
}
