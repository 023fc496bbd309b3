//! Contest parameters: the judge points table and ranking size.

use serde::{Deserialize, Serialize};

/// Number of states every judge must rank.
pub const RANKING_SIZE: usize = 10;

/// Points awarded per ranking slot, most favoured first.
pub const DEFAULT_JUDGE_POINTS: [u64; RANKING_SIZE] = [12, 10, 8, 7, 6, 5, 4, 3, 2, 1];

/// Parameters shared by every scoring pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestParams {
    /// Points a judge gives to the state at each ranking index.
    pub judge_points: [u64; RANKING_SIZE],
}

impl ContestParams {
    /// Points a judge awards at ranking index `rank` (0 = favourite).
    pub fn points_for_rank(&self, rank: usize) -> u64 {
        self.judge_points.get(rank).copied().unwrap_or(0)
    }

    /// Total points one judge hands out across a full ranking.
    pub fn points_per_judge(&self) -> u64 {
        self.judge_points.iter().sum()
    }
}

impl Default for ContestParams {
    fn default() -> Self {
        Self {
            judge_points: DEFAULT_JUDGE_POINTS,
        }
    }
}
