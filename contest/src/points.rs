//! Point lists and the two point converters.
//!
//! A point list holds exactly one entry per state in the registry snapshot it
//! was built from. Lists are built fresh for every query from read-only
//! borrows of the registries and own all of their data.

use crate::error::ContestError;
use crate::registry::{JudgeRecord, Registry, StateRecord};
use eurovision_types::{ContestParams, JudgeId, Score, StateId};
use std::collections::BTreeMap;

/// One state's accumulated score at some pipeline stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatePoints {
    pub state: StateId,
    pub points: Score,
}

/// Per-state scores, one entry per known state, no duplicate ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointList {
    entries: Vec<StatePoints>,
}

impl PointList {
    /// Build a list from per-state totals, reporting allocation failure.
    pub(crate) fn from_scores(
        scores: impl ExactSizeIterator<Item = (StateId, Score)>,
    ) -> Result<Self, ContestError> {
        let mut entries = Vec::new();
        entries.try_reserve_exact(scores.len())?;
        entries.extend(scores.map(|(state, points)| StatePoints { state, points }));
        Ok(Self { entries })
    }

    fn from_totals(totals: BTreeMap<StateId, u64>) -> Result<Self, ContestError> {
        Self::from_scores(
            totals
                .into_iter()
                .map(|(state, points)| (state, Score::from_points(points))),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatePoints> {
        self.entries.iter()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [StatePoints] {
        &mut self.entries
    }

    /// Score of `state`, if it is in the list.
    pub fn get(&self, state: StateId) -> Option<Score> {
        self.entries
            .iter()
            .find(|e| e.state == state)
            .map(|e| e.points)
    }

    /// Sum of every entry.
    pub fn total(&self) -> Score {
        self.entries
            .iter()
            .fold(Score::ZERO, |acc, e| acc + e.points)
    }

    /// Id → score view, for matching two lists by id.
    pub fn by_state(&self) -> BTreeMap<StateId, Score> {
        self.entries.iter().map(|e| (e.state, e.points)).collect()
    }
}

fn zeroed_totals(states: &Registry<StateId, StateRecord>) -> BTreeMap<StateId, u64> {
    states.iter().map(|(&id, _)| (id, 0)).collect()
}

/// Audience conversion: every vote a state gives counts one point for its target.
pub fn audience_points(states: &Registry<StateId, StateRecord>) -> Result<PointList, ContestError> {
    let mut totals = zeroed_totals(states);
    for (_, record) in states.iter() {
        for (target, count) in record.votes.iter() {
            if let Some(total) = totals.get_mut(&target) {
                *total += u64::from(count);
            }
        }
    }
    PointList::from_totals(totals)
}

/// Judge conversion: each judge awards the points table along their ranking.
///
/// States no judge ranked end with zero points.
pub fn judge_points(
    states: &Registry<StateId, StateRecord>,
    judges: &Registry<JudgeId, JudgeRecord>,
    params: &ContestParams,
) -> Result<PointList, ContestError> {
    let mut totals = zeroed_totals(states);
    for (_, judge) in judges.iter() {
        for (rank, state) in judge.ranking.iter().enumerate() {
            if let Some(total) = totals.get_mut(state) {
                *total += params.points_for_rank(rank);
            }
        }
    }
    PointList::from_totals(totals)
}
