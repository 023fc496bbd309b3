//! Weighted merge of audience and judge point lists.
//!
//! ```text
//! final = audience / states * p  +  judges / judge_count * (100 - p)
//! ```
//!
//! The judge term is dropped entirely when there are no judges. Entries are
//! matched by state id; the two lists may be in any order.

use crate::error::ContestError;
use crate::points::PointList;
use eurovision_types::{AudiencePercent, Score};

/// Blend `audience` and `judges` into one list.
///
/// Both lists must hold one entry per state, `state_count` entries each.
pub fn merge(
    audience: &PointList,
    judges: &PointList,
    state_count: usize,
    judge_count: usize,
    percent: AudiencePercent,
) -> Result<PointList, ContestError> {
    if audience.len() != state_count || judges.len() != state_count {
        return Err(ContestError::MismatchedPointLists);
    }
    if audience.is_empty() {
        return Ok(PointList::default());
    }
    let judge_scores = judges.by_state();
    let state_count = state_count as u64;
    let judge_count = judge_count as u64;

    let mut merged = Vec::new();
    merged.try_reserve_exact(audience.len())?;
    for entry in audience.iter() {
        let judge_raw = *judge_scores
            .get(&entry.state)
            .ok_or(ContestError::MismatchedPointLists)?;

        let audience_score = entry
            .points
            .scaled(percent.audience(), state_count)
            .ok_or(ContestError::ScoreOverflow)?;
        let judge_score = if judge_count == 0 {
            Score::ZERO
        } else {
            judge_raw
                .scaled(percent.judges(), judge_count)
                .ok_or(ContestError::ScoreOverflow)?
        };
        merged.push((entry.state, audience_score + judge_score));
    }
    PointList::from_scores(merged.into_iter())
}
