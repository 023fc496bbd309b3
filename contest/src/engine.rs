//! Contest engine: owns the registries and answers the scoring queries.
//!
//! Mutations validate in a fixed order (id validity, existence, content) and
//! either fully apply or leave the contest untouched.

use crate::error::ContestError;
use crate::friendly::friendly_pairs;
use crate::merge::merge;
use crate::points::{audience_points, judge_points, PointList};
use crate::ranking::rank;
use crate::registry::{JudgeRecord, Registry, StateRecord};
use eurovision_types::{
    AudiencePercent, ContestParams, JudgeId, Name, Score, StateId, RANKING_SIZE,
};
use std::collections::BTreeSet;

/// One placing in a ranked result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Standing {
    /// 1-based position.
    pub place: usize,
    pub state: StateId,
    pub name: Name,
    pub score: Score,
}

#[derive(Clone, Debug, Default)]
pub struct Contest {
    states: Registry<StateId, StateRecord>,
    judges: Registry<JudgeId, JudgeRecord>,
    params: ContestParams,
}

impl Contest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: ContestParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    // ── Registry operations ─────────────────────────────────────────────

    /// Register a new state.
    pub fn add_state(&mut self, id: i64, name: &str, song_name: &str) -> Result<(), ContestError> {
        let id = StateId::new(id)?;
        if self.states.exists(&id) {
            return Err(ContestError::StateAlreadyExists(id));
        }
        let name = Name::parse(name)?;
        let song_name = Name::parse(song_name)?;

        tracing::debug!(state = %id, name = %name, song = %song_name, "state added");
        self.states.put(id, StateRecord::new(name, song_name));
        Ok(())
    }

    /// Remove a state, every vote given to it, and every judge that ranked it.
    pub fn remove_state(&mut self, id: i64) -> Result<(), ContestError> {
        let id = self.existing_state(id)?;

        for record in self.states.values_mut() {
            record.votes.remove_target(id);
        }

        let dropped: Vec<JudgeId> = self
            .judges
            .iter()
            .filter(|(_, judge)| judge.ranks(id))
            .map(|(&judge_id, _)| judge_id)
            .collect();
        for judge_id in &dropped {
            self.judges.remove(judge_id);
        }

        self.states.remove(&id);
        tracing::debug!(state = %id, judges_removed = dropped.len(), "state removed");
        Ok(())
    }

    /// Register a judge with a full ranking, most favoured state first.
    ///
    /// Every ranked id is resolved before the ranking's length and
    /// uniqueness are checked.
    pub fn add_judge(
        &mut self,
        id: i64,
        name: &str,
        ranking: &[i64],
    ) -> Result<(), ContestError> {
        let id = JudgeId::new(id)?;
        if self.judges.exists(&id) {
            return Err(ContestError::JudgeAlreadyExists(id));
        }
        let name = Name::parse(name)?;

        let mut resolved = Vec::new();
        resolved.try_reserve_exact(ranking.len())?;
        for &raw in ranking {
            resolved.push(self.existing_state(raw)?);
        }
        let resolved: [StateId; RANKING_SIZE] = resolved.try_into().map_err(|rest: Vec<StateId>| {
            ContestError::RankingLength {
                expected: RANKING_SIZE,
                got: rest.len(),
            }
        })?;

        let mut seen = BTreeSet::new();
        for &state in &resolved {
            if !seen.insert(state) {
                return Err(ContestError::DuplicateRankedState(state));
            }
        }

        tracing::debug!(judge = %id, name = %name, "judge added");
        self.judges.put(
            id,
            JudgeRecord {
                name,
                ranking: resolved,
            },
        );
        Ok(())
    }

    pub fn remove_judge(&mut self, id: i64) -> Result<(), ContestError> {
        let judge_id = JudgeId::new(id)?;
        if self.judges.remove(&judge_id).is_none() {
            return Err(ContestError::JudgeNotExist(id));
        }
        tracing::debug!(judge = %judge_id, "judge removed");
        Ok(())
    }

    // ── Votes ───────────────────────────────────────────────────────────

    /// Change the number of votes `giver` gives `taker` by `delta`.
    ///
    /// Counts never drop below zero; reaching zero removes the ledger entry.
    pub fn change_vote(&mut self, giver: i64, taker: i64, delta: i64) -> Result<(), ContestError> {
        let giver_id = StateId::new(giver)?;
        let taker_id = StateId::new(taker)?;
        if !self.states.exists(&giver_id) {
            return Err(ContestError::StateNotExist(giver));
        }
        if !self.states.exists(&taker_id) {
            return Err(ContestError::StateNotExist(taker));
        }
        if giver_id == taker_id {
            return Err(ContestError::SameState(giver_id));
        }

        let record = self
            .states
            .get_mut(&giver_id)
            .ok_or(ContestError::StateNotExist(giver))?;
        let count = record.votes.change(taker_id, delta);
        tracing::debug!(giver = %giver_id, taker = %taker_id, delta, count, "vote changed");
        Ok(())
    }

    pub fn add_vote(&mut self, giver: i64, taker: i64) -> Result<(), ContestError> {
        self.change_vote(giver, taker, 1)
    }

    pub fn remove_vote(&mut self, giver: i64, taker: i64) -> Result<(), ContestError> {
        self.change_vote(giver, taker, -1)
    }

    // ── Queries ─────────────────────────────────────────────────────────

    /// Final ranking blending audience votes and judges by `audience_percent`.
    pub fn run_contest(&self, audience_percent: i64) -> Result<Vec<String>, ContestError> {
        let percent = AudiencePercent::new(audience_percent)?;
        Ok(names(self.contest_standings(percent)?))
    }

    /// Ranking by audience votes alone.
    pub fn run_audience_favorite(&self) -> Result<Vec<String>, ContestError> {
        Ok(names(self.audience_standings()?))
    }

    /// Sorted `"a - b"` strings, one per pair of mutual favourites.
    pub fn run_friendly_states(&self) -> Result<Vec<String>, ContestError> {
        if self.states.is_empty() {
            return Ok(Vec::new());
        }
        let pairs = friendly_pairs(&self.states)?;
        tracing::info!(pairs = pairs.len(), "friendly states computed");
        Ok(pairs)
    }

    /// Blended ranking with exact scores.
    pub fn contest_standings(
        &self,
        percent: AudiencePercent,
    ) -> Result<Vec<Standing>, ContestError> {
        if self.states.is_empty() {
            return Ok(Vec::new());
        }
        let audience = audience_points(&self.states)?;
        let judges = judge_points(&self.states, &self.judges, &self.params)?;
        let merged = merge(
            &audience,
            &judges,
            self.states.size(),
            self.judges.size(),
            percent,
        )?;

        tracing::info!(
            states = self.states.size(),
            judges = self.judges.size(),
            audience_percent = %percent,
            "contest scored"
        );
        Ok(self.project(rank(merged)))
    }

    /// Audience-only ranking with raw vote totals as scores.
    pub fn audience_standings(&self) -> Result<Vec<Standing>, ContestError> {
        let audience = audience_points(&self.states)?;
        tracing::info!(states = self.states.size(), "audience favourite scored");
        Ok(self.project(rank(audience)))
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn state(&self, id: StateId) -> Option<&StateRecord> {
        self.states.get(&id)
    }

    pub fn judge(&self, id: JudgeId) -> Option<&JudgeRecord> {
        self.judges.get(&id)
    }

    pub fn states(&self) -> &Registry<StateId, StateRecord> {
        &self.states
    }

    pub fn judges(&self) -> &Registry<JudgeId, JudgeRecord> {
        &self.judges
    }

    pub fn params(&self) -> &ContestParams {
        &self.params
    }

    pub fn state_count(&self) -> usize {
        self.states.size()
    }

    pub fn judge_count(&self) -> usize {
        self.judges.size()
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn existing_state(&self, raw: i64) -> Result<StateId, ContestError> {
        let id = StateId::new(raw)?;
        if !self.states.exists(&id) {
            return Err(ContestError::StateNotExist(raw));
        }
        Ok(id)
    }

    fn project(&self, ranked: PointList) -> Vec<Standing> {
        ranked
            .iter()
            .filter_map(|entry| {
                self.states
                    .get(&entry.state)
                    .map(|record| (entry, record.name.clone()))
            })
            .enumerate()
            .map(|(i, (entry, name))| Standing {
                place: i + 1,
                state: entry.state,
                name,
                score: entry.points,
            })
            .collect()
    }
}

fn names(standings: Vec<Standing>) -> Vec<String> {
    standings.into_iter().map(|s| s.name.into()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTRIES: [&str; 12] = [
        "albania", "belgium", "croatia", "denmark", "estonia", "finland", "georgia", "hungary",
        "iceland", "jordan", "kosovo", "latvia",
    ];

    /// Twelve states with ids 1..=12.
    fn twelve_states() -> Contest {
        let mut contest = Contest::new();
        for (i, name) in COUNTRIES.iter().enumerate() {
            contest.add_state(i as i64 + 1, name, "song").unwrap();
        }
        contest
    }

    fn ranking(ids: [i64; RANKING_SIZE]) -> [i64; RANKING_SIZE] {
        ids
    }

    fn sid(raw: i64) -> StateId {
        StateId::new(raw).unwrap()
    }

    // ── Registry operations ──────────────────────────────────────────────

    #[test]
    fn add_state_validation_order() {
        let mut contest = Contest::new();
        assert_eq!(contest.add_state(-1, "BAD", "x"), Err(ContestError::InvalidId(-1)));
        contest.add_state(1, "france", "allo").unwrap();
        assert_eq!(
            contest.add_state(1, "BAD", "x"),
            Err(ContestError::StateAlreadyExists(sid(1)))
        );
        assert_eq!(
            contest.add_state(2, "Spain", "hola"),
            Err(ContestError::InvalidName("Spain".into()))
        );
        assert_eq!(
            contest.add_state(2, "spain", "hola!"),
            Err(ContestError::InvalidName("hola!".into()))
        );
        assert_eq!(contest.state_count(), 1);
    }

    #[test]
    fn remove_state_cascades_votes_and_judges() {
        let mut contest = twelve_states();
        contest.add_vote(1, 2).unwrap();
        contest.add_vote(3, 2).unwrap();
        contest.add_vote(3, 4).unwrap();
        contest
            .add_judge(1, "simon", &ranking([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]))
            .unwrap();
        contest
            .add_judge(2, "paula", &ranking([1, 3, 4, 5, 6, 7, 8, 9, 10, 11]))
            .unwrap();

        contest.remove_state(2).unwrap();

        assert!(contest.state(sid(2)).is_none());
        assert!(contest.state(sid(1)).unwrap().votes.is_empty());
        assert_eq!(contest.state(sid(3)).unwrap().votes.count(sid(4)), 1);
        assert_eq!(contest.state(sid(3)).unwrap().votes.count(sid(2)), 0);
        assert!(contest.judge(JudgeId::new(1).unwrap()).is_none());
        assert!(contest.judge(JudgeId::new(2).unwrap()).is_some());

        assert_eq!(contest.remove_state(2), Err(ContestError::StateNotExist(2)));
        assert_eq!(contest.remove_state(-2), Err(ContestError::InvalidId(-2)));
    }

    #[test]
    fn add_judge_validation_order() {
        let mut contest = twelve_states();
        let good = ranking([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

        assert_eq!(
            contest.add_judge(-4, "BAD", &good),
            Err(ContestError::InvalidId(-4))
        );
        contest.add_judge(4, "simon", &good).unwrap();
        assert_eq!(
            contest.add_judge(4, "BAD", &good),
            Err(ContestError::JudgeAlreadyExists(JudgeId::new(4).unwrap()))
        );
        assert_eq!(
            contest.add_judge(5, "Paula", &good),
            Err(ContestError::InvalidName("Paula".into()))
        );
        assert_eq!(
            contest.add_judge(5, "paula", &ranking([1, 2, 3, 4, 5, 6, 7, 8, 9, -3])),
            Err(ContestError::InvalidId(-3))
        );
        assert_eq!(
            contest.add_judge(5, "paula", &ranking([1, 2, 3, 4, 5, 6, 7, 8, 9, 99])),
            Err(ContestError::StateNotExist(99))
        );
        assert_eq!(
            contest.add_judge(5, "paula", &ranking([1, 2, 3, 4, 5, 6, 7, 8, 9, 1])),
            Err(ContestError::DuplicateRankedState(sid(1)))
        );
        assert_eq!(contest.judge_count(), 1);
    }

    #[test]
    fn ranked_ids_resolve_before_duplicates_and_length() {
        let mut contest = twelve_states();
        assert_eq!(
            contest.add_judge(5, "paula", &[1, 1, 2, 3, 4, 5, 6, 7, 8, 99]),
            Err(ContestError::StateNotExist(99))
        );
        assert_eq!(
            contest.add_judge(5, "paula", &[1, 1, 2, 3, 4, 5, 6, 7, 8, -3]),
            Err(ContestError::InvalidId(-3))
        );
        assert_eq!(
            contest.add_judge(5, "paula", &[1, 1, 99]),
            Err(ContestError::StateNotExist(99))
        );
        assert_eq!(
            contest.add_judge(5, "paula", &[1, 1, 2]),
            Err(ContestError::RankingLength {
                expected: RANKING_SIZE,
                got: 3
            })
        );
        assert_eq!(
            contest.add_judge(5, "paula", &[]),
            Err(ContestError::RankingLength {
                expected: RANKING_SIZE,
                got: 0
            })
        );
        assert_eq!(contest.judge_count(), 0);
    }

    #[test]
    fn custom_points_table() {
        let params = ContestParams {
            judge_points: [25, 18, 15, 12, 10, 8, 6, 4, 2, 1],
        };
        let mut contest = Contest::with_params(params.clone());
        for (i, name) in COUNTRIES.iter().enumerate() {
            contest.add_state(i as i64 + 1, name, "song").unwrap();
        }
        assert_eq!(contest.params(), &params);
        assert_eq!(contest.params().points_per_judge(), 101);

        contest
            .add_judge(1, "simon", &[3, 1, 2, 4, 5, 6, 7, 8, 9, 10])
            .unwrap();
        let standings = contest
            .contest_standings(AudiencePercent::JUDGES_ONLY)
            .unwrap();
        assert_eq!(standings[0].state, sid(3));
        assert_eq!(standings[0].score, Score::from_points(2500));
        assert_eq!(standings[1].score, Score::from_points(1800));
        assert_eq!(standings[11].score, Score::ZERO);
    }

    #[test]
    fn remove_judge() {
        let mut contest = twelve_states();
        contest
            .add_judge(0, "simon", &ranking([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]))
            .unwrap();
        contest.remove_judge(0).unwrap();
        assert_eq!(contest.remove_judge(0), Err(ContestError::JudgeNotExist(0)));
        assert_eq!(contest.remove_judge(-1), Err(ContestError::InvalidId(-1)));
    }

    // ── Votes ────────────────────────────────────────────────────────────

    #[test]
    fn votes_are_directional() {
        let mut contest = twelve_states();
        contest.add_vote(1, 2).unwrap();
        contest.add_vote(2, 1).unwrap();
        assert_eq!(contest.state(sid(1)).unwrap().votes.count(sid(2)), 1);
        assert_eq!(contest.state(sid(2)).unwrap().votes.count(sid(1)), 1);
    }

    #[test]
    fn self_vote_rejected_and_ledger_unchanged() {
        let mut contest = twelve_states();
        contest.add_vote(1, 2).unwrap();
        assert_eq!(contest.add_vote(1, 1), Err(ContestError::SameState(sid(1))));
        assert_eq!(contest.remove_vote(1, 1), Err(ContestError::SameState(sid(1))));
        let votes = &contest.state(sid(1)).unwrap().votes;
        assert_eq!(votes.len(), 1);
        assert_eq!(votes.count(sid(2)), 1);
    }

    #[test]
    fn change_vote_validation_order() {
        let mut contest = twelve_states();
        assert_eq!(contest.change_vote(-1, 2, 1), Err(ContestError::InvalidId(-1)));
        assert_eq!(contest.change_vote(1, -2, 1), Err(ContestError::InvalidId(-2)));
        assert_eq!(contest.change_vote(50, 2, 1), Err(ContestError::StateNotExist(50)));
        assert_eq!(contest.change_vote(1, 60, 1), Err(ContestError::StateNotExist(60)));
    }

    #[test]
    fn remove_vote_below_zero_is_noop() {
        let mut contest = twelve_states();
        contest.remove_vote(1, 2).unwrap();
        assert!(contest.state(sid(1)).unwrap().votes.is_empty());
        contest.change_vote(1, 2, 3).unwrap();
        contest.remove_vote(1, 2).unwrap();
        assert_eq!(contest.state(sid(1)).unwrap().votes.count(sid(2)), 2);
    }

    // ── Queries ──────────────────────────────────────────────────────────

    #[test]
    fn empty_contest_returns_empty_results() {
        let contest = Contest::new();
        assert!(contest.run_contest(40).unwrap().is_empty());
        assert!(contest.run_audience_favorite().unwrap().is_empty());
        assert!(contest.run_friendly_states().unwrap().is_empty());
    }

    #[test]
    fn out_of_range_percent_rejected() {
        let mut contest = Contest::new();
        contest.add_state(1, "france", "allo").unwrap();
        assert_eq!(
            contest.run_contest(150),
            Err(ContestError::InvalidAudiencePercent(150))
        );
        assert_eq!(
            contest.run_contest(-1),
            Err(ContestError::InvalidAudiencePercent(-1))
        );
        assert_eq!(contest.state_count(), 1);
    }

    #[test]
    fn two_state_scenario() {
        let mut contest = Contest::new();
        contest.add_state(1, "france", "allo").unwrap();
        contest.add_state(2, "spain", "hola").unwrap();
        contest.add_vote(1, 2).unwrap();
        contest.add_vote(2, 1).unwrap();

        assert_eq!(contest.run_contest(100).unwrap(), vec!["france", "spain"]);
        assert_eq!(contest.run_friendly_states().unwrap(), vec!["france - spain"]);
    }

    #[test]
    fn tie_break_uses_state_id_not_name() {
        let mut contest = Contest::new();
        contest.add_state(1, "zambia", "song").unwrap();
        contest.add_state(2, "austria", "song").unwrap();
        assert_eq!(contest.run_audience_favorite().unwrap(), vec!["zambia", "austria"]);
    }

    #[test]
    fn judges_only_ranking() {
        let mut contest = twelve_states();
        // Audience strongly prefers 12, judges prefer 10 down to 1.
        for giver in 1..=11 {
            contest.change_vote(giver, 12, 5).unwrap();
        }
        contest
            .add_judge(1, "simon", &ranking([10, 9, 8, 7, 6, 5, 4, 3, 2, 1]))
            .unwrap();

        let by_judges = contest.run_contest(0).unwrap();
        assert_eq!(&by_judges[..3], &["jordan", "iceland", "hungary"]);
        assert_eq!(by_judges.last().map(String::as_str), Some("latvia"));

        let by_audience = contest.run_contest(100).unwrap();
        assert_eq!(by_audience, contest.run_audience_favorite().unwrap());
        assert_eq!(by_audience[0], "latvia");
    }

    #[test]
    fn blended_standings_are_exact() {
        let mut contest = twelve_states();
        contest.change_vote(1, 2, 3).unwrap();
        contest
            .add_judge(1, "simon", &ranking([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]))
            .unwrap();

        let standings = contest
            .contest_standings(AudiencePercent::new(50).unwrap())
            .unwrap();
        assert_eq!(standings.len(), 12);
        assert_eq!(standings[0].place, 1);
        // state 1: 0/12*50 + 12/1*50 = 600
        assert_eq!(standings[0].state, sid(1));
        assert_eq!(standings[0].score, Score::from_points(600));
        // state 2: 3/12*50 + 10/1*50 = 12.5 + 500
        assert_eq!(standings[1].state, sid(2));
        assert_eq!(standings[1].score, Score::ratio(1025, 2).unwrap());
    }

    #[test]
    fn judge_removed_with_state_no_longer_scores() {
        let mut contest = twelve_states();
        contest
            .add_judge(1, "simon", &ranking([12, 1, 2, 3, 4, 5, 6, 7, 8, 9]))
            .unwrap();
        contest.remove_state(5).unwrap();
        assert_eq!(contest.judge_count(), 0);
        let standings = contest
            .contest_standings(AudiencePercent::JUDGES_ONLY)
            .unwrap();
        assert!(standings.iter().all(|s| s.score.is_zero()));
        assert_eq!(standings.len(), 11);
    }
}
