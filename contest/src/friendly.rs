//! Friendly states: pairs of states that are each other's favourite.

use crate::error::ContestError;
use crate::ledger::VoteLedger;
use crate::registry::{Registry, StateRecord};
use eurovision_types::StateId;
use std::collections::BTreeMap;

/// The state that received the strictly highest number of votes from `ledger`.
///
/// Among equally-maximal targets the lowest state id wins. `None` when the
/// ledger is empty.
pub fn favorite(ledger: &VoteLedger) -> Option<StateId> {
    let mut best: Option<(StateId, u32)> = None;
    // Ledger iterates in ascending id order, so `>` keeps the lowest id on ties.
    for (target, count) in ledger.iter() {
        match best {
            Some((_, top)) if count <= top => {}
            _ => best = Some((target, count)),
        }
    }
    best.map(|(target, _)| target)
}

/// Favourite of every state that has given at least one vote.
pub fn favorites(states: &Registry<StateId, StateRecord>) -> BTreeMap<StateId, StateId> {
    states
        .iter()
        .filter_map(|(&id, record)| favorite(&record.votes).map(|fav| (id, fav)))
        .collect()
}

/// `"a - b"` strings for every mutual-favourite pair, sorted lexicographically.
///
/// Within a string the two names are in lexicographic order, and each
/// unordered pair appears once.
pub fn friendly_pairs(
    states: &Registry<StateId, StateRecord>,
) -> Result<Vec<String>, ContestError> {
    let favorites = favorites(states);
    let mut pairs = Vec::new();
    pairs.try_reserve(favorites.len() / 2)?;

    for (&a, &b) in &favorites {
        // Visit each pair once, from its lower id.
        if a >= b || favorites.get(&b) != Some(&a) {
            continue;
        }
        let (Some(first), Some(second)) = (states.get(&a), states.get(&b)) else {
            continue;
        };
        let (low, high) = if first.name <= second.name {
            (&first.name, &second.name)
        } else {
            (&second.name, &first.name)
        };
        pairs.push(format!("{low} - {high}"));
    }

    pairs.sort();
    Ok(pairs)
}
