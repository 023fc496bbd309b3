//! Per-state vote ledger: how many votes a state has given each other state.

use eurovision_types::StateId;
use std::collections::BTreeMap;

/// Outgoing votes of one state.
///
/// Entries exist only for strictly positive counts; a count that drops to
/// zero removes its entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoteLedger {
    given: BTreeMap<StateId, u32>,
}

impl VoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a signed change to the count for `target` and return the new count.
    ///
    /// Counts saturate: never below zero, never above `u32::MAX`.
    pub fn change(&mut self, target: StateId, delta: i64) -> u32 {
        let current = i64::from(self.count(target));
        let updated = current.saturating_add(delta).clamp(0, i64::from(u32::MAX));
        let updated = u32::try_from(updated).unwrap_or(u32::MAX);
        if updated == 0 {
            self.given.remove(&target);
        } else {
            self.given.insert(target, updated);
        }
        updated
    }

    /// Votes given to `target` (0 when there is no entry).
    pub fn count(&self, target: StateId) -> u32 {
        self.given.get(&target).copied().unwrap_or(0)
    }

    /// Drop every vote given to `target`.
    pub fn remove_target(&mut self, target: StateId) -> Option<u32> {
        self.given.remove(&target)
    }

    /// Entries in ascending target id order.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, u32)> + '_ {
        self.given.iter().map(|(&id, &count)| (id, count))
    }

    pub fn total(&self) -> u64 {
        self.given.values().map(|&c| u64::from(c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.given.is_empty()
    }

    pub fn len(&self) -> usize {
        self.given.len()
    }
}
