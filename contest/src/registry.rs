//! Registries of states and judges.
//!
//! A `Registry` is an id-keyed store whose iteration order is the id order,
//! independent of insertion order. Every derived list the engine builds walks
//! a registry, so this ordering is what makes scoring passes reproducible.

use crate::ledger::VoteLedger;
use eurovision_types::{Name, StateId, RANKING_SIZE};
use std::collections::BTreeMap;

/// Id-keyed store of owned records.
#[derive(Clone, Debug)]
pub struct Registry<K: Ord, V> {
    entries: BTreeMap<K, V>,
}

impl<K: Ord + Copy, V> Registry<K, V> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn exists(&self, id: &K) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &K) -> Option<&V> {
        self.entries.get(id)
    }

    pub fn get_mut(&mut self, id: &K) -> Option<&mut V> {
        self.entries.get_mut(id)
    }

    /// Insert or replace a record, returning the previous one.
    pub fn put(&mut self, id: K, record: V) -> Option<V> {
        self.entries.insert(id, record)
    }

    pub fn remove(&mut self, id: &K) -> Option<V> {
        self.entries.remove(id)
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.values_mut()
    }

    /// Snapshot of the current key set, for passes that mutate the registry.
    pub fn ids(&self) -> Vec<K> {
        self.entries.keys().copied().collect()
    }
}

impl<K: Ord + Copy, V> Default for Registry<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// A participating state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateRecord {
    pub name: Name,
    pub song_name: Name,
    /// Votes this state has given to other states.
    pub votes: VoteLedger,
}

impl StateRecord {
    pub fn new(name: Name, song_name: Name) -> Self {
        Self {
            name,
            song_name,
            votes: VoteLedger::new(),
        }
    }
}

/// A judge and their ten-slot ranking, most favoured state first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JudgeRecord {
    pub name: Name,
    pub ranking: [StateId; RANKING_SIZE],
}

impl JudgeRecord {
    /// Whether this judge's ranking references `state`.
    pub fn ranks(&self, state: StateId) -> bool {
        self.ranking.contains(&state)
    }
}
