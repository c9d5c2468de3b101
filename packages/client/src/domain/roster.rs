//! Roster of remote participants in the current room.

use std::collections::BTreeMap;

use super::entity::Participant;

/// Mapping from participant address to display name.
///
/// Keys are kept ordered so that snapshots are stable between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    participants: BTreeMap<String, String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a participant or overwrite its display name.
    pub fn upsert(&mut self, address: impl Into<String>, name: impl Into<String>) {
        self.participants.insert(address.into(), name.into());
    }

    /// Remove a participant. Returns `false` when the address was not present.
    pub fn remove(&mut self, address: &str) -> bool {
        self.participants.remove(address).is_some()
    }

    /// Snapshot of every display name (unset names included as empty strings).
    pub fn all_names(&self) -> Vec<String> {
        self.participants.values().cloned().collect()
    }

    /// Snapshot of every participant, ordered by address.
    pub fn participants(&self) -> Vec<Participant> {
        self.participants
            .iter()
            .map(|(address, name)| Participant::new(address.clone(), name.clone()))
            .collect()
    }

    pub fn get(&self, address: &str) -> Option<Participant> {
        self.participants
            .get(address)
            .map(|name| Participant::new(address, name.clone()))
    }

    pub fn clear(&mut self) {
        self.participants.clear();
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
