use std::collections::BTreeSet;

use crate::model::SetKey;

/// Sets confirmed during the current session.
///
/// Only grows: a confirmed set stays confirmed until a new session starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionMap {
    confirmed: BTreeSet<SetKey>,
}

impl CompletionMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as confirmed. Returns false if it already was.
    pub fn confirm(&mut self, key: SetKey) -> bool {
        self.confirmed.insert(key)
    }

    #[must_use]
    pub fn is_confirmed(&self, key: SetKey) -> bool {
        self.confirmed.contains(&key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.confirmed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.confirmed.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SetKey> + '_ {
        self.confirmed.iter().copied()
    }
}
