//! AlternativeSet — spelling variants grouped under a lowercase key.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Lowercase form of a spelling, the case-insensitive equivalence key.
/// Two spellings are the same logical file iff their keys match.
pub fn spelling_key(spelling: &str) -> String {
    spelling.to_lowercase()
}

/// Mapping from spelling key to the distinct case-preserved spellings
/// observed for it, on disk or in include directives. Set semantics:
/// duplicates collapse, order is irrelevant (kept deterministic for
/// reproducible reports).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlternativeSet {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl AlternativeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observed spelling under its lowercase key, creating the
    /// entry if the key is new.
    pub fn insert(&mut self, spelling: &str) {
        self.entries
            .entry(spelling_key(spelling))
            .or_default()
            .insert(spelling.to_string());
    }

    pub fn extend<I>(&mut self, spellings: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for spelling in spellings {
            self.insert(spelling.as_ref());
        }
    }

    /// Spellings observed for a key, if any survive.
    pub fn get(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Drop entries with a single spelling. A lone spelling means the
    /// on-disk file already matches every reference, or the reference is
    /// never paired with a conflicting one; either way there is nothing
    /// to reconcile.
    pub fn prune(&mut self) {
        self.entries.retain(|_, spellings| spellings.len() > 1);
    }

    /// Number of surviving conflict groups.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.entries.iter()
    }
}
