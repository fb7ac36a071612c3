// Normalized-key bookkeeping shared by every stage.
//
// Duplicate detection, vanity detection, executor dedup and cross-brand
// aggregation all follow the same rule: the first occurrence of a
// lower-cased keyword wins and later occurrences only update it. This module
// is the one place that rule lives.

use std::collections::HashMap;

/// Lower-case a keyword. The only normalization applied anywhere.
pub fn normalize(keyword: &str) -> String {
    keyword.to_lowercase()
}

/// Insertion-ordered map keyed by normalized keyword.
///
/// Values come back out in the order their key was first seen, which is what
/// keeps every stage's output deterministic.
#[derive(Debug, Clone)]
pub struct NormalizedIndex<V> {
    positions: HashMap<String, usize>,
    entries: Vec<V>,
}

impl<V> Default for NormalizedIndex<V> {
    fn default() -> Self {
        Self {
            positions: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<V> NormalizedIndex<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an occurrence of `keyword`.
    ///
    /// The first occurrence stores `on_first()`; every later one applies
    /// `on_repeat` to the stored value. Returns true on first occurrence.
    pub fn record(
        &mut self,
        keyword: &str,
        on_first: impl FnOnce() -> V,
        on_repeat: impl FnOnce(&mut V),
    ) -> bool {
        let key = normalize(keyword);
        match self.positions.get(&key) {
            Some(&idx) => {
                on_repeat(&mut self.entries[idx]);
                false
            }
            None => {
                self.positions.insert(key, self.entries.len());
                self.entries.push(on_first());
                true
            }
        }
    }

    /// Store `value` only if `keyword` has not been seen. Returns true if stored.
    pub fn insert_first(&mut self, keyword: &str, value: V) -> bool {
        self.record(keyword, || value, |_| {})
    }

    pub fn get(&self, keyword: &str) -> Option<&V> {
        self.positions
            .get(&normalize(keyword))
            .map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.positions.contains_key(&normalize(keyword))
    }

    pub fn into_values(self) -> Vec<V> {
        self.entries
    }
}

/// A set of normalized keywords that remembers nothing but membership.
pub type SeenSet = NormalizedIndex<()>;

impl SeenSet {
    /// Mark `keyword` as seen. Returns true if it had not been seen before.
    pub fn first_time(&mut self, keyword: &str) -> bool {
        self.insert_first(keyword, ())
    }
}

impl<'a> FromIterator<&'a str> for SeenSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = SeenSet::new();
        for keyword in iter {
            set.first_time(keyword);
        }
        set
    }
}

/// Fill an unset metric from a later occurrence. Once set, never overwritten.
pub fn backfill<T: Copy>(slot: &mut Option<T>, candidate: Option<T>) {
    if slot.is_none() {
        *slot = candidate;
    }
}
