//! Frequency distributions over tags, tokens or lemmas.

use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts keyed by `K`.
///
/// Ranking is deterministic: count descending, ties broken by first occurrence.
#[derive(Debug, Clone)]
pub struct FrequencyDistribution<K> {
    counts: HashMap<K, (usize, usize)>,
    total: usize,
}

impl<K> Default for FrequencyDistribution<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyDistribution<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `key`
    pub fn add(&mut self, key: K) {
        let first_seen = self.counts.len();
        self.counts.entry(key).or_insert((0, first_seen)).0 += 1;
        self.total += 1;
    }

    /// Count of `key` (0 when absent)
    pub fn get<Q>(&self, key: &Q) -> usize
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.counts.get(key).map_or(0, |&(count, _)| count)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.counts.contains_key(key)
    }

    /// Number of distinct keys
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of keys that occur exactly once
    pub fn hapax_count(&self) -> usize {
        self.counts.values().filter(|&&(count, _)| count == 1).count()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.counts.keys()
    }

    /// Drop every key for which `keep` returns false.
    ///
    /// Survivors keep their relative first-occurrence order and are
    /// renumbered densely, so later `add`s rank after them on ties.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) {
        self.counts.retain(|key, _| keep(key));

        let mut order: Vec<&mut (usize, usize)> = self.counts.values_mut().collect();
        order.sort_by_key(|entry| entry.1);
        for (rank, entry) in order.into_iter().enumerate() {
            entry.1 = rank;
        }

        self.total = self.counts.values().map(|&(count, _)| count).sum();
    }

    /// All `(key, count)` pairs, most common first
    pub fn most_common(&self) -> Vec<(K, usize)> {
        let mut ranked: Vec<(&K, usize, usize)> = self
            .counts
            .iter()
            .map(|(key, &(count, first_seen))| (key, count, first_seen))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        ranked
            .into_iter()
            .map(|(key, count, _)| (key.clone(), count))
            .collect()
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyDistribution<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut dist = Self::new();
        for key in iter {
            dist.add(key);
        }
        dist
    }
}
