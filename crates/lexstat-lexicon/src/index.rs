//! Per-length lexicon storage.

use std::collections::HashMap;

use lexstat_types::{LexiconEntry, normalize_phrase};

/// Entries of a single phrase length, keyed by normalized phrase text.
pub type Bucket = HashMap<String, LexiconEntry>;

/// Lexicon entries grouped by phrase length.
///
/// `buckets[i]` holds the phrases of `i + 1` tokens, so bucket lengths are
/// always the contiguous range `1..=max_len()`. A length with no phrases has
/// an empty bucket. The index is built once and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct LexiconIndex {
    buckets: Vec<Bucket>,
    entries: usize,
}

impl LexiconIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I: IntoIterator<Item = LexiconEntry>>(entries: I) -> Self {
        let mut index = Self::new();
        for entry in entries {
            index.insert(entry);
        }
        index
    }

    /// Insert an entry, returning the entry it replaced (same phrase text).
    ///
    /// Blank phrases have no length bucket and are dropped.
    pub fn insert(&mut self, entry: LexiconEntry) -> Option<LexiconEntry> {
        let len = entry.ngram_len();
        if len == 0 {
            return None;
        }
        if self.buckets.len() < len {
            self.buckets.resize_with(len, Bucket::new);
        }
        let replaced = self.buckets[len - 1].insert(entry.phrase().to_string(), entry);
        if replaced.is_none() {
            self.entries += 1;
        }
        replaced
    }

    /// Longest phrase length present (`K`); zero for an empty lexicon.
    pub fn max_len(&self) -> usize {
        self.buckets.len()
    }

    /// The bucket for phrases of `len` tokens, if `1 <= len <= max_len()`.
    pub fn bucket(&self, len: usize) -> Option<&Bucket> {
        len.checked_sub(1).and_then(|i| self.buckets.get(i))
    }

    /// Iterate `(len, bucket)` pairs in ascending length order.
    pub fn buckets(&self) -> impl Iterator<Item = (usize, &Bucket)> {
        self.buckets.iter().enumerate().map(|(i, b)| (i + 1, b))
    }

    /// Look up an already-normalized phrase in the bucket for `len`.
    pub fn lookup(&self, len: usize, phrase: &str) -> Option<&LexiconEntry> {
        self.bucket(len).and_then(|b| b.get(phrase))
    }

    /// Look up arbitrary phrase text, normalizing it first.
    pub fn get(&self, phrase: &str) -> Option<&LexiconEntry> {
        let key = normalize_phrase(phrase);
        let len = key.split(' ').filter(|t| !t.is_empty()).count();
        self.lookup(len, &key)
    }

    /// Whether `token` is a single-word entry.
    pub fn contains_word(&self, token: &str) -> bool {
        self.lookup(1, token).is_some()
    }

    /// Iterate every entry, shorter phrases first.
    pub fn entries(&self) -> impl Iterator<Item = &LexiconEntry> {
        self.buckets.iter().flat_map(|b| b.values())
    }

    /// Total number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexstat_types::{Category, CategorySet};

    fn entry(phrase: &str) -> LexiconEntry {
        LexiconEntry::new(phrase, CategorySet::EMPTY, 1)
    }

    #[test]
    fn empty_index_has_no_buckets() {
        let index = LexiconIndex::new();
        assert_eq!(index.max_len(), 0);
        assert!(index.is_empty());
        assert!(index.bucket(1).is_none());
        assert!(!index.contains_word("GOOD"));
    }

    #[test]
    fn buckets_are_contiguous_even_with_gaps() {
        let index = LexiconIndex::from_entries([entry("good"), entry("in the event of")]);
        assert_eq!(index.max_len(), 4);
        assert_eq!(index.bucket(1).map(|b| b.len()), Some(1));
        assert_eq!(index.bucket(2).map(|b| b.len()), Some(0));
        assert_eq!(index.bucket(3).map(|b| b.len()), Some(0));
        assert_eq!(index.bucket(4).map(|b| b.len()), Some(1));
        assert!(index.bucket(0).is_none());
        assert!(index.bucket(5).is_none());
    }

    #[test]
    fn duplicate_phrase_replaces_previous_entry() {
        let mut index = LexiconIndex::new();
        assert!(index.insert(entry("good")).is_none());
        let replaced = index.insert(LexiconEntry::new(
            "GOOD",
            CategorySet::EMPTY.with(Category::Positive),
            1,
        ));
        assert!(replaced.is_some());
        assert_eq!(index.len(), 1);
        assert!(index.get("good").unwrap().has(Category::Positive));
    }

    #[test]
    fn blank_phrase_is_dropped() {
        let mut index = LexiconIndex::new();
        assert!(index.insert(entry("  ")).is_none());
        assert!(index.is_empty());
        assert_eq!(index.max_len(), 0);
    }

    #[test]
    fn get_normalizes_query() {
        let index = LexiconIndex::from_entries([entry("not good")]);
        assert!(index.get("  not   GOOD ").is_some());
        assert!(index.lookup(2, "NOT GOOD").is_some());
        assert!(index.lookup(1, "NOT GOOD").is_none());
    }

    #[test]
    fn entries_visits_every_bucket() {
        let index = LexiconIndex::from_entries([entry("a b"), entry("c"), entry("d e f")]);
        let mut phrases: Vec<_> = index.entries().map(|e| e.phrase().to_string()).collect();
        phrases.sort();
        assert_eq!(phrases, vec!["A B", "C", "D E F"]);
    }
}
