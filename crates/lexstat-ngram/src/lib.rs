//! # lexstat-ngram
//!
//! **Tier 2 (Matching)**
//!
//! Counts every lexicon phrase in a token stream and corrects the counts of
//! short phrases that are nested inside matched longer phrases.
//!
//! ## What belongs here
//! * [`CountTable`]: per-document phrase counts
//! * [`count_ngrams`]: sliding-window raw counts for lengths `1..=K`
//! * [`correct_overlaps`]: the nested-phrase correction
//!
//! ## What does NOT belong here
//! * Tokenization (use lexstat-text)
//! * Category totals and ratios (use lexstat-analysis)
//!
//! ## Overlap correction and its limits
//!
//! For every length `l` in `1..K` and every pair of lexicon phrases `p`
//! (length `l`) and `q` (length `l + 1`) where `" p "` is a substring of
//! `" q "`, the count of `q` is subtracted from the count of `p`. With
//! `{"GOOD", "NOT GOOD"}` and the tokens `NOT GOOD IS GOOD`, `GOOD` is
//! counted twice and then corrected to 1.
//!
//! The test is textual, not positional:
//! * occurrences of `p` that are not inside a `q` are suppressed anyway when
//!   `q` also occurs somewhere in the document;
//! * only adjacent lengths are compared, so a 1-word phrase inside a 3-word
//!   phrase is not corrected unless a 2-word phrase links them;
//! * a phrase contained in several matched longer phrases can end up with a
//!   negative count. Counts are never clamped; consumers decide what a
//!   non-positive count means.

#![forbid(unsafe_code)]

use std::collections::HashMap;

use lexstat_lexicon::LexiconIndex;

/// Phrase counts for one document, keyed by `(length, phrase)`.
///
/// Every lexicon phrase has a slot, starting at zero. Keys borrow from the
/// [`LexiconIndex`] the table was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountTable<'a> {
    counts: Vec<HashMap<&'a str, i64>>,
}

impl<'a> CountTable<'a> {
    /// A zeroed table with one slot per lexicon phrase.
    pub fn for_index(index: &'a LexiconIndex) -> Self {
        let counts = index
            .buckets()
            .map(|(_, bucket)| bucket.keys().map(|k| (k.as_str(), 0)).collect())
            .collect();
        Self { counts }
    }

    /// Current count of a phrase; zero for phrases outside the lexicon.
    pub fn get(&self, len: usize, phrase: &str) -> i64 {
        self.slot(len)
            .and_then(|m| m.get(phrase))
            .copied()
            .unwrap_or(0)
    }

    /// Add one to a lexicon phrase. Returns `false` if the phrase has no slot.
    pub fn increment(&mut self, len: usize, phrase: &str) -> bool {
        self.adjust(len, phrase, 1)
    }

    /// Add `delta` to a lexicon phrase. Returns `false` if it has no slot.
    pub fn adjust(&mut self, len: usize, phrase: &str, delta: i64) -> bool {
        match self.slot_mut(len).and_then(|m| m.get_mut(phrase)) {
            Some(count) => {
                *count += delta;
                true
            }
            None => false,
        }
    }

    /// Iterate `(length, phrase, count)` for every slot, shorter phrases first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a str, i64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .flat_map(|(i, m)| m.iter().map(move |(p, c)| (i + 1, *p, *c)))
    }

    /// Longest phrase length with slots.
    pub fn max_len(&self) -> usize {
        self.counts.len()
    }

    fn slot(&self, len: usize) -> Option<&HashMap<&'a str, i64>> {
        len.checked_sub(1).and_then(|i| self.counts.get(i))
    }

    fn slot_mut(&mut self, len: usize) -> Option<&mut HashMap<&'a str, i64>> {
        len.checked_sub(1).and_then(|i| self.counts.get_mut(i))
    }
}

/// Count raw occurrences of every lexicon phrase in `tokens`.
///
/// For each length `l` in `1..=K`, every window of `l` consecutive tokens is
/// joined with single spaces and looked up in the length-`l` bucket. A
/// document shorter than `l` simply has no windows of that length.
pub fn count_ngrams<'a, S: AsRef<str>>(tokens: &[S], index: &'a LexiconIndex) -> CountTable<'a> {
    let mut table = CountTable::for_index(index);
    let mut window = String::new();

    for (len, bucket) in index.buckets() {
        if tokens.len() < len {
            break;
        }
        if bucket.is_empty() {
            continue;
        }
        for gram in tokens.windows(len) {
            window.clear();
            for (i, tok) in gram.iter().enumerate() {
                if i > 0 {
                    window.push(' ');
                }
                window.push_str(tok.as_ref());
            }
            table.increment(len, &window);
        }
    }

    table
}

/// Subtract each matched `(l + 1)`-phrase's count from the `l`-phrases it
/// textually contains, for `l` ascending from 1.
///
/// Pass `l` reads bucket `l + 1` before pass `l + 1` has corrected it, so
/// the subtracted amounts are raw counts. A longer phrase containing the
/// same shorter phrase twice (`"GOOD GOOD"`) subtracts only once.
pub fn correct_overlaps(table: &mut CountTable<'_>, index: &LexiconIndex) {
    for len in 1..index.max_len() {
        let (Some(shorter), Some(longer)) = (index.bucket(len), index.bucket(len + 1)) else {
            continue;
        };
        if shorter.is_empty() {
            continue;
        }
        for long in longer.keys() {
            let count = table.get(len + 1, long);
            if count == 0 {
                continue;
            }
            // With single-space phrases, " p " occurs in " q " exactly when p
            // is q without its last token or q without its first token.
            let head = long.rsplit_once(' ').map_or(long.as_str(), |(h, _)| h);
            let tail = long.split_once(' ').map_or(long.as_str(), |(_, t)| t);
            debug_assert!(phrase_contains(long, head) && phrase_contains(long, tail));

            if shorter.contains_key(head) {
                table.adjust(len, head, -count);
            }
            if tail != head && shorter.contains_key(tail) {
                table.adjust(len, tail, -count);
            }
        }
    }
}

/// Count and correct in one step.
pub fn match_phrases<'a, S: AsRef<str>>(tokens: &[S], index: &'a LexiconIndex) -> CountTable<'a> {
    let mut table = count_ngrams(tokens, index);
    correct_overlaps(&mut table, index);
    table
}

/// Whether `short` occurs in `long` on token boundaries, i.e. `" short "`
/// is a substring of `" long "`.
pub fn phrase_contains(long: &str, short: &str) -> bool {
    format!(" {long} ").contains(&format!(" {short} "))
}
