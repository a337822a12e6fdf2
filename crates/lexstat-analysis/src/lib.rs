//! # lexstat-analysis
//!
//! **Tier 2 (Statistics)**
//!
//! Turns corrected phrase counts and the token stream into the
//! [`DocumentStats`] of one document.
//!
//! ## What belongs here
//! * [`aggregate`]: category, syllable and word totals
//! * [`Totals::derive`]: percentages and averages
//! * [`analyze_document`]: cleanup → tokenize → match → aggregate
//!
//! ## What does NOT belong here
//! * Phrase matching (use lexstat-ngram)
//! * Report formatting and rounding (use lexstat-format)

#![forbid(unsafe_code)]

use std::collections::HashSet;

use lexstat_lexicon::LexiconIndex;
use lexstat_math::{safe_percent, safe_ratio};
use lexstat_ngram::{CountTable, match_phrases};
use lexstat_text::{CharCounts, Cleaner, char_counts, tokenize};
use lexstat_types::{Category, CategoryPercents, DocumentStats};

/// Corrected phrase counts summed per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTotals([u64; 8]);

impl CategoryTotals {
    pub fn add(&mut self, category: Category, n: u64) {
        self.0[category.index()] += n;
    }

    pub fn get(&self, category: Category) -> u64 {
        self.0[category.index()]
    }
}

/// Raw sums for one document, before any division.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub categories: CategoryTotals,
    /// Sum of `count × syllables` over matched entries.
    pub syllables: u64,
    /// Tokens that pass the word filter (see [`is_word`]).
    pub words: u64,
    /// Sum of word lengths in characters.
    pub word_length: u64,
    /// Distinct words.
    pub vocabulary: usize,
}

impl Totals {
    /// Percentages and averages over [`Totals::words`], plus the given
    /// character counts. Every ratio is `0.0` for a document with no words.
    pub fn derive(&self, chars: CharCounts) -> DocumentStats {
        let words = self.words;
        DocumentStats {
            word_count: words as usize,
            percentages: CategoryPercents::from_fn(|c| safe_percent(self.categories.get(c), words)),
            alphanumeric: chars.alphanumeric,
            alphabetic: chars.alphabetic,
            digits: chars.digits,
            numbers: chars.numbers,
            avg_syllables: safe_ratio(self.syllables, words),
            avg_word_length: safe_ratio(self.word_length, words),
            vocabulary: self.vocabulary,
        }
    }
}

/// A token counts as a word when it is not purely numeric, is longer than
/// one character, and is a single-word lexicon entry.
pub fn is_word(token: &str, index: &LexiconIndex) -> bool {
    !token.chars().all(char::is_numeric)
        && token.chars().nth(1).is_some()
        && index.contains_word(token)
}

/// Sum category and syllable totals from corrected counts, and word totals
/// from the raw token stream.
///
/// Entries whose corrected count is zero or negative contribute nothing.
pub fn aggregate<S: AsRef<str>>(
    table: &CountTable<'_>,
    tokens: &[S],
    index: &LexiconIndex,
) -> Totals {
    let mut totals = Totals::default();

    for (len, phrase, count) in table.iter() {
        let Ok(count) = u64::try_from(count) else {
            continue;
        };
        if count == 0 {
            continue;
        }
        let Some(entry) = index.lookup(len, phrase) else {
            continue;
        };
        for category in entry.categories().iter() {
            totals.categories.add(category, count);
        }
        totals.syllables += count * u64::from(entry.syllables());
    }

    let mut vocabulary = HashSet::new();
    for token in tokens.iter().map(AsRef::as_ref) {
        if is_word(token, index) {
            totals.words += 1;
            totals.word_length += token.chars().count() as u64;
            vocabulary.insert(token);
        }
    }
    totals.vocabulary = vocabulary.len();

    totals
}

/// Run the whole pipeline over one document's raw text.
pub fn analyze_document(raw: &str, index: &LexiconIndex, cleaner: &Cleaner) -> DocumentStats {
    let cleaned = cleaner.clean(raw);
    let chars = char_counts(&cleaned);
    let tokens = tokenize(&cleaned);
    let table = match_phrases(&tokens, index);
    aggregate(&table, &tokens, index).derive(chars)
}
