//! Fuzz target for the document pipeline.
//!
//! Runs arbitrary text through cleanup, matching and aggregation against a
//! small lexicon with nested phrases and checks the output invariants.

#![no_main]

use std::sync::LazyLock;

use libfuzzer_sys::fuzz_target;
use lexstat_analysis::analyze_document;
use lexstat_lexicon::{Category, CategorySet, LexiconEntry, LexiconIndex};
use lexstat_ngram::{count_ngrams, correct_overlaps};
use lexstat_text::{Cleaner, tokenize};

const MAX_INPUT_SIZE: usize = 16 * 1024;

static INDEX: LazyLock<LexiconIndex> = LazyLock::new(|| {
    let entry = |p: &str, c: Category| LexiconEntry::new(p, CategorySet::EMPTY.with(c), 1);
    LexiconIndex::from_entries([
        entry("GOOD", Category::Positive),
        entry("NOT GOOD", Category::Negative),
        entry("GOOD NEWS", Category::Positive),
        entry("NOT", Category::Negative),
        entry("MAY", Category::WeakModal),
        entry("A", Category::Uncertainty),
        entry("IN THE EVENT OF", Category::Constraining),
    ])
});

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let cleaner = Cleaner::default();
    let stats = analyze_document(text, &INDEX, &cleaner);
    assert!(stats.vocabulary <= stats.word_count);
    assert!(stats.avg_syllables.is_finite());
    assert!(stats.avg_word_length.is_finite());
    assert_eq!(stats, analyze_document(text, &INDEX, &cleaner));

    let cleaned = cleaner.clean(text);
    let tokens = tokenize(&cleaned);
    let raw = count_ngrams(&tokens, &INDEX);
    let mut corrected = raw.clone();
    correct_overlaps(&mut corrected, &INDEX);
    for (len, phrase, count) in corrected.iter() {
        assert!(count <= raw.get(len, phrase));
    }
});
