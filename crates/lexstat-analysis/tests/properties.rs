use lexstat_analysis::analyze_document;
use lexstat_lexicon::{Category, CategorySet, LexiconEntry, LexiconIndex};
use lexstat_text::Cleaner;
use proptest::prelude::*;

const WORDS: [&str; 8] = ["GOOD", "NOT", "BAD", "RISK", "MAY", "A", "LOSS", "10"];

fn lexicon() -> impl Strategy<Value = LexiconIndex> {
    let phrase = prop::collection::vec(prop::sample::select(WORDS.to_vec()), 1..3)
        .prop_map(|t| t.join(" "));
    let category = prop::sample::select(Category::ALL.to_vec());
    prop::collection::vec((phrase, prop::collection::vec(category, 0..3), 0u32..5), 0..10)
        .prop_map(|rows| {
            LexiconIndex::from_entries(rows.into_iter().map(|(p, cats, syl)| {
                LexiconEntry::new(&p, cats.into_iter().collect::<CategorySet>(), syl)
            }))
        })
}

fn document() -> impl Strategy<Value = String> {
    let piece = prop::sample::select(vec![
        "good", "not", "bad", "risk", "May", "may", "a", "loss", "10", "1,000.5", ",", ".", "!",
    ]);
    prop::collection::vec(piece, 0..40).prop_map(|p| p.join(" "))
}

proptest! {
    #[test]
    fn vocabulary_never_exceeds_word_count(idx in lexicon(), text in document()) {
        let stats = analyze_document(&text, &idx, &Cleaner::default());
        prop_assert!(stats.vocabulary <= stats.word_count);
    }

    #[test]
    fn analysis_is_idempotent(idx in lexicon(), text in document()) {
        let cleaner = Cleaner::default();
        prop_assert_eq!(
            analyze_document(&text, &idx, &cleaner),
            analyze_document(&text, &idx, &cleaner)
        );
    }

    #[test]
    fn ratios_are_finite_and_non_negative(idx in lexicon(), text in document()) {
        let stats = analyze_document(&text, &idx, &Cleaner::default());
        for c in Category::ALL {
            let p = stats.percentages.get(c);
            prop_assert!(p.is_finite() && p >= 0.0);
        }
        prop_assert!(stats.avg_syllables.is_finite() && stats.avg_syllables >= 0.0);
        prop_assert!(stats.avg_word_length.is_finite() && stats.avg_word_length >= 0.0);
    }

    #[test]
    fn zero_words_means_sentinel_ratios(idx in lexicon(), text in document()) {
        let stats = analyze_document(&text, &idx, &Cleaner::default());
        if stats.word_count == 0 {
            prop_assert_eq!(stats.avg_syllables, 0.0);
            prop_assert_eq!(stats.avg_word_length, 0.0);
            for c in Category::ALL {
                prop_assert_eq!(stats.percentages.get(c), 0.0);
            }
        }
    }
}
