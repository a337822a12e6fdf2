use lexstat_types::{Category, CategorySet, normalize_phrase};
use proptest::prelude::*;

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

proptest! {
    #[test]
    fn normalize_phrase_is_idempotent(s in "\\PC*") {
        let once = normalize_phrase(&s);
        prop_assert_eq!(normalize_phrase(&once), once.clone());
    }

    #[test]
    fn normalize_phrase_never_has_double_spaces(s in "[a-z \t\n]{0,40}") {
        let n = normalize_phrase(&s);
        prop_assert!(!n.contains("  "));
        prop_assert!(!n.starts_with(' '));
        prop_assert!(!n.ends_with(' '));
    }

    #[test]
    fn category_set_len_matches_distinct_inserts(cats in prop::collection::vec(category(), 0..16)) {
        let set: CategorySet = cats.iter().copied().collect();
        let mut distinct = cats.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(set.len(), distinct.len());
        for c in distinct {
            prop_assert!(set.contains(c));
        }
    }
}
