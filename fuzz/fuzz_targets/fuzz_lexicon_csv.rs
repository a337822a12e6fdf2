//! Fuzz target for master-dictionary CSV loading.
//!
//! Arbitrary bytes must either load or fail with a `LoadError`; a loaded
//! index must keep its bucket invariants.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lexstat_lexicon::load_from_reader;

const MAX_INPUT_SIZE: usize = 64 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(index) = load_from_reader(data) else {
        return;
    };

    let mut total = 0;
    for (len, bucket) in index.buckets() {
        for (phrase, entry) in bucket {
            assert_eq!(entry.ngram_len(), len);
            assert_eq!(phrase, entry.phrase());
        }
        total += bucket.len();
    }
    assert_eq!(total, index.len());
});
