//! # lexstat-lexicon
//!
//! **Tier 1 (Lexicon)**
//!
//! The read-only word/phrase dictionary every document is scored against.
//!
//! ## What belongs here
//! * [`LexiconIndex`]: entries grouped into contiguous per-length buckets
//! * Loading the index from a master-dictionary CSV
//! * [`LoadError`], the fatal error for an unreadable or malformed source
//!
//! ## What does NOT belong here
//! * Document tokenization (use lexstat-text)
//! * Counting matches (use lexstat-ngram)
//!
//! ## Example
//! ```ignore
//! use lexstat_lexicon::load;
//!
//! let index = load(Path::new("LoughranMcDonald_MasterDictionary.csv"))?;
//! assert!(index.contains_word("GOOD"));
//! ```

mod error;
mod index;
mod load;

pub use error::LoadError;
pub use index::{Bucket, LexiconIndex};
pub use lexstat_types::{Category, CategorySet, LexiconEntry, normalize_phrase};
pub use load::{load, load_from_reader};
