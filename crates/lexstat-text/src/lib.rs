//! # lexstat-text
//!
//! **Tier 1 (Text)**
//!
//! Everything `lexstat` does to raw document text before lexicon matching.
//!
//! ## What belongs here
//! * The cleanup pre-pass ([`Cleaner`]): false-positive stripping, case
//!   folding, non-word collapsing
//! * Tokenization into word-character runs ([`tokenize`])
//! * Character-class counts ([`char_counts`])
//!
//! ## What does NOT belong here
//! * Lexicon lookups (use lexstat-lexicon)
//! * File reading (use lexstat-walk)

#![forbid(unsafe_code)]

mod clean;
mod counts;

pub use clean::{Cleaner, DEFAULT_FALSE_POSITIVE, collapse_non_word, tokenize};
pub use counts::{CharCounts, char_counts};
