//! Cleanup pre-pass and tokenizer.

use std::sync::LazyLock;

use regex::Regex;

/// Default false-positive pattern: the month "May", which would otherwise
/// be counted as the weak modal "MAY" once the text is upper-cased. The
/// lowercase modal verb is left alone.
///
/// The match is word-bounded, so `Maybe` and `Mayor` keep their letters.
/// The unbounded pattern `May|MAY` strips the month from inside longer
/// words as well (`Maybe` becomes `BE`); pass it as a custom pattern to get
/// that behavior.
pub const DEFAULT_FALSE_POSITIVE: &str = r"\b(?:May|MAY)\b";

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w]+").expect("valid regex literal"));

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex literal"));

/// Text normalization applied to every document before tokenization.
#[derive(Debug, Clone)]
pub struct Cleaner {
    false_positive: Option<Regex>,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self {
            false_positive: Some(
                Regex::new(DEFAULT_FALSE_POSITIVE).expect("valid regex literal"),
            ),
        }
    }
}

impl Cleaner {
    /// Build a cleaner that strips matches of `pattern`.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            false_positive: Some(Regex::new(pattern)?),
        })
    }

    /// A cleaner that only folds case and collapses non-word runs.
    pub fn without_false_positives() -> Self {
        Self {
            false_positive: None,
        }
    }

    pub fn false_positive_pattern(&self) -> Option<&str> {
        self.false_positive.as_ref().map(|r| r.as_str())
    }

    /// Replace false-positive matches with a space, then upper-case.
    pub fn fold(&self, raw: &str) -> String {
        match &self.false_positive {
            Some(re) => re.replace_all(raw, " ").to_uppercase(),
            None => raw.to_uppercase(),
        }
    }

    /// Full cleanup: [`Cleaner::fold`] followed by [`collapse_non_word`].
    pub fn clean(&self, raw: &str) -> String {
        collapse_non_word(&self.fold(raw))
    }
}

/// Collapse every run of non-word characters to a single space and trim.
pub fn collapse_non_word(text: &str) -> String {
    NON_WORD.replace_all(text, " ").trim().to_string()
}

/// Split text into its ordered word-character runs (`\w+`).
///
/// Hyphenated words split into their parts. Numbers are kept; filtering is
/// the caller's job.
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}
