//! # lexstat-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the core data structures shared by every `lexstat`
//! crate: lexicon categories and entries, per-document statistics, and the
//! fixed report header.
//!
//! ## What belongs here
//! * Pure data structs (entries, stats, report rows)
//! * Serialization/Deserialization logic
//! * Phrase normalization (the one rule every crate must agree on)
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Counting or aggregation logic

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// One of the eight lexicon categories, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Positive,
    Negative,
    Uncertainty,
    Litigious,
    WeakModal,
    ModerateModal,
    StrongModal,
    Constraining,
}

impl Category {
    /// All categories in report column order.
    pub const ALL: [Category; 8] = [
        Category::Positive,
        Category::Negative,
        Category::Uncertainty,
        Category::Litigious,
        Category::WeakModal,
        Category::ModerateModal,
        Category::StrongModal,
        Category::Constraining,
    ];

    /// Position of the category in [`Category::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::Positive => "positive",
            Category::Negative => "negative",
            Category::Uncertainty => "uncertainty",
            Category::Litigious => "litigious",
            Category::WeakModal => "modal-weak",
            Category::ModerateModal => "modal-moderate",
            Category::StrongModal => "modal-strong",
            Category::Constraining => "constraining",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A compact set of [`Category`] flags.
///
/// Serializes as a list of category names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Category>", from = "Vec<Category>")]
pub struct CategorySet(u8);

impl CategorySet {
    pub const EMPTY: CategorySet = CategorySet(0);

    pub fn insert(&mut self, category: Category) {
        self.0 |= category.bit();
    }

    /// Builder-style [`CategorySet::insert`].
    #[must_use]
    pub fn with(mut self, category: Category) -> Self {
        self.insert(category);
        self
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the flagged categories in report order.
    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = CategorySet::EMPTY;
        for category in iter {
            set.insert(category);
        }
        set
    }
}

impl From<Vec<Category>> for CategorySet {
    fn from(value: Vec<Category>) -> Self {
        value.into_iter().collect()
    }
}

impl From<CategorySet> for Vec<Category> {
    fn from(value: CategorySet) -> Self {
        value.iter().collect()
    }
}

/// Normalize phrase text to the form used as a lexicon key: uppercase
/// tokens joined by exactly one space.
pub fn normalize_phrase(raw: &str) -> String {
    raw.split_whitespace()
        .map(|t| t.to_uppercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A single word or multi-word phrase from the lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    phrase: String,
    ngram_len: usize,
    categories: CategorySet,
    syllables: u32,
}

impl LexiconEntry {
    /// Build an entry; `phrase` is normalized with [`normalize_phrase`].
    pub fn new(phrase: &str, categories: CategorySet, syllables: u32) -> Self {
        let phrase = normalize_phrase(phrase);
        let ngram_len = phrase.split(' ').filter(|t| !t.is_empty()).count();
        Self {
            phrase,
            ngram_len,
            categories,
            syllables,
        }
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Number of tokens in the phrase (0 only for a blank phrase).
    pub fn ngram_len(&self) -> usize {
        self.ngram_len
    }

    pub fn categories(&self) -> CategorySet {
        self.categories
    }

    pub fn syllables(&self) -> u32 {
        self.syllables
    }

    pub fn has(&self, category: Category) -> bool {
        self.categories.contains(category)
    }
}

/// Category proportions of a document, as percentages of its word count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryPercents {
    pub positive: f64,
    pub negative: f64,
    pub uncertainty: f64,
    pub litigious: f64,
    pub weak_modal: f64,
    pub moderate_modal: f64,
    pub strong_modal: f64,
    pub constraining: f64,
}

impl CategoryPercents {
    /// Build from a function evaluated once per category.
    pub fn from_fn(mut f: impl FnMut(Category) -> f64) -> Self {
        Self {
            positive: f(Category::Positive),
            negative: f(Category::Negative),
            uncertainty: f(Category::Uncertainty),
            litigious: f(Category::Litigious),
            weak_modal: f(Category::WeakModal),
            moderate_modal: f(Category::ModerateModal),
            strong_modal: f(Category::StrongModal),
            constraining: f(Category::Constraining),
        }
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Positive => self.positive,
            Category::Negative => self.negative,
            Category::Uncertainty => self.uncertainty,
            Category::Litigious => self.litigious,
            Category::WeakModal => self.weak_modal,
            Category::ModerateModal => self.moderate_modal,
            Category::StrongModal => self.strong_modal,
            Category::Constraining => self.constraining,
        }
    }
}

/// Per-document statistics.
///
/// When `word_count` is zero every percentage and average is `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub word_count: usize,
    pub percentages: CategoryPercents,
    pub alphanumeric: usize,
    pub alphabetic: usize,
    pub digits: usize,
    pub numbers: usize,
    pub avg_syllables: f64,
    pub avg_word_length: f64,
    pub vocabulary: usize,
}

/// One row of the corpus report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub document: String,
    pub size_bytes: u64,
    #[serde(flatten)]
    pub stats: DocumentStats,
}

/// Column names of the tabular report, in row order.
pub const REPORT_HEADER: [&str; 18] = [
    "file name",
    "file size",
    "number of words",
    "% positive",
    "% negative",
    "% uncertainty",
    "% litigious",
    "% modal-weak",
    "% modal moderate",
    "% modal strong",
    "% constraining",
    "# of alphanumeric",
    "# of alphabetic",
    "# of digits",
    "# of numbers",
    "avg # of syllables per word",
    "average word length",
    "vocabulary",
];

/// Output format for the corpus report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,
    /// Tab-separated values (good for piping to other tools).
    Tsv,
    /// One JSON object per document.
    Jsonl,
}
