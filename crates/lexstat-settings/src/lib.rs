//! # lexstat-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Clap-free settings types. [`TomlConfig`] is the on-disk schema where every
//! value is optional; [`RunSettings`] is the fully resolved form a run uses.
//!
//! ## What belongs here
//! * Pure data types with Serde derive
//! * TOML parsing of the configuration file
//! * Layering of partial configurations
//!
//! ## What does NOT belong here
//! * Clap parsing (use lexstat-config)
//! * Config file discovery
//! * Business logic

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use lexstat_types::ReportFormat;

/// Root TOML configuration structure.
///
/// ```toml
/// [lexicon]
/// path = "LoughranMcDonald_MasterDictionary.csv"
///
/// [corpus]
/// path = "filings"
/// globs = ["*.txt"]
/// max_files = 500
///
/// [output]
/// path = "report.csv"
/// format = "csv"
///
/// [text]
/// false_positive = "\\b(?:May|MAY)\\b"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub lexicon: LexiconConfig,
    pub corpus: CorpusConfig,
    pub output: OutputConfig,
    pub text: TextConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Master-dictionary CSV.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Directory of documents to analyze.
    pub path: Option<PathBuf>,
    /// Only analyze files matching these globs.
    pub globs: Option<Vec<String>>,
    /// Stop after this many documents (in path order).
    pub max_files: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report file; standard output when unset.
    pub path: Option<PathBuf>,
    pub format: Option<ReportFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Pattern stripped before case folding. An empty string disables it.
    pub false_positive: Option<String>,
}

impl TomlConfig {
    /// Load configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load configuration from a file path.
    ///
    /// Relative paths inside the file are taken relative to the file's
    /// directory.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(match path.parent() {
            Some(base) if !base.as_os_str().is_empty() => config.rebased(base),
            _ => config,
        })
    }

    /// Join every relative path with `base`.
    #[must_use]
    pub fn rebased(mut self, base: &Path) -> Self {
        for path in [
            &mut self.lexicon.path,
            &mut self.corpus.path,
            &mut self.output.path,
        ]
        .into_iter()
        .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }

    /// Layer `self` over `lower`: every value set in `self` wins.
    #[must_use]
    pub fn over(self, lower: TomlConfig) -> Self {
        Self {
            lexicon: LexiconConfig {
                path: self.lexicon.path.or(lower.lexicon.path),
            },
            corpus: CorpusConfig {
                path: self.corpus.path.or(lower.corpus.path),
                globs: self.corpus.globs.or(lower.corpus.globs),
                max_files: self.corpus.max_files.or(lower.corpus.max_files),
            },
            output: OutputConfig {
                path: self.output.path.or(lower.output.path),
                format: self.output.format.or(lower.output.format),
            },
            text: TextConfig {
                false_positive: self.text.false_positive.or(lower.text.false_positive),
            },
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSettings {
    pub lexicon: PathBuf,
    pub corpus: PathBuf,
    pub output: Option<PathBuf>,
    pub format: ReportFormat,
    pub globs: Vec<String>,
    pub max_files: Option<usize>,
    /// `None` keeps the built-in pattern; `Some("")` disables stripping.
    pub false_positive: Option<String>,
}

impl RunSettings {
    /// Settings with defaults for everything but the lexicon: the current
    /// directory as corpus, CSV to standard output, no globs, no limit.
    pub fn new(lexicon: impl Into<PathBuf>) -> Self {
        Self {
            lexicon: lexicon.into(),
            corpus: PathBuf::from("."),
            output: None,
            format: ReportFormat::default(),
            globs: Vec::new(),
            max_files: None,
            false_positive: None,
        }
    }

    /// Resolve a layered configuration. Returns `None` when no lexicon is
    /// configured, since there is no sensible default for it.
    pub fn from_config(config: TomlConfig) -> Option<Self> {
        let defaults = Self::new(config.lexicon.path?);
        Some(Self {
            corpus: config.corpus.path.unwrap_or(defaults.corpus),
            output: config.output.path,
            format: config.output.format.unwrap_or(defaults.format),
            globs: config.corpus.globs.unwrap_or(defaults.globs),
            max_files: config.corpus.max_files,
            false_positive: config.text.false_positive,
            ..defaults
        })
    }
}
