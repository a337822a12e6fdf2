//! # lexstat-config
//!
//! **Tier 4 (Configuration)**
//!
//! The Clap command-line definition and its mapping onto the clap-free
//! configuration schema.
//!
//! ## What belongs here
//! * The Clap `Parser` struct
//! * Conversion of CLI flags into a [`TomlConfig`] overlay
//!
//! ## What does NOT belong here
//! * Business logic
//! * Config file discovery or I/O

use std::path::PathBuf;

use clap::Parser;
use lexstat_settings::{CorpusConfig, LexiconConfig, OutputConfig, TextConfig, TomlConfig};

pub use lexstat_types::ReportFormat;

/// `lexstat`: lexicon-based tone and readability statistics for a corpus
/// of plain-text documents.
///
/// Writes one row per document: word count, the share of positive,
/// negative, uncertainty, litigious, modal and constraining words, character
/// and number counts, average syllables, average word length and vocabulary.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "lexstat", version, about, long_about = None)]
pub struct Cli {
    /// Directory of documents to analyze [default: .].
    #[arg(value_name = "CORPUS")]
    pub corpus: Option<PathBuf>,

    /// Master-dictionary CSV (e.g. the Loughran-McDonald Master Dictionary).
    #[arg(short = 'l', long, value_name = "CSV")]
    pub lexicon: Option<PathBuf>,

    /// Write the report to this file instead of stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Report format [default: csv].
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Only analyze files matching this glob. Repeatable; prefix with `!` to exclude.
    ///
    /// Examples:
    ///   --glob "*.txt"
    ///   --glob "!**/drafts/**"
    #[arg(long = "glob", value_name = "PATTERN")]
    pub globs: Vec<String>,

    /// Stop after this many documents (in path order).
    #[arg(long, value_name = "N")]
    pub max_files: Option<usize>,

    /// Regex removed before case folding [default: \b(?:May|MAY)\b].
    ///
    /// Pass an empty string to keep the text as is.
    #[arg(long, value_name = "REGEX")]
    pub false_positive: Option<String>,

    /// Configuration file [default: ./lexstat.toml, then the user config dir].
    #[arg(long, value_name = "FILE", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore configuration files.
    #[arg(long)]
    pub no_config: bool,

    /// Verbose output (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,
}

impl Cli {
    /// The values set on the command line, as the top configuration layer.
    pub fn overlay(&self) -> TomlConfig {
        TomlConfig {
            lexicon: LexiconConfig {
                path: self.lexicon.clone(),
            },
            corpus: CorpusConfig {
                path: self.corpus.clone(),
                globs: (!self.globs.is_empty()).then(|| self.globs.clone()),
                max_files: self.max_files,
            },
            output: OutputConfig {
                path: self.out.clone(),
                format: self.format,
            },
            text: TextConfig {
                false_positive: self.false_positive.clone(),
            },
        }
    }
}
