//! Lexicon load errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading a lexicon. All of them are fatal to a run.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read lexicon {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse lexicon CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Lexicon is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Invalid lexicon value {value:?} in column '{column}' at line {line}")]
    InvalidValue {
        line: u64,
        column: String,
        value: String,
    },
}
