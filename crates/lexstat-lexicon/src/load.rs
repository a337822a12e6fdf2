//! Master-dictionary CSV loader.
//!
//! The source is a CSV file with a header row. Column names are matched
//! case-insensitively, with spaces and hyphens treated as underscores.
//!
//! Required columns: `Word`, `Negative`, `Positive`, `Uncertainty`,
//! `Litigious`, `Constraining`, `Syllables`.
//!
//! Modal strength comes either from a single `Modal` column (1 = strong,
//! 2 = moderate, 3 = weak) or from separate `Weak_Modal`, `Moderate_Modal`
//! and `Strong_Modal` flag columns. Neither is required.
//!
//! Flag columns hold integers; a value above zero sets the flag. (The
//! Loughran–McDonald files store the year a word was added, and a negative
//! year for a word that was later removed.) Empty cells read as zero and
//! rows with a blank `Word` are skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, Trim};
use lexstat_types::{Category, CategorySet, LexiconEntry};

use crate::error::LoadError;
use crate::index::LexiconIndex;

const FLAG_COLUMNS: [(&str, Category); 5] = [
    ("negative", Category::Negative),
    ("positive", Category::Positive),
    ("uncertainty", Category::Uncertainty),
    ("litigious", Category::Litigious),
    ("constraining", Category::Constraining),
];

const MODAL_FLAG_COLUMNS: [(&str, Category); 3] = [
    ("weak_modal", Category::WeakModal),
    ("moderate_modal", Category::ModerateModal),
    ("strong_modal", Category::StrongModal),
];

/// Load a lexicon from a CSV file.
pub fn load(path: &Path) -> Result<LexiconIndex, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(file)
}

/// Load a lexicon from any CSV byte source.
///
/// Invalid UTF-8 inside cells is replaced rather than rejected.
pub fn load_from_reader<R: Read>(reader: R) -> Result<LexiconIndex, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = Columns::resolve(rdr.byte_headers()?)?;

    let mut index = LexiconIndex::new();
    let mut record = ByteRecord::new();
    while rdr.read_byte_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let word = cell(&record, &columns.word);
        if word.trim().is_empty() {
            continue;
        }

        let mut categories = CategorySet::EMPTY;
        for (col, category) in &columns.flags {
            if int_cell(&record, col, line)? > 0 {
                categories.insert(*category);
            }
        }
        match &columns.modal {
            Modal::Coded(col) => match int_cell(&record, col, line)? {
                1 => categories.insert(Category::StrongModal),
                2 => categories.insert(Category::ModerateModal),
                3 => categories.insert(Category::WeakModal),
                _ => {}
            },
            Modal::Flags(cols) => {
                for (col, category) in cols {
                    if int_cell(&record, col, line)? > 0 {
                        categories.insert(*category);
                    }
                }
            }
        }

        let syllables = int_cell(&record, &columns.syllables, line)?;
        let syllables = u32::try_from(syllables).map_err(|_| LoadError::InvalidValue {
            line,
            column: columns.syllables.1.clone(),
            value: syllables.to_string(),
        })?;

        index.insert(LexiconEntry::new(&word, categories, syllables));
    }

    Ok(index)
}

/// A resolved column: position and original header text.
type Column = (usize, String);

enum Modal {
    Coded(Column),
    Flags(Vec<(Column, Category)>),
}

struct Columns {
    word: Column,
    flags: Vec<(Column, Category)>,
    modal: Modal,
    syllables: Column,
}

impl Columns {
    fn resolve(headers: &ByteRecord) -> Result<Self, LoadError> {
        let names: Vec<String> = headers
            .iter()
            .map(|h| String::from_utf8_lossy(h).trim().to_string())
            .collect();
        let find = |key: &str| -> Option<Column> {
            names
                .iter()
                .position(|n| header_key(n) == key)
                .map(|i| (i, names[i].clone()))
        };
        let require = |key: &str, display: &'static str| -> Result<Column, LoadError> {
            find(key).ok_or(LoadError::MissingColumn(display))
        };

        let word = require("word", "Word")?;
        let flags = FLAG_COLUMNS
            .iter()
            .map(|(key, category)| {
                require(key, Self::display_name(key)).map(|col| (col, *category))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let syllables = require("syllables", "Syllables")?;

        let modal = match find("modal") {
            Some(col) => Modal::Coded(col),
            None => Modal::Flags(
                MODAL_FLAG_COLUMNS
                    .iter()
                    .filter_map(|(key, category)| find(key).map(|col| (col, *category)))
                    .collect(),
            ),
        };

        Ok(Self {
            word,
            flags,
            modal,
            syllables,
        })
    }

    fn display_name(key: &str) -> &'static str {
        match key {
            "negative" => "Negative",
            "positive" => "Positive",
            "uncertainty" => "Uncertainty",
            "litigious" => "Litigious",
            _ => "Constraining",
        }
    }
}

fn header_key(name: &str) -> String {
    name.trim()
        .to_ascii_lowercase()
        .replace([' ', '-'], "_")
}

fn cell(record: &ByteRecord, (idx, _): &Column) -> String {
    record
        .get(*idx)
        .map(|b| String::from_utf8_lossy(b).into_owned())
        .unwrap_or_default()
}

fn int_cell(record: &ByteRecord, col: &Column, line: u64) -> Result<i64, LoadError> {
    let raw = cell(record, col);
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    if let Ok(v) = raw.parse::<i64>() {
        return Ok(v);
    }
    // Some exports write integral columns as "2.0".
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 => Ok(v as i64),
        _ => Err(LoadError::InvalidValue {
            line,
            column: col.1.clone(),
            value: raw.to_string(),
        }),
    }
}
