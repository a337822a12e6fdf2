//! # lexstat
//!
//! **CLI Binary**
//!
//! Entry point for the `lexstat` command-line application. It wires the
//! lexicon, corpus walk, text pipeline and report writer together.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load and layer configuration
//! * Run the corpus batch and report progress
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod config;
mod error_hints;
mod logging;
mod progress;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use lexstat_analysis::analyze_document;
use lexstat_config::Cli;
use lexstat_format::ReportWriter;
use lexstat_lexicon::LexiconIndex;
use lexstat_settings::{ReportFormat, RunSettings};
use lexstat_text::Cleaner;
use lexstat_types::DocumentReport;
use lexstat_walk::{list_files, read_document};

pub use config::{CONFIG_FILE_NAME, discover_config_file, load_file_config, resolve_settings};
pub use progress::Progress;

/// Outcome of one corpus run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Documents written to the report.
    pub processed: usize,
    /// Documents that could not be read and were left out.
    pub skipped: usize,
}

/// Entry point used by the `lexstat` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let file_config = load_file_config(&cli)?;
    let settings = resolve_settings(&cli, file_config)?;
    debug!(?settings, "resolved settings");

    // The report file is only created once setup has succeeded.
    let corpus = CorpusRun::prepare(&settings)?;
    let progress = Progress::new(!cli.no_progress, corpus.len() as u64);
    let summary = match &settings.output {
        Some(path) => corpus.write(create_output(path)?, &progress)?,
        None => corpus.write(io::stdout().lock(), &progress)?,
    };

    info!(
        processed = summary.processed,
        skipped = summary.skipped,
        "run finished"
    );
    if summary.skipped > 0 {
        warn!(
            "{} of {} documents could not be read",
            summary.skipped,
            summary.processed + summary.skipped
        );
    }
    Ok(())
}

/// Render an error with its cause chain and any matching hints.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}

/// Build the text cleaner for a configured false-positive pattern.
///
/// `None` keeps the built-in pattern and an empty pattern disables
/// stripping.
pub fn build_cleaner(pattern: Option<&str>) -> Result<Cleaner> {
    match pattern {
        None => Ok(Cleaner::default()),
        Some("") => Ok(Cleaner::without_false_positives()),
        Some(p) => Cleaner::new(p).with_context(|| format!("Invalid false-positive pattern: {p}")),
    }
}

/// A corpus run with its lexicon loaded and its documents listed.
///
/// [`CorpusRun::prepare`] does all the fallible setup; only reading
/// individual documents and writing rows remain for [`CorpusRun::write`].
#[derive(Debug)]
pub struct CorpusRun {
    index: LexiconIndex,
    cleaner: Cleaner,
    format: ReportFormat,
    root: PathBuf,
    files: Vec<PathBuf>,
}

impl CorpusRun {
    /// Load the lexicon, build the cleaner and list the corpus.
    pub fn prepare(settings: &RunSettings) -> Result<Self> {
        let index =
            lexstat_lexicon::load(&settings.lexicon).context("Lexicon could not be loaded")?;
        info!(
            entries = index.len(),
            max_phrase_len = index.max_len(),
            "lexicon loaded"
        );
        let cleaner = build_cleaner(settings.false_positive.as_deref())?;

        let (root, files) = corpus_files(settings)?;
        info!(documents = files.len(), corpus = %root.display(), "corpus listed");

        Ok(Self {
            index,
            cleaner,
            format: settings.format,
            root,
            files,
        })
    }

    /// Number of documents listed.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Analyze every listed document and write the report to `out`.
    ///
    /// A document that cannot be read is logged, counted in
    /// [`RunSummary::skipped`] and left out.
    pub fn write<W: Write>(&self, out: W, progress: &Progress) -> Result<RunSummary> {
        let mut writer = ReportWriter::new(out, self.format);
        writer.write_header()?;

        let mut summary = RunSummary::default();
        for rel in &self.files {
            if progress.is_visible() {
                progress.set_message(rel.display().to_string());
            }
            match read_document(&self.root, rel) {
                Ok(doc) => {
                    let stats = analyze_document(&doc.text, &self.index, &self.cleaner);
                    debug!(
                        document = %doc.id,
                        words = stats.word_count,
                        vocabulary = stats.vocabulary,
                        "document analyzed"
                    );
                    writer.write_report(&DocumentReport {
                        document: doc.id,
                        size_bytes: doc.size_bytes,
                        stats,
                    })?;
                    summary.processed += 1;
                }
                Err(err) => {
                    warn!("Skipping {}: {err:#}", rel.display());
                    summary.skipped += 1;
                }
            }
            progress.inc(1);
        }
        progress.finish_and_clear();

        let mut out = writer.finish()?;
        out.flush().context("Failed to flush report")?;
        Ok(summary)
    }
}

/// Prepare and write a corpus run in one step.
pub fn analyze_corpus<W: Write>(
    settings: &RunSettings,
    out: W,
    show_progress: bool,
) -> Result<RunSummary> {
    let corpus = CorpusRun::prepare(settings)?;
    let progress = Progress::new(show_progress, corpus.len() as u64);
    corpus.write(out, &progress)
}

/// The walk root and the documents under it. A corpus that is a single file
/// is analyzed on its own, with its file name as the document id.
fn corpus_files(settings: &RunSettings) -> Result<(PathBuf, Vec<PathBuf>)> {
    let corpus = &settings.corpus;
    if corpus.is_file() {
        let name = corpus
            .file_name()
            .map(PathBuf::from)
            .with_context(|| format!("Corpus path has no file name: {}", corpus.display()))?;
        let root = match corpus.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let files = if settings.max_files == Some(0) {
            Vec::new()
        } else {
            vec![name]
        };
        return Ok((root, files));
    }
    let files = list_files(corpus, &settings.globs, settings.max_files)?;
    Ok((corpus.clone(), files))
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_disables_false_positive_stripping() {
        let cleaner = build_cleaner(Some("")).unwrap();
        assert_eq!(cleaner.false_positive_pattern(), None);
        assert_eq!(cleaner.clean("May"), "MAY");
    }

    #[test]
    fn missing_pattern_uses_default() {
        let cleaner = build_cleaner(None).unwrap();
        assert_eq!(
            cleaner.false_positive_pattern(),
            Some(lexstat_text::DEFAULT_FALSE_POSITIVE)
        );
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = build_cleaner(Some("(unclosed")).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid false-positive pattern"));
    }
}
