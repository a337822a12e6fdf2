//! Tests for the library entry points used by the binary.

mod common;

use common::{EXPECTED_CSV_ROWS, corpus_dir, lexicon_path};
use lexstat::{CorpusRun, Progress, RunSummary, analyze_corpus};
use lexstat_settings::{ReportFormat, RunSettings};

fn settings() -> RunSettings {
    RunSettings {
        corpus: corpus_dir(),
        ..RunSettings::new(lexicon_path())
    }
}

#[test]
fn analyze_corpus_writes_report_and_counts_documents() {
    let mut out = Vec::new();
    let summary = analyze_corpus(&settings(), &mut out, false).unwrap();
    assert_eq!(
        summary,
        RunSummary {
            processed: 3,
            skipped: 0
        }
    );
    let text = String::from_utf8(out).unwrap();
    let rows: Vec<&str> = text.lines().skip(1).collect();
    assert_eq!(rows, EXPECTED_CSV_ROWS);
}

#[test]
fn analyze_corpus_is_deterministic() {
    let run = || {
        let mut out = Vec::new();
        analyze_corpus(
            &RunSettings {
                format: ReportFormat::Jsonl,
                ..settings()
            },
            &mut out,
            false,
        )
        .unwrap();
        out
    };
    assert_eq!(run(), run());
}

#[test]
fn max_files_zero_writes_only_the_header() {
    let mut out = Vec::new();
    let summary = analyze_corpus(
        &RunSettings {
            max_files: Some(0),
            ..settings()
        },
        &mut out,
        false,
    )
    .unwrap();
    assert_eq!(summary.processed, 0);
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
}

#[test]
fn prepared_run_lists_documents_before_writing() {
    let corpus = CorpusRun::prepare(&settings()).unwrap();
    assert_eq!(corpus.len(), 3);

    let mut out = Vec::new();
    let summary = corpus.write(&mut out, &Progress::hidden()).unwrap();
    assert_eq!(summary.processed, 3);
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().skip(1).collect::<Vec<_>>(), EXPECTED_CSV_ROWS);
}

#[test]
fn prepare_fails_on_missing_lexicon() {
    let dir = tempfile::tempdir().unwrap();
    let err = CorpusRun::prepare(&RunSettings {
        corpus: corpus_dir(),
        ..RunSettings::new(dir.path().join("missing.csv"))
    })
    .unwrap_err();
    assert!(format!("{err:#}").contains("Lexicon could not be loaded"));
}

#[test]
fn prepare_fails_on_missing_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let err = CorpusRun::prepare(&RunSettings {
        corpus: dir.path().join("nope"),
        ..RunSettings::new(lexicon_path())
    })
    .unwrap_err();
    assert!(err.to_string().contains("Corpus directory not found"));
}
