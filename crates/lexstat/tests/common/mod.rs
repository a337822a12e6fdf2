//! Shared fixtures for lexstat integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;

pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
}

pub fn lexicon_path() -> PathBuf {
    data_dir().join("lexicon.csv")
}

pub fn corpus_dir() -> PathBuf {
    data_dir().join("corpus")
}

/// The report expected for the fixture corpus, rows in path order.
pub const EXPECTED_CSV_ROWS: [&str; 3] = [
    "notes/empty.txt,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0",
    "q1.txt,96,9,22.2222,11.1111,11.1111,0,11.1111,0,0,0,72,72,0,0,1.6667,4.2222,6",
    "q2.txt,80,4,0,0,25,25,0,25,25,25,60,48,12,5,2.5,7.5,4",
];

/// `lexstat` with config discovery and the progress bar switched off, run
/// from `cwd` so nothing outside the test leaks in.
pub fn lexstat_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lexstat"));
    cmd.current_dir(cwd)
        .env("LEXSTAT_NO_PROGRESS", "1")
        .env("XDG_CONFIG_HOME", cwd.join(".no-user-config"))
        .env_remove("RUST_LOG");
    cmd
}
