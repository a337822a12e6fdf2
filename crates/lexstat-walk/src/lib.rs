//! # lexstat-walk
//!
//! **Tier 2 (Utilities)**
//!
//! Corpus discovery and document reading.
//!
//! ## What belongs here
//! * Listing the documents of a corpus directory
//! * Reading a document leniently (invalid UTF-8 is dropped, not fatal)
//!
//! ## What does NOT belong here
//! * Text cleanup (use lexstat-text)
//! * Deciding what to do with unreadable documents (the caller logs and skips)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;

/// One corpus document, fully read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path relative to the corpus root, with `/` separators.
    pub id: String,
    /// Size of the file on disk in bytes.
    pub size_bytes: u64,
    /// Decoded text with invalid UTF-8 sequences removed.
    pub text: String,
}

/// List the files under `root`, relative to it and sorted by path.
///
/// Corpora are plain data directories: hidden files are included and
/// `.gitignore`/`.ignore` rules are not applied. When `globs` is non-empty
/// only files matching at least one glob are listed (a leading `!` excludes
/// instead). `max_files` keeps the first `n` paths in sorted order.
pub fn list_files(root: &Path, globs: &[String], max_files: Option<usize>) -> Result<Vec<PathBuf>> {
    if max_files == Some(0) {
        return Ok(Vec::new());
    }
    if !root.is_dir() {
        bail!("Corpus directory not found: {}", root.display());
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(false)
        .ignore(false)
        .parents(false)
        .git_ignore(false)
        .git_exclude(false)
        .git_global(false)
        .follow_links(false);

    if !globs.is_empty() {
        let mut overrides = OverrideBuilder::new(root);
        for glob in globs {
            overrides
                .add(glob)
                .with_context(|| format!("Invalid glob pattern: {glob}"))?;
        }
        builder.overrides(overrides.build().context("Failed to build glob set")?);
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in builder.build() {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        let rel = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        files.push(rel);
    }

    files.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));
    if let Some(limit) = max_files {
        files.truncate(limit);
    }
    Ok(files)
}

/// Read `root/relative` as a [`Document`].
pub fn read_document(root: &Path, relative: &Path) -> Result<Document> {
    let path = root.join(relative);
    let bytes = fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Document {
        id: document_id(relative),
        size_bytes: bytes.len() as u64,
        text: decode_lossy(&bytes),
    })
}

/// Decode UTF-8, dropping every invalid byte sequence.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Normalize a relative path to a stable, `/`-separated id.
pub fn document_id(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_lossy_drops_invalid_bytes() {
        assert_eq!(decode_lossy(b"GO\xffOD"), "GOOD");
        assert_eq!(decode_lossy(b"caf\xc3\xa9"), "café");
        assert_eq!(decode_lossy(b""), "");
    }

    #[test]
    fn document_id_uses_forward_slashes() {
        let rel: PathBuf = ["filings", "2023", "10k.txt"].iter().collect();
        assert_eq!(document_id(&rel), "filings/2023/10k.txt");
    }

    #[test]
    fn read_document_missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(dir.path(), Path::new("gone.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
        assert!(err.to_string().contains("gone.txt"));
    }

    #[test]
    fn list_files_max_zero_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "content").unwrap();
        assert!(list_files(dir.path(), &[], Some(0)).unwrap().is_empty());
    }

    #[test]
    fn list_files_missing_root_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_files(&dir.path().join("nope"), &[], None).unwrap_err();
        assert!(err.to_string().contains("Corpus directory not found"));
    }

    #[test]
    fn read_document_reports_raw_byte_size() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("doc.txt"), b"ok \xff\xfe done").unwrap();
        let doc = read_document(dir.path(), Path::new("doc.txt")).unwrap();
        assert_eq!(doc.id, "doc.txt");
        assert_eq!(doc.size_bytes, 10);
        assert_eq!(doc.text, "ok  done");
    }
}
