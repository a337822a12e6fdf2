use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("no lexicon configured") {
        push_hint(
            &mut out,
            "Pass the master dictionary with `--lexicon <CSV>`.",
        );
        push_hint(
            &mut out,
            "Or set it once in lexstat.toml: `[lexicon]` then `path = \"...\"`.",
        );
    }

    if haystack.contains("failed to read lexicon") {
        push_hint(
            &mut out,
            "Check the `--lexicon` path; the Loughran-McDonald Master Dictionary is distributed as a CSV file.",
        );
    }

    if haystack.contains("missing required column") || haystack.contains("invalid lexicon value")
    {
        push_hint(
            &mut out,
            "The lexicon needs a header row with Word, Negative, Positive, Uncertainty, Litigious, Constraining and Syllables columns.",
        );
        push_hint(
            &mut out,
            "Category and syllable cells must be integers (empty cells count as 0).",
        );
    }

    if haystack.contains("corpus directory not found")
        || haystack.contains("no such file or directory")
    {
        push_hint(&mut out, "Verify the corpus path exists and is readable.");
        push_hint(
            &mut out,
            "Use an absolute path to avoid working-directory confusion.",
        );
    }

    if haystack.contains("invalid false-positive pattern") {
        push_hint(
            &mut out,
            "`--false-positive` takes a regular expression; pass an empty string to disable it.",
        );
    }

    if haystack.contains("invalid glob pattern") {
        push_hint(
            &mut out,
            "Globs use gitignore syntax, e.g. `*.txt` or `!drafts/**`.",
        );
    }

    if haystack.contains("toml") && (haystack.contains("parse") || haystack.contains("invalid")) {
        push_hint(
            &mut out,
            "Check lexstat.toml syntax and key names, or bypass it with `--no-config`.",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
