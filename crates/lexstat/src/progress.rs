//! Progress bar for the corpus loop.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;

/// A progress indicator that wraps indicatif.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Create a progress bar over `total` documents.
    ///
    /// The bar is only shown if:
    /// - `enabled` is true
    /// - stderr is a TTY
    /// - NO_COLOR env var is not set
    /// - LEXSTAT_NO_PROGRESS env var is not set
    pub fn new(enabled: bool, total: u64) -> Self {
        let bar = (enabled && is_interactive()).then(|| {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} {wide_msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=> "),
            );
            pb
        });
        Self { bar }
    }

    /// A progress indicator that never draws.
    pub fn hidden() -> Self {
        Self { bar: None }
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Set the progress message (usually the current document).
    pub fn set_message(&self, msg: impl Into<String>) {
        if let Some(bar) = &self.bar {
            bar.set_message(msg.into());
        }
    }

    pub fn inc(&self, delta: u64) {
        if let Some(bar) = &self.bar {
            bar.inc(delta);
        }
    }

    /// Finish and clear the bar.
    pub fn finish_and_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

/// Check if we should draw interactive output.
fn is_interactive() -> bool {
    if !std::io::stderr().is_terminal() {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("LEXSTAT_NO_PROGRESS").is_some() {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_progress_has_no_bar() {
        let progress = Progress::new(false, 10);
        assert!(!progress.is_visible());
    }

    #[test]
    fn hidden_progress_methods_do_not_panic() {
        let progress = Progress::hidden();
        progress.set_message("filings/10k.txt");
        progress.inc(1);
        progress.finish_and_clear();
    }
}
