//! Progress reporting module

use genfilt_core::Progress;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Lines are counted, not sized, so progress is shown as a spinner
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Start counting lines of a new input
    pub fn start(&mut self, label: &str) {
        if self.quiet {
            return;
        }

        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} [{elapsed_precise}] {pos} lines {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let pb = ProgressBar::new_spinner();
        pb.set_style(style);
        pb.set_message(label.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Finish the current input
    pub fn finish(&mut self) {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_and_clear();
        }
    }

    /// Lines counted for the current input
    pub fn position(&self) -> u64 {
        self.progress_bar.as_ref().map_or(0, ProgressBar::position)
    }
}

impl Progress for ProgressReporter {
    fn advance(&self, lines: u64) {
        if let Some(pb) = &self.progress_bar {
            pb.inc(lines);
        }
    }
}
