use crate::traits::ProgressSink;
use indicatif::{ProgressBar, ProgressStyle};

/// Terminal progress bar counting from 0 to 100 percent.
pub struct TerminalProgress {
    pb: ProgressBar,
}

impl TerminalProgress {
    pub fn new(message: String) -> Self {
        let pb = ProgressBar::new(100);
        let style = ProgressStyle::default_bar()
            .template("{msg}\n[{bar:40.cyan/blue}] {percent}%")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▇▆▅▄▃▂▁  ");
        pb.set_style(style);
        pb.set_message(message);
        Self { pb }
    }

    pub fn finish(&self, message: String) {
        self.pb.finish_with_message(message);
    }

    /// Leave the bar where it stopped, with `message` in place of the status line.
    pub fn abandon(&self, message: String) {
        self.pb.abandon_with_message(message);
    }
}

impl ProgressSink for TerminalProgress {
    fn set_percentage(&mut self, percent: u8) {
        self.pb.set_position(percent.min(100) as u64);
    }
}
