//! Progress indicators
//!
//! Spinners shown while waiting on the backend. They draw to stderr and stay
//! hidden when it is not a terminal.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner for indeterminate progress
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// A spinner that never draws, for JSON output
pub fn hidden() -> ProgressBar {
    ProgressBar::hidden()
}

/// Finish a progress bar with a success message
pub fn finish_success(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(format!("✓ {message}"));
}

/// Finish and erase a progress bar
pub fn finish_clear(pb: &ProgressBar) {
    pb.finish_and_clear();
}
