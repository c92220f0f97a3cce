//! Terminal progress display for replays and generation requests

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static REPLAY_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Progress bar over the events of a pointer replay
pub struct ReplayProgress {
    bar: ProgressBar,
}

impl ReplayProgress {
    /// Start a bar for `total` events labelled with `name`
    pub fn new(name: &str, total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(REPLAY_STYLE.clone());
        bar.set_prefix(name.to_string());
        Self { bar }
    }

    /// Advance by one event and show placed/total tiles
    pub fn advance(&self, placed: usize, tiles: usize) {
        self.bar.inc(1);
        self.bar.set_message(format!("{placed}/{tiles} placed"));
    }

    /// Finish with a closing message
    pub fn finish(&self, solved: bool) {
        let message = if solved { "✓ solved" } else { "unsolved" };
        self.bar.finish_with_message(message);
    }
}

/// Spinner shown while waiting on a blocking request
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Start spinning with a message
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Stop and clear the spinner
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
