//! Progress display for long enumerations written by the command-line tool

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_THRESHOLD, PROGRESS_UPDATE_INTERVAL};
use indicatif::{ProgressBar, ProgressStyle};

/// Tracks how many tuples have been written out of the expected total
///
/// Hidden unless requested and the expected count is large enough to matter;
/// a hidden tracker still counts, so callers never branch on visibility.
pub struct EnumerationProgress {
    bar: ProgressBar,
    written: u64,
}

impl EnumerationProgress {
    /// Create a tracker for an enumeration of `expected` tuples
    ///
    /// A bar is drawn on stderr only when `visible` is set and `expected` is
    /// unknown or at least [`PROGRESS_THRESHOLD`]
    pub fn new(expected: Option<usize>, visible: bool) -> Self {
        let large = expected.is_none_or(|count| count >= PROGRESS_THRESHOLD);

        let bar = if !visible || !large {
            ProgressBar::hidden()
        } else if let Some(count) = expected {
            let bar = ProgressBar::new(count as u64);
            let template =
                format!("[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}");
            bar.set_style(
                ProgressStyle::default_bar()
                    .template(&template)
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            bar
        } else {
            ProgressBar::new_spinner()
        };

        Self { bar, written: 0 }
    }

    /// Record one written tuple
    pub fn record(&mut self) {
        self.written += 1;
        if self.written % PROGRESS_UPDATE_INTERVAL == 0 {
            self.bar.set_position(self.written);
        }
    }

    /// Number of tuples recorded so far
    pub const fn written(&self) -> u64 {
        self.written
    }

    /// Whether a bar is drawn at all
    pub fn is_visible(&self) -> bool {
        !self.bar.is_hidden()
    }

    /// Finalize and remove the bar
    pub fn finish(&self) {
        self.bar.set_position(self.written);
        self.bar.finish_and_clear();
    }
}
