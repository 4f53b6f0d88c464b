//! Coverage progress display for the greedy search

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static COVERAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Pegs: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Peg-coverage progress for one solve run
pub struct SolveProgress {
    bar: ProgressBar,
}

impl SolveProgress {
    /// Create a bar spanning the board's colorable peg count
    pub fn new(colorable_pegs: usize) -> Self {
        let bar = ProgressBar::new(colorable_pegs as u64);
        bar.set_style(COVERAGE_STYLE.clone());
        Self { bar }
    }

    /// Report coverage after a placement round
    pub fn update(&self, covered_pegs: usize, brick_count: usize) {
        self.bar.set_position(covered_pegs as u64);
        self.bar.set_message(format!("({brick_count} bricks)"));
    }

    /// Finish and clear the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
