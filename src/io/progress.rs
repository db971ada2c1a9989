//! Progress display for batches of refinement jobs

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Pipeline stages of a single job, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Building the tree
    Refining,
    /// Walking the leaves in curve order
    Traversing,
    /// Checking that the leaves tile the domain
    Verifying,
    /// Writing output files
    Exporting,
}

impl Stage {
    /// Number of stages a job passes through
    pub const COUNT: u64 = 4;

    const fn position(self) -> u64 {
        match self {
            Self::Refining => 0,
            Self::Traversing => 1,
            Self::Verifying => 2,
            Self::Exporting => 3,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Refining => "refining",
            Self::Traversing => "traversing",
            Self::Verifying => "verifying",
            Self::Exporting => "exporting",
        }
    }
}

static JOB_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>10} [{bar:20.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Criteria: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for a batch of criteria
///
/// Shows one bar per job; above [`MAX_INDIVIDUAL_PROGRESS_BARS`] jobs a batch
/// bar is added and the job bars are reused round-robin.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    job_bars: Vec<ProgressBar>,
    job_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create an empty progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            job_bars: Vec::new(),
            job_count: 0,
        }
    }

    /// Create bars for `job_count` jobs
    pub fn initialize(&mut self, job_count: usize) {
        self.job_count = job_count;

        if job_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(job_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..job_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let pb = ProgressBar::new(Stage::COUNT);
            pb.set_style(JOB_STYLE.clone());
            self.job_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Number of jobs announced by [`Self::initialize`]
    pub const fn job_count(&self) -> usize {
        self.job_count
    }

    /// Label the bar of job `index` and reset it
    pub fn start_job(&self, index: usize, name: &str) {
        if let Some(bar) = self.bar(index) {
            bar.set_prefix(name.to_string());
            bar.set_position(0);
            bar.set_message("queued");
        }
    }

    /// Move job `index` to `stage`
    pub fn set_stage(&self, index: usize, stage: Stage) {
        if let Some(bar) = self.bar(index) {
            bar.set_position(stage.position());
            bar.set_message(stage.label());
        }
    }

    /// Mark job `index` as done with `leaves` emitted leaves
    pub fn complete_job(&self, index: usize, leaves: usize) {
        if let Some(bar) = self.bar(index) {
            bar.set_position(Stage::COUNT);
            bar.set_message(format!("✓ {leaves} leaves"));
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Mark job `index` as skipped
    pub fn skip_job(&self, index: usize) {
        if let Some(bar) = self.bar(index) {
            bar.set_position(Stage::COUNT);
            bar.set_message("skipped (output exists)");
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All criteria processed");
        }
        for bar in &self.job_bars {
            bar.finish();
        }
    }

    // Jobs share the individual bars round-robin once they run out
    fn bar(&self, index: usize) -> Option<&ProgressBar> {
        if self.job_bars.is_empty() {
            return None;
        }
        self.job_bars.get(index % self.job_bars.len())
    }
}
