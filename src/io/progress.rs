//! Frame progress display

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.yellow/white}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the frames of one render
///
/// A manager created with `enabled = false` accepts every call and draws
/// nothing, so callers need no branching for quiet mode.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a manager; hidden when `enabled` is false
    pub fn new(enabled: bool) -> Self {
        Self {
            bar: enabled.then(ProgressBar::hidden),
        }
    }

    /// Start a render of `frames` frames labelled `name`
    pub fn start(&mut self, name: &str, frames: usize) {
        if self.bar.is_none() {
            return;
        }
        let bar = ProgressBar::new(frames as u64);
        bar.set_style(FRAME_STYLE.clone());
        bar.set_prefix(name.to_string());
        self.bar = Some(bar);
    }

    /// Report that frame `index` has been drawn
    pub fn frame_done(&self, index: usize) {
        if let Some(bar) = &self.bar {
            bar.set_position(index as u64 + 1);
        }
    }

    /// Show what the render is doing now
    pub fn set_stage(&self, stage: &'static str) {
        if let Some(bar) = &self.bar {
            bar.set_message(stage);
        }
    }

    /// Finish and remove the bar
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    /// Whether progress is being displayed
    pub const fn is_enabled(&self) -> bool {
        self.bar.is_some()
    }

    /// Frames reported so far
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }
}
