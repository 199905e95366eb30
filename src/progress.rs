//! Progress reporting utilities using indicatif.
//!
//! This module provides the [`Progress`] struct which implements
//! [`ProgressCallback`] to display a spinner per scanned root on stderr.
//!
//! # Accessible Mode
//!
//! When accessible mode is enabled (`--accessible`), progress reporting
//! uses plain text without spinner animation.

use std::sync::Mutex;
use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::i18n::Catalog;

/// Progress callback for scan phases.
///
/// The walker calls it once per root: `on_phase_start`, then
/// `on_progress` for every file it registers, then `on_phase_end`.
pub trait ProgressCallback: Send + Sync {
    /// Called when a phase starts.
    ///
    /// # Arguments
    ///
    /// * `phase` - Name of the phase (the root being walked)
    /// * `total` - Total number of items, or 0 when unknown
    fn on_phase_start(&self, phase: &str, total: usize);

    /// Called for each item processed.
    ///
    /// # Arguments
    ///
    /// * `current` - Current item number (1-based)
    /// * `path` - Path being processed
    fn on_progress(&self, current: usize, path: &str);

    /// Called when a phase completes.
    fn on_phase_end(&self, phase: &str);
}

/// Progress reporter using indicatif spinners.
pub struct Progress {
    multi: MultiProgress,
    current: Mutex<Option<ProgressBar>>,
    quiet: bool,
    accessible: bool,
    catalog: Catalog,
}

impl Progress {
    /// Create a new progress reporter whose messages come from `catalog`.
    ///
    /// # Examples
    ///
    /// ```
    /// use namedupe::i18n::Catalog;
    /// use namedupe::progress::Progress;
    ///
    /// let progress = Progress::new(true, false, Catalog::default());
    /// ```
    #[must_use]
    pub fn new(quiet: bool, accessible: bool, catalog: Catalog) -> Self {
        Self {
            multi: MultiProgress::new(),
            current: Mutex::new(None),
            quiet,
            accessible,
            catalog,
        }
    }

    /// Localized spinner message for `key` about the root `phase`.
    fn phase_message(&self, key: &str, phase: &str) -> String {
        self.catalog
            .format(key, &[("path", &truncate_path(phase, 40))])
    }

    fn walking_style(&self) -> ProgressStyle {
        if self.accessible {
            ProgressStyle::with_template(&format!(
                "{{msg}} [{{elapsed_precise}}] {{pos}} {}",
                self.catalog.t("progress_files")
            ))
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
        } else {
            ProgressStyle::with_template(&format!(
                "{{spinner:.green}} {{msg}} [{{elapsed_precise}}] {{pos}} {}",
                self.catalog.t("progress_files")
            ))
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        }
    }
}

impl ProgressCallback for Progress {
    fn on_phase_start(&self, phase: &str, _total: usize) {
        if self.quiet {
            return;
        }

        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(self.walking_style());
        pb.set_message(self.phase_message("progress_scanning", phase));
        let tick_rate = if self.accessible { 500 } else { 100 };
        pb.enable_steady_tick(Duration::from_millis(tick_rate));

        if let Ok(mut current) = self.current.lock() {
            if let Some(previous) = current.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn on_progress(&self, current: usize, _path: &str) {
        if self.quiet {
            return;
        }
        if let Ok(guard) = self.current.lock() {
            if let Some(pb) = guard.as_ref() {
                pb.set_position(current as u64);
            }
        }
    }

    fn on_phase_end(&self, phase: &str) {
        if self.quiet {
            return;
        }
        if let Ok(mut guard) = self.current.lock() {
            if let Some(pb) = guard.take() {
                pb.finish_with_message(self.phase_message("progress_scanned", phase));
            }
        }
    }
}

/// Truncate a path for display in the progress bar.
fn truncate_path(path: &str, max_len: usize) -> String {
    if path.chars().count() <= max_len {
        return path.to_string();
    }

    let file_name = std::path::Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let name_len = file_name.chars().count();
    if name_len + 4 > max_len {
        let tail: String = file_name.chars().skip(name_len + 3 - max_len).collect();
        return format!("...{tail}");
    }

    format!(".../{file_name}")
}
