//! Directory walker implementation using walkdir.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct, which traverses one root and
//! groups every file whose extension passes the [`ExtensionFilter`] under its
//! normalized, lowercased name.
//!
//! A single-threaded walk is used on purpose: the first path registered for a
//! name is the first one met during the walk, and the matcher relies on that
//! order when it picks side B's representative.
//!
//! # Error tolerance
//!
//! Unreadable directories and entries are logged and counted in
//! [`ScanResult::skipped`]; the walk always continues with the next entry.
//!
//! # Example
//!
//! ```no_run
//! use namedupe::scanner::{ExtensionFilter, Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let filter = ExtensionFilter::from_inputs([".ydr"]);
//! let walker = Walker::new(Path::new("/srv/resources"), &filter, WalkerConfig::default());
//! let result = walker.scan();
//! println!("{} files under {} names", result.file_count(), result.name_count());
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use walkdir::{DirEntry, WalkDir};

use super::names::name_key;
use super::{ExtensionFilter, ScanError, ScanResult, WalkerConfig};
use crate::progress::ProgressCallback;

/// Scan `root` with default walker settings.
///
/// A root that does not exist or is not a directory yields an empty
/// [`ScanResult`]; no error escapes.
///
/// # Example
///
/// ```
/// use namedupe::scanner::{scan, ExtensionFilter};
/// use std::path::Path;
///
/// let filter = ExtensionFilter::from_inputs([".ydr"]);
/// let result = scan(Path::new("/no/such/root/anywhere"), &filter);
/// assert!(result.is_empty());
/// ```
#[must_use]
pub fn scan(root: &Path, extensions: &ExtensionFilter) -> ScanResult {
    Walker::new(root, extensions, WalkerConfig::default()).scan()
}

/// Directory walker for one root.
pub struct Walker<'a> {
    /// Root path to walk
    root: PathBuf,
    /// Extensions that qualify a file
    extensions: &'a ExtensionFilter,
    /// Walker configuration
    config: WalkerConfig,
    /// Optional progress reporting
    progress: Option<Arc<dyn ProgressCallback>>,
}

impl std::fmt::Debug for Walker<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Walker")
            .field("root", &self.root)
            .field("extensions", &self.extensions)
            .field("config", &self.config)
            .field("progress", &self.progress.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

impl<'a> Walker<'a> {
    /// Create a new walker for the given root.
    ///
    /// Relative roots are made absolute against the current directory so
    /// every registered path is absolute.
    #[must_use]
    pub fn new(root: &Path, extensions: &'a ExtensionFilter, config: WalkerConfig) -> Self {
        let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
        Self {
            root,
            extensions,
            config,
            progress: None,
        }
    }

    /// Attach a progress callback.
    #[must_use]
    pub fn with_progress(mut self, progress: Arc<dyn ProgressCallback>) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Walk the tree and build the [`ScanResult`].
    #[must_use]
    pub fn scan(&self) -> ScanResult {
        let mut result = ScanResult::empty(&self.root);

        if !self.root.is_dir() {
            log::debug!(
                "Root {} does not exist or is not a directory, returning empty result",
                self.root.display()
            );
            return result;
        }

        let phase = self.root.to_string_lossy();
        if let Some(cb) = &self.progress {
            cb.on_phase_start(&phase, 0);
        }

        let mut seen = 0usize;
        let walk = WalkDir::new(&self.root).follow_links(self.config.follow_symlinks);

        for entry in walk {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let err = self.convert_walk_error(e);
                    log::warn!("Skipping unreadable entry: {}", err);
                    result.record_skipped();
                    continue;
                }
            };

            if !self.is_regular_file(&entry) {
                continue;
            }

            let path = entry.path();
            if !self.extensions.matches(path) {
                log::trace!("Extension not selected: {}", path.display());
                continue;
            }

            let Some(key) = name_key(path) else {
                continue;
            };

            seen += 1;
            if let Some(cb) = &self.progress {
                cb.on_progress(seen, &path.to_string_lossy());
            }
            log::trace!("Registered {} under '{}'", path.display(), key);
            result.insert(key, entry.into_path());
        }

        if let Some(cb) = &self.progress {
            cb.on_phase_end(&phase);
        }

        log::debug!(
            "Scanned {}: {} file(s) under {} name(s), {} skipped",
            self.root.display(),
            result.file_count(),
            result.name_count(),
            result.skipped()
        );

        result
    }

    /// Regular files, plus symlinks that resolve to regular files.
    ///
    /// Symlinked directories are only descended into when
    /// `follow_symlinks` is set, but a symlink to a file is always listed.
    fn is_regular_file(&self, entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        if file_type.is_file() {
            return true;
        }
        if file_type.is_symlink() {
            return std::fs::metadata(entry.path()).is_ok_and(|m| m.is_file());
        }
        false
    }

    /// Convert a walkdir error into a [`ScanError`].
    fn convert_walk_error(&self, error: walkdir::Error) -> ScanError {
        use std::io::ErrorKind;

        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);

        if error.loop_ancestor().is_some() {
            return ScanError::Loop(path);
        }

        match error.io_error().map(std::io::Error::kind) {
            Some(ErrorKind::PermissionDenied) => ScanError::PermissionDenied(path),
            Some(ErrorKind::NotFound) => ScanError::NotFound(path),
            _ => ScanError::Io {
                path,
                source: error
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("walk error")),
            },
        }
    }
}
