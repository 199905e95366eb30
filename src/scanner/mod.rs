//! Scanner module for directory traversal and name grouping.
//!
//! This module provides functionality for:
//! - Recursive directory walking using walkdir
//! - Extension filtering
//! - Grouping files by normalized, lowercased file name
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Directory traversal and [`ScanResult`] construction
//! - [`names`]: Name and extension normalization shared by both roots
//!
//! # Example
//!
//! ```no_run
//! use namedupe::scanner::{scan, ExtensionFilter};
//! use std::path::Path;
//!
//! let filter = ExtensionFilter::from_inputs([".ydr", "ycd"]);
//! let result = scan(Path::new("/srv/resources"), &filter);
//! for (name, paths) in result.iter() {
//!     println!("{name}: {} occurrence(s)", paths.len());
//! }
//! ```

pub mod names;
pub mod walker;

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

pub use walker::{scan, Walker};

/// A discovered file.
///
/// The size is not captured during the walk. [`FileEntry::size`] stats the
/// file when asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute path to the file
    pub path: PathBuf,
}

impl FileEntry {
    /// Create a new FileEntry.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Current size of the file in bytes (fresh stat).
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be stat'ed.
    pub fn size(&self) -> io::Result<u64> {
        std::fs::metadata(&self.path).map(|m| m.len())
    }
}

/// Set of lowercase, dot-prefixed suffixes that qualify a file for a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtensionFilter {
    extensions: BTreeSet<String>,
}

impl ExtensionFilter {
    /// Build a filter from user-supplied strings.
    ///
    /// Each input is normalized with [`names::normalize_extension`]; inputs
    /// that normalize to nothing are dropped with a warning.
    pub fn from_inputs<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut extensions = BTreeSet::new();
        for input in inputs {
            let input = input.as_ref();
            match names::normalize_extension(input) {
                Some(ext) => {
                    extensions.insert(ext);
                }
                None => log::warn!("Ignoring empty extension '{}'", input),
            }
        }
        Self { extensions }
    }

    /// Whether the filter has no extensions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Number of extensions in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Check a file path's suffix against the filter (case-insensitive).
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        names::extension_key(path).is_some_and(|ext| self.extensions.contains(&ext))
    }

    /// Iterate over the normalized extensions in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

impl std::fmt::Display for ExtensionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "{}", joined.join(", "))
    }
}

/// Result of scanning one root: lowercased file name → paths in walk order.
///
/// Immutable once produced. Keys are held in a sorted map so iteration and
/// intersection are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    root: PathBuf,
    files: BTreeMap<String, Vec<PathBuf>>,
    skipped: usize,
}

impl ScanResult {
    /// An empty result for `root`.
    #[must_use]
    pub fn empty(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            ..Self::default()
        }
    }

    pub(crate) fn insert(&mut self, key: String, path: PathBuf) {
        self.files.entry(key).or_default().push(path);
    }

    pub(crate) fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    /// The root this result was produced from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths registered under `name` (already lowercased), in walk order.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[PathBuf]> {
        self.files.get(name).map(Vec::as_slice)
    }

    /// Whether `name` is a key of this result.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    /// Iterate over `(name, paths)` in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PathBuf])> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct names.
    #[must_use]
    pub fn name_count(&self) -> usize {
        self.files.len()
    }

    /// Total number of files across all names.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    /// Entries skipped because of permission or I/O errors during the walk.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Whether no file matched the filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Configuration for directory walking.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Follow symbolic links during traversal.
    /// Warning: may visit the same file twice through different links.
    pub follow_symlinks: bool,
}

/// Errors that can occur on individual entries during a walk.
///
/// These never abort a scan; they are logged and counted.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when accessing a file or directory.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The entry vanished while the walk was in progress.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// Symbolic links formed a cycle.
    #[error("Symlink loop at {0}")]
    Loop(PathBuf),

    /// An I/O error occurred while accessing an entry.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}
