//! Batch move-to-trash of one side of a match report.
//!
//! # Overview
//!
//! [`delete_side`] walks every [`MatchRecord`], resolves the path for the
//! requested [`Side`] and hands it to a [`Trash`] capability:
//! - a path that no longer exists is skipped (neither success nor error)
//! - a trash failure is counted and logged, and the batch continues
//! - nothing is rolled back
//!
//! [`SystemTrash`] is the real capability, backed by the `trash` crate.
//!
//! # Example
//!
//! ```no_run
//! use namedupe::actions::delete::{delete_side, Side, SystemTrash};
//!
//! let records = Vec::new();
//! let summary = delete_side(&records, Side::A, &SystemTrash);
//! println!("{} moved, {} failed", summary.succeeded, summary.failed);
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::duplicates::MatchRecord;
use crate::worker::{Job, WorkerError};

/// Error type for a single trash operation.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// File was not found (may have been deleted or moved).
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Trash operation failed.
    #[error("trash operation failed for {path}: {message}")]
    TrashFailed {
        /// Path that could not be moved
        path: PathBuf,
        /// Message from the platform trash
        message: String,
    },
}

/// Which root a delete applies to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Folder 1
    #[default]
    #[value(name = "folder1", alias = "a", alias = "1")]
    #[serde(rename = "folder1", alias = "a")]
    A,
    /// Folder 2
    #[value(name = "folder2", alias = "b", alias = "2")]
    #[serde(rename = "folder2", alias = "b")]
    B,
}

impl Side {
    /// The path on this side of a record.
    #[must_use]
    pub fn path_of<'r>(&self, record: &'r MatchRecord) -> &'r Path {
        match self {
            Self::A => &record.path_a,
            Self::B => &record.path_b,
        }
    }

    /// 1-based folder number, as shown to users.
    #[must_use]
    pub fn number(&self) -> u8 {
        match self {
            Self::A => 1,
            Self::B => 2,
        }
    }
}

/// Capability to move a path to a recoverable trash location.
pub trait Trash: Send + Sync {
    /// Move `path` to the trash.
    ///
    /// # Errors
    ///
    /// Returns [`DeleteError`] if the platform refuses or the path is missing.
    fn move_to_trash(&self, path: &Path) -> Result<(), DeleteError>;
}

/// The platform recycle bin, via the `trash` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTrash;

impl Trash for SystemTrash {
    fn move_to_trash(&self, path: &Path) -> Result<(), DeleteError> {
        trash::delete(path).map_err(|e| {
            if !path.exists() {
                return DeleteError::NotFound(path.to_path_buf());
            }
            DeleteError::TrashFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })
    }
}

/// Counts from a batch delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteSummary {
    /// Paths moved to the trash.
    pub succeeded: usize,
    /// Paths the trash refused.
    pub failed: usize,
    /// Paths already gone when their turn came.
    pub skipped: usize,
    /// Failed paths with their error messages.
    pub failures: Vec<(PathBuf, String)>,
}

impl DeleteSummary {
    /// Check if all attempted deletions succeeded.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    /// Total number of records visited.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.succeeded + self.failed + self.skipped
    }
}

/// Move the `side` path of every record to the trash.
///
/// Always visits every record. See the module docs for the counting rules.
pub fn delete_side<T: Trash + ?Sized>(
    records: &[MatchRecord],
    side: Side,
    trash: &T,
) -> DeleteSummary {
    let mut summary = DeleteSummary::default();

    for record in records {
        let path = side.path_of(record);

        if !path.exists() {
            log::debug!("Already gone, skipping: {}", path.display());
            summary.skipped += 1;
            continue;
        }

        match trash.move_to_trash(path) {
            Ok(()) => {
                log::info!("Moved to trash: {}", path.display());
                summary.succeeded += 1;
            }
            Err(e) => {
                log::error!("Error deleting {}: {}", record.filename, e);
                summary.failed += 1;
                summary.failures.push((path.to_path_buf(), e.to_string()));
            }
        }
    }

    log::debug!(
        "Delete from folder {} finished: {} moved, {} failed, {} skipped",
        side.number(),
        summary.succeeded,
        summary.failed,
        summary.skipped
    );

    summary
}

/// Run [`delete_side`] on a worker thread, handing back only the summary.
///
/// # Errors
///
/// Returns [`WorkerError::Spawn`] if the worker cannot be started.
pub fn spawn_delete_side(
    records: Vec<MatchRecord>,
    side: Side,
    trash: Arc<dyn Trash>,
) -> Result<Job<DeleteSummary>, WorkerError> {
    Job::spawn("delete", move || delete_side(&records, side, trash.as_ref()))
}
