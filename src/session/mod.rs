//! Session state for one comparison of two folders.
//!
//! A [`Session`] is the explicit context that ties the pipeline together:
//! the two roots and the extension filter going in, the two
//! [`ScanResult`]s and the [`MatchReport`] coming out, and the delete and
//! clear operations that consume the report.
//!
//! # Scan lifecycle
//!
//! 1. [`Session::start_scan`] validates the inputs, refuses if a scan is
//!    already in flight, and runs scanner + matcher on a worker thread.
//! 2. The worker hands back one completion event through the returned
//!    [`Job`].
//! 3. [`Session::finish_scan`] installs the outcome (or the error) and
//!    re-enables scanning.
//!
//! [`Session::scan`] does all three in one blocking call.
//!
//! # Example
//!
//! ```no_run
//! use namedupe::actions::{Side, SystemTrash};
//! use namedupe::scanner::ExtensionFilter;
//! use namedupe::session::Session;
//!
//! let mut session = Session::new();
//! session.set_root(Side::A, "/srv/resources");
//! session.set_root(Side::B, "/srv/backup");
//! session.set_extensions(ExtensionFilter::from_inputs([".ydr", ".ycd"]));
//!
//! let report = session.scan().unwrap();
//! println!("{} duplicate(s)", report.len());
//!
//! let summary = session.delete(Side::B, &SystemTrash).unwrap();
//! println!("{} moved to trash", summary.succeeded);
//! ```

pub mod pipeline;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::actions::{delete_side, spawn_delete_side, DeleteSummary, Side, Trash};
use crate::duplicates::{MatchError, MatchReport};
use crate::progress::ProgressCallback;
use crate::scanner::{ExtensionFilter, ScanResult, WalkerConfig};
use crate::worker::{Job, WorkerError};

pub use pipeline::{run_scan, ScanOutcome, ScanRequest};

/// Input problems detected before a scan starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// One or both roots were never chosen.
    #[error("both folders must be selected before scanning")]
    MissingRoot {
        /// The first side found missing
        side: Side,
    },

    /// A chosen root does not exist.
    #[error("folder {} not found: {}", .side.number(), .path.display())]
    RootNotFound {
        /// Which root
        side: Side,
        /// The path as given
        path: PathBuf,
    },

    /// The extension filter is empty.
    #[error("at least one extension must be selected")]
    NoExtensions,
}

impl ValidationError {
    /// Message catalog key for this error.
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::MissingRoot { .. } => "warn_select_folders",
            Self::RootNotFound { side: Side::A, .. } => "err_folder1_not_found",
            Self::RootNotFound { side: Side::B, .. } => "err_folder2_not_found",
            Self::NoExtensions => "warn_select_extension",
        }
    }
}

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Inputs failed validation; no scan was attempted.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A scan is already running.
    #[error("a scan is already in progress")]
    ScanInProgress,

    /// Matching failed; the previous results were discarded.
    #[error("error during scan: {0}")]
    Scan(#[from] MatchError),

    /// The worker thread could not be started or died.
    #[error(transparent)]
    Worker(#[from] WorkerError),
}

/// Completion event of a background scan.
pub type ScanEvent = Result<ScanOutcome, MatchError>;

/// In-memory state of one comparison.
#[derive(Default)]
pub struct Session {
    root_a: Option<PathBuf>,
    root_b: Option<PathBuf>,
    extensions: ExtensionFilter,
    walker: WalkerConfig,
    progress: Option<Arc<dyn ProgressCallback>>,
    scan_in_flight: bool,
    results: Option<(ScanResult, ScanResult)>,
    report: MatchReport,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("root_a", &self.root_a)
            .field("root_b", &self.root_b)
            .field("extensions", &self.extensions)
            .field("walker", &self.walker)
            .field("scan_in_flight", &self.scan_in_flight)
            .field("records", &self.report.len())
            .finish()
    }
}

impl Session {
    /// An empty session: no roots, no extensions, no results.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the root for `side`.
    pub fn set_root(&mut self, side: Side, path: impl Into<PathBuf>) {
        let path = path.into();
        match side {
            Side::A => self.root_a = Some(path),
            Side::B => self.root_b = Some(path),
        }
    }

    /// The root chosen for `side`, if any.
    #[must_use]
    pub fn root(&self, side: Side) -> Option<&Path> {
        match side {
            Side::A => self.root_a.as_deref(),
            Side::B => self.root_b.as_deref(),
        }
    }

    /// Replace the extension filter.
    pub fn set_extensions(&mut self, extensions: ExtensionFilter) {
        self.extensions = extensions;
    }

    /// The current extension filter.
    #[must_use]
    pub fn extensions(&self) -> &ExtensionFilter {
        &self.extensions
    }

    /// Replace the walker configuration.
    pub fn set_walker_config(&mut self, config: WalkerConfig) {
        self.walker = config;
    }

    /// Attach a progress callback used by subsequent scans.
    pub fn set_progress(&mut self, progress: Arc<dyn ProgressCallback>) {
        self.progress = Some(progress);
    }

    /// Check the inputs and build a scan request.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking roots before
    /// extensions.
    pub fn validate(&self) -> Result<ScanRequest, ValidationError> {
        let root_a = Self::chosen(self.root_a.as_deref(), Side::A)?;
        let root_b = Self::chosen(self.root_b.as_deref(), Side::B)?;

        for (side, root) in [(Side::A, root_a), (Side::B, root_b)] {
            if !root.exists() {
                return Err(ValidationError::RootNotFound {
                    side,
                    path: root.to_path_buf(),
                });
            }
        }

        if self.extensions.is_empty() {
            return Err(ValidationError::NoExtensions);
        }

        Ok(ScanRequest {
            root_a: root_a.to_path_buf(),
            root_b: root_b.to_path_buf(),
            extensions: self.extensions.clone(),
            walker: self.walker.clone(),
        })
    }

    fn chosen(root: Option<&Path>, side: Side) -> Result<&Path, ValidationError> {
        match root {
            Some(path) if !path.as_os_str().is_empty() => Ok(path),
            _ => Err(ValidationError::MissingRoot { side }),
        }
    }

    /// Whether a scan is currently in flight.
    #[must_use]
    pub fn is_scanning(&self) -> bool {
        self.scan_in_flight
    }

    /// Validate and start a scan on a worker thread.
    ///
    /// The session refuses further scans and deletes until
    /// [`Session::finish_scan`] receives this job's completion event.
    ///
    /// # Errors
    ///
    /// - [`SessionError::ScanInProgress`] if a scan is already running
    /// - [`SessionError::Validation`] if the inputs are incomplete
    /// - [`SessionError::Worker`] if the worker thread cannot be started
    pub fn start_scan(&mut self) -> Result<Job<ScanEvent>, SessionError> {
        if self.scan_in_flight {
            return Err(SessionError::ScanInProgress);
        }

        let request = self.validate()?;
        let progress = self.progress.clone();

        log::info!(
            "Scanning {} and {} for {}",
            request.root_a.display(),
            request.root_b.display(),
            request.extensions
        );

        let job = Job::spawn("scan", move || run_scan(&request, progress))?;
        self.scan_in_flight = true;
        Ok(job)
    }

    /// Install the completion event of a scan started with
    /// [`Session::start_scan`].
    ///
    /// Results of any earlier scan are replaced wholesale. On error the
    /// session is left with no results.
    ///
    /// # Errors
    ///
    /// Returns the scan's [`MatchError`] or a lost-worker error.
    pub fn finish_scan(
        &mut self,
        event: Result<ScanEvent, WorkerError>,
    ) -> Result<&MatchReport, SessionError> {
        self.scan_in_flight = false;
        self.results = None;
        self.report = MatchReport::default();

        let outcome = event??;
        self.results = Some((outcome.result_a, outcome.result_b));
        self.report = outcome.report;
        Ok(&self.report)
    }

    /// Start a scan and block until it completes.
    ///
    /// # Errors
    ///
    /// Same as [`Session::start_scan`] and [`Session::finish_scan`].
    pub fn scan(&mut self) -> Result<&MatchReport, SessionError> {
        let job = self.start_scan()?;
        let event = job.wait();
        self.finish_scan(event)
    }

    /// The current match report (empty before the first scan).
    #[must_use]
    pub fn report(&self) -> &MatchReport {
        &self.report
    }

    /// Scan results of the last completed scan, side A then side B.
    #[must_use]
    pub fn results(&self) -> Option<(&ScanResult, &ScanResult)> {
        self.results.as_ref().map(|(a, b)| (a, b))
    }

    /// Move the `side` copy of every record to the trash, on this thread.
    ///
    /// The report is consumed: afterwards it is empty.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::ScanInProgress`] while a scan is running.
    pub fn delete<T: Trash + ?Sized>(
        &mut self,
        side: Side,
        trash: &T,
    ) -> Result<DeleteSummary, SessionError> {
        if self.scan_in_flight {
            return Err(SessionError::ScanInProgress);
        }
        let records = self.report.take_records();
        Ok(delete_side(&records, side, trash))
    }

    /// Like [`Session::delete`], but on a worker thread.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::ScanInProgress`] while a scan is running, or
    /// [`SessionError::Worker`] if the worker cannot be started (the report
    /// is consumed either way).
    pub fn spawn_delete(
        &mut self,
        side: Side,
        trash: Arc<dyn Trash>,
    ) -> Result<Job<DeleteSummary>, SessionError> {
        if self.scan_in_flight {
            return Err(SessionError::ScanInProgress);
        }
        let records = self.report.take_records();
        Ok(spawn_delete_side(records, side, trash)?)
    }

    /// Forget the match report. Roots and extensions are kept.
    pub fn clear(&mut self) {
        self.report = MatchReport::default();
    }
}
