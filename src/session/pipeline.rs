//! The scan pipeline run by the worker: scan both roots, then match.

use std::path::PathBuf;
use std::sync::Arc;

use crate::duplicates::{find_matches, MatchError, MatchReport};
use crate::progress::ProgressCallback;
use crate::scanner::{ExtensionFilter, ScanResult, Walker, WalkerConfig};

/// Validated inputs of one scan.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Folder 1
    pub root_a: PathBuf,
    /// Folder 2
    pub root_b: PathBuf,
    /// Extensions that qualify a file
    pub extensions: ExtensionFilter,
    /// Walk settings shared by both roots
    pub walker: WalkerConfig,
}

/// Everything a completed scan produces.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Scan of folder 1
    pub result_a: ScanResult,
    /// Scan of folder 2
    pub result_b: ScanResult,
    /// Matches between the two
    pub report: MatchReport,
}

/// Scan both roots and match them.
///
/// # Errors
///
/// Returns [`MatchError`] if a side-A file cannot be sized.
pub fn run_scan(
    request: &ScanRequest,
    progress: Option<Arc<dyn ProgressCallback>>,
) -> Result<ScanOutcome, MatchError> {
    let walk = |root: &PathBuf| {
        let walker = Walker::new(root, &request.extensions, request.walker.clone());
        match &progress {
            Some(cb) => walker.with_progress(Arc::clone(cb)).scan(),
            None => walker.scan(),
        }
    };

    let result_a = walk(&request.root_a);
    let result_b = walk(&request.root_b);
    let report = find_matches(&result_a, &result_b)?;

    Ok(ScanOutcome {
        result_a,
        result_b,
        report,
    })
}
