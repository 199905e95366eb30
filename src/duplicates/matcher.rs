//! Name-based matching of two scan results.
//!
//! # Overview
//!
//! For every name present in both results (visited in lexicographic order),
//! each side-A occurrence is paired with the first side-B occurrence. The
//! size of a record is a fresh stat of its side-A path.
//!
//! Side B contributes a single representative per name even when it holds
//! several copies, and only side-A sizes are summed.
//!
//! # Example
//!
//! ```no_run
//! use namedupe::duplicates::find_matches;
//! use namedupe::scanner::{scan, ExtensionFilter};
//! use std::path::Path;
//!
//! let filter = ExtensionFilter::from_inputs([".ydr"]);
//! let a = scan(Path::new("/srv/a"), &filter);
//! let b = scan(Path::new("/srv/b"), &filter);
//! let report = find_matches(&a, &b).unwrap();
//! println!("{} match(es), {} bytes", report.len(), report.total_size);
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::scanner::{FileEntry, ScanResult};

/// Errors that abort matching.
#[derive(Debug, Error)]
pub enum MatchError {
    /// A side-A file could not be sized.
    #[error("failed to read size of {path}: {source}")]
    Stat {
        /// Path that failed to stat
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// One candidate duplicate: a side-A occurrence and side B's representative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// Lowercased file name shared by both sides
    pub filename: String,
    /// Occurrence under root A
    pub path_a: PathBuf,
    /// First occurrence registered under root B
    pub path_b: PathBuf,
    /// Size of `path_a` in bytes at match time
    pub size: u64,
}

impl MatchRecord {
    /// Directory containing the side-A file.
    #[must_use]
    pub fn folder_a(&self) -> &Path {
        self.path_a.parent().unwrap_or(&self.path_a)
    }

    /// Directory containing the side-B file.
    #[must_use]
    pub fn folder_b(&self) -> &Path {
        self.path_b.parent().unwrap_or(&self.path_b)
    }
}

/// Outcome of matching: the records and the sum of their sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    /// Records in name order, side-A walk order within a name
    pub records: Vec<MatchRecord>,
    /// Sum of `size` over all records
    pub total_size: u64,
}

impl MatchReport {
    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no duplicates were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop all records, returning them.
    pub fn take_records(&mut self) -> Vec<MatchRecord> {
        self.total_size = 0;
        std::mem::take(&mut self.records)
    }
}

/// Match two scan results by name.
///
/// # Errors
///
/// Returns [`MatchError::Stat`] if any side-A file cannot be sized; no
/// partial report is produced in that case.
pub fn find_matches(a: &ScanResult, b: &ScanResult) -> Result<MatchReport, MatchError> {
    let mut report = MatchReport::default();

    // Both maps are sorted, so walking A's keys yields common names in order.
    for (name, paths_a) in a.iter() {
        let Some(representative) = b.get(name).and_then(<[PathBuf]>::first) else {
            continue;
        };

        for path_a in paths_a {
            let size = FileEntry::new(path_a.clone())
                .size()
                .map_err(|source| MatchError::Stat {
                    path: path_a.clone(),
                    source,
                })?;

            report.total_size += size;
            report.records.push(MatchRecord {
                filename: name.to_string(),
                path_a: path_a.clone(),
                path_b: representative.clone(),
                size,
            });
        }
    }

    log::debug!(
        "Matched {} record(s) totalling {} bytes between {} and {}",
        report.len(),
        report.total_size,
        a.root().display(),
        b.root().display()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{scan, ExtensionFilter};
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, contents: &[u8]) -> PathBuf {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    fn all_filter() -> ExtensionFilter {
        ExtensionFilter::from_inputs([".ydr", ".ycd", ".ybn", ".ytyp"])
    }

    #[test]
    fn test_single_common_name() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        let skin_a = write(a.path(), "skin.ydr", b"twelve bytes");
        write(a.path(), "anim.ycd", b"anim");
        write(b.path(), "skin.ydr", b"different");
        write(b.path(), "other.ybn", b"other");

        let filter = all_filter();
        let report = find_matches(&scan(a.path(), &filter), &scan(b.path(), &filter)).unwrap();

        assert_eq!(report.len(), 1);
        let record = &report.records[0];
        assert_eq!(record.filename, "skin.ydr");
        assert_eq!(record.size, fs::metadata(&skin_a).unwrap().len());
        assert_eq!(report.total_size, 12);
    }

    #[test]
    fn test_every_a_occurrence_paired_with_first_b() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        write(a.path(), "x/prop.ydr", b"1");
        write(a.path(), "y/prop.ydr", b"22");
        write(b.path(), "p/prop.ydr", b"333");
        write(b.path(), "q/prop.ydr", b"4444");

        let filter = all_filter();
        let scan_b = scan(b.path(), &filter);
        let first_b = scan_b.get("prop.ydr").unwrap()[0].clone();
        let report = find_matches(&scan(a.path(), &filter), &scan_b).unwrap();

        assert_eq!(report.len(), 2);
        assert!(report.records.iter().all(|r| r.path_b == first_b));
        assert_eq!(report.total_size, 3);
    }

    #[test]
    fn test_case_insensitive_names() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        write(a.path(), "Skin.YDR", b"a");
        write(b.path(), "skin.ydr", b"b");

        let filter = all_filter();
        let report = find_matches(&scan(a.path(), &filter), &scan(b.path(), &filter)).unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report.records[0].filename, "skin.ydr");
    }

    #[test]
    fn test_records_sorted_by_name() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        for name in ["zeta.ydr", "alpha.ydr", "mid.ycd"] {
            write(a.path(), name, b"a");
            write(b.path(), name, b"b");
        }

        let filter = all_filter();
        let report = find_matches(&scan(a.path(), &filter), &scan(b.path(), &filter)).unwrap();
        let names: Vec<&str> = report.records.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["alpha.ydr", "mid.ycd", "zeta.ydr"]);
    }

    #[test]
    fn test_no_common_names() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        write(a.path(), "one.ydr", b"a");
        write(b.path(), "two.ydr", b"b");

        let filter = all_filter();
        let report = find_matches(&scan(a.path(), &filter), &scan(b.path(), &filter)).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.total_size, 0);
    }

    #[test]
    fn test_stat_failure_aborts() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        let vanished = write(a.path(), "gone.ydr", b"a");
        write(b.path(), "gone.ydr", b"b");

        let filter = all_filter();
        let scan_a = scan(a.path(), &filter);
        let scan_b = scan(b.path(), &filter);
        fs::remove_file(&vanished).unwrap();

        match find_matches(&scan_a, &scan_b) {
            Err(MatchError::Stat { path, .. }) => assert_eq!(path, vanished),
            other => panic!("Expected Stat error, got {:?}", other),
        }
    }

    #[test]
    fn test_take_records_empties_report() {
        let mut report = MatchReport {
            records: vec![MatchRecord {
                filename: "a.ydr".into(),
                path_a: PathBuf::from("/a/a.ydr"),
                path_b: PathBuf::from("/b/a.ydr"),
                size: 5,
            }],
            total_size: 5,
        };
        let taken = report.take_records();
        assert_eq!(taken.len(), 1);
        assert!(report.is_empty());
        assert_eq!(report.total_size, 0);
    }

    #[test]
    fn test_record_folders() {
        let record = MatchRecord {
            filename: "a.ydr".into(),
            path_a: PathBuf::from("/a/x/a.ydr"),
            path_b: PathBuf::from("/b/y/a.ydr"),
            size: 0,
        };
        assert_eq!(record.folder_a(), Path::new("/a/x"));
        assert_eq!(record.folder_b(), Path::new("/b/y"));
    }
}
