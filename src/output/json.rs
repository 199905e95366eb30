//! JSON output formatter for match reports.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "matches": [
//!     {
//!       "filename": "skin.ydr",
//!       "path_a": "/srv/resources/peds/skin.ydr",
//!       "path_b": "/srv/backup/skin.ydr",
//!       "size": 2048
//!     }
//!   ],
//!   "summary": {
//!     "count": 1,
//!     "total_size": 2048,
//!     "total_size_human": "2.0 KB",
//!     "folder_1": "/srv/resources",
//!     "folder_2": "/srv/backup",
//!     "extensions": [".ydr"],
//!     "generated_at": "2026-01-01T12:00:00Z"
//!   }
//! }
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::format_size;
use crate::duplicates::{MatchRecord, MatchReport};
use crate::scanner::ExtensionFilter;

/// Summary block of the JSON document.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// Number of match records
    pub count: usize,
    /// Sum of record sizes in bytes
    pub total_size: u64,
    /// `total_size` formatted for display
    pub total_size_human: String,
    /// Folder 1 as scanned
    pub folder_1: PathBuf,
    /// Folder 2 as scanned
    pub folder_2: PathBuf,
    /// Extensions that qualified a file
    pub extensions: ExtensionFilter,
    /// When the document was produced
    pub generated_at: DateTime<Utc>,
}

/// Complete JSON output structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<'a> {
    /// Match records in report order
    pub matches: &'a [MatchRecord],
    /// Summary statistics
    pub summary: JsonSummary,
}

impl<'a> JsonOutput<'a> {
    /// Build the document for `report`, stamped with the current time.
    #[must_use]
    pub fn new(
        report: &'a MatchReport,
        folder_1: &Path,
        folder_2: &Path,
        extensions: &ExtensionFilter,
    ) -> Self {
        Self {
            matches: &report.records,
            summary: JsonSummary {
                count: report.len(),
                total_size: report.total_size,
                total_size_human: format_size(report.total_size),
                folder_1: folder_1.to_path_buf(),
                folder_2: folder_2.to_path_buf(),
                extensions: extensions.clone(),
                generated_at: Utc::now(),
            },
        }
    }

    /// Serialize to compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write JSON followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W, pretty: bool) -> Result<(), JsonOutputError> {
        let json = if pretty {
            self.to_json_pretty()?
        } else {
            self.to_json()?
        };
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Errors that can occur during JSON output.
#[derive(thiserror::Error, Debug)]
pub enum JsonOutputError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error during writing
    #[error("I/O error during JSON generation: {0}")]
    Io(#[from] std::io::Error),
}
