//! CSV output formatter for match reports.
//!
//! One row per match record.
//!
//! # Columns
//!
//! - `filename`: lowercased shared file name
//! - `folder_1_path`: path of the file under folder 1
//! - `folder_2_path`: path of the representative file under folder 2
//! - `size`: size of the folder 1 file in bytes

use std::io;

use serde::Serialize;
use thiserror::Error;

use crate::duplicates::MatchReport;

/// Errors that can occur during CSV output generation.
#[derive(Debug, Error)]
pub enum CsvOutputError {
    /// I/O error during writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during CSV serialization.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    filename: &'a str,
    folder_1_path: String,
    folder_2_path: String,
    size: u64,
}

/// CSV output formatter.
pub struct CsvOutput<'a> {
    report: &'a MatchReport,
}

impl<'a> CsvOutput<'a> {
    /// Create a new CSV output formatter.
    #[must_use]
    pub fn new(report: &'a MatchReport) -> Self {
        Self { report }
    }

    /// Write the header and one row per record.
    ///
    /// # Errors
    ///
    /// Returns `CsvOutputError` if writing or serialization fails.
    pub fn write_to<W: io::Write>(&self, writer: W) -> Result<(), CsvOutputError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        if self.report.is_empty() {
            csv_writer.write_record(["filename", "folder_1_path", "folder_2_path", "size"])?;
        }

        for record in &self.report.records {
            csv_writer.serialize(CsvRow {
                filename: &record.filename,
                folder_1_path: record.path_a.to_string_lossy().into_owned(),
                folder_2_path: record.path_b.to_string_lossy().into_owned(),
                size: record.size,
            })?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Generate CSV output as a string.
    ///
    /// # Errors
    ///
    /// Returns `CsvOutputError` if serialization fails.
    pub fn to_string(&self) -> Result<String, CsvOutputError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}
