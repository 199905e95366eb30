//! Human-readable table of a match report.
//!
//! The summary line and column headers come from the message catalog, so
//! the table follows the chosen interface language. Colors are applied with
//! `yansi` and vanish when coloring is globally disabled.

use std::io::{self, Write};

use yansi::Paint;

use super::format_size;
use crate::duplicates::MatchReport;
use crate::i18n::Catalog;

/// Table formatter.
pub struct TableOutput<'a> {
    report: &'a MatchReport,
    catalog: &'a Catalog,
}

impl<'a> TableOutput<'a> {
    /// Create a table formatter for `report`.
    #[must_use]
    pub fn new(report: &'a MatchReport, catalog: &'a Catalog) -> Self {
        Self { report, catalog }
    }

    /// Localized summary line.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.report.is_empty() {
            self.catalog.t("summary_none").to_string()
        } else {
            self.catalog.format(
                "summary_found",
                &[
                    ("count", &self.report.len().to_string()),
                    ("size", &format_size(self.report.total_size)),
                ],
            )
        }
    }

    /// Write the rows followed by the summary line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        if self.report.is_empty() {
            writeln!(writer, "{}", self.summary().yellow())?;
            return Ok(());
        }

        let header = [
            self.catalog.t("col_filename").to_string(),
            self.catalog.t("col_path1").to_string(),
            self.catalog.t("col_path2").to_string(),
            self.catalog.t("col_size").to_string(),
        ];
        let rows: Vec<[String; 4]> = self
            .report
            .records
            .iter()
            .map(|record| {
                [
                    record.filename.clone(),
                    record.folder_a().display().to_string(),
                    record.folder_b().display().to_string(),
                    format_size(record.size),
                ]
            })
            .collect();

        let mut widths = header.clone().map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        writeln!(writer, "{}", render_row(&header, &widths).bold())?;
        for row in &rows {
            writeln!(writer, "{}", render_row(row, &widths))?;
        }
        writeln!(writer)?;
        writeln!(writer, "{}", self.summary().green().bold())?;
        Ok(())
    }
}

/// Left-align every cell to its column width; the last column is right-aligned.
fn render_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = String::new();
    for (idx, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let pad = width.saturating_sub(cell.chars().count());
        if idx == cells.len() - 1 {
            line.push_str(&" ".repeat(pad));
            line.push_str(cell);
        } else {
            line.push_str(cell);
            line.push_str(&" ".repeat(pad));
            line.push_str("  ");
        }
    }
    line
}
