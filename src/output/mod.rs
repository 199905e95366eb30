//! Output formatters for match reports.
//!
//! - [`table`] for people: localized summary and one aligned row per record
//! - [`json`] for scripting
//! - [`csv`] for spreadsheet import
//!
//! # Example
//!
//! ```no_run
//! use namedupe::i18n::Catalog;
//! use namedupe::output::TableOutput;
//! use namedupe::session::Session;
//!
//! let mut session = Session::new();
//! // ... choose roots and extensions ...
//! let report = session.scan().unwrap();
//! TableOutput::new(report, &Catalog::default())
//!     .write_to(&mut std::io::stdout())
//!     .unwrap();
//! ```

pub mod csv;
pub mod json;
pub mod table;

pub use csv::CsvOutput;
pub use json::JsonOutput;
pub use table::TableOutput;

/// Format a byte count for display: 1024-based, one decimal place.
///
/// ```
/// use namedupe::output::format_size;
///
/// assert_eq!(format_size(0), "0.0 B");
/// assert_eq!(format_size(1536), "1.5 KB");
/// ```
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{size:.1} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.1} TB")
}
