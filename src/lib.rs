//! namedupe - Name-based duplicate finder for two folders
//!
//! Scans two folder trees for files with chosen extensions, pairs files that
//! share a name (case-insensitive), and can move one side's copies to the
//! platform recycle bin. Content is never compared.

pub mod actions;
pub mod app;
pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod output;
pub mod progress;
pub mod scanner;
pub mod session;
pub mod worker;

pub use app::run_app;
