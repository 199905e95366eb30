//! Command-line interface definitions for namedupe.
//!
//! This module defines all CLI arguments and subcommands using the clap
//! derive API. Global options (verbosity, color, language, config file) come
//! before the subcommand.
//!
//! # Example
//!
//! ```bash
//! # Compare two resource folders using the default extensions
//! namedupe scan ./resources ./backup
//!
//! # Only models and collisions, JSON report
//! namedupe scan ./resources ./backup -e ydr -e ybn --output json
//!
//! # Move the folder 2 copies to the recycle bin without prompting
//! namedupe scan ./resources ./backup --delete-from folder2 --yes
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::actions::Side;
use crate::i18n::Language;

/// Find same-named files in two folders and move one side's copies to the
/// recycle bin.
///
/// Files are matched by name only (case-insensitive), never by content.
#[derive(Debug, Parser)]
#[command(name = "namedupe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Interface language (overrides the config file)
    #[arg(long, value_enum, global = true)]
    pub lang: Option<Language>,

    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Report errors as JSON on stderr
    #[arg(long, global = true)]
    pub json_errors: bool,

    /// Screen reader friendly progress (no spinner animation)
    #[arg(long, global = true)]
    pub accessible: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare two folders for same-named files
    Scan(ScanArgs),
    /// List the built-in extension presets
    Extensions,
}

/// Arguments for the scan subcommand.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// First folder
    #[arg(value_name = "FOLDER_1")]
    pub folder1: PathBuf,

    /// Second folder
    #[arg(value_name = "FOLDER_2")]
    pub folder2: PathBuf,

    /// Extension to include (repeatable; "ydr" and ".YDR" are equivalent)
    ///
    /// Defaults to the configured extensions.
    #[arg(short, long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// After scanning, move the matched files of this folder to the recycle bin
    #[arg(long, value_enum, value_name = "FOLDER")]
    pub delete_from: Option<Side>,

    /// Skip the confirmation prompt before deleting
    #[arg(short = 'y', long, requires = "delete_from")]
    pub yes: bool,

    /// Follow symbolic links to directories during the scan
    #[arg(long)]
    pub follow_symlinks: bool,
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output for scripting
    Json,
    /// CSV output for spreadsheets
    Csv,
}

impl OutputFormat {
    /// Whether the format is meant for machines (no progress, no prompts on stdout).
    #[must_use]
    pub fn is_machine_readable(self) -> bool {
        !matches!(self, Self::Table)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_scan_basic() {
        let cli = Cli::try_parse_from(["namedupe", "scan", "/a", "/b"]).unwrap();
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.folder1, PathBuf::from("/a"));
                assert_eq!(args.folder2, PathBuf::from("/b"));
                assert!(args.extensions.is_empty());
                assert_eq!(args.output, None);
                assert_eq!(args.delete_from, None);
            }
            _ => panic!("Expected Scan command"),
        }
    }

    #[test]
    fn test_cli_parse_scan_with_options() {
        let cli = Cli::try_parse_from([
            "namedupe", "-v", "--lang", "pt", "scan", "/a", "/b", "-e", "ydr", "--ext", ".YBN",
            "--output", "json", "--delete-from", "folder2", "-y",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 1);
        assert_eq!(cli.lang, Some(Language::Pt));
        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.extensions, vec!["ydr", ".YBN"]);
                assert_eq!(args.output, Some(OutputFormat::Json));
                assert_eq!(args.delete_from, Some(Side::B));
                assert!(args.yes);
            }
            _ => panic!("Expected Scan command"),
        }
    }

    #[test]
    fn test_cli_delete_from_aliases() {
        for (value, side) in [("a", Side::A), ("1", Side::A), ("b", Side::B), ("2", Side::B)] {
            let cli =
                Cli::try_parse_from(["namedupe", "scan", "/a", "/b", "--delete-from", value])
                    .unwrap();
            match cli.command {
                Commands::Scan(args) => assert_eq!(args.delete_from, Some(side)),
                _ => panic!("Expected Scan command"),
            }
        }
    }

    #[test]
    fn test_cli_yes_requires_delete_from() {
        let result = Cli::try_parse_from(["namedupe", "scan", "/a", "/b", "-y"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["namedupe", "-v", "-q", "scan", "/a", "/b"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_missing_second_folder() {
        let result = Cli::try_parse_from(["namedupe", "scan", "/a"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_extensions_subcommand() {
        let cli = Cli::try_parse_from(["namedupe", "extensions"]).unwrap();
        assert!(matches!(cli.command, Commands::Extensions));
    }

    #[test]
    fn test_cli_version_flag() {
        let result = Cli::try_parse_from(["namedupe", "--version"]);
        assert!(result.is_err()); // clap exits on --version
    }

    #[test]
    fn test_output_format_machine_readable() {
        assert!(!OutputFormat::Table.is_machine_readable());
        assert!(OutputFormat::Json.is_machine_readable());
        assert!(OutputFormat::Csv.is_machine_readable());
    }
}
