//! Command execution: turns parsed CLI arguments into session operations.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::actions::{Side, SystemTrash};
use crate::cli::{Cli, Commands, OutputFormat, ScanArgs};
use crate::config::{Config, EXTENSION_PRESETS};
use crate::error::ExitCode;
use crate::i18n::Catalog;
use crate::output::{CsvOutput, JsonOutput, TableOutput};
use crate::progress::Progress;
use crate::scanner::{ExtensionFilter, ScanResult, WalkerConfig};
use crate::session::{Session, SessionError, ValidationError};

/// Run the command described by `cli`.
///
/// # Errors
///
/// Returns an error, already carrying a localized message, when the inputs
/// are invalid or the scan fails. Failures of individual trash operations are
/// reported through [`ExitCode::PartialSuccess`] instead.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    configure_color(cli.no_color);

    let config = Config::load(cli.config.as_deref())?;
    let catalog = Catalog::new(cli.lang.unwrap_or(config.language));
    log::debug!("Effective configuration: {:?}", config);

    match &cli.command {
        Commands::Extensions => {
            list_extensions(&catalog, &mut io::stdout().lock())?;
            Ok(ExitCode::Success)
        }
        Commands::Scan(args) => run_scan_command(&cli, args, &config, &catalog),
    }
}

fn run_scan_command(
    cli: &Cli,
    args: &ScanArgs,
    config: &Config,
    catalog: &Catalog,
) -> Result<ExitCode> {
    let output = args.output.unwrap_or(config.output);
    let extensions = if args.extensions.is_empty() {
        ExtensionFilter::from_inputs(&config.extensions)
    } else {
        ExtensionFilter::from_inputs(&args.extensions)
    };

    let mut session = Session::new();
    session.set_root(Side::A, &args.folder1);
    session.set_root(Side::B, &args.folder2);
    session.set_extensions(extensions);
    session.set_walker_config(WalkerConfig {
        follow_symlinks: args.follow_symlinks || config.follow_symlinks,
    });

    let show_progress = !cli.quiet && !output.is_machine_readable();
    session.set_progress(Arc::new(Progress::new(
        !show_progress,
        cli.accessible,
        catalog.clone(),
    )));

    if show_progress {
        info!("{}", catalog.t("status_scanning"));
    }
    let job = session
        .start_scan()
        .map_err(|e| localize(e, catalog))?;
    let event = job.wait();
    session
        .finish_scan(event)
        .map_err(|e| localize(e, catalog))?;
    if show_progress {
        info!("{}", catalog.t("status_complete"));
    }

    if let Some((result_a, result_b)) = session.results() {
        report_skipped(result_a, catalog);
        report_skipped(result_b, catalog);
    }

    write_report(&session, output, catalog)?;

    if session.report().is_empty() {
        if args.delete_from.is_some() && !cli.quiet {
            eprintln!("{}", catalog.t("info_no_duplicates"));
        }
        return Ok(ExitCode::NoDuplicates);
    }

    match args.delete_from {
        Some(side) => delete_side(&mut session, side, args.yes, cli.quiet, catalog),
        None => Ok(ExitCode::Success),
    }
}

fn write_report(session: &Session, output: OutputFormat, catalog: &Catalog) -> Result<()> {
    let report = session.report();
    let mut stdout = io::stdout().lock();

    match output {
        OutputFormat::Table => TableOutput::new(report, catalog).write_to(&mut stdout)?,
        OutputFormat::Json => {
            let (folder_1, folder_2) = scanned_roots(session);
            JsonOutput::new(report, &folder_1, &folder_2, session.extensions())
                .write_to(&mut stdout, true)?;
        }
        OutputFormat::Csv => CsvOutput::new(report).write_to(&mut stdout)?,
    }

    stdout.flush().context("failed to write report")?;
    Ok(())
}

/// Roots as the walker resolved them, falling back to the configured ones
/// when no scan has completed.
fn scanned_roots(session: &Session) -> (PathBuf, PathBuf) {
    if let Some((result_a, result_b)) = session.results() {
        return (result_a.root().to_path_buf(), result_b.root().to_path_buf());
    }
    let configured = |side| session.root(side).map(PathBuf::from).unwrap_or_default();
    (configured(Side::A), configured(Side::B))
}

/// Color only when stderr/stdout are terminals, unless turned off outright.
fn configure_color(no_color: bool) {
    yansi::whenever(yansi::Condition::TTY_AND_COLOR);
    if no_color {
        yansi::disable();
    }
}

fn delete_side(
    session: &mut Session,
    side: Side,
    assume_yes: bool,
    quiet: bool,
    catalog: &Catalog,
) -> Result<ExitCode> {
    let folder_key = match side {
        Side::A => "folder_1",
        Side::B => "folder_2",
    };
    let folder = match session.root(side) {
        Some(root) => format!("{} ({})", catalog.t(folder_key), root.display()),
        None => catalog.t(folder_key).to_string(),
    };

    if !assume_yes {
        let prompt = catalog.format(
            "confirm_delete_msg",
            &[
                ("count", &session.report().len().to_string()),
                ("folder", &folder),
            ],
        );
        if !confirm(&prompt, catalog, &mut io::stdin().lock())? {
            eprintln!("{}", catalog.t("delete_cancelled"));
            return Ok(ExitCode::Success);
        }
    }

    if !quiet {
        info!("{}", catalog.t("status_deleting"));
    }
    let summary = session
        .delete(side, &SystemTrash)
        .map_err(|e| localize(e, catalog))?;

    for (path, message) in &summary.failures {
        warn!("{}: {}", path.display(), message);
    }
    if !quiet {
        eprintln!(
            "{}",
            catalog.format(
                "complete_msg",
                &[
                    ("success", &summary.succeeded.to_string()),
                    ("errors", &summary.failed.to_string()),
                ],
            )
        );
        eprintln!(
            "{}",
            catalog.format("status_removed", &[("count", &summary.succeeded.to_string())])
        );
    }

    if summary.all_succeeded() {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::PartialSuccess)
    }
}

/// Print `prompt` on stderr and read one answer line from `input`.
fn confirm<R: BufRead>(prompt: &str, catalog: &Catalog, input: &mut R) -> Result<bool> {
    eprint!("{prompt}");
    io::stderr().flush()?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("failed to read confirmation")?;
    Ok(catalog.is_yes(&answer))
}

fn report_skipped(result: &ScanResult, catalog: &Catalog) {
    if result.skipped() > 0 {
        warn!(
            "{}",
            catalog.format(
                "summary_skipped",
                &[
                    ("count", &result.skipped().to_string()),
                    ("path", &result.root().display().to_string()),
                ],
            )
        );
    }
}

/// Write the extension presets with their localized descriptions.
fn list_extensions<W: Write>(catalog: &Catalog, writer: &mut W) -> io::Result<()> {
    for (ext, key) in EXTENSION_PRESETS {
        writeln!(writer, "{:<8}{}", ext, catalog.t(key))?;
    }
    Ok(())
}

/// Attach the localized message to a session error, keeping the session
/// error reachable for exit-code mapping.
fn localize(err: SessionError, catalog: &Catalog) -> anyhow::Error {
    let message = match &err {
        SessionError::Validation(validation) => validation_message(validation, catalog),
        SessionError::ScanInProgress => catalog.t("err_scan_busy").to_string(),
        SessionError::Scan(e) => catalog.format("err_scan", &[("error", &e.to_string())]),
        SessionError::Worker(e) => catalog.format("err_scan", &[("error", &e.to_string())]),
    };
    anyhow::Error::new(err).context(message)
}

fn validation_message(err: &ValidationError, catalog: &Catalog) -> String {
    match err {
        ValidationError::RootNotFound { path, .. } => catalog.format(
            err.message_key(),
            &[("path", &path.display().to_string())],
        ),
        _ => catalog.t(err.message_key()).to_string(),
    }
}
