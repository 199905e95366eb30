//! Session lifecycle through the public API.

use namedupe::actions::Side;
use namedupe::error::ExitCode;
use namedupe::scanner::{ExtensionFilter, WalkerConfig};
use namedupe::session::{Session, SessionError, ValidationError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_empty_extension_set_is_rejected() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    let mut session = Session::new();
    session.set_root(Side::A, a.path());
    session.set_root(Side::B, b.path());
    session.set_extensions(ExtensionFilter::from_inputs(["", " . "]));

    let err = session.scan().unwrap_err();
    assert!(matches!(
        err,
        SessionError::Validation(ValidationError::NoExtensions)
    ));
    assert_eq!(
        ExitCode::for_error(&anyhow::Error::new(err)),
        ExitCode::InvalidInput
    );
}

#[test]
fn test_background_scan_completes() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    fs::write(a.path().join("x.ybn"), b"12345").unwrap();
    fs::write(b.path().join("X.ybn"), b"1").unwrap();

    let mut session = Session::new();
    session.set_root(Side::A, a.path());
    session.set_root(Side::B, b.path());
    session.set_extensions(ExtensionFilter::from_inputs([".ybn"]));
    session.set_walker_config(WalkerConfig::default());

    let job = session.start_scan().unwrap();
    let report = session.finish_scan(job.wait()).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report.total_size, 5);

    let (result_a, result_b) = session.results().unwrap();
    assert_eq!(result_a.file_count(), 1);
    assert_eq!(result_b.file_count(), 1);
}

#[test]
fn test_overlapping_roots_match_every_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.ydr"), b"1").unwrap();
    fs::write(dir.path().join("b.ydr"), b"22").unwrap();

    let mut session = Session::new();
    session.set_root(Side::A, dir.path());
    session.set_root(Side::B, dir.path());
    session.set_extensions(ExtensionFilter::from_inputs([".ydr"]));

    let report = session.scan().unwrap();
    assert_eq!(report.len(), 2);
    assert!(report.records.iter().all(|r| r.path_a == r.path_b));
}
