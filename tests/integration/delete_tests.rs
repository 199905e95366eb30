//! Move-to-trash flows with a filesystem-backed fake trash.

use namedupe::actions::{DeleteError, Side, Trash};
use namedupe::scanner::ExtensionFilter;
use namedupe::session::Session;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Removes files for real so the effects are observable.
struct RemoveTrash;

impl Trash for RemoveTrash {
    fn move_to_trash(&self, path: &Path) -> Result<(), DeleteError> {
        fs::remove_file(path).map_err(|e| DeleteError::TrashFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

fn scanned_session(a: &Path, b: &Path) -> Session {
    let mut session = Session::new();
    session.set_root(Side::A, a);
    session.set_root(Side::B, b);
    session.set_extensions(ExtensionFilter::from_inputs([".ydr"]));
    session.scan().unwrap();
    session
}

#[test]
fn test_delete_side_b_leaves_side_a() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    fs::write(a.path().join("skin.ydr"), b"a").unwrap();
    fs::write(b.path().join("skin.ydr"), b"b").unwrap();

    let mut session = scanned_session(a.path(), b.path());
    let summary = session.delete(Side::B, &RemoveTrash).unwrap();

    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.failed, 0);
    assert!(a.path().join("skin.ydr").exists());
    assert!(!b.path().join("skin.ydr").exists());
    assert!(session.report().is_empty());
}

#[test]
fn test_vanished_path_is_skipped() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    fs::write(a.path().join("one.ydr"), b"1").unwrap();
    fs::write(a.path().join("two.ydr"), b"2").unwrap();
    fs::write(b.path().join("one.ydr"), b"1").unwrap();
    fs::write(b.path().join("two.ydr"), b"2").unwrap();

    let mut session = scanned_session(a.path(), b.path());
    fs::remove_file(a.path().join("one.ydr")).unwrap();

    let summary = session.delete(Side::A, &RemoveTrash).unwrap();
    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.skipped, 1);
    assert!(summary.all_succeeded());
}

#[test]
fn test_repeated_b_representative_is_skipped_second_time() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    fs::create_dir_all(a.path().join("x")).unwrap();
    fs::create_dir_all(a.path().join("y")).unwrap();
    fs::write(a.path().join("x/dup.ydr"), b"1").unwrap();
    fs::write(a.path().join("y/dup.ydr"), b"1").unwrap();
    fs::write(b.path().join("dup.ydr"), b"1").unwrap();

    let mut session = scanned_session(a.path(), b.path());
    assert_eq!(session.report().len(), 2);

    let summary = session.delete(Side::B, &RemoveTrash).unwrap();
    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.total_count(), 2);
}

#[test]
fn test_background_delete() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    fs::write(a.path().join("m.ydr"), b"1").unwrap();
    fs::write(b.path().join("m.ydr"), b"1").unwrap();

    let mut session = scanned_session(a.path(), b.path());
    let job = session.spawn_delete(Side::A, Arc::new(RemoveTrash)).unwrap();
    let summary = job.wait().unwrap();

    assert_eq!(summary.succeeded, 1);
    assert!(!a.path().join("m.ydr").exists());
    assert!(b.path().join("m.ydr").exists());
}
