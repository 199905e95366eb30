//! Scanner and matcher behavior on real directory trees.

use namedupe::duplicates::find_matches;
use namedupe::scanner::{scan, ExtensionFilter};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &[u8]) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_scan_keeps_only_selected_extensions() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a/model.YDR", b"1");
    write(dir.path(), "b/anim.ycd", b"1");
    write(dir.path(), "readme.txt", b"1");
    write(dir.path(), "noext", b"1");

    let result = scan(dir.path(), &ExtensionFilter::from_inputs(["ydr"]));
    assert_eq!(result.file_count(), 1);
    assert!(result.contains("model.ydr"));
    assert!(!result.contains("anim.ycd"));
}

#[test]
fn test_scan_groups_case_variants() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "x/Skin.ydr", b"1");
    write(dir.path(), "y/SKIN.YDR", b"1");

    let result = scan(dir.path(), &ExtensionFilter::from_inputs([".ydr"]));
    assert_eq!(result.name_count(), 1);
    assert_eq!(result.get("skin.ydr").map(<[_]>::len), Some(2));
}

#[test]
fn test_rescan_is_identical() {
    let dir = TempDir::new().unwrap();
    for i in 0..20 {
        write(dir.path(), &format!("d{}/f{}.ybn", i % 3, i), b"abc");
    }
    let filter = ExtensionFilter::from_inputs([".ybn"]);

    let first = scan(dir.path(), &filter);
    let second = scan(dir.path(), &filter);
    assert_eq!(first, second);

    let mut all: Vec<_> = first.iter().flat_map(|(_, paths)| paths.to_vec()).collect();
    let total = all.len();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), total);
}

#[test]
fn test_scan_missing_root_is_empty() {
    let dir = TempDir::new().unwrap();
    let result = scan(&dir.path().join("gone"), &ExtensionFilter::from_inputs([".ydr"]));
    assert!(result.is_empty());
    assert_eq!(result.skipped(), 0);
}

#[test]
fn test_match_skin_scenario() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    write(a.path(), "peds/skin.ydr", &[0u8; 2048]);
    write(a.path(), "props/chair.ydr", &[0u8; 10]);
    write(b.path(), "Skin.YDR", &[0u8; 5]);
    write(b.path(), "table.ydr", &[0u8; 10]);

    let filter = ExtensionFilter::from_inputs([".ydr"]);
    let report = find_matches(&scan(a.path(), &filter), &scan(b.path(), &filter)).unwrap();

    assert_eq!(report.len(), 1);
    let record = &report.records[0];
    assert_eq!(record.filename, "skin.ydr");
    assert!(record.path_a.ends_with("peds/skin.ydr"));
    assert!(record.path_b.ends_with("Skin.YDR"));
    assert_eq!(record.size, 2048);
    assert_eq!(report.total_size, 2048);
}

#[test]
fn test_match_every_a_copy_against_first_b() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    write(a.path(), "one/x.ytyp", &[0u8; 3]);
    write(a.path(), "two/x.ytyp", &[0u8; 4]);
    write(b.path(), "x.ytyp", b"1");

    let filter = ExtensionFilter::from_inputs([".ytyp"]);
    let result_b = scan(b.path(), &filter);
    let report = find_matches(&scan(a.path(), &filter), &result_b).unwrap();

    assert_eq!(report.len(), 2);
    assert_eq!(report.total_size, 7);
    let first_b = &result_b.get("x.ytyp").unwrap()[0];
    assert!(report.records.iter().all(|r| &r.path_b == first_b));
}

#[test]
fn test_match_is_ordered_by_name() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    for name in ["zeta.ycd", "alpha.ycd", "mid.ycd"] {
        write(a.path(), name, b"1");
        write(b.path(), name, b"1");
    }

    let filter = ExtensionFilter::from_inputs([".ycd"]);
    let report = find_matches(&scan(a.path(), &filter), &scan(b.path(), &filter)).unwrap();
    let names: Vec<&str> = report.records.iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(names, vec!["alpha.ycd", "mid.ycd", "zeta.ycd"]);
}
