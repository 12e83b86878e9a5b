use std::fs;
use std::path::{Path, PathBuf};

use super::catalog_loader::*;

#[test]
fn default_paths_under_root() {
    let root = Path::new("/src/firebird");
    assert_eq!(
        resolve_input(root, None),
        PathBuf::from("/src/firebird/src/msgs/messages2.sql")
    );
    assert_eq!(
        resolve_output(root, None),
        PathBuf::from("/src/firebird/src/include/gen/msgs.h")
    );
}

#[test]
fn explicit_paths_ignore_root() {
    let root = Path::new("/src/firebird");
    assert_eq!(
        resolve_input(root, Some(Path::new("msgs.sql"))),
        PathBuf::from("msgs.sql")
    );
    assert_eq!(resolve_output(root, Some(Path::new("-"))), PathBuf::from("-"));
}

#[test]
fn dash_is_stdio() {
    assert!(is_stdio(Path::new("-")));
    assert!(!is_stdio(Path::new("./-")));
    assert!(!is_stdio(Path::new("msgs.h")));
}

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("messages2.sql");
    fs::write(&path, "('A', NULL, NULL, NULL, 0, 1, 0, 'one');").unwrap();

    let source = load_catalog_source(&path).unwrap();
    assert!(source.starts_with("('A'"));
}

#[test]
fn load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.sql");

    let err = load_catalog_source(&path).unwrap_err();
    assert!(err.starts_with("failed to read"));
    assert!(err.contains("missing.sql"));
}

#[test]
fn lenient_parse_skips_malformed() {
    let source = "('A', NULL, NULL, NULL, 0, 1, 0, 'one');\n('B', NULL, NULL, NULL, JRD, 2, 0, 'two');";
    let catalog = parse_catalog(source, Path::new("msgs.sql"), false, false).unwrap();

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.dropped_count(), 1);
}

#[test]
fn strict_parse_rejects_malformed() {
    let source = "('A', NULL, NULL, NULL, 0, 1, 0, 'one');\n('B', NULL, NULL, NULL, JRD, 2, 0, 'two');";
    let err = parse_catalog(source, Path::new("msgs.sql"), true, false).unwrap_err();

    assert_eq!(err, "catalog rejected with 1 diagnostics");
}

#[test]
fn strict_parse_accepts_clean_catalog() {
    let source = "('A', NULL, NULL, NULL, 0, 1, 0, 'one');";
    let catalog = parse_catalog(source, Path::new("-"), true, false).unwrap();
    assert_eq!(catalog.len(), 1);
}

#[test]
fn header_config_overrides_table_name() {
    let header = msgtab_lib::emit_header(&[], &header_config(Some("isc_messages")));
    assert!(header.contains("} isc_messages[] = {"));

    let header = msgtab_lib::emit_header(&[], &header_config(None));
    assert!(header.contains("} messages[] = {"));
}
