use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use colclean_ingest::{IngestError, read_table};

fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_header_and_ragged_rows() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_file(&dir, "ragged.csv", b"a,b,c\n1,2,3\n4,5\n6,7,8,9\n");
    let table = read_table(&path).expect("read csv");
    assert_eq!(table.headers, vec!["a", "b", "c"]);
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[0], vec!["1", "2", "3"]);
    assert_eq!(table.rows[1], vec!["4", "5"]);
    assert_eq!(table.rows[2], vec!["6", "7", "8", "9"]);
}

#[test]
fn preserves_empty_fields_and_quoted_content() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_file(&dir, "quoted.csv", b"a,b\n\"x,y\",\n , z \n");
    let table = read_table(&path).expect("read csv");
    assert_eq!(table.rows[0], vec!["x,y", ""]);
    // whitespace is content, not noise
    assert_eq!(table.rows[1], vec![" ", " z "]);
}

#[test]
fn header_only_file_has_no_rows() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_file(&dir, "header.csv", b"title,pages\n");
    let table = read_table(&path).expect("read csv");
    assert_eq!(table.headers, vec!["title", "pages"]);
    assert!(table.rows.is_empty());
}

#[test]
fn empty_file_yields_empty_table() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_file(&dir, "empty.csv", b"");
    let table = read_table(&path).expect("read csv");
    assert!(table.is_empty());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("nope.csv");
    let error = read_table(&path).expect_err("missing file should fail");
    assert!(matches!(error, IngestError::Io { .. }), "got {error:?}");
}

#[test]
fn invalid_utf8_is_a_format_error() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_file(&dir, "latin1.csv", b"a,b\n\xffoo,2\n");
    let error = read_table(&path).expect_err("invalid utf-8 should fail");
    assert!(matches!(error, IngestError::Format { .. }), "got {error:?}");
}
