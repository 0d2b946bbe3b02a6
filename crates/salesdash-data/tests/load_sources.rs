use std::fs;

use salesdash_core::notice::NoticeLevel;
use salesdash_data::{load, parse_csv_bytes, read_dataset, resolve_source, DataSource, LoadOutcome};
use tempfile::tempdir;

const SAMPLE: &str = "Order ID, Amount ,Date\nA1,100,2023-01-05\nA1,50,2023-01-20\n";

#[test]
fn explicit_input_beats_default() {
    let dir = tempdir().unwrap();
    let upload = dir.path().join("upload.csv");
    let default = dir.path().join("default.csv");
    fs::write(&upload, SAMPLE).unwrap();
    fs::write(&default, "Amount\n1\n").unwrap();

    let outcome = load(Some(&upload), &default).expect("load");
    let LoadOutcome::Loaded(loaded) = &outcome else {
        panic!("expected a dataset");
    };
    assert_eq!(loaded.source, DataSource::Upload(upload.clone()));
    assert_eq!(loaded.dataset.row_count(), 2);
    assert_eq!(loaded.sha256.len(), 64);
    assert_eq!(outcome.notice().message, "File uploaded successfully");
}

#[test]
fn default_file_used_when_no_input() {
    let dir = tempdir().unwrap();
    let default = dir.path().join("default.csv");
    fs::write(&default, SAMPLE).unwrap();
    let outcome = load(None, &default).expect("load");
    match &outcome {
        LoadOutcome::Loaded(loaded) => {
            assert_eq!(loaded.source, DataSource::LocalDefault(default.clone()));
            assert_eq!(loaded.dataset.columns()[1], "Amount");
        }
        LoadOutcome::Missing { .. } => panic!("default exists"),
    }
    assert_eq!(outcome.notice().message, "CSV loaded from local file");
}

#[test]
fn missing_everything_is_a_warning_not_an_error() {
    let dir = tempdir().unwrap();
    let default = dir.path().join("absent.csv");
    let outcome = load(None, &default).expect("missing source is not fatal");
    assert!(matches!(outcome, LoadOutcome::Missing { .. }));
    let notice = outcome.notice();
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert_eq!(notice.message, "CSV not found. Please upload your dataset");
}

#[test]
fn unreadable_explicit_input_is_an_error() {
    let dir = tempdir().unwrap();
    let err = load(Some(&dir.path().join("nope.csv")), &dir.path().join("d.csv")).unwrap_err();
    assert_eq!(err.code(), "data.source_open");
}

#[test]
fn dash_means_stdin() {
    let dir = tempdir().unwrap();
    let source = resolve_source(Some(std::path::Path::new("-")), &dir.path().join("d.csv"));
    assert_eq!(source, Some(DataSource::Stdin));
}

#[test]
fn ragged_rows_are_fatal() {
    let err = parse_csv_bytes(b"a,b\n1,2\n3\n").unwrap_err();
    assert_eq!(err.code(), "data.parse");
    assert_eq!(err.info().context.get("line").map(String::as_str), Some("3"));
}

#[test]
fn quoted_fields_and_values_are_preserved() {
    let dataset = read_dataset("Category,Amount\n\"Set, Kurta\", 12.5\n".as_bytes()).unwrap();
    assert_eq!(dataset.cell(0, "Category"), Some("Set, Kurta"));
    assert_eq!(dataset.cell(0, "Amount"), Some(" 12.5"));
    assert_eq!(dataset.numbers("Amount").unwrap(), vec![Some(12.5)]);
}

#[test]
fn header_only_file_is_an_empty_dataset() {
    let dataset = parse_csv_bytes(b"Amount,Category\n").unwrap();
    assert!(dataset.is_empty());
    assert_eq!(dataset.column_count(), 2);
}
