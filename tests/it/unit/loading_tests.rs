//! Unit tests for point data loading.

use pointboard::SelectionEngine;
use pointboard::data::{DataError, load_raw_points};
use pointboard::types::{PointId, RawPoint};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_points_file() {
    let file = write_temp(r#"[{"x": 10, "y": 10}, {"x": 100, "y": 100}]"#);
    let raw = load_raw_points(file.path()).unwrap();
    assert_eq!(raw, vec![RawPoint::new(10.0, 10.0), RawPoint::new(100.0, 100.0)]);

    let engine = SelectionEngine::new(&raw).unwrap();
    assert_eq!(engine.points().len(), 2);
    assert!(engine.points().by_id(PointId(1)).is_ok());
}

#[test]
fn test_load_wrapped_points_file() {
    let file = write_temp(r#"{"data": [{"id": 3, "x": 1.5, "y": 2.5}]}"#);
    let raw = load_raw_points(file.path()).unwrap();
    assert_eq!(raw, vec![RawPoint::with_id(3, 1.5, 2.5)]);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_raw_points(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, DataError::Io(_)));
}

#[test]
fn test_load_invalid_json() {
    let file = write_temp("[{\"x\": 1, ");
    assert!(matches!(load_raw_points(file.path()), Err(DataError::Json(_))));
}

#[test]
fn test_engine_rejects_duplicate_ids_from_file() {
    let file = write_temp(r#"[{"id": 1, "x": 0, "y": 0}, {"id": 1, "x": 5, "y": 5}]"#);
    let raw = load_raw_points(file.path()).unwrap();
    let err = SelectionEngine::new(&raw).unwrap_err();
    assert_eq!(err.to_string(), "Duplicate point id: 1");
}
