//! Integration tests for writing and printing the data document
//!
//! These tests verify:
//! - The written file parses back to the assembled document
//! - Repeated writes produce byte-identical files
//! - Printed output matches the file contents
//! - Write failures are reported with the failing path
//! - A full run leaves the output file behind or fails before printing

use camino::Utf8PathBuf;
use mindbridge_data::{
    EmitError, EmitterSettings, assemble, emit_to_writer, read_document, render_json, run,
    serialize_and_write,
};
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

fn create_test_output_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let dir = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, dir)
}

#[test]
fn test_written_file_round_trips() {
    let (_temp_dir, dir) = create_test_output_dir();
    let settings = EmitterSettings::with_output_path(dir.join("flask_mental_wellness_app_data.json"));

    serialize_and_write(&assemble(), &settings.output_path).unwrap();

    assert!(settings.output_path.exists());
    let loaded = read_document(&settings.output_path).unwrap();
    assert_eq!(loaded, assemble());
    assert_eq!(loaded.app_info.name, "MindBridge AI");
}

#[test]
fn test_written_file_is_valid_json() {
    let (_temp_dir, dir) = create_test_output_dir();
    let path = dir.join("data.json");

    serialize_and_write(&assemble(), &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value, assemble().to_value().unwrap());
}

#[test]
fn test_write_is_idempotent() {
    let (_temp_dir, dir) = create_test_output_dir();
    let path = dir.join("data.json");

    serialize_and_write(&assemble(), &path).unwrap();
    let first = fs::read(&path).unwrap();

    serialize_and_write(&assemble(), &path).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_write_overwrites_existing_file() {
    let (_temp_dir, dir) = create_test_output_dir();
    let path = dir.join("data.json");
    fs::write(&path, "stale contents that are longer than nothing at all").unwrap();

    serialize_and_write(&assemble(), &path).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        render_json(&assemble()).unwrap()
    );
}

#[test]
fn test_write_to_directory_path_fails() {
    let (_temp_dir, dir) = create_test_output_dir();

    let result = serialize_and_write(&assemble(), &dir);

    assert!(matches!(result, Err(EmitError::Write { .. })));
}

#[test]
fn test_printed_output_matches_file() {
    let (_temp_dir, dir) = create_test_output_dir();
    let path = dir.join("data.json");
    let doc = assemble();

    serialize_and_write(&doc, &path).unwrap();
    let mut out = Vec::new();
    emit_to_writer(&doc, &mut out).unwrap();

    let printed = String::from_utf8(out).unwrap();
    let header = format!(
        "Flask Mental Wellness App Data Structure Created\n{}\n",
        "=".repeat(50)
    );
    let body = printed.strip_prefix(&header).unwrap();

    assert_eq!(body, format!("{}\n", fs::read_to_string(&path).unwrap()));
}

#[test]
fn test_run_creates_output_file() {
    let (_temp_dir, dir) = create_test_output_dir();
    let settings =
        EmitterSettings::with_output_path(dir.join("flask_mental_wellness_app_data.json"));

    let doc = run(&settings).unwrap();

    assert!(settings.output_path.exists());
    assert_eq!(read_document(&settings.output_path).unwrap(), doc);
    assert_eq!(doc.app_info.name, "MindBridge AI");
}

#[test]
fn test_run_fails_for_missing_directory() {
    let (_temp_dir, dir) = create_test_output_dir();
    let settings = EmitterSettings::with_output_path(dir.join("missing").join("data.json"));

    let err = run(&settings).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<EmitError>(),
        Some(EmitError::Write { .. })
    ));
    assert!(!settings.output_path.exists());
}

proptest! {
    #[test]
    fn prop_any_file_name_round_trips(stem in "[a-z_]{1,16}") {
        let (_temp_dir, dir) = create_test_output_dir();
        let path = dir.join(format!("{}.json", stem));
        let doc = assemble();

        serialize_and_write(&doc, &path).unwrap();
        let first = fs::read(&path).unwrap();
        serialize_and_write(&doc, &path).unwrap();

        prop_assert_eq!(first, fs::read(&path).unwrap());
        prop_assert_eq!(read_document(&path).unwrap(), doc);
    }
}
