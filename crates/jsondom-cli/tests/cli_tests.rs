//! Integration tests for the `jsondom` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the render, get,
//! kind and len subcommands through the actual binary, including stdin/stdout
//! piping, file I/O and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the sample.json fixture.
fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

/// Helper: path to the list_root.json fixture.
fn list_root_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/list_root.json")
}

fn jsondom() -> Command {
    Command::cargo_bin("jsondom").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Render subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn render_stdin_to_stdout() {
    jsondom()
        .arg("render")
        .write_stdin(r#"{ "foo" : [1, "a"], "bar" : 1.1 }"#)
        .assert()
        .success()
        .stdout("{\"foo\":[1,\"a\"],\"bar\":1.1}\n");
}

#[test]
fn render_file_matches_serde_json() {
    let output = jsondom()
        .args(["render", "-i", sample_json_path()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rendered: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let original: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(sample_json_path()).unwrap()).unwrap();
    assert_eq!(rendered, original);
}

#[test]
fn render_file_to_file() {
    let output_path = std::env::temp_dir().join("jsondom-test-render-output.json");
    let _ = std::fs::remove_file(&output_path);

    jsondom()
        .args(["render", "-i", sample_json_path(), "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    assert!(content.starts_with(r#"{"name":"Alice","age":30,"#));
    assert!(content.contains(r#""quote":"she said \"hi\"\n""#));

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn render_pretty() {
    jsondom()
        .args(["render", "--pretty"])
        .write_stdin(r#"{"a":[1]}"#)
        .assert()
        .success()
        .stdout("{\n  \"a\": [\n    1\n  ]\n}\n");
}

#[test]
fn render_pretty_custom_indent() {
    jsondom()
        .args(["render", "--pretty", "--indent", "4"])
        .write_stdin(r#"{"a":true}"#)
        .assert()
        .success()
        .stdout("{\n    \"a\": true\n}\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// Get / kind / len subcommands
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn get_scalar_and_subtree() {
    jsondom()
        .args(["get", "items.1.id", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("\"b2\"\n");

    jsondom()
        .args(["get", "scores", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("[95,87.5,92]\n");
}

#[test]
fn kind_of_root_and_paths() {
    jsondom()
        .args(["kind", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("map\n");

    for (path, kind) in [
        ("name", "string"),
        ("age", "number"),
        ("active", "bool"),
        ("scores", "list"),
        ("address", "map"),
        ("address.zip", "null"),
    ] {
        jsondom()
            .args(["kind", path, "-i", sample_json_path()])
            .assert()
            .success()
            .stdout(predicate::str::diff(format!("{kind}\n")));
    }
}

#[test]
fn len_of_list_and_map() {
    jsondom()
        .args(["len", "scores", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("3\n");

    jsondom()
        .args(["len", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("7\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn malformed_input_fails_with_parse_error() {
    jsondom()
        .arg("render")
        .write_stdin(r#"{"a": }"#)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error [parse]"))
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn list_root_fails_with_parse_error() {
    jsondom()
        .args(["render", "-i", list_root_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error [parse]"))
        .stderr(predicate::str::contains("document root must be a map, found list"));
}

#[test]
fn missing_key_fails_with_key_error() {
    jsondom()
        .args(["get", "nope", "-i", sample_json_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error [key]"))
        .stderr(predicate::str::contains("no member named \"nope\""));
}

#[test]
fn out_of_range_index_fails_with_index_error() {
    jsondom()
        .args(["get", "scores.3", "-i", sample_json_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error [index]"));
}

#[test]
fn len_of_scalar_fails_with_type_error() {
    jsondom()
        .args(["len", "age", "-i", sample_json_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error [type]"))
        .stderr(predicate::str::contains("'age' has no length"));
}

#[test]
fn missing_file_fails() {
    jsondom()
        .args(["render", "-i", "/nonexistent/jsondom/input.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn subcommand_is_required() {
    jsondom().assert().failure();
}
