//! End-to-end tests for the kata binary.

use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn kata(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kata"))
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| l.to_string())
        .collect()
}

#[test]
fn test_expand_prints_one_per_line() {
    let dir = tempdir().unwrap();
    let output = kata(dir.path(), &["expand", "thumbnail.{png,jp{e,}g}"]);

    assert!(output.status.success());
    let mut lines = stdout_lines(&output);
    lines.sort();
    assert_eq!(lines, vec!["thumbnail.jpeg", "thumbnail.jpg", "thumbnail.png"]);
}

#[test]
fn test_expand_status_goes_to_stderr() {
    let dir = tempdir().unwrap();
    let output = kata(dir.path(), &["expand", "{a,b}"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Expanded"));
    assert!(stderr.contains("2 strings"));
}

#[test]
fn test_expand_malformed_fails() {
    let dir = tempdir().unwrap();
    let output = kata(dir.path(), &["expand", "{a,b"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("kata::braces::malformed"));
}

#[test]
fn test_expand_uses_discovered_config() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("kata.yaml"),
        "expand:\n  keep_duplicates: true\noutput:\n  format: json\n",
    )
    .unwrap();

    let output = kata(dir.path(), &["expand", "{x,x}"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "pattern": "{x,x}", "expansions": ["x", "x"] }])
    );
}

#[test]
fn test_expand_explicit_config_path() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("limits.yaml");
    std::fs::write(&config, "expand:\n  max_results: 2\n").unwrap();

    let output = kata(
        dir.path(),
        &["--config", config.to_str().unwrap(), "expand", "{a,b,c}"],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("kata::braces::limit"));
}

#[test]
fn test_selector_combined() {
    let dir = tempdir().unwrap();
    let output = kata(
        dir.path(),
        &["selector", "element=div", "id=main", "+", "element=table", "id=data"],
    );

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["div#main + table#data"]);
}

#[test]
fn test_selector_out_of_order_fails() {
    let dir = tempdir().unwrap();
    let output = kata(dir.path(), &["selector", "class=x", "id=main"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("kata::selector::order"));
}

#[test]
fn test_selector_json() {
    let dir = tempdir().unwrap();
    let output = kata(
        dir.path(),
        &["selector", "--json", "id=main", "class=container", "class=editable"],
    );

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["selector"], "#main.container.editable");
    assert_eq!(json["fragments"][0]["classes"], serde_json::json!(["container", "editable"]));
}
