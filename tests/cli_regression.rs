// Regression tests for the `strand` binary.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn strand() -> Command {
    Command::cargo_bin("strand").unwrap()
}

#[test]
fn cli_prints_parsed_tree() {
    strand()
        .args(["--color", "never"])
        .write_stdin("(this ((is surely) (binary tree)))")
        .assert()
        .success()
        .stdout("(this ((is surely) (binary tree)))\n");
}

#[test]
fn cli_reports_highlighted_error_on_stderr() {
    strand()
        .args(["--color", "never"])
        .write_stdin("(a")
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("error: expected ')'").and(contains("   1 | (a« »")));
}

#[test]
fn cli_reports_miette_diagnostics_with_fancy() {
    strand()
        .arg("--fancy")
        .write_stdin("(a")
        .assert()
        .code(1)
        .stderr(contains("strand::parse::expected_literal"));
}

#[test]
fn cli_json_output_for_terms() {
    let output = strand()
        .args(["--grammar", "term", "--format", "json"])
        .write_stdin("add(1, [x, y])")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "kind": "call",
            "callee": "add",
            "args": [
                { "kind": "number", "value": 1.0 },
                { "kind": "list", "items": [
                    { "kind": "symbol", "name": "x" },
                    { "kind": "symbol", "name": "y" }
                ]}
            ]
        }])
    );
}

#[test]
fn cli_json_error_goes_to_stdout() {
    let output = strand()
        .args(["--format", "json"])
        .write_stdin("(a")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "error": "expected ')'", "span": { "start": 2, "end": 3 } })
    );
}

#[test]
fn cli_reads_source_file() {
    let path = "tests/cli_source.tree";
    fs::write(path, "// leaves\n(left right)\n").unwrap();

    strand()
        .arg(path)
        .assert()
        .success()
        .stdout("(left right)\n");

    let _ = fs::remove_file(path);
}

#[test]
fn cli_missing_file_exits_with_two() {
    strand()
        .arg("tests/does_not_exist.tree")
        .assert()
        .code(2)
        .stderr(contains("failed to read"));
}

#[test]
fn cli_huge_context_lines_still_shows_span_line() {
    strand()
        .args(["--color", "never", "--context-lines", "18446744073709551615"])
        .write_stdin("x\ny\n(a")
        .assert()
        .code(1)
        .stderr(
            contains("error: expected end of input")
                .and(contains("   1 | x"))
                .and(contains("   2 | «y»")),
        );
}

#[test]
fn cli_deep_nesting_reports_error_instead_of_aborting() {
    strand()
        .args(["--color", "never", "--context-lines", "0"])
        .write_stdin("(".repeat(200_000))
        .assert()
        .code(1)
        .stderr(contains("error: expected nesting depth of at most 128"));
}
