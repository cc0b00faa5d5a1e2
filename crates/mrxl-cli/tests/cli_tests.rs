//! End-to-end tests for the `mrxl` binary.
//!
//! Each test spawns the compiled binary against a fixture program and
//! checks stdout, stderr, and the exit status.

use std::path::Path;
use std::process::{Command, Output};

fn fixture(name: &str) -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .display()
        .to_string()
}

fn mrxl(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mrxl"))
        .args(args)
        .output()
        .expect("binary should spawn")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr should be UTF-8")
}

#[test]
fn add_program_prints_sorted_pretty_json() {
    let output = mrxl(&[&fixture("add.mrxl"), &fixture("add.json")]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "{\n  \"sumvec\": [\n    11,\n    22,\n    33,\n    44\n  ]\n}\n"
    );
}

#[test]
fn parallel_flag_produces_identical_output() {
    let plain = mrxl(&[&fixture("add.mrxl"), &fixture("add.json")]);
    let parallel = mrxl(&["--parallel", &fixture("add.mrxl"), &fixture("add.json")]);
    assert!(parallel.status.success(), "stderr: {}", stderr(&parallel));
    assert_eq!(stdout(&plain), stdout(&parallel));
}

#[test]
fn reduce_program_fails_with_runtime_error() {
    let output = mrxl(&[&fixture("dot.mrxl"), &fixture("add.json")]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(
        stderr(&output).contains("reduce unsupported"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn syntax_errors_go_to_stderr_with_source_context() {
    let output = mrxl(&[&fixture("bad.mrxl"), &fixture("add.json")]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("expected `:`"), "stderr: {err}");
    assert!(err.contains("input avec int[4]"), "stderr: {err}");
    assert!(err.contains("bad.mrxl:1:"), "stderr: {err}");
}

#[test]
fn missing_data_entry_is_a_runtime_error() {
    let output = mrxl(&[&fixture("add.mrxl"), &fixture("empty.json")]);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("input data for `avec` not found"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn unreadable_program_path_is_reported() {
    let output = mrxl(&[&fixture("no-such-file.mrxl"), &fixture("add.json")]);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("failed to read"),
        "stderr: {}",
        stderr(&output)
    );
}
