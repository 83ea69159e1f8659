//! End-to-end tests exercising the `difflace` binary against real files on
//! disk, mirroring the scenarios worked through by hand while building the
//! emitters.

use std::fs;
use std::process::Command;

fn difflace() -> Command {
    Command::new(env!("CARGO_BIN_EXE_difflace"))
}

fn write(dir: &std::path::Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write fixture file");
    path
}

#[test]
fn identical_files_exit_zero_with_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.txt", "1\n2\n3\n");
    let b = write(dir.path(), "b.txt", "1\n2\n3\n");

    let output = difflace().arg(&a).arg(&b).output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn differing_files_exit_one_with_unified_output() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.txt", "a\nb\nc\nd\ne\n");
    let b = write(dir.path(), "b.txt", "a\nb\nd\ne\n");

    let output = difflace().args(["-U", "3"]).arg(&a).arg(&b).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.starts_with("---"));
    assert!(text.contains("@@ -1,5 +1,4 @@\n"));
    assert!(text.contains("-c\n"));
}

#[test]
fn context_style_renders_star_header() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.txt", "1\n2\n3\n4\n5\n");
    let b = write(dir.path(), "b.txt", "1\n2\nX\n4\n5\n");

    let output = difflace()
        .args(["-s", "context", "-C", "2"])
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.starts_with("***"));
    assert!(text.contains("*** 1,5 ****\n"));
    assert!(text.contains("! 3\n"));
    assert!(text.contains("! X\n"));
}

#[test]
fn ignore_blank_lines_suppresses_whitespace_only_hunk() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.txt", "x\n   \ny\n");
    let b = write(dir.path(), "b.txt", "x\n\ny\n");

    let output = difflace().arg("-b").arg(&a).arg(&b).output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_file_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.txt", "x\n");
    let missing = dir.path().join("does-not-exist.txt");

    let output = difflace().arg(&a).arg(&missing).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn labels_override_header_identification_line() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.txt", "x\n");
    let b = write(dir.path(), "b.txt", "y\n");

    let output = difflace()
        .args(["-L", "old/custom", "-L", "new/custom"])
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.starts_with("--- old/custom\n"));
    assert!(text.contains("+++ new/custom\n"));
}
