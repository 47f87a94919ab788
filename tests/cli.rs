//! Tests for the `treeml` command-line tool.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;
use std::process::{Command, Stdio};

fn treeml(args: &[&str], stdin: &str) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_treeml"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn treeml");
    child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
    let output = child.wait_with_output().unwrap();
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

#[test]
fn test_stdin_to_stdout() {
    let input = r#"{"tag": "Foo", "props": {"strokeWidth": 2, "children": [{"tag": "Raw", "props": {"children": "<Bar/>"}}]}}"#;
    let (code, stdout, _) = treeml(&["-"], input);
    assert_eq!(code, 0);
    assert_eq!(stdout, "<Foo stroke-width=\"2\"><Bar/></Foo>\n");
}

#[test]
fn test_keep_attribute_case_and_no_raw() {
    let input = r#"{"tag": "Foo", "props": {"strokeWidth": 2, "children": {"tag": "Raw", "props": {"children": "<Bar/>"}}}}"#;
    let (code, stdout, _) = treeml(&["--keep-attribute-case", "--no-raw", "-"], input);
    assert_eq!(code, 0);
    assert_eq!(stdout, "<Foo strokeWidth=\"2\"><Raw>&lt;Bar/&gt;</Raw></Foo>\n");
}

#[test]
fn test_malformed_input_fails() {
    let (code, stdout, stderr) = treeml(&["-"], r#"{"tag": 3, "props": {}}"#);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("invalid component kind"), "{stderr}");
}

#[test]
fn test_missing_file_fails() {
    let (code, _, stderr) = treeml(&["/nonexistent/tree.json"], "");
    assert_eq!(code, 1);
    assert!(stderr.contains("failed to read"), "{stderr}");
}
