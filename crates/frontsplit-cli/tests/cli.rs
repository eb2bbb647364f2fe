use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_frontsplit"))
        .args(args)
        // Keep the user's own config out of the way
        .env("FRONTSPLIT_CONFIG", dir.join("no-config.toml"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn run_with_stdin(dir: &Path, args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_frontsplit"))
        .args(args)
        .env("FRONTSPLIT_CONFIG", dir.join("no-config.toml"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input).unwrap();
    child.wait_with_output().unwrap()
}

fn write_note(dir: &TempDir, name: &str, content: impl AsRef<[u8]>) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn prints_frontmatter_and_content() {
    let dir = TempDir::new().unwrap();
    let note = write_note(&dir, "note.md", "+++\ntitle = \"x\"\n+++\n# Body\n");

    let output = run(dir.path(), &["--file", &note]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "title = \"x\"\n# Body\n\n"
    );
}

#[test]
fn threaded_mode_matches_default() {
    let dir = TempDir::new().unwrap();
    let note = write_note(&dir, "note.md", "{\"a\": {\"b\": 1}}\nbody");

    let plain = run(dir.path(), &["--file", &note]);
    let threaded = run(dir.path(), &["--file", &note, "--threaded"]);

    assert!(threaded.status.success());
    assert_eq!(threaded.stdout, plain.stdout);
}

#[test]
fn annotate_flag_labels_items() {
    let dir = TempDir::new().unwrap();
    let note = write_note(&dir, "note.md", "---\na: 1\n---\nbody");

    let output = run(dir.path(), &[&format!("--file={note}"), "--annotate"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "yaml: \"a: 1\"\ncontent: \"body\"\n"
    );
}

#[test]
fn config_file_selects_annotated_output() {
    let dir = TempDir::new().unwrap();
    let note = write_note(&dir, "note.md", "body");
    let config = write_note(&dir, "config.toml", "output = \"annotated\"\n");

    let output = Command::new(env!("CARGO_BIN_EXE_frontsplit"))
        .args(["--file", &note])
        .env("FRONTSPLIT_CONFIG", &config)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "content: \"body\"\n");
}

#[test]
fn dash_reads_document_from_stdin() {
    let dir = TempDir::new().unwrap();

    let output = run_with_stdin(dir.path(), &["--file", "-"], b"---\na: 1\n---\nbody");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "a: 1\nbody\n");
}

#[test]
fn stdin_works_threaded() {
    let dir = TempDir::new().unwrap();

    let output = run_with_stdin(
        dir.path(),
        &["--file=-", "--threaded", "--annotate"],
        b"{\"a\": 1}\nbody",
    );

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "json: \"{\\\"a\\\": 1}\"\ncontent: \"body\"\n"
    );
}

#[test]
fn invalid_utf8_content_is_passed_through() {
    let dir = TempDir::new().unwrap();
    let note = write_note(&dir, "note.md", b"+++\ntitle = 1\n+++\ncaf\xe9\n");

    let output = run(dir.path(), &["--file", &note]);

    assert!(output.status.success());
    assert_eq!(output.stdout, b"title = 1\ncaf\xe9\n\n");
}

#[test]
fn missing_file_flag_fails() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("file not provided in flags"));
}

#[test]
fn unreadable_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.md");

    let output = run(dir.path(), &["--file", &missing.to_string_lossy()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot open file provided"));
    assert!(output.stdout.is_empty());
}

#[test]
fn malformed_frontmatter_fails() {
    let dir = TempDir::new().unwrap();
    let note = write_note(&dir, "note.md", "{\"a\": 1\nbody");

    let output = run(dir.path(), &["--file", &note]);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("unexpected EOF parsing JSON front matter")
    );
}
