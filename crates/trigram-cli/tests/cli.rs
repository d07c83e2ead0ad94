use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const SAMPLE: &str = "The cat sat on the mat.\nThe cat sat!\n";

fn write_input(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("input.txt");
    std::fs::write(&path, contents).unwrap();
    path
}

fn trigrams(args: &[&str], input: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_trigrams"));
    for var in [
        "RUST_LOG",
        "TRIGRAMS_TOP",
        "TRIGRAMS_FORMAT",
        "TRIGRAMS_LOAD_MODE",
        "TRIGRAMS_CHUNK_SIZE",
        "TRIGRAMS_TIE_BREAK",
        "TRIGRAMS_SEED",
    ] {
        cmd.env_remove(var);
    }
    cmd.args(args).arg(input).output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn prints_top_three_lines() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, SAMPLE);
    let output = trigrams(&[], &input);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "the cat sat - 2\ncat sat on - 1\nsat on the - 1\n"
    );
}

#[test]
fn load_modes_agree() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, SAMPLE);
    let mapped = trigrams(&["--load-mode", "mmap"], &input);
    let owned = trigrams(&["--load-mode", "owned"], &input);
    assert!(mapped.status.success() && owned.status.success());
    assert_eq!(mapped.stdout, owned.stdout);
}

#[test]
fn top_and_tie_break_options() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, SAMPLE);

    let one = trigrams(&["--top", "1"], &input);
    assert_eq!(stdout_of(&one), "the cat sat - 2\n");

    let lex = trigrams(&["-k", "3", "--tie-break", "lexicographic"], &input);
    assert_eq!(
        stdout_of(&lex),
        "the cat sat - 2\ncat sat on - 1\nmat the cat - 1\n"
    );
}

#[test]
fn top_can_come_from_the_environment() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, SAMPLE);
    let output = Command::new(env!("CARGO_BIN_EXE_trigrams"))
        .env_remove("RUST_LOG")
        .env("TRIGRAMS_TOP", "2")
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_of(&output).lines().count(), 2);
}

#[test]
fn json_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, SAMPLE);
    let output = trigrams(&["--format", "json"], &input);
    assert!(output.status.success());

    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["words"], 9);
    assert_eq!(body["triplets"], 7);
    assert_eq!(body["distinct"], 6);
    assert_eq!(body["top"][0]["b"], "cat");
    assert_eq!(body["top"][0]["count"], 2);
}

#[test]
fn fewer_distinct_triplets_than_k() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "Cat! cat, CAT.");
    let output = trigrams(&[], &input);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "cat cat cat - 1\n");
}

#[test]
fn too_few_words_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "Hello, world! 42");
    let output = trigrams(&[], &input);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr).to_lowercase();
    assert!(stderr.contains("too few words"), "stderr: {stderr}");
}

#[test]
fn allocation_failure_exits_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, SAMPLE);
    let chunk_size = usize::MAX.to_string();
    let output = trigrams(&["--chunk-size", &chunk_size], &input);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("allocation failed"), "stderr: {stderr}");
}

#[test]
fn unreadable_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let output = trigrams(&[], &missing);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope.txt"), "stderr: {stderr}");
}

#[test]
fn missing_argument_is_a_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_trigrams"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}
