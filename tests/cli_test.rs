#![cfg(feature = "cli")]

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_with_roster(dir: &Path, roster: &str) -> Output {
    let roster_path = dir.join("roster.toml");
    std::fs::write(&roster_path, roster).unwrap();

    Command::new(env!("CARGO_BIN_EXE_gift-exchange"))
        .arg("--roster")
        .arg(&roster_path)
        .arg("--settings-dir")
        .arg(dir.join("settings"))
        .output()
        .unwrap()
}

#[test]
fn test_duplicate_roster_entry_exits_with_failure() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_with_roster(
        temp_dir.path(),
        r#"
[[participants]]
first_name = "John"
last_name = "Doe"

[[participants]]
first_name = "john"
last_name = "doe"
"#,
    );

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is already on the list"));
}

#[test]
fn test_unmatchable_roster_exits_with_failure() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_with_roster(
        temp_dir.path(),
        r#"
[[participants]]
first_name = "John"
last_name = "Doe"

[[participants]]
first_name = "Jane"
last_name = "Doe"
"#,
    );

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_valid_roster_prints_pairs() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_with_roster(
        temp_dir.path(),
        r#"
[[participants]]
first_name = "Alice"
last_name = "A"

[[participants]]
first_name = "Bob"
last_name = "B"
"#,
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Alice A -> Bob B"));
    assert!(stdout.contains("Bob B -> Alice A"));
}
