// tests/common/mod.rs
// Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

fn binary_path() -> &'static str {
    env!("CARGO_BIN_EXE_jobtimer")
}

/// Command for the built binary, for tests that need to tweak the environment
pub fn jobtimer_command() -> Command {
    Command::new(binary_path())
}

/// Write `file_content` to a temporary log that lives as long as the handle
pub fn write_temp_log(file_content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file
        .write_all(file_content.as_bytes())
        .expect("Failed to write to temp file");
    temp_file
}

/// Run jobtimer with the given arguments exactly as passed
pub fn run_jobtimer(args: &[&str]) -> (String, String, i32) {
    let output = jobtimer_command()
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute jobtimer");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

/// Write `file_content` to a temporary log and run jobtimer against it
pub fn run_jobtimer_with_file(args: &[&str], file_content: &str) -> (String, String, i32) {
    let temp_file = write_temp_log(file_content);
    let path = temp_file.path().to_str().expect("temp path is valid UTF-8");
    let mut full_args = vec!["--file", path];
    full_args.extend_from_slice(args);

    run_jobtimer(&full_args)
}

/// Pull a counter out of the summary block, e.g. `summary_count(out, "jobs in total")`
pub fn summary_count(stdout: &str, label: &str) -> Option<usize> {
    stdout
        .lines()
        .skip_while(|line| !line.contains("Summary"))
        .find(|line| line.contains(label))
        .and_then(|line| line.split_whitespace().next())
        .and_then(|n| n.parse().ok())
}

/// Parse JSON output into one value per line
pub fn parse_json_lines(stdout: &str) -> Vec<serde_json::Value> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            serde_json::from_str(line)
                .unwrap_or_else(|e| panic!("Invalid JSON output line '{}': {}", line, e))
        })
        .collect()
}
