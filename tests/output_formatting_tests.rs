mod common;
use common::*;

const MIXED_LOG: &str = "\
09:00:00, BuildA, START, 101
09:04:30, BuildA, END, 101
09:00:00, BuildC, START, 303
09:11:00, BuildC, END, 303
bad,line,here
09:00:00, BuildD, START, 404
";

#[test]
fn test_summary_block_banners() {
    let (stdout, _stderr, _) = run_jobtimer_with_file(&["--no-color"], MIXED_LOG);

    let lines: Vec<&str> = stdout.lines().collect();
    let header = lines
        .iter()
        .position(|l| *l == "==================== Summary ====================")
        .expect("summary header present");
    let footer = lines
        .iter()
        .position(|l| *l == "===================== END =======================")
        .expect("summary footer present");
    assert_eq!(footer - header, 6, "five counter lines between the banners");
    assert_eq!(footer, lines.len() - 1, "summary is the last thing printed");
}

#[test]
fn test_no_color_output_has_no_escape_codes() {
    let (stdout, _stderr, _) = run_jobtimer_with_file(&["--no-color"], MIXED_LOG);
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn test_auto_color_is_off_when_piped() {
    let (stdout, _stderr, _) = run_jobtimer_with_file(&[], MIXED_LOG);
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn test_forced_color() {
    let (stdout, _stderr, _) = run_jobtimer_with_file(&["--color", "always"], MIXED_LOG);
    assert!(stdout.contains("\x1b[31m[ERROR]\x1b[0m PID 303 exceeds 10 minutes"));
    assert!(stdout.contains("\x1b[32m[INFO]\x1b[0m PID 101 took 4m 30s"));
}

#[test]
fn test_no_color_env_is_not_consulted() {
    let log = write_temp_log(MIXED_LOG);
    let path = log.path().to_str().expect("temp path is valid UTF-8");
    let output = jobtimer_command()
        .args(["--file", path, "--color", "always"])
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute jobtimer");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\x1b[31m[ERROR]\x1b[0m PID 303 exceeds 10 minutes"));
}

#[test]
fn test_json_output_records() {
    let (stdout, _stderr, exit_code) = run_jobtimer_with_file(&["-F", "json"], MIXED_LOG);
    assert_eq!(exit_code, 0);

    let records = parse_json_lines(&stdout);
    let events: Vec<&str> = records
        .iter()
        .map(|r| r["event"].as_str().expect("event tag"))
        .collect();
    assert_eq!(
        events,
        vec![
            "skipped_line",
            "invalid_line_count",
            "job_duration",
            "job_duration",
            "exceeds_fail_threshold",
            "missing_end",
            "summary",
        ]
    );

    assert_eq!(records[0]["severity"], "warn");
    assert_eq!(records[0]["line_number"], 5);
    assert_eq!(records[0]["kind"], "malformed_field_count");
    assert_eq!(records[2]["pid"], "101");
    assert_eq!(records[2]["minutes"], 4);
    assert_eq!(records[2]["seconds"], 30);
    assert_eq!(records[4]["severity"], "error");

    let summary = records.last().expect("summary record");
    assert_eq!(summary["total_jobs"], 3);
    assert_eq!(summary["missing_end"], 1);
    assert_eq!(summary["passed"], 1);
    assert_eq!(summary["warned"], 0);
    assert_eq!(summary["failed"], 1);
}

#[test]
fn test_negative_duration_is_shown_signed() {
    let input = "10:00:00, Late, START, 1\n09:58:30, Late, END, 1\n";
    let (stdout, _stderr, _) = run_jobtimer_with_file(&["--no-color"], input);

    assert!(stdout.contains("[INFO] PID 1 took -1m -30s"));
    assert_eq!(summary_count(&stdout, "passed within"), Some(1));
}
