use std::process::{Command, Output};
use std::{env, path::PathBuf};

use serde_json::Value;

fn cli_bin_path() -> PathBuf {
    if let Ok(path) = env::var("CARGO_BIN_EXE_reducekit-cli") {
        return PathBuf::from(path);
    }
    if let Ok(path) = env::var("CARGO_BIN_EXE_reducekit_cli") {
        return PathBuf::from(path);
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .map(PathBuf::from)
        .expect("workspace root");
    let bin_name = if cfg!(windows) {
        "reducekit-cli.exe"
    } else {
        "reducekit-cli"
    };
    let fallback = workspace_root.join("target").join("debug").join(bin_name);
    assert!(
        fallback.exists(),
        "reducekit-cli binary not found at {}",
        fallback.display()
    );
    fallback
}

fn run_cli(args: &[&str]) -> Output {
    run_cli_with_env(args, &[])
}

fn run_cli_with_env(args: &[&str], vars: &[(&str, &str)]) -> Output {
    let mut command = Command::new(cli_bin_path());
    command
        .args(args)
        .env_remove("REDUCEKIT_DEFAULT_PREFIX")
        .env_remove("REDUCEKIT_OVERFLOW");
    for (key, value) in vars {
        command.env(key, value);
    }
    command.output().expect("run reducekit-cli")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn max_prints_largest_value_and_exits_zero() {
    let output = run_cli(&["max", "3,1,4,1,5,9,2,6"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output).trim(), "9");
}

#[test]
fn max_accepts_negative_values() {
    let output = run_cli(&["max", "-5,-1,-10"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output).trim(), "-1");
}

#[test]
fn max_rejects_non_integer_token_with_non_zero_exit() {
    let output = run_cli(&["max", "1,x,3"]);
    assert!(!output.status.success(), "stdout: {}", stdout_of(&output));
    assert!(stderr_of(&output).contains("invalid integer 'x'"));
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn max_of_nothing_fails_with_empty_input() {
    let output = run_cli(&["max"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("empty input"));
}

#[test]
fn sum_filters_by_default_prefix() {
    let output = run_cli(&["sum", "data1=3,data2=7,other=100"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output).trim(), "10");
}

#[test]
fn sum_returns_zero_when_nothing_matches() {
    let output = run_cli(&["sum", "x=1,y=2"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output).trim(), "0");
}

#[test]
fn sum_prefix_flag_and_env_default() {
    let flagged = run_cli(&["sum", "data1=3,other=100", "--prefix", "oth"]);
    assert!(flagged.status.success(), "stderr: {}", stderr_of(&flagged));
    assert_eq!(stdout_of(&flagged).trim(), "100");

    let from_env = run_cli_with_env(
        &["sum", "data1=3,other=100"],
        &[("REDUCEKIT_DEFAULT_PREFIX", "other")],
    );
    assert!(from_env.status.success(), "stderr: {}", stderr_of(&from_env));
    assert_eq!(stdout_of(&from_env).trim(), "100");
}

#[test]
fn sum_rejects_malformed_pair() {
    let output = run_cli(&["sum", "data1=3,broken"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("expected key=value"));
}

#[test]
fn json_format_emits_reduction_record() {
    let output = run_cli(&["--format", "json", "sum", "data1=3,data2=7,other=100"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let value: Value = serde_json::from_str(&stdout_of(&output)).expect("json stdout");
    assert_eq!(value["operation"], "sum");
    assert_eq!(value["result"], 10);
    assert_eq!(value["inputs"], 3);
    assert_eq!(value["prefix"], "data");
    assert_eq!(value["matched"], 2);
}

#[test]
fn json_format_reports_error_payload_on_stderr() {
    let output = run_cli(&["--format", "json", "max"]);
    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("\"code\": \"EMPTY_INPUT\""), "stderr: {stderr}");
    assert!(stderr.contains("\"operation\": \"max\""), "stderr: {stderr}");
}

#[test]
fn overflow_policy_controls_add() {
    let max = i64::MAX.to_string();

    let checked = run_cli(&["add", max.as_str(), "1"]);
    assert!(!checked.status.success());
    assert!(stderr_of(&checked).contains("integer overflow"));

    let saturating = run_cli(&["--overflow", "saturating", "add", max.as_str(), "1"]);
    assert!(saturating.status.success(), "stderr: {}", stderr_of(&saturating));
    assert_eq!(stdout_of(&saturating).trim(), max);

    let wrapping = run_cli_with_env(
        &["add", max.as_str(), "1"],
        &[("REDUCEKIT_OVERFLOW", "wrapping")],
    );
    assert!(wrapping.status.success(), "stderr: {}", stderr_of(&wrapping));
    assert_eq!(stdout_of(&wrapping).trim(), i64::MIN.to_string());
}

#[test]
fn invalid_overflow_env_fails_fast() {
    let output = run_cli_with_env(&["add", "1", "2"], &[("REDUCEKIT_OVERFLOW", "explode")]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("REDUCEKIT_OVERFLOW"));
}

#[test]
fn parity_and_range_print_one_line_per_value() {
    let parity = run_cli(&["parity", "-3"]);
    assert!(parity.status.success(), "stderr: {}", stderr_of(&parity));
    assert_eq!(stdout_of(&parity).trim(), "odd");

    let range = run_cli(&["range", "4"]);
    assert!(range.status.success(), "stderr: {}", stderr_of(&range));
    assert_eq!(stdout_of(&range), "1\n2\n3\n4\n");

    let empty = run_cli(&["range", "0"]);
    assert!(empty.status.success());
    assert!(stdout_of(&empty).is_empty());
}

#[test]
fn trailing_format_flag_applies_to_max() {
    let output = run_cli(&["max", "-5,-1", "3", "--format", "json"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let value: Value = serde_json::from_str(&stdout_of(&output)).expect("json stdout");
    assert_eq!(value["operation"], "max");
    assert_eq!(value["result"], 3);
    assert_eq!(value["inputs"], 3);
}

#[test]
fn sum_accepts_key_with_leading_hyphen() {
    let output = run_cli(&["sum", "-x=1,data=2", "--prefix", "-"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output).trim(), "1");
}

#[test]
fn json_range_emits_array() {
    let output = run_cli(&["--format", "json", "range", "3"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let value: Value = serde_json::from_str(&stdout_of(&output)).expect("json stdout");
    assert_eq!(value, serde_json::json!([1, 2, 3]));
}
