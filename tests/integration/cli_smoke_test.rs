//! Runs the compiled binary against small capture files

use crate::common::fixtures::uart_trace;
use anyhow::Result;
use logic_capture_analyser::capture::TransitionCsvExporter;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(args: &[&str], cwd: &Path) -> Result<Output> {
    run_cli_with_env(args, cwd, &[])
}

fn run_cli_with_env(args: &[&str], cwd: &Path, vars: &[(&str, &str)]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_logic-capture-analyser"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .envs(vars.iter().copied())
        .output()?;
    Ok(output)
}

/// Directory holding a small valid capture named `uart.csv`
fn capture_dir() -> Result<TempDir> {
    let dir = TempDir::new()?;
    TransitionCsvExporter::export(&uart_trace(b"Hi", 115_200), &dir.path().join("uart.csv"))?;
    Ok(dir)
}

fn assert_config_failure(output: &Output) -> Result<()> {
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr.clone())?;
    assert!(stderr.contains("Error: Configuration error"), "{}", stderr);
    Ok(())
}

#[test]
fn test_analyse_uart_capture() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("uart.csv");
    TransitionCsvExporter::export(&uart_trace(b"Hello", 115_200), &path)?;

    let output = run_cli(
        &["analyse", "uart.csv", "--clusters", "--histogram", "--raw", "-n", "5"],
        dir.path(),
    )?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("File: uart.csv"));
    assert!(stdout.contains("Timing Summary"));
    assert!(stdout.contains("UART (115200 baud)"));
    assert!(stdout.contains("[  0] LOW:"));
    Ok(())
}

#[test]
fn test_analyse_json_and_export() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("uart.csv");
    TransitionCsvExporter::export(&uart_trace(b"A", 9_600), &path)?;

    let output = run_cli(
        &["analyse", "uart.csv", "--format", "json", "--export", "out/copy.csv"],
        dir.path(),
    )?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("\"guesses\""));
    assert!(stdout.contains("Exported"));
    let original = fs::read_to_string(&path)?;
    let copy = fs::read_to_string(dir.path().join("out").join("copy.csv"))?;
    assert_eq!(copy.lines().count(), original.lines().count());
    Ok(())
}

#[test]
fn test_single_transition_fails() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("short.csv"), "time_s,state\n0.0,1\n")?;

    let output = run_cli(&["analyse", "short.csv"], dir.path())?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Error:"), "{}", stderr);
    assert!(stderr.contains("Not enough transitions"), "{}", stderr);
    Ok(())
}

#[test]
fn test_missing_file_fails() -> Result<()> {
    let dir = TempDir::new()?;
    let output = run_cli(&["analyse", "absent.csv"], dir.path())?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("File not found"));
    Ok(())
}

#[test]
fn test_export_subcommand() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("times.csv"), "time_s\n0.0\n0.000010\n")?;

    let output = run_cli(
        &["export", "times.csv", "-o", "table.csv", "--initial-level", "high"],
        dir.path(),
    )?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let table = fs::read_to_string(dir.path().join("table.csv"))?;
    assert_eq!(
        table,
        "index,time_s,state,duration_us\n0,0.000000000,1,10.000\n1,0.000010000,0,0.000\n"
    );
    Ok(())
}

#[test]
fn test_invalid_env_tolerance_fails() -> Result<()> {
    let dir = capture_dir()?;
    let output = run_cli_with_env(
        &["analyse", "uart.csv"],
        dir.path(),
        &[("LOGIC_ANALYSER__ANALYSIS__CLUSTER_TOLERANCE", "-0.5")],
    )?;
    assert_config_failure(&output)?;
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_invalid_config_file_fails() -> Result<()> {
    let dir = capture_dir()?;
    fs::write(
        dir.path().join("logic_analyser.toml"),
        "[display]\nhistogram_bins = 0\n",
    )?;

    let output = run_cli(&["analyse", "uart.csv"], dir.path())?;
    assert_config_failure(&output)
}

#[test]
fn test_config_file_settings_apply() -> Result<()> {
    let dir = capture_dir()?;
    fs::write(
        dir.path().join("logic_analyser.toml"),
        "[capture]\nsample_rate_hz = 24000000.0\n",
    )?;

    let output = run_cli(&["analyse", "uart.csv"], dir.path())?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8(output.stdout)?.contains("Sample rate: 24.0 MHz"));
    Ok(())
}

#[test]
fn test_invalid_sample_rate_flag_fails() -> Result<()> {
    let dir = capture_dir()?;
    for rate in ["--sample-rate=-5", "--sample-rate=NaN"] {
        let output = run_cli(&["analyse", "uart.csv", rate], dir.path())?;
        assert_config_failure(&output)?;
    }
    Ok(())
}
