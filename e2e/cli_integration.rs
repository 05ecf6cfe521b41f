// e2e/cli_integration.rs — CLI integration tests
//
// Runs the `cpu-cores` binary as a black box with std::process::Command.
// The pipeline environment is scrubbed first so results do not depend on
// whether the tests themselves run inside a CI step.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Locate the `cpu-cores` binary produced by Cargo.
fn bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_cpu-cores") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // remove test binary filename
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("cpu-cores");
    p
}

/// A command with no pipeline variables inherited.
fn cpu_cores() -> Command {
    let mut cmd = Command::new(bin());
    cmd.env_remove("GITHUB_OUTPUT")
        .env_remove("CPU_CORES_DISPLAY_LEVEL");
    cmd
}

/// The count the binary should publish; a failed host query fails the test.
fn expected_count() -> usize {
    cpu_cores::query_cores(&cpu_cores::SystemHost)
        .expect("host core query failed")
        .get()
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("failed to run cpu-cores")
}

// ── 1. Output file from GITHUB_OUTPUT ────────────────────────────────────────

#[test]
fn test_cli_writes_github_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("set_output");
    fs::write(&out, "").unwrap();

    let output = run(cpu_cores().env("GITHUB_OUTPUT", &out));
    assert!(output.status.success(), "should exit 0");
    assert!(output.stdout.is_empty(), "stdout must stay empty");

    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(text, format!("count={}\n", expected_count()));
}

#[test]
fn test_cli_appends_after_previous_outputs() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("set_output");
    fs::write(&out, "sha=abc123\n").unwrap();

    let output = run(cpu_cores().env("GITHUB_OUTPUT", &out));
    assert!(output.status.success());

    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "sha=abc123");
    assert!(lines[1].starts_with("count="));
}

// ── 2. Workflow command fallback ─────────────────────────────────────────────

#[test]
fn test_cli_prints_workflow_command_without_output_file() {
    let output = run(&mut cpu_cores());
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        format!("::set-output name=count::{}\n", expected_count())
    );
}

#[test]
fn test_cli_empty_github_output_uses_command() {
    let output = run(cpu_cores().env("GITHUB_OUTPUT", ""));
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("::set-output name=count::"));
}

// ── 3. Flags ─────────────────────────────────────────────────────────────────

#[test]
fn test_cli_plain_format() {
    let output = run(cpu_cores().args(["--format", "plain"]));
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let value: usize = stdout
        .trim_end()
        .strip_prefix("count=")
        .expect("count= prefix")
        .parse()
        .expect("integer count");
    assert!(value > 0);
}

#[test]
fn test_cli_explicit_output_and_key() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("cores.env");

    let output = run(cpu_cores().args([
        "-o",
        out.to_str().unwrap(),
        "--key",
        "jobs",
    ]));
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        format!("jobs={}\n", expected_count())
    );
}

#[test]
fn test_cli_verbose_logs_to_stderr_only() {
    let output = run(cpu_cores().args(["-vv", "--format", "plain"]));
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("logical cores"), "stderr: {stderr}");
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn test_cli_quiet_by_default() {
    let output = run(&mut cpu_cores());
    assert!(output.stderr.is_empty());
}

// ── 4. --version / --help ────────────────────────────────────────────────────

#[test]
fn test_cli_version() {
    let output = run(cpu_cores().arg("--version"));
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "stdout: {stdout}");
}

#[test]
fn test_cli_help() {
    let output = run(cpu_cores().arg("--help"));
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--format"));
}
