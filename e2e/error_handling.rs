// e2e/error_handling.rs — failure exit codes of the `cpu-cores` binary

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_cpu-cores") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("cpu-cores");
    p
}

fn cpu_cores() -> Command {
    let mut cmd = Command::new(bin());
    cmd.env_remove("GITHUB_OUTPUT")
        .env_remove("CPU_CORES_DISPLAY_LEVEL");
    cmd
}

#[test]
fn unwritable_output_file_exits_1() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("missing").join("set_output");

    let output = cpu_cores()
        .env("GITHUB_OUTPUT", &out)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("cpu-cores: "), "stderr: {stderr}");
    assert!(stderr.contains("cannot open output file"), "stderr: {stderr}");
}

#[test]
fn output_path_is_directory_exits_1() {
    let dir = TempDir::new().unwrap();
    let output = cpu_cores()
        .args(["--output", dir.path().to_str().unwrap()])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn quiet_failure_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let output = cpu_cores()
        .env("GITHUB_OUTPUT", dir.path().join("no").join("file"))
        .env("CPU_CORES_DISPLAY_LEVEL", "0")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.is_empty());
}

#[test]
fn unknown_flag_exits_2() {
    let output = cpu_cores().arg("--threads").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn bad_format_exits_2() {
    let output = cpu_cores().args(["--format", "json"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn empty_key_exits_1_without_writing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("set_output");
    fs::write(&out, "").unwrap();

    let output = cpu_cores()
        .env("GITHUB_OUTPUT", &out)
        .args(["--key", ""])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fs::read_to_string(&out).unwrap(), "");
}

#[test]
fn garbage_display_level_is_ignored() {
    let output = cpu_cores()
        .env("CPU_CORES_DISPLAY_LEVEL", "loud")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Ignore environment variable setting"), "stderr: {stderr}");
}

#[test]
fn key_with_separator_exits_1_without_writing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("set_output");
    fs::write(&out, "sha=abc123\n").unwrap();

    for key in ["a=b", "x<<EOF"] {
        let output = cpu_cores()
            .env("GITHUB_OUTPUT", &out)
            .args(["--key", key])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(1), "key {key:?}");
    }
    assert_eq!(fs::read_to_string(&out).unwrap(), "sha=abc123\n");
}
