// Integration tests for cli/args.rs — flag parsing over the environment defaults

use std::path::PathBuf;

use clap::error::ErrorKind;
use cpu_cores::cli::args::parse_args_from;
use cpu_cores::cli::init::CliInit;
use cpu_cores::cli::sink_mode::{SinkMode, SinkTarget};

fn runner_init() -> CliInit {
    CliInit {
        github_output: Some(PathBuf::from("/home/runner/work/_temp/_runner_file_commands/set_output_1")),
        display_level: 2,
    }
}

#[test]
fn bare_invocation_on_runner_writes_output_file() {
    let p = parse_args_from(runner_init(), "cpu-cores", &[] as &[&str]).unwrap();
    assert_eq!(p.key, "count");
    assert_eq!(
        p.sink_target(),
        SinkTarget::File(PathBuf::from(
            "/home/runner/work/_temp/_runner_file_commands/set_output_1"
        ))
    );
}

#[test]
fn bare_invocation_off_runner_prints_command() {
    let p = parse_args_from(CliInit::default(), "cpu-cores", &[] as &[&str]).unwrap();
    assert_eq!(p.sink_target(), SinkTarget::Command);
}

#[test]
fn format_command_overrides_runner_file() {
    let p = parse_args_from(runner_init(), "cpu-cores", &["--format", "command"]).unwrap();
    assert_eq!(p.format, SinkMode::Command);
    assert_eq!(p.sink_target(), SinkTarget::Command);
}

#[test]
fn explicit_output_overrides_runner_file() {
    let p = parse_args_from(runner_init(), "cpu-cores", &["-o", "cores.env"]).unwrap();
    assert_eq!(p.sink_target(), SinkTarget::File(PathBuf::from("cores.env")));
}

#[test]
fn combined_flags() {
    let p = parse_args_from(
        CliInit::default(),
        "/usr/local/bin/cpu-cores",
        &["-vq", "--key=jobs", "--format=plain"],
    )
    .unwrap();
    assert_eq!(p.key, "jobs");
    assert_eq!(p.format, SinkMode::Plain);
    assert_eq!(p.display_level, 2);
}

#[test]
fn missing_option_value_is_error() {
    let e = parse_args_from(CliInit::default(), "cpu-cores", &["--output"]).unwrap_err();
    assert!(e.use_stderr());
    assert_ne!(e.kind(), ErrorKind::DisplayHelp);
}

#[test]
fn usage_errors_go_to_stderr() {
    let e = parse_args_from(CliInit::default(), "cpu-cores", &["--nope"]).unwrap_err();
    assert!(e.use_stderr());
    let e = parse_args_from(CliInit::default(), "cpu-cores", &["--version"]).unwrap_err();
    assert!(!e.use_stderr());
}
