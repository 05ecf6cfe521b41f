//! Output sink selection.
//!
//! This module provides:
//! - [`SinkMode`] — the `--format` choice.
//! - [`SinkTarget`] — the resolved destination.
//! - [`determine_sink`] — resolves a target from the flags and the environment.
//! - [`open_sink`] — builds the boxed [`OutputSink`] for a target.

use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::displaylevel;
use crate::sink::{GithubOutputFile, OutputSink, PlainSink, WorkflowCommand};

/// How the count should be published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SinkMode {
    /// Step output file when one is configured, workflow command otherwise.
    #[default]
    Auto,
    /// Always print the `::set-output` workflow command on stdout.
    Command,
    /// Print `key=value` on stdout.
    Plain,
}

/// Resolved output destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkTarget {
    File(PathBuf),
    Command,
    Plain,
}

/// Pick the destination.
///
/// An explicit `--output` always wins. Otherwise `mode` decides; in
/// [`SinkMode::Auto`] the step output file from `GITHUB_OUTPUT` is used when
/// present.
pub fn determine_sink(
    mode: SinkMode,
    output: Option<&Path>,
    github_output: Option<&Path>,
) -> SinkTarget {
    if let Some(path) = output {
        return SinkTarget::File(path.to_path_buf());
    }
    match mode {
        SinkMode::Command => SinkTarget::Command,
        SinkMode::Plain => SinkTarget::Plain,
        SinkMode::Auto => match github_output {
            Some(path) => SinkTarget::File(path.to_path_buf()),
            None => SinkTarget::Command,
        },
    }
}

/// Build the sink for `target`.
pub fn open_sink(target: &SinkTarget) -> Box<dyn OutputSink> {
    match target {
        SinkTarget::File(path) => {
            displaylevel!(4, "Output file : {} \n", path.display());
            Box::new(GithubOutputFile::new(path))
        }
        SinkTarget::Command => {
            displaylevel!(4, "Output : ::set-output workflow command on stdout \n");
            Box::new(WorkflowCommand::stdout())
        }
        SinkTarget::Plain => {
            displaylevel!(4, "Output : key=value on stdout \n");
            Box::new(PlainSink::stdout())
        }
    }
}
