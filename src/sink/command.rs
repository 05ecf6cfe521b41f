//! `::set-output` workflow command sink.
//!
//! Runners without output-file support scan the step's stdout for lines of the
//! form `::set-output name=<key>::<value>`. Property and data fields are
//! percent-escaped so a value can never terminate the command early.

use std::io::{self, Write};

use anyhow::Context;

use crate::sink::{validate_key, OutputSink};

/// Writes workflow commands to `W` (stdout in the binary).
#[derive(Debug)]
pub struct WorkflowCommand<W: Write> {
    out: W,
}

impl WorkflowCommand<io::Stdout> {
    pub fn stdout() -> Self {
        WorkflowCommand { out: io::stdout() }
    }
}

impl<W: Write> WorkflowCommand<W> {
    pub fn new(out: W) -> Self {
        WorkflowCommand { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Escape the data part of a workflow command.
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Escape a property value of a workflow command.
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

/// Format the full command line, including the trailing newline.
pub fn format_command(key: &str, value: &str) -> String {
    format!(
        "::set-output name={}::{}\n",
        escape_property(key),
        escape_data(value)
    )
}

impl<W: Write> OutputSink for WorkflowCommand<W> {
    fn set_output(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        validate_key(key)?;
        self.out
            .write_all(format_command(key, value).as_bytes())
            .and_then(|()| self.out.flush())
            .context("cannot write workflow command to stdout")
    }
}
