//! Output sinks — how a pipeline step publishes a named result.
//!
//! | Submodule   | Sink |
//! |-------------|------|
//! | [`file`]    | [`GithubOutputFile`] — appends to the step output file named by `GITHUB_OUTPUT`. |
//! | [`command`] | [`WorkflowCommand`] — prints the `::set-output` workflow command on stdout. |
//! | [`plain`]   | [`PlainSink`] — prints `key=value` on stdout. |
//!
//! [`MemorySink`] keeps the pairs in memory for library callers.

pub mod command;
pub mod file;
pub mod plain;

use anyhow::bail;

pub use command::WorkflowCommand;
pub use file::GithubOutputFile;
pub use plain::PlainSink;

/// A destination for named step outputs.
pub trait OutputSink {
    /// Publish `value` under `key`.
    fn set_output(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

impl<S: OutputSink + ?Sized> OutputSink for Box<S> {
    fn set_output(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set_output(key, value)
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn set_output(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set_output(key, value)
    }
}

/// Reject keys the runner cannot parse back.
///
/// The runner splits a record at the first `=` and reads `<<` as the start
/// of a multi-line record, so neither may appear in a key.
pub fn validate_key(key: &str) -> anyhow::Result<()> {
    if key.is_empty() {
        bail!("output key must not be empty");
    }
    if key.contains(['\n', '\r']) {
        bail!("output key {:?} must not contain a line break", key);
    }
    if key.contains('=') {
        bail!("output key {:?} must not contain '='", key);
    }
    if key.contains("<<") {
        bail!("output key {:?} must not contain '<<'", key);
    }
    Ok(())
}

/// Records every write, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    pub outputs: Vec<(String, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last value written under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.outputs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl OutputSink for MemorySink {
    fn set_output(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        validate_key(key)?;
        self.outputs.push((key.to_owned(), value.to_owned()));
        Ok(())
    }
}
