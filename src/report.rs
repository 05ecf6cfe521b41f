//! The core count reporter.
//!
//! [`CoreCountReporter::report`] is the whole program: query the host once,
//! then publish the count under a fixed key with exactly one sink write. A
//! failed query writes nothing.

use crate::config::OUTPUT_KEY;
use crate::displaylevel;
use crate::sink::OutputSink;
use crate::util::cores::{query_cores, CoreCount, HostCpuInfo, SystemHost};

/// Queries a host and publishes its logical core count.
#[derive(Debug, Clone)]
pub struct CoreCountReporter<H: HostCpuInfo = SystemHost> {
    host: H,
    key: String,
}

impl CoreCountReporter<SystemHost> {
    /// Reporter for the real host, publishing under [`OUTPUT_KEY`].
    pub fn system() -> Self {
        CoreCountReporter::new(SystemHost)
    }
}

impl Default for CoreCountReporter<SystemHost> {
    fn default() -> Self {
        Self::system()
    }
}

impl<H: HostCpuInfo> CoreCountReporter<H> {
    pub fn new(host: H) -> Self {
        CoreCountReporter {
            host,
            key: OUTPUT_KEY.to_owned(),
        }
    }

    /// Publish under `key` instead of [`OUTPUT_KEY`].
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Query the host and write `key=<count>` to `sink`.
    pub fn report<S: OutputSink + ?Sized>(&self, sink: &mut S) -> anyhow::Result<CoreCount> {
        let cores = query_cores(&self.host)?;
        displaylevel!(3, "{} logical cores (from {}) \n", cores, cores.source);
        sink.set_output(&self.key, &cores.to_string())?;
        Ok(cores)
    }
}
