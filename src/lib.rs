// cpu-cores — report the logical CPU core count to a CI pipeline step

pub mod config;
pub mod cli;
pub mod util;
pub mod sink;
pub mod report;

// ── Version constants ─────────────────────────────────────────────────────────
pub const CPU_CORES_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the runtime version string.
pub fn version_string() -> &'static str {
    CPU_CORES_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use report::CoreCountReporter;
pub use sink::OutputSink;
pub use util::cores::{count_cores, query_cores, CoreCount, CoreSource, HostCpuInfo, SystemHost};
