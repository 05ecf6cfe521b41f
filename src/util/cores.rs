//! CPU core counting.
//!
//! Two host facilities answer "how many logical CPUs can this process use":
//!
//! - `std::thread::available_parallelism` — preferred; honours sched affinity
//!   and cgroup CPU quotas where the OS supports them.
//! - the raw CPU listing ([`crate::util::cpu_list`]) — every logical CPU the
//!   machine exposes, regardless of quota.
//!
//! [`query_cores`] asks the preferred facility first and consults the listing
//! only when the preferred one reports an error.

use std::fmt;
use std::io;
use std::num::NonZeroUsize;

use anyhow::{anyhow, Context};

use crate::displaylevel;
use crate::util::cpu_list::raw_cpu_count;

/// Which host facility produced a [`CoreCount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreSource {
    /// `available_parallelism()` answered.
    AvailableParallelism,
    /// The preferred facility was unavailable; the raw CPU listing answered.
    CpuListing,
}

impl fmt::Display for CoreSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreSource::AvailableParallelism => f.write_str("available parallelism"),
            CoreSource::CpuListing => f.write_str("CPU listing"),
        }
    }
}

/// A positive logical core count and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreCount {
    pub count: NonZeroUsize,
    pub source: CoreSource,
}

impl CoreCount {
    pub fn get(&self) -> usize {
        self.count.get()
    }
}

impl fmt::Display for CoreCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count)
    }
}

/// Host capability queries used by [`query_cores`].
pub trait HostCpuInfo {
    /// Logical CPUs available to the current process.
    ///
    /// An error means the facility is unavailable in this runtime.
    fn available_parallelism(&self) -> io::Result<NonZeroUsize>;

    /// Number of entries in the raw CPU listing.
    fn cpu_listing_len(&self) -> anyhow::Result<usize>;
}

/// The real host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl HostCpuInfo for SystemHost {
    fn available_parallelism(&self) -> io::Result<NonZeroUsize> {
        std::thread::available_parallelism()
    }

    fn cpu_listing_len(&self) -> anyhow::Result<usize> {
        raw_cpu_count()
    }
}

/// Count the logical CPUs available to this process on `host`.
///
/// Returns the preferred facility's answer when it has one. Otherwise returns
/// the number of entries in the raw CPU listing. Fails only when the listing
/// itself cannot be read or is empty.
pub fn query_cores<H: HostCpuInfo + ?Sized>(host: &H) -> anyhow::Result<CoreCount> {
    match host.available_parallelism() {
        Ok(count) => {
            displaylevel!(4, "available_parallelism() reports {} logical cores \n", count);
            Ok(CoreCount {
                count,
                source: CoreSource::AvailableParallelism,
            })
        }
        Err(e) => {
            displaylevel!(
                3,
                "available_parallelism() unavailable ({}), falling back to the CPU listing \n",
                e
            );
            let listed = host
                .cpu_listing_len()
                .context("cannot count logical CPUs")?;
            let count = NonZeroUsize::new(listed)
                .ok_or_else(|| anyhow!("cannot count logical CPUs: CPU listing is empty"))?;
            displaylevel!(4, "CPU listing has {} entries \n", count);
            Ok(CoreCount {
                count,
                source: CoreSource::CpuListing,
            })
        }
    }
}

/// Returns the number of logical CPU cores available on the system.
///
/// Never fails: falls back to 1 when neither facility answers.
pub fn count_cores() -> usize {
    query_cores(&SystemHost).map(|c| c.get()).unwrap_or(1)
}
