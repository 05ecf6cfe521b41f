//! Raw CPU listing — the fallback core count.
//!
//! The listing reports every logical CPU the machine exposes, ignoring sched
//! affinity and cgroup CPU quotas. On Linux it is the number of `processor`
//! records in `/proc/cpuinfo`; other targets ask the OS through `num_cpus`.

use std::fs;
use std::path::Path;

use anyhow::Context;

#[cfg(target_os = "linux")]
use crate::config::CPUINFO_PATH;

/// Count the `processor` records in `/proc/cpuinfo`-formatted text.
///
/// Most architectures start each record with a `processor : N` line; s390x
/// writes `processor N: version = ...` instead. Other keys, blank separator
/// lines, and keys that merely contain the word (such as
/// `model name : ... processor`) are not counted.
pub fn parse_cpu_listing(text: &str) -> usize {
    text.lines()
        .filter(|line| {
            line.split_once(':')
                .is_some_and(|(key, _)| is_processor_key(key.trim()))
        })
        .count()
}

fn is_processor_key(key: &str) -> bool {
    match key.strip_prefix("processor") {
        Some("") => true,
        Some(rest) => {
            let id = rest.trim_start();
            id.len() < rest.len() && !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// Read a cpuinfo-format file and count its `processor` records.
pub fn read_cpu_listing(path: &Path) -> anyhow::Result<usize> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read CPU listing {}", path.display()))?;
    Ok(parse_cpu_listing(&text))
}

/// Number of logical CPUs present on the machine, irrespective of quota.
#[cfg(target_os = "linux")]
pub fn raw_cpu_count() -> anyhow::Result<usize> {
    read_cpu_listing(Path::new(CPUINFO_PATH))
}

/// Number of logical CPUs present on the machine, irrespective of quota.
#[cfg(not(target_os = "linux"))]
pub fn raw_cpu_count() -> anyhow::Result<usize> {
    Ok(num_cpus::get())
}
