// Integration tests for util/cores.rs — logical core counting
//
//   - available_parallelism() answers → that value is reported
//   - it is unavailable → the raw CPU listing length is reported
//   - both fail → error, never a zero count

use std::io;
use std::num::NonZeroUsize;

use anyhow::anyhow;
use cpu_cores::util::cores::{count_cores, query_cores, CoreSource, HostCpuInfo, SystemHost};
use cpu_cores::util::parse_cpu_listing;

/// Host with a configurable preferred facility and a cpuinfo-format listing.
struct ScriptedHost {
    preferred: io::Result<NonZeroUsize>,
    cpuinfo: Option<&'static str>,
}

impl HostCpuInfo for ScriptedHost {
    fn available_parallelism(&self) -> io::Result<NonZeroUsize> {
        match &self.preferred {
            Ok(n) => Ok(*n),
            Err(e) => Err(io::Error::new(e.kind(), e.to_string())),
        }
    }

    fn cpu_listing_len(&self) -> anyhow::Result<usize> {
        self.cpuinfo
            .map(parse_cpu_listing)
            .ok_or_else(|| anyhow!("cpuinfo missing"))
    }
}

fn unsupported() -> io::Result<NonZeroUsize> {
    Err(io::Error::new(io::ErrorKind::Unsupported, "available_parallelism"))
}

const FOUR_CPUS: &str = "processor\t: 0\n\nprocessor\t: 1\n\nprocessor\t: 2\n\nprocessor\t: 3\n";

// ─────────────────────────────────────────────────────────────────────────────
// Capability-detection fallback
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn eight_cores_from_preferred_facility() {
    let host = ScriptedHost {
        preferred: Ok(NonZeroUsize::new(8).unwrap()),
        cpuinfo: Some(FOUR_CPUS),
    };
    let cores = query_cores(&host).unwrap();
    assert_eq!(cores.get(), 8);
    assert_eq!(cores.source, CoreSource::AvailableParallelism);
}

#[test]
fn four_cores_from_listing_when_preferred_absent() {
    let host = ScriptedHost {
        preferred: unsupported(),
        cpuinfo: Some(FOUR_CPUS),
    };
    let cores = query_cores(&host).unwrap();
    assert_eq!(cores.get(), 4);
    assert_eq!(cores.source, CoreSource::CpuListing);
}

#[test]
fn any_preferred_error_triggers_fallback() {
    let host = ScriptedHost {
        preferred: Err(io::Error::new(io::ErrorKind::NotFound, "no cgroup fs")),
        cpuinfo: Some("processor : 0\n"),
    };
    assert_eq!(query_cores(&host).unwrap().get(), 1);
}

#[test]
fn both_facilities_failing_is_an_error() {
    let host = ScriptedHost {
        preferred: unsupported(),
        cpuinfo: None,
    };
    assert!(query_cores(&host).is_err());
}

#[test]
fn empty_listing_is_an_error() {
    let host = ScriptedHost {
        preferred: unsupported(),
        cpuinfo: Some("vendor_id : none\n"),
    };
    assert!(query_cores(&host).is_err());
}

#[test]
fn works_through_trait_object() {
    let host: Box<dyn HostCpuInfo> = Box::new(ScriptedHost {
        preferred: Ok(NonZeroUsize::new(3).unwrap()),
        cpuinfo: None,
    });
    assert_eq!(query_cores(host.as_ref()).unwrap().get(), 3);
}

// ─────────────────────────────────────────────────────────────────────────────
// Real host
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn system_host_matches_available_parallelism() {
    if let Ok(expected) = std::thread::available_parallelism() {
        let cores = query_cores(&SystemHost).unwrap();
        assert_eq!(cores.count, expected);
        assert_eq!(cores.source, CoreSource::AvailableParallelism);
    }
}

#[test]
fn count_cores_agrees_with_query() {
    let cores = query_cores(&SystemHost).expect("host core query failed");
    assert_eq!(count_cores(), cores.get());
}
