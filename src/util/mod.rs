//! Host queries.
//!
//! Submodules:
//! - [`cores`]    — core counting with the capability-detection fallback
//! - [`cpu_list`] — the raw CPU listing used as the fallback

pub mod cores;
pub mod cpu_list;

// ── Re-exports at `util::` level ─────────────────────────────────────────────

pub use cores::{count_cores, query_cores};

pub use cpu_list::{parse_cpu_listing, raw_cpu_count, read_cpu_listing};
