// cli/constants.rs — Program identity and display infrastructure.
//
// The display level is a process-wide atomic read by the `displaylevel!`
// macro. All diagnostics go to stderr; stdout belongs to the
// output sink when no output file is configured.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::{DISPLAY_LEVEL_DEFAULT, DISPLAY_LEVEL_MAX};

// ── String / identity constants ───────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "cpu-cores";
pub const AUTHOR: &str = "cpu-cores contributors";

// ── Display level global ──────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal; 3 = informational; 4 = verbose
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level, clamped to [`DISPLAY_LEVEL_MAX`].
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level.min(DISPLAY_LEVEL_MAX), Ordering::Relaxed);
}

// ── Display helpers ───────────────────────────────────────────────────────────

/// Print to stderr when the display level is at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
