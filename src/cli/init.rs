//! CLI initialization from the process environment.
//!
//! The pipeline runner communicates with a step through environment
//! variables: `GITHUB_OUTPUT` names the file that collects step outputs.
//! [`detect_env`] reads those variables once and returns a [`CliInit`]
//! carrying the pre-parsed defaults; the argument parser in
//! [`crate::cli::args`] then layers explicit flags on top of these values.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::cli::constants::display_level;
use crate::config::{DISPLAY_LEVEL_DEFAULT, DISPLAY_LEVEL_MAX, ENV_DISPLAY_LEVEL, ENV_GITHUB_OUTPUT};

/// Initial CLI state derived from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliInit {
    /// Step output file from `GITHUB_OUTPUT`, if set and non-empty.
    pub github_output: Option<PathBuf>,
    /// Display level from `CPU_CORES_DISPLAY_LEVEL` (or the default).
    pub display_level: u32,
}

impl Default for CliInit {
    fn default() -> Self {
        CliInit {
            github_output: None,
            display_level: DISPLAY_LEVEL_DEFAULT,
        }
    }
}

/// Read the pipeline environment into a [`CliInit`].
pub fn detect_env() -> CliInit {
    CliInit {
        github_output: init_github_output_from(std::env::var_os(ENV_GITHUB_OUTPUT)),
        display_level: init_display_level_from(std::env::var(ENV_DISPLAY_LEVEL).ok().as_deref()),
    }
}

/// Testable core of the `GITHUB_OUTPUT` lookup.
///
/// An empty value is treated the same as an unset one: runners that do not
/// support output files export the variable as the empty string.
pub fn init_github_output_from(env_val: Option<OsString>) -> Option<PathBuf> {
    env_val.filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Testable core of the `CPU_CORES_DISPLAY_LEVEL` lookup.
///
/// Values above [`DISPLAY_LEVEL_MAX`] are clamped. Non-numeric values are
/// ignored with a warning and [`DISPLAY_LEVEL_DEFAULT`] is returned.
pub fn init_display_level_from(env_val: Option<&str>) -> u32 {
    let Some(env) = env_val else {
        return DISPLAY_LEVEL_DEFAULT;
    };
    match env.trim().parse::<u32>() {
        Ok(level) => level.min(DISPLAY_LEVEL_MAX),
        Err(_) => {
            if display_level() >= 2 {
                eprintln!(
                    "Ignore environment variable setting {}={}: not a valid unsigned value ",
                    ENV_DISPLAY_LEVEL, env
                );
            }
            DISPLAY_LEVEL_DEFAULT
        }
    }
}
