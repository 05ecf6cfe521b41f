//! Binary entry point for the `cpu-cores` command-line tool.
//!
//! # Control flow
//!
//! 1. [`detect_env`] reads `GITHUB_OUTPUT` and `CPU_CORES_DISPLAY_LEVEL`.
//! 2. [`parse_args`] layers the command-line flags on top.
//! 3. [`run`] opens the selected sink, queries the host once and writes
//!    `count=<n>`.
//!
//! A failed query or sink write prints the error chain and exits 1.

use cpu_cores::cli::args::{parse_args, ParsedArgs};
use cpu_cores::cli::constants::{set_display_level, PROGRAM_NAME};
use cpu_cores::cli::init::detect_env;
use cpu_cores::cli::sink_mode::open_sink;
use cpu_cores::config::{EXIT_BAD_USAGE, EXIT_FAILURE, EXIT_SUCCESS};
use cpu_cores::{displaylevel, CoreCount, CoreCountReporter};

/// Execute the report selected by argument parsing.
fn run(args: ParsedArgs) -> anyhow::Result<CoreCount> {
    let mut sink = open_sink(&args.sink_target());
    let reporter = CoreCountReporter::system().with_key(args.key);
    reporter.report(&mut sink)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let init = detect_env();

    let args = match parse_args(init) {
        Ok(a) => a,
        Err(e) => {
            // Help and version go to stdout and succeed; usage errors do not.
            let code = if e.use_stderr() { EXIT_BAD_USAGE } else { EXIT_SUCCESS };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    set_display_level(args.display_level);

    let exit_code = match run(args) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            displaylevel!(1, "{}: {:#}\n", PROGRAM_NAME, e);
            EXIT_FAILURE
        }
    };
    std::process::exit(exit_code);
}
