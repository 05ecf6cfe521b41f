//! Command-line argument parsing for `cpu-cores`.
//!
//! The entry points are [`parse_args`] (reads `std::env::args_os()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit-testing).
//! Both layer the flags over a [`CliInit`] and return a [`ParsedArgs`].
//!
//! With no arguments the binary publishes `count` to the sink the environment
//! selects, which is what a pipeline step normally wants.
//!
//! Errors are `clap::Error`s; `--help` and `--version` also surface as errors
//! of the corresponding kind, and `clap::Error::exit` prints them with the
//! right exit code.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::cli::constants::{AUTHOR, PROGRAM_NAME};
use crate::cli::init::CliInit;
use crate::cli::sink_mode::{determine_sink, SinkMode, SinkTarget};
use crate::config::{DISPLAY_LEVEL_MAX, OUTPUT_KEY};

#[derive(Debug, Parser)]
#[command(
    name = PROGRAM_NAME,
    author = AUTHOR,
    version,
    about = "Publish the number of logical CPU cores as a pipeline step output",
    long_about = None
)]
struct Cli {
    /// Append the output to FILE instead of $GITHUB_OUTPUT
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Where to publish the count
    #[arg(long, value_enum, default_value_t = SinkMode::Auto)]
    format: SinkMode,

    /// Output key
    #[arg(short, long, default_value = OUTPUT_KEY)]
    key: String,

    /// More diagnostics on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Fewer diagnostics on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    quiet: u8,
}

/// Complete set of options produced by argument parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    /// Explicit `-o/--output` file.
    pub output: Option<PathBuf>,
    /// `--format` choice.
    pub format: SinkMode,
    /// Key the count is published under.
    pub key: String,
    /// Display level after applying `-v` / `-q` to the initial level.
    pub display_level: u32,
    /// Step output file inherited from the environment.
    pub github_output: Option<PathBuf>,
}

impl ParsedArgs {
    /// Resolve the output destination.
    pub fn sink_target(&self) -> SinkTarget {
        determine_sink(
            self.format,
            self.output.as_deref(),
            self.github_output.as_deref(),
        )
    }
}

/// Parse `std::env::args_os()` using `init` as the starting state.
pub fn parse_args(init: CliInit) -> Result<ParsedArgs, clap::Error> {
    let mut args = std::env::args_os();
    let exe_name = args.next().unwrap_or_else(|| OsString::from(PROGRAM_NAME));
    let argv: Vec<OsString> = args.collect();
    parse_args_from(init, exe_name, &argv)
}

/// Parse an explicit argument list using `init` as the starting state.
///
/// `exe_name` is argv[0]. `argv` is argv[1..].
/// This variant is callable from tests without touching `std::env`.
pub fn parse_args_from<A>(
    init: CliInit,
    exe_name: impl Into<OsString>,
    argv: &[A],
) -> Result<ParsedArgs, clap::Error>
where
    A: Clone + Into<OsString>,
{
    let cli = Cli::try_parse_from(
        std::iter::once(exe_name.into()).chain(argv.iter().cloned().map(Into::into)),
    )?;

    let display_level = (init.display_level + u32::from(cli.verbose))
        .saturating_sub(u32::from(cli.quiet))
        .min(DISPLAY_LEVEL_MAX);

    Ok(ParsedArgs {
        output: cli.output,
        format: cli.format,
        key: cli.key,
        display_level,
        github_output: init.github_output,
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────────
