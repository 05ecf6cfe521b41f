// config.rs — Compile-time configuration constants.
//
// Environment variable names, the fixed output key, and process exit codes.
// Runtime values derived from the environment are read in `cli::init`.

// Key under which the core count is published to the pipeline.
// Can be overridden with the -k/--key command-line flag.
pub const OUTPUT_KEY: &str = "count";

// Path of the step output file, set by the pipeline runner for every step.
// When unset or empty the reporter falls back to the stdout workflow command.
pub const ENV_GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";

// Initial display level. Adjusted afterwards by -v / -q.
pub const ENV_DISPLAY_LEVEL: &str = "CPU_CORES_DISPLAY_LEVEL";

// 0 = silent; 1 = errors only; 2 = normal; 3 = informational; 4 = verbose
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;
pub const DISPLAY_LEVEL_MAX: u32 = 4;

// Raw CPU listing consulted when available_parallelism() is unsupported.
// Only read on Linux; other targets ask the OS through num_cpus.
pub const CPUINFO_PATH: &str = "/proc/cpuinfo";

// Exit codes. Bad usage is reported by clap with its own code (2).
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_BAD_USAGE: i32 = 2;
