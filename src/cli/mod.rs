//! Command-line interface for the `cpu-cores` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings, the shared `DISPLAY_LEVEL` atomic and the `displaylevel!` macro. |
//! | [`init`]      | `CliInit` — initial state read from the environment (`GITHUB_OUTPUT`, `CPU_CORES_DISPLAY_LEVEL`). |
//! | [`sink_mode`] | `SinkMode` / `SinkTarget` — choosing and opening the output sink. |
//! | [`args`]      | `ParsedArgs` — flag parsing on top of `CliInit`. |
//!
//! Typical call sequence: `detect_env` → `parse_args` → `open_sink` → report.

pub mod constants;
pub mod init;
pub mod sink_mode;
pub mod args;
