//! Step output file sink.
//!
//! The runner hands every step a fresh file through `GITHUB_OUTPUT` and reads
//! it back when the step ends. Each output is one record:
//!
//! ```text
//! count=8
//! ```
//!
//! Values spanning several lines use the heredoc form, with a delimiter that
//! appears in neither the key nor the value:
//!
//! ```text
//! notes<<ghadelimiter_4242_0
//! first line
//! second line
//! ghadelimiter_4242_0
//! ```

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::displaylevel;
use crate::sink::{validate_key, OutputSink};

/// Appends records to a step output file.
#[derive(Debug, Clone)]
pub struct GithubOutputFile {
    path: PathBuf,
}

impl GithubOutputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        GithubOutputFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Format one record in the step output file syntax.
pub fn format_record(key: &str, value: &str) -> String {
    if !value.contains('\n') && !value.contains('\r') {
        return format!("{}={}\n", key, value);
    }
    let delimiter = pick_delimiter(key, value);
    format!("{}<<{}\n{}\n{}\n", key, delimiter, value, delimiter)
}

fn pick_delimiter(key: &str, value: &str) -> String {
    let pid = std::process::id();
    let mut n = 0u32;
    loop {
        let candidate = format!("ghadelimiter_{}_{}", pid, n);
        if !key.contains(&candidate) && !value.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

impl OutputSink for GithubOutputFile {
    fn set_output(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        validate_key(key)?;
        let record = format_record(key, value);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("cannot open output file {}", self.path.display()))?;
        file.write_all(record.as_bytes())
            .with_context(|| format!("cannot write to output file {}", self.path.display()))?;
        displaylevel!(4, "Wrote {}={} to {} \n", key, value, self.path.display());
        Ok(())
    }
}
