//! `key=value` on stdout, for shells and humans.

use std::io::{self, Write};

use anyhow::Context;

use crate::sink::{validate_key, OutputSink};

#[derive(Debug)]
pub struct PlainSink<W: Write> {
    out: W,
}

impl PlainSink<io::Stdout> {
    pub fn stdout() -> Self {
        PlainSink { out: io::stdout() }
    }
}

impl<W: Write> PlainSink<W> {
    pub fn new(out: W) -> Self {
        PlainSink { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSink for PlainSink<W> {
    fn set_output(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        validate_key(key)?;
        writeln!(self.out, "{}={}", key, value)
            .and_then(|()| self.out.flush())
            .context("cannot write to stdout")
    }
}
