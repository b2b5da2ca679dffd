//! Bridges from the `Sink` port to the std writer traits.
//!
//! `IoSink` adapts any `io::Write` (files, pipes, `Vec<u8>`); `FmtSink`
//! adapts any `fmt::Write` (`String`). A `FmtSink` has no flush semantics,
//! so it inherits the port's no-op default — a `flush = true` request on it
//! succeeds without effect.

use std::fmt;
use std::io;

use printkit_core::{PrintResult, Sink};

/// Sink over any [`io::Write`].
#[derive(Debug)]
pub struct IoSink<W: io::Write> {
    writer: W,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// The wrapped writer, consuming the sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn write_value(&mut self, value: &dyn fmt::Display) -> PrintResult<()> {
        write!(self.writer, "{value}")?;
        Ok(())
    }

    fn flush(&mut self) -> PrintResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Sink over any [`fmt::Write`].
#[derive(Debug)]
pub struct FmtSink<W: fmt::Write> {
    writer: W,
}

impl<W: fmt::Write> FmtSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }
}

impl<W: fmt::Write> Sink for FmtSink<W> {
    fn write_value(&mut self, value: &dyn fmt::Display) -> PrintResult<()> {
        write!(self.writer, "{value}")?;
        Ok(())
    }
}
