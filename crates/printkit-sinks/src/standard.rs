//! Process stream sinks.
//!
//! Each write locks the stream for the duration of that single write, so
//! interleaving with other users of the same stream stays line-ish but is
//! not otherwise synchronized — the caller owns cross-thread ordering, as
//! with `std::print!`.

use std::fmt;
use std::io::{self, Write as _};

use printkit_core::{PrintResult, Sink};

/// Sink writing to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StdoutSink {
    fn write_value(&mut self, value: &dyn fmt::Display) -> PrintResult<()> {
        write!(io::stdout().lock(), "{value}")?;
        Ok(())
    }

    fn flush(&mut self) -> PrintResult<()> {
        io::stdout().lock().flush()?;
        Ok(())
    }
}

/// Sink writing to standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl StderrSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StderrSink {
    fn write_value(&mut self, value: &dyn fmt::Display) -> PrintResult<()> {
        write!(io::stderr().lock(), "{value}")?;
        Ok(())
    }

    fn flush(&mut self) -> PrintResult<()> {
        io::stderr().lock().flush()?;
        Ok(())
    }
}
