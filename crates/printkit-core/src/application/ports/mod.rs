//! Application ports (traits) for output destinations.
//!
//! These traits define what the emission pipeline needs from the outside
//! world. The `printkit-sinks` crate provides the production implementations;
//! tests implement them inline.

use std::fmt;
use std::io;

use crate::error::PrintResult;

/// Port for an output destination.
///
/// Implemented by:
/// - `printkit_sinks::StdoutSink` / `StderrSink` (process streams)
/// - `printkit_sinks::IoSink` / `FmtSink` (any `io::Write` / `fmt::Write`)
/// - `printkit_sinks::MemorySink` (testing)
///
/// ## Design notes
///
/// - Object-safe on purpose: the emitter holds `&mut dyn Sink`, so one
///   monomorphized pipeline serves every destination.
/// - Values arrive as `&dyn Display` and are streamed, never buffered or
///   copied by the facility.
/// - `flush` has a no-op default so sinks without flush semantics are usable;
///   the emitter never calls it unless a flush was explicitly requested.
pub trait Sink {
    /// Write one displayable value (a value, separator, or terminator).
    fn write_value(&mut self, value: &dyn fmt::Display) -> PrintResult<()>;

    /// Flush buffered output. Only invoked on explicit request.
    fn flush(&mut self) -> PrintResult<()> {
        Ok(())
    }
}

// `file = sink` and `file = &mut sink` both coerce to `&mut dyn Sink`.
impl<S: Sink + ?Sized> Sink for &mut S {
    fn write_value(&mut self, value: &dyn fmt::Display) -> PrintResult<()> {
        (**self).write_value(value)
    }

    fn flush(&mut self) -> PrintResult<()> {
        (**self).flush()
    }
}

/// Port for the flush behavior applied after the terminator.
///
/// The default, [`FlushSink`], calls [`Sink::flush`] once. Callers with
/// unusual destinations supply their own via `flush_with = strategy` (or
/// [`crate::PrintOptions::flush_with`]).
pub trait FlushStrategy {
    /// Flush the sink. Invoked at most once per print call, and only when a
    /// `flush = true` (or bare `flush`) argument was supplied.
    fn flush(&self, sink: &mut dyn Sink) -> PrintResult<()>;
}

/// Default flush strategy: one [`Sink::flush`] call, no arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushSink;

impl FlushStrategy for FlushSink {
    fn flush(&self, sink: &mut dyn Sink) -> PrintResult<()> {
        sink.flush()
    }
}

// ── Default destination ───────────────────────────────────────────────────────

/// Standard output, locked for the duration of one print call.
///
/// This is the destination used when no `file` argument is given. A richer
/// gallery of sinks lives in `printkit-sinks`; this one is defined here so
/// the core crate is usable on its own.
pub(crate) struct DefaultStdout(io::StdoutLock<'static>);

impl DefaultStdout {
    pub(crate) fn new() -> Self {
        Self(io::stdout().lock())
    }
}

impl Sink for DefaultStdout {
    fn write_value(&mut self, value: &dyn fmt::Display) -> PrintResult<()> {
        use io::Write;
        write!(self.0, "{value}")?;
        Ok(())
    }

    fn flush(&mut self) -> PrintResult<()> {
        use io::Write;
        self.0.flush()?;
        Ok(())
    }
}
