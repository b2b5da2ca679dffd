//! The emission pipeline.
//!
//! Takes a finalized options record and the ordered values, writes them to
//! the sink with separators in between, then the terminator, then an
//! optional flush. This is the whole runtime of the facility:
//!
//! 1. `value` writes one displayable item (separator first when pending)
//! 2. `skip` (the `nothing` sentinel) cancels the pending separator
//! 3. `finish` writes the terminator and honors a requested flush
//!
//! # Error latching
//!
//! The first failed write is latched; every later `value`/`skip` becomes a
//! no-op and `finish` returns the latched error. This keeps the methods
//! chainable — a whole macro invocation is a single expression — while still
//! surfacing exactly one `PrintResult` to the caller.

use std::fmt;

use tracing::trace;

use crate::application::ports::{DefaultStdout, FlushSink, FlushStrategy, Sink};
use crate::domain::glue::Glue;
use crate::error::PrintResult;

enum Out<'a> {
    Stdout(DefaultStdout),
    Sink(&'a mut dyn Sink),
}

impl Out<'_> {
    fn as_sink(&mut self) -> &mut dyn Sink {
        match self {
            Self::Stdout(sink) => sink,
            Self::Sink(sink) => *sink,
        }
    }
}

/// Writes values, separators, and the terminator to one sink.
///
/// Built by [`crate::PrintOptions::into_emitter`]; the macros drive it, and
/// callers with runtime-variadic input (like the `printkit` binary) drive it
/// directly:
///
/// ```no_run
/// use printkit_core::PrintOptions;
///
/// let values = vec!["a".to_string(), "b".to_string()];
/// let mut emitter = PrintOptions::print().sep(&", ").into_emitter();
/// for value in &values {
///     emitter = emitter.value(value);
/// }
/// emitter.finish().unwrap();
/// ```
pub struct Emitter<'a, F: FlushStrategy = FlushSink> {
    sep: Glue<'a>,
    end: Glue<'a>,
    out: Out<'a>,
    flush: Option<bool>,
    flusher: F,
    pending_sep: bool,
    status: PrintResult<()>,
}

impl<'a, F: FlushStrategy> Emitter<'a, F> {
    pub(crate) fn new(
        sep: Glue<'a>,
        end: Glue<'a>,
        file: Option<&'a mut dyn Sink>,
        flush: Option<bool>,
        flusher: F,
    ) -> Self {
        let out = match file {
            Some(sink) => Out::Sink(sink),
            None => Out::Stdout(DefaultStdout::new()),
        };
        Self {
            sep,
            end,
            out,
            flush,
            flusher,
            pending_sep: false,
            status: Ok(()),
        }
    }

    /// Emit one value, preceded by the separator when one is pending.
    pub fn value(mut self, value: &dyn fmt::Display) -> Self {
        if self.status.is_ok() {
            if self.pending_sep {
                if let Glue::Text(sep) = self.sep {
                    self.status = self.out.as_sink().write_value(sep);
                }
            }
            if self.status.is_ok() {
                self.status = self.out.as_sink().write_value(value);
                self.pending_sep = true;
            }
        }
        self
    }

    /// The `nothing` sentinel: emit nothing and cancel the pending separator.
    ///
    /// The next real value is written without a separator before it, and the
    /// sentinel itself never reaches the sink.
    pub fn skip(mut self) -> Self {
        self.pending_sep = false;
        self
    }

    /// Write the terminator, perform a requested flush, and return the
    /// outcome of the whole call.
    pub fn finish(mut self) -> PrintResult<()> {
        if self.status.is_ok() {
            if let Glue::Text(end) = self.end {
                self.status = self.out.as_sink().write_value(end);
            }
        }
        let flush_requested = self.flush == Some(true);
        if self.status.is_ok() && flush_requested {
            self.status = self.flusher.flush(self.out.as_sink());
        }
        trace!(
            flushed = flush_requested,
            ok = self.status.is_ok(),
            "print call finished"
        );
        self.status
    }
}
